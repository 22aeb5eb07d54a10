#![no_std]

use common_errors::{ERROR_AMOUNT_EXCEEDS_COLLATERAL, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO};
use storage::RateKey;

multiversx_sc::imports!();

pub mod interest;
pub mod isolated;
pub mod storage;
pub mod utils;
pub mod vault;

/// Money market stand-in with three books: a pooled book keyed by asset, isolated markets
/// keyed by market id, and vault positions keyed by position id.
///
/// Position owners delegate to managers (the protocol handlers) with `setManager`.
#[multiversx_sc::contract]
pub trait MarketMock:
    storage::Storage
    + interest::InterestModule
    + utils::UtilsModule
    + isolated::IsolatedModule
    + vault::VaultModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    /// Makes every mutating endpoint revert while set.
    #[only_owner]
    #[endpoint(setFrozen)]
    fn set_frozen(&self, frozen: bool) {
        self.frozen().set(frozen);
    }

    #[only_owner]
    #[endpoint(setBorrowRate)]
    fn set_borrow_rate(&self, asset: EgldOrEsdtTokenIdentifier, rate_per_second: BigUint) {
        self.set_rate(&RateKey::Asset(asset), rate_per_second);
    }

    #[endpoint(setManager)]
    fn set_manager(&self, manager: ManagedAddress, allowed: bool) {
        let owner = self.blockchain().get_caller();
        if allowed {
            self.managers(&owner).insert(manager);
        } else {
            self.managers(&owner).swap_remove(&manager);
        }
    }

    #[payable("*")]
    #[endpoint(supply)]
    fn supply(&self, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.collateral(&payment.token_identifier, &on_behalf_of)
            .update(|collateral| *collateral += &payment.amount);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        self.require_manager(&on_behalf_of);

        let mapper = self.collateral(&asset, &on_behalf_of);
        let collateral = mapper.get();
        require!(amount <= collateral, ERROR_AMOUNT_EXCEEDS_COLLATERAL);
        mapper.set(&collateral - &amount);

        self.send_out(&asset, &amount);
    }

    #[endpoint(borrow)]
    fn borrow(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        self.require_manager(&on_behalf_of);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let index = self.sync_index(&RateKey::Asset(asset.clone()));
        let scaled = self.scaled_for_borrow(&amount, &index);
        self.scaled_debt(&asset, &on_behalf_of)
            .update(|debt| *debt += scaled);

        self.send_out(&asset, &amount);
    }

    /// Repays debt for `on_behalf_of`; anyone may repay. Overpayment is refunded.
    #[payable("*")]
    #[endpoint(repay)]
    fn repay(&self, on_behalf_of: ManagedAddress) -> BigUint {
        self.require_not_frozen();
        let payment = self.call_value().egld_or_single_esdt();
        let asset = payment.token_identifier.clone();

        let index = self.sync_index(&RateKey::Asset(asset.clone()));
        let mapper = self.scaled_debt(&asset, &on_behalf_of);
        let (remaining, repaid) = self.apply_repayment(&mapper.get(), &payment.amount, &index);
        mapper.set(remaining);

        self.send_out(&asset, &(&payment.amount - &repaid));
        repaid
    }

    #[view(getCollateral)]
    fn get_collateral(&self, asset: EgldOrEsdtTokenIdentifier, owner: ManagedAddress) -> BigUint {
        self.collateral(&asset, &owner).get()
    }

    #[view(getDebt)]
    fn get_debt(&self, asset: EgldOrEsdtTokenIdentifier, owner: ManagedAddress) -> BigUint {
        let index = self.current_index(&RateKey::Asset(asset.clone()));
        self.debt_for_scaled(&self.scaled_debt(&asset, &owner).get(), &index)
    }

    #[view(getBorrowIndex)]
    fn get_borrow_index(&self, asset: EgldOrEsdtTokenIdentifier) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.current_index(&RateKey::Asset(asset))
    }

    #[view(isManager)]
    fn is_manager(&self, owner: ManagedAddress, manager: ManagedAddress) -> bool {
        self.managers(&owner).contains(&manager)
    }
}
