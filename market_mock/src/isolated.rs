use common_errors::{
    ERROR_AMOUNT_EXCEEDS_COLLATERAL, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_MISMATCH,
    ERROR_MARKET_NOT_FOUND, ERROR_REPAY_PAYMENT_TOO_LOW,
};

use crate::{
    interest,
    storage::{self, IsolatedMarket, RateKey},
    utils,
};

multiversx_sc::imports!();

/// Isolated markets: one loan token against one collateral token, debt tracked in shares.
#[multiversx_sc::module]
pub trait IsolatedModule:
    storage::Storage
    + interest::InterestModule
    + utils::UtilsModule
    + common_math::SharedMathModule
{
    #[only_owner]
    #[endpoint(createIsolatedMarket)]
    fn create_isolated_market(
        &self,
        loan_token: EgldOrEsdtTokenIdentifier,
        collateral_token: EgldOrEsdtTokenIdentifier,
        rate_per_second: BigUint,
    ) -> u64 {
        let market_id = self.isolated_markets().push(&IsolatedMarket {
            loan_token,
            collateral_token,
        }) as u64;
        self.set_rate(&RateKey::Market(market_id), rate_per_second);

        market_id
    }

    #[payable("*")]
    #[endpoint(supplyIsolated)]
    fn supply_isolated(&self, market_id: u64, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        let market = self.isolated_market(market_id);
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == market.collateral_token,
            ERROR_ASSET_MISMATCH
        );
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        self.isolated_collateral(market_id, &on_behalf_of)
            .update(|collateral| *collateral += &payment.amount);
    }

    #[endpoint(withdrawIsolated)]
    fn withdraw_isolated(&self, market_id: u64, amount: BigUint, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        self.require_manager(&on_behalf_of);
        let market = self.isolated_market(market_id);

        let mapper = self.isolated_collateral(market_id, &on_behalf_of);
        let collateral = mapper.get();
        require!(amount <= collateral, ERROR_AMOUNT_EXCEEDS_COLLATERAL);
        mapper.set(&collateral - &amount);

        self.send_out(&market.collateral_token, &amount);
    }

    #[endpoint(borrowIsolated)]
    fn borrow_isolated(&self, market_id: u64, amount: BigUint, on_behalf_of: ManagedAddress) {
        self.require_not_frozen();
        self.require_manager(&on_behalf_of);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let market = self.isolated_market(market_id);

        let index = self.sync_index(&RateKey::Market(market_id));
        let shares = self.scaled_for_borrow(&amount, &index);
        self.isolated_shares(market_id, &on_behalf_of)
            .update(|current| *current += shares);

        self.send_out(&market.loan_token, &amount);
    }

    /// Repays by assets, or by `shares` when non-zero. Unused payment is refunded.
    #[payable("*")]
    #[endpoint(repayIsolated)]
    fn repay_isolated(&self, market_id: u64, shares: BigUint, on_behalf_of: ManagedAddress) -> BigUint {
        self.require_not_frozen();
        let market = self.isolated_market(market_id);
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == market.loan_token,
            ERROR_ASSET_MISMATCH
        );

        let index = self.sync_index(&RateKey::Market(market_id));
        let mapper = self.isolated_shares(market_id, &on_behalf_of);
        let current_shares = mapper.get();

        let (remaining, repaid) = if shares > 0 {
            let burned = self.get_min(shares, current_shares.clone());
            let owed = self.debt_for_scaled(&burned, &index);
            require!(payment.amount >= owed, ERROR_REPAY_PAYMENT_TOO_LOW);
            (&current_shares - &burned, owed)
        } else {
            self.apply_repayment(&current_shares, &payment.amount, &index)
        };
        mapper.set(remaining);

        self.send_out(&market.loan_token, &(&payment.amount - &repaid));
        repaid
    }

    #[view(getIsolatedMarket)]
    fn isolated_market(&self, market_id: u64) -> IsolatedMarket<Self::Api> {
        require!(
            market_id > 0 && market_id as usize <= self.isolated_markets().len(),
            ERROR_MARKET_NOT_FOUND
        );
        self.isolated_markets().get(market_id as usize)
    }

    #[view(getIsolatedDebt)]
    fn get_isolated_debt(&self, market_id: u64, owner: ManagedAddress) -> BigUint {
        let index = self.current_index(&RateKey::Market(market_id));
        self.debt_for_scaled(&self.isolated_shares(market_id, &owner).get(), &index)
    }

    #[view(getIsolatedShares)]
    fn get_isolated_shares(&self, market_id: u64, owner: ManagedAddress) -> BigUint {
        self.isolated_shares(market_id, &owner).get()
    }

    #[view(getIsolatedCollateral)]
    fn get_isolated_collateral(&self, market_id: u64, owner: ManagedAddress) -> BigUint {
        self.isolated_collateral(market_id, &owner).get()
    }
}
