use common_errors::{ERROR_INSUFFICIENT_LIQUIDITY, ERROR_MARKET_FROZEN, ERROR_NOT_MANAGER};

use crate::{interest, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage + interest::InterestModule + common_math::SharedMathModule
{
    /// Returns `(remaining_scaled, repaid)`. Paying at least the outstanding debt clears it.
    fn apply_repayment(
        &self,
        scaled: &BigUint,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> (BigUint, BigUint) {
        let outstanding = self.debt_for_scaled(scaled, index);
        if *amount >= outstanding {
            return (BigUint::zero(), outstanding);
        }

        let burned = self.scaled_for_repay(amount, index);
        (scaled - &burned, amount.clone())
    }

    fn require_not_frozen(&self) {
        require!(!self.frozen().get(), ERROR_MARKET_FROZEN);
    }

    fn require_manager(&self, owner: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            &caller == owner || self.managers(owner).contains(&caller),
            ERROR_NOT_MANAGER
        );
    }

    fn send_out(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        require!(
            self.blockchain().get_sc_balance(asset, 0) >= *amount,
            ERROR_INSUFFICIENT_LIQUIDITY
        );
        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(asset, 0, amount)
            .transfer_if_not_empty();
    }
}
