use crate::{cache::Cache, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FeesModule:
    storage::Storage + common_math::SharedMathModule + common_events::EventsModule
{
    /// Orchestration fee on `amount` of `asset`: `amount * fee_rate / BPS`, floored, in the
    /// asset's own precision.
    fn compute_protocol_fee(
        &self,
        cache: &mut Cache<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> BigUint {
        let decimals = cache.get_asset_decimals(asset);
        let amount = self.to_decimal(amount.clone(), decimals);
        let fee = self.protocol_fee(&amount, cache.fee_rate_bps);

        fee.into_raw_units().clone()
    }

    fn pay_protocol_fee(
        &self,
        cache: &Cache<Self>,
        asset: &EgldOrEsdtTokenIdentifier,
        fee: &BigUint,
    ) {
        if *fee == 0 {
            return;
        }

        self.tx()
            .to(&cache.fee_beneficiary)
            .egld_or_single_esdt(asset, 0, fee)
            .transfer();

        self.protocol_fee_paid_event(
            &cache.fee_beneficiary,
            &EgldOrEsdtTokenPayment::new(asset.clone(), 0, fee.clone()),
        );
    }
}
