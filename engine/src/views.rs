use common_structs::Protocol;

use crate::{cache::Cache, fees, handlers, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ViewsModule:
    storage::Storage
    + validation::ValidationModule
    + handlers::HandlerCallsModule
    + fees::FeesModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Fee charged on a debt of `amount` of `asset` at the current rate.
    #[view(quoteProtocolFee)]
    fn quote_protocol_fee(&self, asset: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        let mut cache = Cache::new(self);
        self.compute_protocol_fee(&mut cache, &asset, &amount)
    }

    #[view(isOperationOngoing)]
    fn is_operation_ongoing(&self) -> bool {
        !self.pending_flash().is_empty()
    }

    #[view(getPositionDebt)]
    fn get_position_debt(
        &self,
        protocol: Protocol,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        let handler = self.require_handler(&mut cache, protocol);
        self.handler_debt(&handler, &asset, &owner, &extra_data)
    }

    #[view(getPositionCollateral)]
    fn get_position_collateral(
        &self,
        protocol: Protocol,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let mut cache = Cache::new(self);
        let handler = self.require_handler(&mut cache, protocol);
        self.handler_collateral(&handler, &asset, &owner, &extra_data)
    }
}
