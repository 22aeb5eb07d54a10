#![no_std]

use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INVALID_EXTRA_DATA, ERROR_INVALID_PAYMENT,
    ERROR_UNAUTHORIZED_ENGINE, ERROR_ZERO_ADDRESS,
};

multiversx_sc::imports!();

pub mod pooled_book;

/// Plumbing shared by every protocol handler.
///
/// Handlers hold temporary custody of funds in transit between the engine and a market, so
/// every mutating endpoint is restricted to the engines registered here. Amounts are always
/// measured as balance deltas around the market call rather than trusted from the request.
#[multiversx_sc::module]
pub trait HandlerBaseModule: common_events::EventsModule {
    #[only_owner]
    #[endpoint(addEngine)]
    fn add_engine(&self, engine: ManagedAddress) {
        require!(!engine.is_zero(), ERROR_ZERO_ADDRESS);
        self.engines().insert(engine.clone());
        self.engine_updated_event(&engine, true);
    }

    #[only_owner]
    #[endpoint(removeEngine)]
    fn remove_engine(&self, engine: ManagedAddress) {
        self.engines().swap_remove(&engine);
        self.engine_updated_event(&engine, false);
    }

    /// Returns the calling engine.
    fn require_engine(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.engines().contains(&caller), ERROR_UNAUTHORIZED_ENGINE);
        caller
    }

    /// Checks the incoming payment carries exactly `amount` of `asset`.
    fn require_payment(&self, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            &payment.token_identifier == asset && &payment.amount == amount,
            ERROR_INVALID_PAYMENT
        );
        require!(*amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    fn balance_of(&self, asset: &EgldOrEsdtTokenIdentifier) -> BigUint {
        self.blockchain().get_sc_balance(asset, 0)
    }

    /// Balance gained since `before`; zero if the balance went down.
    fn balance_gain(&self, asset: &EgldOrEsdtTokenIdentifier, before: &BigUint) -> BigUint {
        let after = self.balance_of(asset);
        if after > *before {
            after - before
        } else {
            BigUint::zero()
        }
    }

    /// Balance spent since `before`; zero if the balance went up.
    fn balance_spent(&self, asset: &EgldOrEsdtTokenIdentifier, before: &BigUint) -> BigUint {
        let after = self.balance_of(asset);
        if *before > after {
            before - &after
        } else {
            BigUint::zero()
        }
    }

    /// Forwards `amount` of `asset` to the engine that called this handler.
    fn forward(&self, engine: &ManagedAddress, asset: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        self.tx()
            .to(engine)
            .egld_or_single_esdt(asset, 0, amount)
            .transfer_if_not_empty();
    }

    fn decode_extra_data<T: TopDecode>(&self, extra_data: &ManagedBuffer) -> T {
        T::top_decode(extra_data.clone()).unwrap_or_else(|_| sc_panic!(ERROR_INVALID_EXTRA_DATA))
    }

    #[view(isEngine)]
    fn is_engine(&self, engine: ManagedAddress) -> bool {
        self.engines().contains(&engine)
    }

    #[view(getEngines)]
    #[storage_mapper("engines")]
    fn engines(&self) -> UnorderedSetMapper<ManagedAddress>;
}
