use common_errors::{
    ERROR_CALLBACK_DATA_MISMATCH, ERROR_INVALID_CALLBACK, ERROR_INVALID_FLASH_PAYMENT,
};
use common_structs::FlashCallbackData;

use crate::{cache::Cache, storage, strategies, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait CallbackModule:
    storage::Storage
    + validation::ValidationModule
    + strategies::StrategiesModule
    + crate::handlers::HandlerCallsModule
    + crate::swaps::SwapsModule
    + crate::fees::FeesModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    /// Invoked by the flash pool once the loan has been transferred.
    ///
    /// Only the pool recorded for the in-flight loan may call, with the exact data the
    /// engine sent. The pool key is re-derived from the factory and the transferred payment
    /// must be exactly the flashed asset and amount. The premium is the fee reported for
    /// the flashed side of the pair.
    ///
    /// # Arguments
    /// - `fee0`, `fee1`: Pool premiums owed on token0 and token1.
    /// - `data`: The encoded `FlashCallbackData` passed to the pool.
    #[payable("*")]
    #[endpoint(flashCallback)]
    fn flash_callback(&self, fee0: BigUint, fee1: BigUint, data: ManagedBuffer) {
        let pending_mapper = self.pending_flash();
        require!(!pending_mapper.is_empty(), ERROR_INVALID_CALLBACK);
        let mut pending = pending_mapper.get();
        require!(!pending.executed, ERROR_INVALID_CALLBACK);

        let caller = self.blockchain().get_caller();
        require!(caller == pending.pool, ERROR_INVALID_CALLBACK);
        require!(
            self.crypto().keccak256(&data) == pending.data_hash,
            ERROR_CALLBACK_DATA_MISMATCH
        );

        let callback_data = FlashCallbackData::<Self::Api>::top_decode(data)
            .unwrap_or_else(|_| sc_panic!(ERROR_INVALID_CALLBACK));

        let mut cache = Cache::new(self);
        self.require_genuine_pool(&cache, &callback_data.flash_token, &callback_data.source);

        let payments = self.call_value().all_transfers();
        require!(payments.len() == 1, ERROR_INVALID_FLASH_PAYMENT);
        let payment = payments.get(0);
        require!(
            payment.token_identifier == callback_data.flash_token
                && payment.amount == callback_data.flash_amount,
            ERROR_INVALID_FLASH_PAYMENT
        );

        let premium = if self.pool_token0(caller).get() == callback_data.flash_token {
            fee0
        } else {
            fee1
        };

        pending.executed = true;
        pending_mapper.set(&pending);

        self.run_operation(&mut cache, &callback_data, &premium);
    }
}
