#![no_std]

use common_constants::BPS;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_PAYMENT,
    ERROR_RATE_NOT_SET,
};

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// `to_amount = from_amount * numerator / denominator`
#[type_abi]
#[derive(TopEncode, TopDecode, Clone)]
pub struct SwapRate<M: ManagedTypeApi> {
    pub numerator: BigUint<M>,
    pub denominator: BigUint<M>,
}

/// Exact-out aggregator stand-in with owner-configured rates.
#[multiversx_sc::contract]
pub trait SwapMock: common_math::SharedMathModule {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setRate)]
    fn set_rate(
        &self,
        from_token: EgldOrEsdtTokenIdentifier,
        to_token: EgldOrEsdtTokenIdentifier,
        numerator: BigUint,
        denominator: BigUint,
    ) {
        require!(
            numerator > 0 && denominator > 0,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        self.rate(&from_token, &to_token).set(SwapRate {
            numerator,
            denominator,
        });
    }

    /// Makes every swap deliver `shortfall_bps` less than requested.
    #[only_owner]
    #[endpoint(setShortfall)]
    fn set_shortfall(&self, shortfall_bps: usize) {
        self.shortfall_bps().set(shortfall_bps);
    }

    /// Buys exactly `wanted_amount` of `wanted_token` with the paid token and refunds the
    /// unused input. Routing arguments are accepted and ignored.
    #[payable("*")]
    #[endpoint(swap)]
    fn swap(
        &self,
        wanted_token: EgldOrEsdtTokenIdentifier,
        wanted_amount: BigUint,
        _routing: MultiValueEncoded<ManagedBuffer>,
    ) {
        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();
        require!(payment.token_identifier != wanted_token, ERROR_INVALID_PAYMENT);

        let rate_mapper = self.rate(&payment.token_identifier, &wanted_token);
        require!(!rate_mapper.is_empty(), ERROR_RATE_NOT_SET);
        let rate = rate_mapper.get();

        let required_in = self.mul_div_ceil(&wanted_amount, &rate.denominator, &rate.numerator);
        require!(payment.amount >= required_in, ERROR_INSUFFICIENT_LIQUIDITY);

        let delivered = &wanted_amount
            - &self.percentage_of(&wanted_amount, self.shortfall_bps().get().min(BPS));
        require!(
            self.blockchain().get_sc_balance(&wanted_token, 0) >= delivered,
            ERROR_INSUFFICIENT_LIQUIDITY
        );

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&wanted_token, 0, &delivered)
            .transfer_if_not_empty();

        let refund = &payment.amount - &required_in;
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
            .transfer_if_not_empty();
    }

    #[view(getRate)]
    #[storage_mapper("rate")]
    fn rate(
        &self,
        from_token: &EgldOrEsdtTokenIdentifier,
        to_token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<SwapRate<Self::Api>>;

    #[view(getShortfall)]
    #[storage_mapper("shortfall")]
    fn shortfall_bps(&self) -> SingleValueMapper<usize>;
}
