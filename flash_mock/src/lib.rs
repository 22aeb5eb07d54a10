#![no_std]

use common_constants::FLASH_CALLBACK_ENDPOINT;
use common_errors::{ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_FLASH_NOT_REPAID};

multiversx_sc::imports!();

/// Concentrated-liquidity style pool over a token pair, reduced to its flash loan surface.
///
/// `flash` lends any mix of both tokens, invokes `flashCallback(fee0, fee1, data)` on the
/// caller and requires every lent token back with its premium before returning.
#[multiversx_sc::contract]
pub trait FlashMock: common_math::SharedMathModule {
    #[init]
    fn init(
        &self,
        token0: EgldOrEsdtTokenIdentifier,
        token1: EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
    ) {
        self.token0().set(&token0);
        self.token1().set(&token1);
        self.fee_tier().set(fee_tier);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(flash)]
    fn flash(&self, amount0: BigUint, amount1: BigUint, data: ManagedBuffer) {
        require!(
            amount0 > 0 || amount1 > 0,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );
        let caller = self.blockchain().get_caller();
        let token0 = self.token0().get();
        let token1 = self.token1().get();
        let fee_tier = self.fee_tier().get();

        let fee0 = self.flash_premium(&amount0, fee_tier);
        let fee1 = self.flash_premium(&amount1, fee_tier);

        let balance0_before = self.blockchain().get_sc_balance(&token0, 0);
        let balance1_before = self.blockchain().get_sc_balance(&token1, 0);

        let mut payments = ManagedVec::new();
        if amount0 > 0 {
            payments.push(EgldOrEsdtTokenPayment::new(token0.clone(), 0, amount0));
        }
        if amount1 > 0 {
            payments.push(EgldOrEsdtTokenPayment::new(token1.clone(), 0, amount1));
        }

        self.tx()
            .to(&caller)
            .raw_call(ManagedBuffer::new_from_bytes(FLASH_CALLBACK_ENDPOINT))
            .argument(&fee0)
            .argument(&fee1)
            .argument(&data)
            .payment(payments)
            .sync_call();

        let balance0_after = self.blockchain().get_sc_balance(&token0, 0);
        let balance1_after = self.blockchain().get_sc_balance(&token1, 0);

        require!(
            balance0_after >= balance0_before + &fee0,
            ERROR_FLASH_NOT_REPAID
        );
        require!(
            balance1_after >= balance1_before + &fee1,
            ERROR_FLASH_NOT_REPAID
        );
    }

    // Simulates a contract impersonating a pool: calls the callback without lending anything
    #[payable("*")]
    #[endpoint(spoofCallback)]
    fn spoof_callback(
        &self,
        target: ManagedAddress,
        fee0: BigUint,
        fee1: BigUint,
        data: ManagedBuffer,
    ) {
        let payment = self.call_value().egld_or_single_esdt();

        self.tx()
            .to(&target)
            .raw_call(ManagedBuffer::new_from_bytes(FLASH_CALLBACK_ENDPOINT))
            .argument(&fee0)
            .argument(&fee1)
            .argument(&data)
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .sync_call();
    }

    #[view(getToken0)]
    #[storage_mapper("token0")]
    fn token0(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getToken1)]
    #[storage_mapper("token1")]
    fn token1(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getFeeTier)]
    #[storage_mapper("feeTier")]
    fn fee_tier(&self) -> SingleValueMapper<u32>;
}
