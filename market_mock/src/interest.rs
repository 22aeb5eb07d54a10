use common_constants::RAY;

use crate::storage::{self, InterestState, RateKey};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait InterestModule: storage::Storage + common_math::SharedMathModule {
    /// Index accrued up to the current block, without persisting it.
    fn current_index(&self, key: &RateKey<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let mapper = self.interest(key);
        if mapper.is_empty() {
            return self.ray();
        }

        let state = mapper.get();
        let now = self.blockchain().get_block_timestamp();
        self.accrue_index(
            &state.index,
            &state.rate_per_second,
            now.saturating_sub(state.last_update),
        )
    }

    fn sync_index(&self, key: &RateKey<Self::Api>) -> ManagedDecimal<Self::Api, NumDecimals> {
        let index = self.current_index(key);
        let now = self.blockchain().get_block_timestamp();
        let rate_per_second = if self.interest(key).is_empty() {
            self.ray_zero()
        } else {
            self.interest(key).get().rate_per_second
        };

        self.interest(key).set(InterestState {
            index: index.clone(),
            rate_per_second,
            last_update: now,
        });

        index
    }

    fn set_rate(&self, key: &RateKey<Self::Api>, rate_per_second: BigUint) {
        let index = self.sync_index(key);
        self.interest(key).set(InterestState {
            index,
            rate_per_second: self.to_decimal_ray(rate_per_second),
            last_update: self.blockchain().get_block_timestamp(),
        });
    }

    /// Scaled units minted for a new borrow, rounded up against the borrower.
    fn scaled_for_borrow(
        &self,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        self.mul_div_ceil(amount, &BigUint::from(RAY), index.into_raw_units())
    }

    /// Scaled units burned by a repayment, rounded down.
    fn scaled_for_repay(
        &self,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        amount * &BigUint::from(RAY) / index.into_raw_units()
    }

    /// Outstanding debt for scaled units, rounded up.
    fn debt_for_scaled(
        &self,
        scaled: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        self.mul_div_ceil(scaled, index.into_raw_units(), &BigUint::from(RAY))
    }
}
