#![no_std]

use common_constants::{BPS, FEE_TIER_DENOMINATOR, RAY, RAY_PRECISION};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    /// Protocol fee charged on `amount`, floored, in the same precision as `amount`.
    ///
    /// The fee is always computed in the precision of the asset it is paid in, so a
    /// 6-decimal and an 18-decimal asset of equal value yield fees of equal value.
    ///
    /// # Arguments
    /// - `amount`: Debt amount in the debt asset's native precision.
    /// - `fee_rate_bps`: Fee rate in basis points.
    fn protocol_fee(
        &self,
        amount: &ManagedDecimal<Self::Api, NumDecimals>,
        fee_rate_bps: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let fee_raw = amount.into_raw_units() * &BigUint::from(fee_rate_bps) / BigUint::from(BPS);

        self.to_decimal(fee_raw, amount.scale())
    }

    /// `amount * bps / BPS`, floored.
    fn percentage_of(&self, amount: &BigUint, bps: usize) -> BigUint {
        amount * &BigUint::from(bps) / BigUint::from(BPS)
    }

    /// Flashloan pool premium for a fee tier in hundredths of a basis point, rounded up.
    fn flash_premium(&self, amount: &BigUint, fee_tier: u32) -> BigUint {
        self.mul_div_ceil(
            amount,
            &BigUint::from(fee_tier),
            &BigUint::from(FEE_TIER_DENOMINATOR),
        )
    }

    fn mul_div_ceil(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        let product = a * b;
        let quotient = &product / denominator;
        if &quotient * denominator == product {
            quotient
        } else {
            quotient + BigUint::from(1u64)
        }
    }

    /// Grows a RAY index by a simple per-second rate over `elapsed` seconds.
    fn accrue_index(
        &self,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
        rate_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if elapsed == 0 || rate_per_second.into_raw_units() == &BigUint::zero() {
            return index.clone();
        }

        let growth = rate_per_second.into_raw_units() * &BigUint::from(elapsed);
        let factor = self.ray() + self.to_decimal_ray(growth);

        self.mul_half_up(index, &factor, RAY_PRECISION)
    }

    fn to_decimal_ray(&self, value: BigUint) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn ray_zero(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal_ray(BigUint::zero())
    }

    fn ray(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn to_decimal(
        &self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn get_min(&self, a: BigUint, b: BigUint) -> BigUint {
        if a < b {
            a
        } else {
            b
        }
    }
}
