use common_constants::{RAY, RAY_PRECISION};
use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

use common_math::SharedMathModule;

pub struct MathTester;

impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}

impl SharedMathModule for MathTester {}

fn units(amount: u64, decimals: u32) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals)
}

#[test]
fn protocol_fee_is_proportional_across_decimals() {
    let tester = MathTester;

    // 100 units of a 6-decimal asset and 100 units of an 18-decimal asset
    let six = tester.to_decimal(units(100, 6), 6);
    let eighteen = tester.to_decimal(units(100, 18), 18);

    let fee_six = tester.protocol_fee(&six, 10);
    let fee_eighteen = tester.protocol_fee(&eighteen, 10);

    // 10 bps of 100 is 0.1 in each asset's own units
    assert_eq!(fee_six.scale(), 6);
    assert_eq!(fee_eighteen.scale(), 18);
    assert_eq!(fee_six.into_raw_units(), &BigUint::<StaticApi>::from(100_000u64));
    assert_eq!(
        fee_eighteen.into_raw_units(),
        &BigUint::<StaticApi>::from(100_000_000_000_000_000u64)
    );

    // Same value once both are expressed at 18 decimals
    assert_eq!(
        fee_six.rescale(18).into_raw_units(),
        fee_eighteen.into_raw_units()
    );
}

#[test]
fn protocol_fee_floors() {
    let tester = MathTester;

    // 9_999 * 10 / 10_000 = 9.999 -> 9
    let amount = tester.to_decimal(BigUint::from(9_999u64), 6);
    let fee = tester.protocol_fee(&amount, 10);
    assert_eq!(fee.into_raw_units(), &BigUint::<StaticApi>::from(9u64));

    let dust = tester.to_decimal(BigUint::from(999u64), 6);
    assert_eq!(
        tester.protocol_fee(&dust, 10).into_raw_units(),
        &BigUint::<StaticApi>::zero()
    );
}

#[test]
fn protocol_fee_zero_rate() {
    let tester = MathTester;

    let amount = tester.to_decimal(units(1_000, 18), 18);
    let fee = tester.protocol_fee(&amount, 0);
    assert_eq!(fee.into_raw_units(), &BigUint::<StaticApi>::zero());
}

#[test]
fn percentage_of_position() {
    let tester = MathTester;

    let debt = units(1_000, 6);
    assert_eq!(tester.percentage_of(&debt, 2_500), units(250, 6));
    assert_eq!(tester.percentage_of(&debt, 10_000), debt);
    assert_eq!(
        tester.percentage_of(&BigUint::from(3u64), 5_000),
        BigUint::<StaticApi>::from(1u64)
    );
}

#[test]
fn flash_premium_rounds_up() {
    let tester = MathTester;

    // 0.05% tier on 1_000_000 units
    assert_eq!(
        tester.flash_premium(&BigUint::from(1_000_000u64), 500),
        BigUint::<StaticApi>::from(500u64)
    );
    // 0.05% of 1_001 units is 0.5005 -> 1
    assert_eq!(
        tester.flash_premium(&BigUint::from(1_001u64), 500),
        BigUint::<StaticApi>::from(1u64)
    );
    assert_eq!(
        tester.flash_premium(&BigUint::from(1_000_000u64), 0),
        BigUint::<StaticApi>::zero()
    );
}

#[test]
fn accrue_index_linear_growth() {
    let tester = MathTester;

    let index = ManagedDecimal::<StaticApi, usize>::from_raw_units(BigUint::from(RAY), RAY_PRECISION);
    // 1e-9 per second, RAY scaled
    let rate = tester.to_decimal_ray(BigUint::from(1_000_000_000_000_000_000u64));

    let grown = tester.accrue_index(&index, &rate, 1_000);
    let expected = BigUint::<StaticApi>::from(RAY) + BigUint::from(1_000_000_000_000_000_000_000u128);
    assert_eq!(grown.into_raw_units(), &expected);

    let unchanged = tester.accrue_index(&index, &rate, 0);
    assert_eq!(unchanged.into_raw_units(), &BigUint::<StaticApi>::from(RAY));
}
