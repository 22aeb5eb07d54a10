use common_errors::{
    ERROR_ASSET_NOT_WHITELISTED, ERROR_INSUFFICIENT_LIQUIDITY, ERROR_INVALID_PAYMENT,
};
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

/// 10 WEGLD principal, 20 WEGLD flashed, up to 900 USDC borrowed.
///
/// premium 0.01 WEGLD. Buying 20.01 WEGLD costs 800.4 USDC, the fee on that is 0.8004 USDC
/// and the rest of the borrow is repaid.
#[test]
fn open_leveraged_position_on_pooled_market() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    let market = state.market.clone();
    let pooled_handler = state.pooled_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &pooled_handler);

    let params = state.open_params(
        state.pooled_leg(),
        WEGLD_TOKEN,
        units(10, WEGLD_DECIMALS),
        USDC_TOKEN,
        units(900, USDC_DECIMALS),
    );
    let source = state.flash_source(WEGLD_TOKEN);
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(20, WEGLD_DECIMALS),
        params,
        (WEGLD_TOKEN, units(10, WEGLD_DECIMALS)),
        None,
    );

    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(30, WEGLD_DECIMALS)
    );
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        BigUint::from(801_200_400u64)
    );
    state.check_esdt_balance(
        &FEE_COLLECTOR_ADDRESS.to_managed_address(),
        USDC_TOKEN,
        &BigUint::from(800_400u64),
    );
    state.check_esdt_balance(
        &user,
        WEGLD_TOKEN,
        &(units(10_000, WEGLD_DECIMALS) - units(10, WEGLD_DECIMALS)),
    );

    let manager = state.manager.clone();
    state.check_manager_is_empty(&manager);
}

#[test]
fn open_leveraged_position_on_comet_market() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let leg = state.comet_leg();
    let params = state.open_params(
        leg.clone(),
        WEGLD_TOKEN,
        units(10, WEGLD_DECIMALS),
        USDC_TOKEN,
        units(900, USDC_DECIMALS),
    );
    let source = state.flash_source(WEGLD_TOKEN);
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(20, WEGLD_DECIMALS),
        params,
        (WEGLD_TOKEN, units(10, WEGLD_DECIMALS)),
        None,
    );

    assert_eq!(
        state.position_collateral(&leg, WEGLD_TOKEN, &user),
        units(30, WEGLD_DECIMALS)
    );
    assert_eq!(
        state.position_debt(&leg, USDC_TOKEN, &user),
        BigUint::from(801_200_400u64)
    );
}

/// A borrow cap too small to buy back the flashed collateral reverts the whole operation.
#[test]
fn open_leveraged_position_with_low_borrow_cap_fails() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    let market = state.market.clone();
    let pooled_handler = state.pooled_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &pooled_handler);

    let params = state.open_params(
        state.pooled_leg(),
        WEGLD_TOKEN,
        units(10, WEGLD_DECIMALS),
        USDC_TOKEN,
        units(500, USDC_DECIMALS),
    );
    let source = state.flash_source(WEGLD_TOKEN);
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(20, WEGLD_DECIMALS),
        params,
        (WEGLD_TOKEN, units(10, WEGLD_DECIMALS)),
        Some(ERROR_INSUFFICIENT_LIQUIDITY),
    );

    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        BigUint::<StaticApi>::zero()
    );
    assert_eq!(state.market_debt(&market, USDC_TOKEN, &user), BigUint::zero());
}

#[test]
fn open_leveraged_position_with_wrong_principal_fails() {
    let mut state = ManagerTestState::new();

    let params = state.open_params(
        state.pooled_leg(),
        WEGLD_TOKEN,
        units(10, WEGLD_DECIMALS),
        USDC_TOKEN,
        units(900, USDC_DECIMALS),
    );
    let source = state.flash_source(WEGLD_TOKEN);
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source.clone(),
        units(20, WEGLD_DECIMALS),
        params.clone(),
        (WEGLD_TOKEN, units(9, WEGLD_DECIMALS)),
        Some(ERROR_INVALID_PAYMENT),
    );
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(20, WEGLD_DECIMALS),
        params,
        (USDC_TOKEN, units(10, USDC_DECIMALS)),
        Some(ERROR_INVALID_PAYMENT),
    );
}

#[test]
fn open_leveraged_position_with_unlisted_collateral_fails() {
    let mut state = ManagerTestState::new();

    let params = state.open_params(
        state.pooled_leg(),
        UNLISTED_TOKEN,
        units(10, WEGLD_DECIMALS),
        USDC_TOKEN,
        units(900, USDC_DECIMALS),
    );
    let source = state.flash_source(WEGLD_TOKEN);
    state.open_leveraged_position(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(20, WEGLD_DECIMALS),
        params,
        (UNLISTED_TOKEN, units(10, WEGLD_DECIMALS)),
        Some(ERROR_ASSET_NOT_WHITELISTED),
    );
}
