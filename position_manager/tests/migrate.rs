use common_errors::{
    ERROR_AMOUNT_EXCEEDS_DEBT, ERROR_ASSET_NOT_WHITELISTED, ERROR_INSUFFICIENT_SWAP_OUTPUT,
    ERROR_MARKET_FROZEN, ERROR_POSITION_OWNER_MISMATCH, ERROR_SAME_PROTOCOL_AND_ASSET,
};
use common_structs::max_amount;
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::api::StaticApi;

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

/// Pooled USDC debt against 10 WEGLD moves to a Comet DAI market.
///
/// flash 100 USDC, premium 0.05 USDC, 101 DAI borrow cap.
/// The swap spends 100.05 DAI, the fee is 0.10005 DAI on that, the rest repays the new debt.
#[test]
fn migrate_debt_pooled_usdc_to_comet_dai() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(USER_ADDRESS, USER_ADDRESS, source, max_amount(), params, None);

    let market = state.market.clone();
    assert_eq!(state.market_debt(&market, USDC_TOKEN, &user), BigUint::zero());
    assert_eq!(state.market_collateral(&market, WEGLD_TOKEN, &user), BigUint::zero());

    assert_eq!(
        state.market_debt(&comet_market, DAI_TOKEN, &user),
        BigUint::from(100_150_050_000_000_000_000u128)
    );
    assert_eq!(
        state.market_collateral(&comet_market, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );

    state.check_esdt_balance(
        &FEE_COLLECTOR_ADDRESS.to_managed_address(),
        DAI_TOKEN,
        &BigUint::from(100_050_000_000_000_000u128),
    );
    let manager = state.manager.clone();
    state.check_manager_is_empty(&manager);
    assert!(!state.is_operation_ongoing());
}

/// A loose borrow cap does not raise the fee: it follows the 100.05 DAI actually spent.
#[test]
fn migrate_debt_fee_ignores_borrow_cap() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(150, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(USER_ADDRESS, USER_ADDRESS, source, max_amount(), params, None);

    assert_eq!(
        state.market_debt(&comet_market, DAI_TOKEN, &user),
        BigUint::from(100_150_050_000_000_000_000u128)
    );
    state.check_esdt_balance(
        &FEE_COLLECTOR_ADDRESS.to_managed_address(),
        DAI_TOKEN,
        &BigUint::from(100_050_000_000_000_000u128),
    );
    let manager = state.manager.clone();
    state.check_manager_is_empty(&manager);
}

/// A venue that under-delivers aborts the migration and leaves the source position as it was.
#[test]
fn migrate_debt_reverts_on_swap_shortfall() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);
    state.set_swap_shortfall(10);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_INSUFFICIENT_SWAP_OUTPUT),
    );

    let market = state.market.clone();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(100, USDC_DECIMALS)
    );
    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
    assert_eq!(
        state.market_debt(&comet_market, DAI_TOKEN, &user),
        BigUint::zero()
    );
    assert!(!state.is_operation_ongoing());
}

/// 40 of 100 USDC and 4 of 10 WEGLD move to the cToken market in the same asset.
#[test]
fn migrate_debt_partial_same_asset_to_ctoken() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let ctoken_market = state.ctoken_market.clone();
    let ctoken_handler = state.ctoken_handler.clone();
    state.allow_handler(USER_ADDRESS, &ctoken_market, &ctoken_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.ctoken_leg(),
        USDC_TOKEN,
        USDC_TOKEN,
        units(41, USDC_DECIMALS),
        vec![(WEGLD_TOKEN, units(4, WEGLD_DECIMALS))],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(40, USDC_DECIMALS),
        params,
        None,
    );

    let market = state.market.clone();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(60, USDC_DECIMALS)
    );
    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(6, WEGLD_DECIMALS)
    );

    // 41.041 borrowed, 40.02 repays the flash, 0.04002 fee, the rest goes back
    assert_eq!(
        state.market_debt(&ctoken_market, USDC_TOKEN, &user),
        BigUint::from(40_060_020u64)
    );
    assert_eq!(
        state.market_collateral(&ctoken_market, WEGLD_TOKEN, &user),
        units(4, WEGLD_DECIMALS)
    );
    state.check_esdt_balance(
        &FEE_COLLECTOR_ADDRESS.to_managed_address(),
        USDC_TOKEN,
        &BigUint::from(40_020u64),
    );
}

#[test]
fn migrate_debt_into_isolated_market() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    let market_id = state.create_isolated_market(DAI_TOKEN, WEGLD_TOKEN);
    assert_eq!(market_id, 1);

    state.open_pooled_usdc_position(USER_ADDRESS);
    let market = state.market.clone();
    let isolated_handler = state.isolated_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &isolated_handler);

    let destination = state.isolated_leg(market_id);
    let params = state.migrate_params(
        state.pooled_leg(),
        destination.clone(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(USER_ADDRESS, USER_ADDRESS, source, max_amount(), params, None);

    assert_eq!(
        state.position_debt(&destination, DAI_TOKEN, &user),
        BigUint::from(100_150_050_000_000_000_000u128)
    );
    assert_eq!(
        state.position_collateral(&destination, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
    assert_eq!(state.market_debt(&market, USDC_TOKEN, &user), BigUint::zero());
}

#[test]
fn migrate_debt_into_vault_position() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    let position_id = state.open_vault(USER_ADDRESS, WEGLD_TOKEN, DAI_TOKEN);

    state.open_pooled_usdc_position(USER_ADDRESS);
    let market = state.market.clone();
    let vault_handler = state.vault_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &vault_handler);

    let destination = state.vault_leg(position_id);
    let params = state.migrate_params(
        state.pooled_leg(),
        destination.clone(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(USER_ADDRESS, USER_ADDRESS, source, max_amount(), params, None);

    assert_eq!(
        state.position_debt(&destination, DAI_TOKEN, &user),
        BigUint::from(100_150_050_000_000_000_000u128)
    );
    assert_eq!(
        state.position_collateral(&destination, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
}

#[test]
fn migrate_debt_into_foreign_vault_fails() {
    let mut state = ManagerTestState::new();
    let position_id = state.open_vault(OTHER_USER_ADDRESS, WEGLD_TOKEN, DAI_TOKEN);

    state.open_pooled_usdc_position(USER_ADDRESS);
    let market = state.market.clone();
    let vault_handler = state.vault_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &vault_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.vault_leg(position_id),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_POSITION_OWNER_MISMATCH),
    );
}

/// A failure deep in the destination leg reverts the repayment on the source leg too.
#[test]
fn migrate_debt_reverts_when_destination_is_frozen() {
    let mut state = ManagerTestState::new();
    let user = USER_ADDRESS.to_managed_address();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);
    state.set_frozen(&comet_market, true);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_MARKET_FROZEN),
    );

    let market = state.market.clone();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(100, USDC_DECIMALS)
    );
    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
    assert!(!state.is_operation_ongoing());
}

/// Tokens sent to the engine outside an operation do not block later operations.
#[test]
fn migrate_debt_ignores_donated_balance() {
    let mut state = ManagerTestState::new();
    let manager = state.manager.clone();
    state
        .world
        .set_esdt_balance(manager.clone(), USDC_TOKEN.as_bytes(), units(1, USDC_DECIMALS));

    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(USER_ADDRESS, USER_ADDRESS, source, max_amount(), params, None);

    state.check_esdt_balance(&manager, USDC_TOKEN, &units(1, USDC_DECIMALS));
    state.check_esdt_balance(&manager, DAI_TOKEN, &BigUint::<StaticApi>::zero());
}

#[test]
fn migrate_debt_above_outstanding_fails() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(200, DAI_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        units(150, USDC_DECIMALS),
        params,
        Some(ERROR_AMOUNT_EXCEEDS_DEBT),
    );
}

#[test]
fn migrate_debt_same_leg_and_asset_fails() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.pooled_leg(),
        USDC_TOKEN,
        USDC_TOKEN,
        units(101, USDC_DECIMALS),
        vec![],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_SAME_PROTOCOL_AND_ASSET),
    );
}

#[test]
fn migrate_debt_with_unlisted_collateral_fails() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.comet_leg(),
        USDC_TOKEN,
        DAI_TOKEN,
        units(101, DAI_DECIMALS),
        vec![(UNLISTED_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_ASSET_NOT_WHITELISTED),
    );
}
