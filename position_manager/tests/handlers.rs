use common_errors::{
    ERROR_ASSET_MISMATCH, ERROR_INVALID_EXTRA_DATA, ERROR_TOKEN_NOT_MAPPED,
    ERROR_UNAUTHORIZED_ENGINE,
};
use common_proxies::{proxy_handler_comet, proxy_handler_ctoken, proxy_handler_pooled};
use common_structs::{max_amount, PositionLeg, Protocol};
use multiversx_sc::types::{ManagedAddress, ManagedBuffer, ReturnsResult};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun};

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

fn is_comet_engine(state: &mut ManagerTestState, engine: &ManagedAddress<StaticApi>) -> bool {
    let handler = state.comet_handler.clone();
    state
        .world
        .query()
        .to(&handler)
        .typed(proxy_handler_comet::CometHandlerProxy)
        .is_engine(engine)
        .returns(ReturnsResult)
        .run()
}

/// The user's delegation to the handler is only usable through a registered engine.
#[test]
fn direct_handler_borrow_requires_engine() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let handler = state.pooled_handler.clone();

    state
        .world
        .tx()
        .from(ATTACKER_ADDRESS)
        .to(&handler)
        .typed(proxy_handler_pooled::PooledHandlerProxy)
        .borrow(
            token(USDC_TOKEN),
            units(10, USDC_DECIMALS),
            USER_ADDRESS,
            ManagedBuffer::<StaticApi>::new(),
        )
        .returns(ExpectMessage(error_message(ERROR_UNAUTHORIZED_ENGINE)))
        .run();

    state
        .world
        .tx()
        .from(ATTACKER_ADDRESS)
        .to(&handler)
        .typed(proxy_handler_pooled::PooledHandlerProxy)
        .withdraw_collateral(
            token(WEGLD_TOKEN),
            units(1, WEGLD_DECIMALS),
            USER_ADDRESS,
            ManagedBuffer::<StaticApi>::new(),
        )
        .returns(ExpectMessage(error_message(ERROR_UNAUTHORIZED_ENGINE)))
        .run();

    let market = state.market.clone();
    let user = USER_ADDRESS.to_managed_address();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(100, USDC_DECIMALS)
    );
    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
}

#[test]
fn removed_engine_cannot_migrate() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let manager = state.manager.clone();
    assert!(is_comet_engine(&mut state, &manager));
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&comet_handler)
        .typed(proxy_handler_comet::CometHandlerProxy)
        .remove_engine(&manager)
        .run();
    assert!(!is_comet_engine(&mut state, &manager));

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
        Some(ERROR_UNAUTHORIZED_ENGINE),
    );

    let market = state.market.clone();
    let user = USER_ADDRESS.to_managed_address();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(100, USDC_DECIMALS)
    );
}

#[test]
fn ctoken_handler_rejects_unmapped_asset() {
    let mut state = ManagerTestState::new();
    let handler = state.ctoken_handler.clone();

    state
        .world
        .tx()
        .from(USER_ADDRESS)
        .to(&handler)
        .typed(proxy_handler_ctoken::CTokenHandlerProxy)
        .get_debt(
            token(UNLISTED_TOKEN),
            USER_ADDRESS,
            ManagedBuffer::<StaticApi>::new(),
        )
        .returns(ExpectMessage(error_message(ERROR_TOKEN_NOT_MAPPED)))
        .run();
}

#[test]
fn malformed_extra_data_is_rejected() {
    let mut state = ManagerTestState::new();
    state.open_pooled_usdc_position(USER_ADDRESS);
    let comet_market = state.comet_market.clone();
    let comet_handler = state.comet_handler.clone();
    state.allow_handler(USER_ADDRESS, &comet_market, &comet_handler);

    let destination = PositionLeg::new(Protocol::Comet, ManagedBuffer::new_from_bytes(b"x"));
    let params = state.migrate_params(
        state.pooled_leg(),
        destination,
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
        Some(ERROR_INVALID_EXTRA_DATA),
    );
}

/// An isolated market only lends its own loan token.
#[test]
fn isolated_market_rejects_foreign_debt_asset() {
    let mut state = ManagerTestState::new();
    let market_id = state.create_isolated_market(DAI_TOKEN, WEGLD_TOKEN);

    state.open_pooled_usdc_position(USER_ADDRESS);
    let market = state.market.clone();
    let isolated_handler = state.isolated_handler.clone();
    state.allow_handler(USER_ADDRESS, &market, &isolated_handler);

    let params = state.migrate_params(
        state.pooled_leg(),
        state.isolated_leg(market_id),
        USDC_TOKEN,
        USDC_TOKEN,
        units(101, USDC_DECIMALS),
        vec![(WEGLD_TOKEN, max_amount())],
    );
    let source = state.flash_source(USDC_TOKEN);
    state.migrate_debt(
        USER_ADDRESS,
        USER_ADDRESS,
        source,
        max_amount(),
        params,
        Some(ERROR_ASSET_MISMATCH),
    );

    let user = USER_ADDRESS.to_managed_address();
    assert_eq!(
        state.market_debt(&market, USDC_TOKEN, &user),
        units(100, USDC_DECIMALS)
    );
    assert_eq!(
        state.market_collateral(&market, WEGLD_TOKEN, &user),
        units(10, WEGLD_DECIMALS)
    );
}
