use common_constants::{FLASH_FACTORY_PARAMETER, SWAP_ROUTER_PARAMETER};
use common_errors::{
    ERROR_ADDRESS_IS_NOT_A_SC, ERROR_DELAY_TOO_SHORT, ERROR_MISSING_ROLE, ERROR_NOT_EXECUTOR,
    ERROR_NOT_PROPOSER, ERROR_OPERATION_NOT_PENDING, ERROR_OPERATION_NOT_READY,
    ERROR_UNKNOWN_CRITICAL_PARAMETER,
};
use common_proxies::{proxy_registry, proxy_timelock};
use common_structs::Protocol;
use multiversx_sc::types::{
    EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer, MultiValueEncoded, ReturnsResult,
    TestTokenIdentifier,
};
use multiversx_sc_scenario::{api::StaticApi, imports::ExpectMessage, ScenarioTxRun};

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

fn critical_parameter(state: &mut ManagerTestState, name: &[u8]) -> Option<ManagedAddress<StaticApi>> {
    let registry = state.registry.clone();
    state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .get_critical_parameter(ManagedBuffer::new_from_bytes(name))
        .returns(ReturnsResult)
        .run()
}

fn swap_router_arguments(router: &ManagedAddress<StaticApi>) -> Vec<ManagedBuffer<StaticApi>> {
    vec![
        ManagedBuffer::new_from_bytes(SWAP_ROUTER_PARAMETER),
        router.as_managed_buffer().clone(),
    ]
}

#[test]
fn critical_parameters_set_at_setup() {
    let mut state = ManagerTestState::new();
    let factory = state.factory.clone();
    let router = state.swap_router.clone();

    assert_eq!(
        critical_parameter(&mut state, FLASH_FACTORY_PARAMETER),
        Some(factory)
    );
    assert_eq!(
        critical_parameter(&mut state, SWAP_ROUTER_PARAMETER),
        Some(router)
    );
}

#[test]
fn critical_parameter_direct_call_is_rejected() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let new_router = setup_swap_router(&mut state.world);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .set_critical_parameter(ManagedBuffer::new_from_bytes(SWAP_ROUTER_PARAMETER), &new_router)
        .returns(ExpectMessage(error_message(ERROR_MISSING_ROLE)))
        .run();
}

#[test]
fn timelocked_operation_waits_for_delay() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let new_router = setup_swap_router(&mut state.world);
    let old_router = state.swap_router.clone();

    let id = state.schedule(
        OWNER_ADDRESS,
        &registry,
        "setCriticalParameter",
        swap_router_arguments(&new_router),
    );

    state.execute_error(id, ERROR_OPERATION_NOT_READY);
    state.advance_time(MIN_DELAY - 1);
    state.execute_error(id, ERROR_OPERATION_NOT_READY);
    assert_eq!(
        critical_parameter(&mut state, SWAP_ROUTER_PARAMETER),
        Some(old_router)
    );

    state.advance_time(1);
    state.execute(id);
    assert_eq!(
        critical_parameter(&mut state, SWAP_ROUTER_PARAMETER),
        Some(new_router)
    );

    state.execute_error(id, ERROR_OPERATION_NOT_PENDING);
}

#[test]
fn only_proposers_schedule_and_only_executors_execute() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let timelock = state.timelock.clone();
    let router = state.swap_router.clone();

    let mut arguments = MultiValueEncoded::new();
    for argument in swap_router_arguments(&router) {
        arguments.push(argument);
    }
    state
        .world
        .tx()
        .from(ATTACKER_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .schedule(&registry, ManagedBuffer::from("setCriticalParameter"), MIN_DELAY, arguments)
        .returns(ExpectMessage(error_message(ERROR_NOT_PROPOSER)))
        .run();

    let id = state.schedule(
        OWNER_ADDRESS,
        &registry,
        "setCriticalParameter",
        swap_router_arguments(&router),
    );
    state.advance_time(MIN_DELAY);

    state
        .world
        .tx()
        .from(ATTACKER_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .execute(id)
        .returns(ExpectMessage(error_message(ERROR_NOT_EXECUTOR)))
        .run();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .add_executor(OPERATOR_ADDRESS)
        .run();
    state
        .world
        .tx()
        .from(OPERATOR_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .execute(id)
        .run();
}

#[test]
fn schedule_below_min_delay_fails() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let timelock = state.timelock.clone();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .schedule(
            &registry,
            ManagedBuffer::from("setCriticalParameter"),
            MIN_DELAY - 1,
            MultiValueEncoded::<StaticApi, ManagedBuffer<StaticApi>>::new(),
        )
        .returns(ExpectMessage(error_message(ERROR_DELAY_TOO_SHORT)))
        .run();
}

#[test]
fn cancelled_operation_cannot_execute() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let timelock = state.timelock.clone();
    let router = state.swap_router.clone();

    let id = state.schedule(
        OWNER_ADDRESS,
        &registry,
        "setCriticalParameter",
        swap_router_arguments(&router),
    );
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .cancel(id)
        .run();

    state.advance_time(MIN_DELAY);
    state.execute_error(id, ERROR_OPERATION_NOT_PENDING);
}

#[test]
fn min_delay_changes_only_through_itself() {
    let mut state = ManagerTestState::new();
    let timelock = state.timelock.clone();

    let id = state.schedule(
        OWNER_ADDRESS,
        &timelock,
        "updateDelay",
        vec![encode(&(2 * MIN_DELAY))],
    );
    state.advance_time(MIN_DELAY);
    state.execute(id);

    let min_delay: u64 = state
        .world
        .query()
        .to(&timelock)
        .typed(proxy_timelock::TimelockProxy)
        .min_delay()
        .returns(ReturnsResult)
        .run();
    assert_eq!(min_delay, 2 * MIN_DELAY);
}

#[test]
fn critical_parameter_rejects_unknown_name_and_wallet() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let router = state.swap_router.clone();

    let id = state.schedule(
        OWNER_ADDRESS,
        &registry,
        "setCriticalParameter",
        vec![
            ManagedBuffer::new_from_bytes(b"oracle"),
            router.as_managed_buffer().clone(),
        ],
    );
    state.advance_time(MIN_DELAY);
    state.execute_error(id, ERROR_UNKNOWN_CRITICAL_PARAMETER);

    let id = state.schedule(
        OWNER_ADDRESS,
        &registry,
        "setCriticalParameter",
        swap_router_arguments(&USER_ADDRESS.to_managed_address()),
    );
    state.advance_time(MIN_DELAY);
    state.execute_error(id, ERROR_ADDRESS_IS_NOT_A_SC);
}

#[test]
fn registry_resolves_token_mappings() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();
    let ctoken_market = state.ctoken_market.clone();

    let resolved: Option<ManagedAddress<StaticApi>> = state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .resolve(Protocol::CToken, token(USDC_TOKEN))
        .returns(ReturnsResult)
        .run();
    assert_eq!(resolved, Some(ctoken_market));

    let unmapped: Option<ManagedAddress<StaticApi>> = state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .resolve(Protocol::Pooled, token(USDC_TOKEN))
        .returns(ReturnsResult)
        .run();
    assert_eq!(unmapped, None);

    let decimals: Option<usize> = state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .get_asset_decimals(token(USDC_TOKEN))
        .returns(ReturnsResult)
        .run();
    assert_eq!(decimals, Some(USDC_DECIMALS as usize));
}

fn reverse_of(
    state: &mut ManagerTestState,
    wrapped: &ManagedAddress<StaticApi>,
) -> Option<EgldOrEsdtTokenIdentifier<StaticApi>> {
    let registry = state.registry.clone();
    state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .resolve_reverse(Protocol::CToken, wrapped)
        .returns(ReturnsResult)
        .run()
}

fn map_ctoken(
    state: &mut ManagerTestState,
    asset: TestTokenIdentifier,
    wrapped: ManagedAddress<StaticApi>,
) {
    let registry = state.registry.clone();
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .set_token_mapping(Protocol::CToken, token(asset), wrapped)
        .run();
}

/// Two assets share one wrapped market; removing the older mapping keeps the reverse entry
/// of the live one.
#[test]
fn registry_unmapping_keeps_reverse_of_other_asset() {
    let mut state = ManagerTestState::new();
    let ctoken_market = state.ctoken_market.clone();
    assert_eq!(reverse_of(&mut state, &ctoken_market), Some(token(USDC_TOKEN)));

    map_ctoken(&mut state, DAI_TOKEN, ctoken_market.clone());
    assert_eq!(reverse_of(&mut state, &ctoken_market), Some(token(DAI_TOKEN)));

    map_ctoken(&mut state, USDC_TOKEN, ManagedAddress::zero());
    assert_eq!(reverse_of(&mut state, &ctoken_market), Some(token(DAI_TOKEN)));

    map_ctoken(&mut state, DAI_TOKEN, ManagedAddress::zero());
    assert_eq!(reverse_of(&mut state, &ctoken_market), None);
}

#[test]
fn registry_whitelist_is_admin_only() {
    let mut state = ManagerTestState::new();
    let registry = state.registry.clone();

    state
        .world
        .tx()
        .from(ATTACKER_ADDRESS)
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .add_to_whitelist(token(UNLISTED_TOKEN))
        .returns(ExpectMessage(error_message(ERROR_MISSING_ROLE)))
        .run();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .remove_from_whitelist(token(USDC_TOKEN))
        .run();

    let whitelisted: bool = state
        .world
        .query()
        .to(&registry)
        .typed(proxy_registry::RegistryProxy)
        .whitelisted(token(USDC_TOKEN))
        .returns(ReturnsResult)
        .run();
    assert!(!whitelisted);
}
