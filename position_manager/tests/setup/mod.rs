#![allow(dead_code)]

use crate::constants::*;

use common_constants::{FLASH_FACTORY_PARAMETER, SWAP_ROUTER_PARAMETER};
use common_proxies::{
    proxy_factory, proxy_flash_pool, proxy_handler_comet, proxy_handler_ctoken,
    proxy_handler_isolated, proxy_handler_pooled, proxy_handler_vault, proxy_market,
    proxy_pausable_manager, proxy_position_manager, proxy_registry, proxy_safe_module_manager,
    proxy_swap, proxy_timelock, proxy_wallet,
};
use common_structs::{
    CloseParams, CollateralMove, CometExtraData, FlashSource, IsolatedExtraData,
    MigrateDebtParams, OpenLeverageParams, PositionLeg, Protocol, VaultExtraData,
};

use multiversx_sc::{
    codec::{top_encode_to_vec_u8_or_panic, TopEncode},
    imports::MultiValue2,
    types::{
        BigUint, CodeMetadata, EgldOrEsdtTokenIdentifier, ManagedAddress, ManagedBuffer,
        ManagedVec, MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult,
        TestTokenIdentifier,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestAddress},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(POSITION_MANAGER_PATH, position_manager::ContractBuilder);
    blockchain.register_contract(PAUSABLE_MANAGER_PATH, pausable_manager::ContractBuilder);
    blockchain.register_contract(
        SAFE_MODULE_MANAGER_PATH,
        safe_module_manager::ContractBuilder,
    );
    blockchain.register_contract(REGISTRY_PATH, registry::ContractBuilder);
    blockchain.register_contract(TIMELOCK_PATH, timelock::ContractBuilder);
    blockchain.register_contract(POOLED_HANDLER_PATH, handler_pooled::ContractBuilder);
    blockchain.register_contract(CTOKEN_HANDLER_PATH, handler_ctoken::ContractBuilder);
    blockchain.register_contract(ISOLATED_HANDLER_PATH, handler_isolated::ContractBuilder);
    blockchain.register_contract(COMET_HANDLER_PATH, handler_comet::ContractBuilder);
    blockchain.register_contract(VAULT_HANDLER_PATH, handler_vault::ContractBuilder);
    blockchain.register_contract(FLASH_POOL_PATH, flash_mock::ContractBuilder);
    blockchain.register_contract(FACTORY_PATH, factory_mock::ContractBuilder);
    blockchain.register_contract(SWAP_PATH, swap_mock::ContractBuilder);
    blockchain.register_contract(MARKET_PATH, market_mock::ContractBuilder);
    blockchain.register_contract(WALLET_PATH, wallet_mock::ContractBuilder);

    blockchain
}

pub fn token(id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(id.to_token_identifier())
}

pub fn units(amount: u64, decimals: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn encode<T: TopEncode>(value: &T) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::new_from_bytes(&top_encode_to_vec_u8_or_panic(value))
}

pub fn ceil_div(a: &BigUint<StaticApi>, b: &BigUint<StaticApi>) -> BigUint<StaticApi> {
    (a + b - BigUint::from(1u64)) / b
}

pub fn error_message(error: &[u8]) -> &str {
    core::str::from_utf8(error).unwrap()
}

pub struct ManagerTestState {
    pub world: ScenarioWorld,
    pub timestamp: u64,
    pub timelock: ManagedAddress<StaticApi>,
    pub registry: ManagedAddress<StaticApi>,
    pub factory: ManagedAddress<StaticApi>,
    pub usdc_pool: ManagedAddress<StaticApi>,
    pub dai_pool: ManagedAddress<StaticApi>,
    pub swap_router: ManagedAddress<StaticApi>,
    pub market: ManagedAddress<StaticApi>,
    pub comet_market: ManagedAddress<StaticApi>,
    pub ctoken_market: ManagedAddress<StaticApi>,
    pub pooled_handler: ManagedAddress<StaticApi>,
    pub ctoken_handler: ManagedAddress<StaticApi>,
    pub isolated_handler: ManagedAddress<StaticApi>,
    pub comet_handler: ManagedAddress<StaticApi>,
    pub vault_handler: ManagedAddress<StaticApi>,
    pub manager: ManagedAddress<StaticApi>,
    pub pausable_manager: ManagedAddress<StaticApi>,
    pub safe_manager: ManagedAddress<StaticApi>,
    pub wallet: ManagedAddress<StaticApi>,
}

impl ManagerTestState {
    pub fn new() -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let timelock = setup_timelock(&mut world);
        let registry = setup_registry(&mut world, &timelock);
        let (factory, usdc_pool, dai_pool) = setup_flash_pools(&mut world);
        let swap_router = setup_swap_router(&mut world);

        let market = setup_market(&mut world);
        let comet_market = setup_market(&mut world);
        let ctoken_market = setup_market(&mut world);

        let pooled_handler = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_handler_pooled::PooledHandlerProxy)
            .init(&market)
            .code(POOLED_HANDLER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let ctoken_handler = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_handler_ctoken::CTokenHandlerProxy)
            .init(&registry)
            .code(CTOKEN_HANDLER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let isolated_handler = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_handler_isolated::IsolatedHandlerProxy)
            .init(&market)
            .code(ISOLATED_HANDLER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let comet_handler = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_handler_comet::CometHandlerProxy)
            .init()
            .code(COMET_HANDLER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let vault_handler = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_handler_vault::VaultHandlerProxy)
            .init(&market)
            .code(VAULT_HANDLER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            timestamp: 0,
            timelock,
            registry,
            factory,
            usdc_pool,
            dai_pool,
            swap_router,
            market,
            comet_market,
            ctoken_market,
            pooled_handler,
            ctoken_handler,
            isolated_handler,
            comet_handler,
            vault_handler,
            manager: ManagedAddress::zero(),
            pausable_manager: ManagedAddress::zero(),
            safe_manager: ManagedAddress::zero(),
            wallet: ManagedAddress::zero(),
        };

        state.setup_managers();
        state.setup_registry_config();
        state.setup_wallet();

        state
    }

    fn handler_bindings(
        &self,
    ) -> MultiValueEncoded<StaticApi, MultiValue2<Protocol, ManagedAddress<StaticApi>>> {
        let mut handlers = MultiValueEncoded::new();
        handlers.push(MultiValue2::from((Protocol::Pooled, self.pooled_handler.clone())));
        handlers.push(MultiValue2::from((Protocol::CToken, self.ctoken_handler.clone())));
        handlers.push(MultiValue2::from((Protocol::Isolated, self.isolated_handler.clone())));
        handlers.push(MultiValue2::from((Protocol::Comet, self.comet_handler.clone())));
        handlers.push(MultiValue2::from((Protocol::Vault, self.vault_handler.clone())));
        handlers
    }

    fn setup_managers(&mut self) {
        let handlers = self.handler_bindings();
        self.manager = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_position_manager::PositionManagerProxy)
            .init(
                &self.registry,
                &self.timelock,
                FEE_RATE_BPS,
                FEE_COLLECTOR_ADDRESS,
                handlers.clone(),
            )
            .code(POSITION_MANAGER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.pausable_manager = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_pausable_manager::PausableManagerProxy)
            .init(
                &self.registry,
                &self.timelock,
                FEE_RATE_BPS,
                FEE_COLLECTOR_ADDRESS,
                handlers.clone(),
            )
            .code(PAUSABLE_MANAGER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.safe_manager = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_safe_module_manager::SafeModuleManagerProxy)
            .init(
                &self.registry,
                &self.timelock,
                FEE_RATE_BPS,
                FEE_COLLECTOR_ADDRESS,
                handlers.clone(),
            )
            .code(SAFE_MODULE_MANAGER_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        let handler_addresses = [
            self.pooled_handler.clone(),
            self.ctoken_handler.clone(),
            self.isolated_handler.clone(),
            self.comet_handler.clone(),
            self.vault_handler.clone(),
        ];
        let engines = [
            self.manager.clone(),
            self.pausable_manager.clone(),
            self.safe_manager.clone(),
        ];
        for handler in handler_addresses.iter() {
            for engine in engines.iter() {
                self.world
                    .tx()
                    .from(OWNER_ADDRESS)
                    .to(handler)
                    .typed(proxy_handler_pooled::PooledHandlerProxy)
                    .add_engine(engine)
                    .run();
            }
        }
    }

    fn setup_registry_config(&mut self) {
        for (asset, decimals) in [
            (USDC_TOKEN, USDC_DECIMALS),
            (DAI_TOKEN, DAI_DECIMALS),
            (WEGLD_TOKEN, WEGLD_DECIMALS),
        ] {
            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.registry)
                .typed(proxy_registry::RegistryProxy)
                .add_to_whitelist(token(asset))
                .run();

            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.registry)
                .typed(proxy_registry::RegistryProxy)
                .set_asset_decimals(token(asset), decimals as usize)
                .run();

            self.world
                .tx()
                .from(OWNER_ADDRESS)
                .to(&self.registry)
                .typed(proxy_registry::RegistryProxy)
                .set_token_mapping(Protocol::CToken, token(asset), &self.ctoken_market)
                .run();
        }

        let registry = self.registry.clone();
        let factory = self.factory.clone();
        let swap_router = self.swap_router.clone();
        self.schedule_and_execute(
            &registry,
            "setCriticalParameter",
            vec![
                ManagedBuffer::new_from_bytes(FLASH_FACTORY_PARAMETER),
                factory.as_managed_buffer().clone(),
            ],
        );
        self.schedule_and_execute(
            &registry,
            "setCriticalParameter",
            vec![
                ManagedBuffer::new_from_bytes(SWAP_ROUTER_PARAMETER),
                swap_router.as_managed_buffer().clone(),
            ],
        );
    }

    fn setup_wallet(&mut self) {
        let mut owners = MultiValueEncoded::new();
        owners.push(WALLET_OWNER_ADDRESS.to_managed_address());

        self.wallet = self
            .world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_wallet::WalletMockProxy)
            .init(owners)
            .code(WALLET_PATH)
            .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
            .returns(ReturnsNewManagedAddress)
            .run();

        self.world.set_esdt_balance(
            self.wallet.clone(),
            WEGLD_TOKEN.as_bytes(),
            units(1_000, WEGLD_DECIMALS),
        );
    }

    // Timelock

    pub fn advance_time(&mut self, seconds: u64) {
        self.timestamp += seconds;
        self.world.current_block().block_timestamp(self.timestamp);
    }

    pub fn schedule(
        &mut self,
        from: TestAddress,
        target: &ManagedAddress<StaticApi>,
        endpoint: &str,
        arguments: Vec<ManagedBuffer<StaticApi>>,
    ) -> u64 {
        let mut encoded = MultiValueEncoded::new();
        for argument in arguments {
            encoded.push(argument);
        }

        self.world
            .tx()
            .from(from)
            .to(&self.timelock)
            .typed(proxy_timelock::TimelockProxy)
            .schedule(target, ManagedBuffer::from(endpoint), MIN_DELAY, encoded)
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute(&mut self, id: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.timelock)
            .typed(proxy_timelock::TimelockProxy)
            .execute(id)
            .run();
    }

    pub fn execute_error(&mut self, id: u64, error: &[u8]) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.timelock)
            .typed(proxy_timelock::TimelockProxy)
            .execute(id)
            .returns(ExpectMessage(error_message(error)))
            .run();
    }

    pub fn schedule_and_execute(
        &mut self,
        target: &ManagedAddress<StaticApi>,
        endpoint: &str,
        arguments: Vec<ManagedBuffer<StaticApi>>,
    ) {
        let id = self.schedule(OWNER_ADDRESS, target, endpoint, arguments);
        self.advance_time(MIN_DELAY);
        self.execute(id);
    }

    // Markets

    pub fn supply(
        &mut self,
        from: TestAddress,
        market: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .supply(from.to_managed_address())
            .single_esdt(&asset.to_token_identifier(), 0, &amount)
            .run();
    }

    pub fn borrow(
        &mut self,
        from: TestAddress,
        market: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .borrow(token(asset), amount, from.to_managed_address())
            .run();
    }

    pub fn allow_handler(
        &mut self,
        from: TestAddress,
        market: &ManagedAddress<StaticApi>,
        handler: &ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .set_manager(handler, true)
            .run();
    }

    pub fn set_frozen(&mut self, market: &ManagedAddress<StaticApi>, frozen: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .set_frozen(frozen)
            .run();
    }

    /// Every later swap delivers `shortfall_bps` less than it was asked for.
    pub fn set_swap_shortfall(&mut self, shortfall_bps: usize) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.swap_router)
            .typed(proxy_swap::SwapMockProxy)
            .set_shortfall(shortfall_bps)
            .run();
    }

    pub fn set_borrow_rate(
        &mut self,
        market: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        rate_per_second: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .set_borrow_rate(token(asset), rate_per_second)
            .run();
    }

    pub fn market_debt(
        &mut self,
        market: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        owner: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .get_debt(token(asset), owner)
            .returns(ReturnsResult)
            .run()
    }

    pub fn market_collateral(
        &mut self,
        market: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        owner: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .get_collateral(token(asset), owner)
            .returns(ReturnsResult)
            .run()
    }

    pub fn create_isolated_market(
        &mut self,
        loan: TestTokenIdentifier,
        collateral: TestTokenIdentifier,
    ) -> u64 {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&self.market)
            .typed(proxy_market::MarketMockProxy)
            .create_isolated_market(token(loan), token(collateral), BigUint::zero())
            .returns(ReturnsResult)
            .run()
    }

    pub fn open_vault(
        &mut self,
        owner: TestAddress,
        collateral: TestTokenIdentifier,
        debt: TestTokenIdentifier,
    ) -> u64 {
        self.world
            .tx()
            .from(owner)
            .to(&self.market)
            .typed(proxy_market::MarketMockProxy)
            .open_vault(owner.to_managed_address(), token(collateral), token(debt))
            .returns(ReturnsResult)
            .run()
    }

    /// 10 WEGLD supplied and 100 USDC borrowed on the pooled market, handler allowed.
    pub fn open_pooled_usdc_position(&mut self, owner: TestAddress) {
        let market = self.market.clone();
        let handler = self.pooled_handler.clone();
        self.supply(owner, &market, WEGLD_TOKEN, units(10, WEGLD_DECIMALS));
        self.borrow(owner, &market, USDC_TOKEN, units(100, USDC_DECIMALS));
        self.allow_handler(owner, &market, &handler);
    }

    // Position legs and parameters

    pub fn pooled_leg(&self) -> PositionLeg<StaticApi> {
        PositionLeg::new(Protocol::Pooled, ManagedBuffer::new())
    }

    pub fn ctoken_leg(&self) -> PositionLeg<StaticApi> {
        PositionLeg::new(Protocol::CToken, ManagedBuffer::new())
    }

    pub fn comet_leg(&self) -> PositionLeg<StaticApi> {
        PositionLeg::new(
            Protocol::Comet,
            encode(&CometExtraData {
                market: self.comet_market.clone(),
            }),
        )
    }

    pub fn isolated_leg(&self, market_id: u64) -> PositionLeg<StaticApi> {
        PositionLeg::new(
            Protocol::Isolated,
            encode(&IsolatedExtraData::<StaticApi> {
                market_id,
                repay_shares: BigUint::zero(),
            }),
        )
    }

    pub fn vault_leg(&self, position_id: u64) -> PositionLeg<StaticApi> {
        PositionLeg::new(
            Protocol::Vault,
            encode(&VaultExtraData {
                position_id,
                full_repay: false,
            }),
        )
    }

    /// USDC and WEGLD flash from the USDC/WEGLD pool, DAI from the DAI/WEGLD pool.
    pub fn flash_source(&self, flash_token: TestTokenIdentifier) -> FlashSource<StaticApi> {
        if flash_token.as_bytes() == DAI_TOKEN.as_bytes() {
            return FlashSource {
                pool: self.dai_pool.clone(),
                paired_token: token(WEGLD_TOKEN),
                fee_tier: FEE_TIER,
            };
        }

        let paired = if flash_token.as_bytes() == USDC_TOKEN.as_bytes() {
            WEGLD_TOKEN
        } else {
            USDC_TOKEN
        };
        FlashSource {
            pool: self.usdc_pool.clone(),
            paired_token: token(paired),
            fee_tier: FEE_TIER,
        }
    }

    pub fn migrate_params(
        &self,
        source: PositionLeg<StaticApi>,
        destination: PositionLeg<StaticApi>,
        source_debt_asset: TestTokenIdentifier,
        destination_debt_asset: TestTokenIdentifier,
        max_new_debt: BigUint<StaticApi>,
        collaterals: Vec<(TestTokenIdentifier, BigUint<StaticApi>)>,
    ) -> MigrateDebtParams<StaticApi> {
        let mut moves = ManagedVec::new();
        for (asset, amount) in collaterals {
            moves.push(CollateralMove {
                asset: token(asset),
                amount,
            });
        }

        MigrateDebtParams {
            source,
            destination,
            source_debt_asset: token(source_debt_asset),
            destination_debt_asset: token(destination_debt_asset),
            max_new_debt,
            collaterals: moves,
            routing: ManagedVec::new(),
        }
    }

    pub fn open_params(
        &self,
        leg: PositionLeg<StaticApi>,
        collateral_asset: TestTokenIdentifier,
        principal_amount: BigUint<StaticApi>,
        debt_asset: TestTokenIdentifier,
        max_debt: BigUint<StaticApi>,
    ) -> OpenLeverageParams<StaticApi> {
        OpenLeverageParams {
            leg,
            collateral_asset: token(collateral_asset),
            principal_amount,
            debt_asset: token(debt_asset),
            max_debt,
            routing: ManagedVec::new(),
        }
    }

    pub fn close_params(
        &self,
        leg: PositionLeg<StaticApi>,
        debt_asset: TestTokenIdentifier,
        collateral_asset: TestTokenIdentifier,
        collateral_amount: BigUint<StaticApi>,
        withdraw_surplus: bool,
    ) -> CloseParams<StaticApi> {
        CloseParams {
            leg,
            debt_asset: token(debt_asset),
            collateral_asset: token(collateral_asset),
            collateral_amount,
            withdraw_surplus,
            require_full_close: false,
            routing: ManagedVec::new(),
        }
    }

    // Position manager

    pub fn migrate_debt(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        source: FlashSource<StaticApi>,
        debt_amount: BigUint<StaticApi>,
        params: MigrateDebtParams<StaticApi>,
        error: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .migrate_debt(owner, source, debt_amount, params);
        if let Some(error) = error {
            call.returns(ExpectMessage(error_message(error))).run();
        } else {
            call.run();
        }
    }

    pub fn open_leveraged_position(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        source: FlashSource<StaticApi>,
        flash_amount: BigUint<StaticApi>,
        params: OpenLeverageParams<StaticApi>,
        principal: (TestTokenIdentifier, BigUint<StaticApi>),
        error: Option<&[u8]>,
    ) {
        let (principal_token, principal_amount) = principal;
        let principal_token = principal_token.to_token_identifier();
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .open_leveraged_position(owner, source, flash_amount, params)
            .single_esdt(&principal_token, 0, &principal_amount);
        if let Some(error) = error {
            call.returns(ExpectMessage(error_message(error))).run();
        } else {
            call.run();
        }
    }

    pub fn deleverage(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        source: FlashSource<StaticApi>,
        debt_amount: BigUint<StaticApi>,
        params: CloseParams<StaticApi>,
        error: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .deleverage(owner, source, debt_amount, params);
        if let Some(error) = error {
            call.returns(ExpectMessage(error_message(error))).run();
        } else {
            call.run();
        }
    }

    pub fn close_position(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        source: FlashSource<StaticApi>,
        percentage_bps: usize,
        params: CloseParams<StaticApi>,
        error: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .close_position(owner, source, percentage_bps, params);
        if let Some(error) = error {
            call.returns(ExpectMessage(error_message(error))).run();
        } else {
            call.run();
        }
    }

    pub fn exit(
        &mut self,
        from: TestAddress,
        owner: TestAddress,
        source: FlashSource<StaticApi>,
        withdraw_collateral: bool,
        params: CloseParams<StaticApi>,
        error: Option<&[u8]>,
    ) {
        let call = self
            .world
            .tx()
            .from(from)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .exit(owner, source, withdraw_collateral, params);
        if let Some(error) = error {
            call.returns(ExpectMessage(error_message(error))).run();
        } else {
            call.run();
        }
    }

    pub fn set_operator(&mut self, owner: TestAddress, operator: TestAddress, enabled: bool) {
        self.world
            .tx()
            .from(owner)
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .set_operator(operator, enabled)
            .run();
    }

    pub fn position_debt(
        &mut self,
        leg: &PositionLeg<StaticApi>,
        asset: TestTokenIdentifier,
        owner: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .get_position_debt(leg.protocol, token(asset), owner, &leg.extra_data)
            .returns(ReturnsResult)
            .run()
    }

    pub fn position_collateral(
        &mut self,
        leg: &PositionLeg<StaticApi>,
        asset: TestTokenIdentifier,
        owner: &ManagedAddress<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .get_position_collateral(leg.protocol, token(asset), owner, &leg.extra_data)
            .returns(ReturnsResult)
            .run()
    }

    pub fn quote_protocol_fee(
        &mut self,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .quote_protocol_fee(token(asset), amount)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_operation_ongoing(&mut self) -> bool {
        self.world
            .query()
            .to(&self.manager)
            .typed(proxy_position_manager::PositionManagerProxy)
            .is_operation_ongoing()
            .returns(ReturnsResult)
            .run()
    }

    /// The engine holds none of the listed assets.
    pub fn check_manager_is_empty(&mut self, manager: &ManagedAddress<StaticApi>) {
        self.world
            .check_account(manager.clone())
            .esdt_balance(USDC_TOKEN, &BigUint::<StaticApi>::zero())
            .esdt_balance(DAI_TOKEN, &BigUint::<StaticApi>::zero())
            .esdt_balance(WEGLD_TOKEN, &BigUint::<StaticApi>::zero());
    }

    pub fn check_esdt_balance(
        &mut self,
        address: &ManagedAddress<StaticApi>,
        asset: TestTokenIdentifier,
        expected: &BigUint<StaticApi>,
    ) {
        self.world
            .check_account(address.clone())
            .esdt_balance(asset, expected);
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world.account(FEE_COLLECTOR_ADDRESS).nonce(1);
    world.account(GUARDIAN_ADDRESS).nonce(1);
    world.account(OPERATOR_ADDRESS).nonce(1);
    world.account(WALLET_OWNER_ADDRESS).nonce(1);

    for user in [USER_ADDRESS, OTHER_USER_ADDRESS, ATTACKER_ADDRESS] {
        world
            .account(user)
            .nonce(1)
            .esdt_balance(USDC_TOKEN, units(1_000_000, USDC_DECIMALS))
            .esdt_balance(DAI_TOKEN, units(1_000_000, DAI_DECIMALS))
            .esdt_balance(WEGLD_TOKEN, units(10_000, WEGLD_DECIMALS))
            .esdt_balance(UNLISTED_TOKEN, units(10_000, WEGLD_DECIMALS));
    }
}

pub fn setup_timelock(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let mut proposers = MultiValueEncoded::new();
    proposers.push(OWNER_ADDRESS.to_managed_address());

    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_timelock::TimelockProxy)
        .init(MIN_DELAY, proposers)
        .code(TIMELOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_registry(
    world: &mut ScenarioWorld,
    timelock: &ManagedAddress<StaticApi>,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_registry::RegistryProxy)
        .init(timelock)
        .code(REGISTRY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Factory plus the USDC/WEGLD and DAI/WEGLD pools, each seeded with liquidity.
pub fn setup_flash_pools(
    world: &mut ScenarioWorld,
) -> (
    ManagedAddress<StaticApi>,
    ManagedAddress<StaticApi>,
    ManagedAddress<StaticApi>,
) {
    let template = deploy_flash_pool(world, USDC_TOKEN, WEGLD_TOKEN);

    let factory = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_factory::FactoryMockProxy)
        .init(&template)
        .code(FACTORY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let usdc_pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&factory)
        .typed(proxy_factory::FactoryMockProxy)
        .create_pool(token(USDC_TOKEN), token(WEGLD_TOKEN), FEE_TIER)
        .returns(ReturnsResult)
        .run();

    let dai_pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .to(&factory)
        .typed(proxy_factory::FactoryMockProxy)
        .create_pool(token(DAI_TOKEN), token(WEGLD_TOKEN), FEE_TIER)
        .returns(ReturnsResult)
        .run();

    for pool in [&usdc_pool, &dai_pool] {
        world.set_esdt_balance(pool.clone(), USDC_TOKEN.as_bytes(), units(1_000_000, USDC_DECIMALS));
        world.set_esdt_balance(pool.clone(), DAI_TOKEN.as_bytes(), units(1_000_000, DAI_DECIMALS));
        world.set_esdt_balance(pool.clone(), WEGLD_TOKEN.as_bytes(), units(100_000, WEGLD_DECIMALS));
    }

    (factory, usdc_pool, dai_pool)
}

/// A pool deployed outside the factory. Works like a real pool but is not trusted.
pub fn deploy_flash_pool(
    world: &mut ScenarioWorld,
    token0: TestTokenIdentifier,
    token1: TestTokenIdentifier,
) -> ManagedAddress<StaticApi> {
    let pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_flash_pool::FlashMockProxy)
        .init(token(token0), token(token1), FEE_TIER)
        .code(FLASH_POOL_PATH)
        .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(pool.clone(), token0.as_bytes(), units(1_000_000, USDC_DECIMALS));
    world.set_esdt_balance(pool.clone(), token1.as_bytes(), units(100_000, WEGLD_DECIMALS));

    pool
}

/// 1 DAI = 1 USDC, 1 WEGLD = 40 USDC.
pub fn setup_swap_router(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let swap_router = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap::SwapMockProxy)
        .init()
        .code(SWAP_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let usdc_unit = units(1, USDC_DECIMALS);
    let dai_unit = units(1, DAI_DECIMALS);
    let wegld_unit = units(1, WEGLD_DECIMALS);
    let wegld_price = units(WEGLD_PRICE_IN_USDC, USDC_DECIMALS);
    let rates = [
        (DAI_TOKEN, USDC_TOKEN, usdc_unit.clone(), dai_unit.clone()),
        (USDC_TOKEN, DAI_TOKEN, dai_unit, usdc_unit),
        (WEGLD_TOKEN, USDC_TOKEN, wegld_price.clone(), wegld_unit.clone()),
        (USDC_TOKEN, WEGLD_TOKEN, wegld_unit, wegld_price),
    ];
    for (from, to, numerator, denominator) in rates {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(&swap_router)
            .typed(proxy_swap::SwapMockProxy)
            .set_rate(token(from), token(to), numerator, denominator)
            .run();
    }

    world.set_esdt_balance(swap_router.clone(), USDC_TOKEN.as_bytes(), units(1_000_000, USDC_DECIMALS));
    world.set_esdt_balance(swap_router.clone(), DAI_TOKEN.as_bytes(), units(1_000_000, DAI_DECIMALS));
    world.set_esdt_balance(swap_router.clone(), WEGLD_TOKEN.as_bytes(), units(100_000, WEGLD_DECIMALS));

    swap_router
}

pub fn setup_market(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let market = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_market::MarketMockProxy)
        .init()
        .code(MARKET_PATH)
        .code_metadata(CodeMetadata::UPGRADEABLE | CodeMetadata::PAYABLE_BY_SC)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_balance(market.clone(), USDC_TOKEN.as_bytes(), units(1_000_000, USDC_DECIMALS));
    world.set_esdt_balance(market.clone(), DAI_TOKEN.as_bytes(), units(1_000_000, DAI_DECIMALS));
    world.set_esdt_balance(market.clone(), WEGLD_TOKEN.as_bytes(), units(100_000, WEGLD_DECIMALS));

    market
}
