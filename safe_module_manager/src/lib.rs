#![no_std]

//! Wallet-module front-end. Positions belong to a multisig-style wallet that enabled this
//! contract as a module; the wallet, its owners and global operators may drive them.

use common_structs::{CloseParams, FlashSource, MigrateDebtParams, OpenLeverageParams, Protocol};

use engine::Cache;

multiversx_sc::imports!();

pub mod wallet;

#[multiversx_sc::contract]
pub trait SafeModuleManager:
    engine::storage::Storage
    + engine::config::ConfigModule
    + engine::validation::ValidationModule
    + engine::handlers::HandlerCallsModule
    + engine::swaps::SwapsModule
    + engine::fees::FeesModule
    + engine::flash::FlashModule
    + engine::strategies::StrategiesModule
    + engine::callback::CallbackModule
    + engine::operations::OperationsModule
    + engine::views::ViewsModule
    + engine::pauser::PauserModule
    + wallet::WalletModule
    + multiversx_sc_modules::pause::PauseModule
    + common_access::AccessControlModule
    + common_events::EventsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(
        &self,
        registry: ManagedAddress,
        scheduler: ManagedAddress,
        fee_rate_bps: usize,
        fee_beneficiary: ManagedAddress,
        handlers: MultiValueEncoded<MultiValue2<Protocol, ManagedAddress>>,
    ) {
        self.init_engine(registry, scheduler, fee_rate_bps, fee_beneficiary, handlers);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(migrateDebt)]
    fn migrate_debt(
        &self,
        wallet: ManagedAddress,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: MigrateDebtParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_wallet(&wallet);
        self.start_migrate_debt(beneficiary, source, debt_amount, params);
    }

    /// The principal is pulled from the wallet rather than attached to the call, after the
    /// request and the liquidity source are validated.
    #[endpoint(openLeveragedPosition)]
    fn open_leveraged_position(
        &self,
        wallet: ManagedAddress,
        source: FlashSource<Self::Api>,
        flash_amount: BigUint,
        params: OpenLeverageParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_wallet(&wallet);
        let mut cache = Cache::new(self);
        self.validate_open_params(&mut cache, &params);
        self.require_genuine_pool(&cache, &params.collateral_asset, &source);

        let principal =
            self.pull_principal(&wallet, &params.collateral_asset, &params.principal_amount);
        self.start_open_leverage(beneficiary, source, flash_amount, params, &principal);
    }

    #[endpoint(deleverage)]
    fn deleverage(
        &self,
        wallet: ManagedAddress,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_wallet(&wallet);
        self.start_deleverage(beneficiary, source, debt_amount, params);
    }

    #[endpoint(closePosition)]
    fn close_position(
        &self,
        wallet: ManagedAddress,
        source: FlashSource<Self::Api>,
        percentage_bps: usize,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_wallet(&wallet);
        self.start_close_position(beneficiary, source, percentage_bps, params);
    }

    #[endpoint(exit)]
    fn exit(
        &self,
        wallet: ManagedAddress,
        source: FlashSource<Self::Api>,
        withdraw_collateral: bool,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_wallet(&wallet);
        self.start_exit(beneficiary, source, withdraw_collateral, params);
    }
}
