#![no_std]

//! Direct-owner front-end with a circuit breaker. Same authorization as the plain position
//! manager; new operations are refused while paused, callbacks of a loan in flight are not.

use common_structs::{CloseParams, FlashSource, MigrateDebtParams, OpenLeverageParams, Protocol};

multiversx_sc::imports!();

#[multiversx_sc::contract]
pub trait PausableManager:
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
    + engine::owner_access::OwnerAccessModule
    + engine::pauser::PauserModule
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
        owner: ManagedAddress,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: MigrateDebtParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_owner(&owner);
        self.start_migrate_debt(beneficiary, source, debt_amount, params);
    }

    /// The attached payment is the principal and must match `params.collateral_asset` and
    /// `params.principal_amount`.
    #[payable("*")]
    #[endpoint(openLeveragedPosition)]
    fn open_leveraged_position(
        &self,
        owner: ManagedAddress,
        source: FlashSource<Self::Api>,
        flash_amount: BigUint,
        params: OpenLeverageParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_owner(&owner);
        let principal = self.call_value().egld_or_single_esdt();
        self.start_open_leverage(beneficiary, source, flash_amount, params, &principal);
    }

    #[endpoint(deleverage)]
    fn deleverage(
        &self,
        owner: ManagedAddress,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_owner(&owner);
        self.start_deleverage(beneficiary, source, debt_amount, params);
    }

    #[endpoint(closePosition)]
    fn close_position(
        &self,
        owner: ManagedAddress,
        source: FlashSource<Self::Api>,
        percentage_bps: usize,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_owner(&owner);
        self.start_close_position(beneficiary, source, percentage_bps, params);
    }

    #[endpoint(exit)]
    fn exit(
        &self,
        owner: ManagedAddress,
        source: FlashSource<Self::Api>,
        withdraw_collateral: bool,
        params: CloseParams<Self::Api>,
    ) {
        self.require_not_paused();
        let beneficiary = self.authorize_owner(&owner);
        self.start_exit(beneficiary, source, withdraw_collateral, params);
    }
}
