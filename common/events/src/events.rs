#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    // Access control

    #[event("role_granted")]
    fn role_granted_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("role_revoked")]
    fn role_revoked_event(
        &self,
        #[indexed] role: Role,
        #[indexed] account: &ManagedAddress,
        #[indexed] sender: &ManagedAddress,
    );

    #[event("scheduler_updated")]
    fn scheduler_updated_event(&self, #[indexed] scheduler: &ManagedAddress);

    // Registry

    #[event("token_mapping_set")]
    fn token_mapping_set_event(
        &self,
        #[indexed] protocol: Protocol,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] wrapped: &ManagedAddress,
    );

    #[event("whitelist_updated")]
    fn whitelist_updated_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] whitelisted: bool,
    );

    #[event("asset_decimals_set")]
    fn asset_decimals_set_event(
        &self,
        #[indexed] asset: &EgldOrEsdtTokenIdentifier,
        #[indexed] decimals: usize,
    );

    #[event("critical_parameter_set")]
    fn critical_parameter_set_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] value: &ManagedAddress,
    );

    // Front-end configuration

    #[event("protocol_handler_set")]
    fn protocol_handler_set_event(
        &self,
        #[indexed] protocol: Protocol,
        #[indexed] handler: &ManagedAddress,
    );

    #[event("fee_rate_set")]
    fn fee_rate_set_event(&self, #[indexed] fee_rate_bps: usize);

    #[event("fee_beneficiary_set")]
    fn fee_beneficiary_set_event(&self, #[indexed] beneficiary: &ManagedAddress);

    #[event("operator_set")]
    fn operator_set_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] operator: &ManagedAddress,
        #[indexed] enabled: bool,
    );

    #[event("emergency_withdraw")]
    fn emergency_withdraw_event(&self, #[indexed] to: &ManagedAddress, #[indexed] amount: &BigUint);

    // Orchestration

    #[event("debt_migrated")]
    fn debt_migrated_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] source_protocol: Protocol,
        #[indexed] destination_protocol: Protocol,
        #[indexed] repaid: &EgldOrEsdtTokenPayment,
        #[indexed] borrowed: &EgldOrEsdtTokenPayment,
    );

    #[event("position_opened")]
    fn position_opened_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] protocol: Protocol,
        #[indexed] supplied: &EgldOrEsdtTokenPayment,
        #[indexed] borrowed: &EgldOrEsdtTokenPayment,
    );

    #[event("position_closed")]
    fn position_closed_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] protocol: Protocol,
        #[indexed] repaid: &EgldOrEsdtTokenPayment,
        #[indexed] withdrawn: &EgldOrEsdtTokenPayment,
        #[indexed] full_exit: bool,
    );

    #[event("protocol_fee_paid")]
    fn protocol_fee_paid_event(
        &self,
        #[indexed] beneficiary: &ManagedAddress,
        #[indexed] fee: &EgldOrEsdtTokenPayment,
    );

    // Handlers

    #[event("engine_updated")]
    fn engine_updated_event(&self, #[indexed] engine: &ManagedAddress, #[indexed] allowed: bool);

    // Timelock

    #[event("timelock_scheduled")]
    fn timelock_scheduled_event(
        &self,
        #[indexed] id: u64,
        #[indexed] target: &ManagedAddress,
        #[indexed] endpoint: &ManagedBuffer,
        #[indexed] ready_at: u64,
    );

    #[event("timelock_executed")]
    fn timelock_executed_event(&self, #[indexed] id: u64, #[indexed] executor: &ManagedAddress);

    #[event("timelock_cancelled")]
    fn timelock_cancelled_event(&self, #[indexed] id: u64);

    #[event("timelock_delay_updated")]
    fn timelock_delay_updated_event(&self, #[indexed] min_delay: u64);
}
