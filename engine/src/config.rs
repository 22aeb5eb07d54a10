use common_constants::MAX_FEE_RATE_BPS;
use common_errors::{
    ERROR_ADDRESS_IS_NOT_A_SC, ERROR_FEE_TOO_HIGH, ERROR_FLASH_ONGOING, ERROR_INSUFFICIENT_BALANCE,
    ERROR_ZERO_ADDRESS,
};
use common_structs::{Protocol, Role};

use crate::storage;

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage + common_access::AccessControlModule + common_events::EventsModule
{
    /// Deploy-time configuration shared by every front-end.
    ///
    /// # Arguments
    /// - `registry`: Protocol registry contract.
    /// - `scheduler`: Timelock, the only caller allowed to change critical parameters.
    /// - `fee_rate_bps`: Orchestration fee, at most `MAX_FEE_RATE_BPS`.
    /// - `fee_beneficiary`: Receiver of the orchestration fee.
    /// - `handlers`: Initial `(protocol, handler)` bindings.
    fn init_engine(
        &self,
        registry: ManagedAddress,
        scheduler: ManagedAddress,
        fee_rate_bps: usize,
        fee_beneficiary: ManagedAddress,
        handlers: MultiValueEncoded<MultiValue2<Protocol, ManagedAddress>>,
    ) {
        require!(
            self.blockchain().is_smart_contract(&registry),
            ERROR_ADDRESS_IS_NOT_A_SC
        );
        self.registry().set(&registry);
        self.init_access_control(&scheduler);
        self.store_fee_rate(fee_rate_bps);
        self.store_fee_beneficiary(&fee_beneficiary);

        for binding in handlers {
            let (protocol, handler) = binding.into_tuple();
            self.store_protocol_handler(protocol, &handler);
        }
    }

    /// Rebinds `protocol` to a new handler. Critical: needs the `Critical` role and must
    /// come from the scheduler.
    #[endpoint(setProtocolHandler)]
    fn set_protocol_handler(&self, protocol: Protocol, handler: ManagedAddress) {
        self.require_critical_caller();
        self.store_protocol_handler(protocol, &handler);
    }

    #[endpoint(setFeeRate)]
    fn set_fee_rate(&self, fee_rate_bps: usize) {
        self.require_role(Role::Admin);
        self.store_fee_rate(fee_rate_bps);
    }

    #[endpoint(setFeeBeneficiary)]
    fn set_fee_beneficiary(&self, beneficiary: ManagedAddress) {
        self.require_role(Role::Admin);
        self.store_fee_beneficiary(&beneficiary);
    }

    /// Rescues EGLD sent to the contract by mistake. Bounded by the current balance.
    #[endpoint(emergencyWithdraw)]
    fn emergency_withdraw(&self, to: ManagedAddress, amount: BigUint) {
        self.require_role(Role::Admin);
        require!(self.pending_flash().is_empty(), ERROR_FLASH_ONGOING);
        require!(!to.is_zero(), ERROR_ZERO_ADDRESS);

        let balance = self
            .blockchain()
            .get_balance(&self.blockchain().get_sc_address());
        require!(amount <= balance, ERROR_INSUFFICIENT_BALANCE);

        self.tx().to(&to).egld(&amount).transfer_if_not_empty();
        self.emergency_withdraw_event(&to, &amount);
    }

    fn store_protocol_handler(&self, protocol: Protocol, handler: &ManagedAddress) {
        require!(!handler.is_zero(), ERROR_ZERO_ADDRESS);
        require!(
            self.blockchain().is_smart_contract(handler),
            ERROR_ADDRESS_IS_NOT_A_SC
        );

        self.protocol_handler(protocol).set(handler);
        self.protocol_handler_set_event(protocol, handler);
    }

    fn store_fee_rate(&self, fee_rate_bps: usize) {
        require!(fee_rate_bps <= MAX_FEE_RATE_BPS, ERROR_FEE_TOO_HIGH);

        self.fee_rate().set(fee_rate_bps);
        self.fee_rate_set_event(fee_rate_bps);
    }

    fn store_fee_beneficiary(&self, beneficiary: &ManagedAddress) {
        require!(!beneficiary.is_zero(), ERROR_ZERO_ADDRESS);

        self.fee_beneficiary().set(beneficiary);
        self.fee_beneficiary_set_event(beneficiary);
    }

    #[view(getProtocolHandler)]
    fn get_protocol_handler(&self, protocol: Protocol) -> OptionalValue<ManagedAddress> {
        let mapper = self.protocol_handler(protocol);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }
}
