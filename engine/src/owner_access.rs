use common_errors::{ERROR_UNAUTHORIZED_CALLER, ERROR_ZERO_ADDRESS};
use common_structs::Beneficiary;

multiversx_sc::imports!();

/// Direct-owner authorization: a position is driven by its owner or by an operator the
/// owner approved. Surplus always goes back to the owner.
#[multiversx_sc::module]
pub trait OwnerAccessModule: common_events::EventsModule {
    /// Approves or revokes `operator` for the caller's own positions.
    #[endpoint(setOperator)]
    fn set_operator(&self, operator: ManagedAddress, enabled: bool) {
        require!(!operator.is_zero(), ERROR_ZERO_ADDRESS);
        let owner = self.blockchain().get_caller();

        if enabled {
            self.operators(&owner).insert(operator.clone());
        } else {
            self.operators(&owner).swap_remove(&operator);
        }
        self.operator_set_event(&owner, &operator, enabled);
    }

    fn authorize_owner(&self, owner: &ManagedAddress) -> Beneficiary<Self::Api> {
        let caller = self.blockchain().get_caller();
        require!(
            &caller == owner || self.operators(owner).contains(&caller),
            ERROR_UNAUTHORIZED_CALLER
        );

        Beneficiary {
            owner: owner.clone(),
            recipient: owner.clone(),
        }
    }

    #[view(isOperator)]
    fn is_operator(&self, owner: ManagedAddress, operator: ManagedAddress) -> bool {
        self.operators(&owner).contains(&operator)
    }

    #[storage_mapper("operators")]
    fn operators(&self, owner: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;
}
