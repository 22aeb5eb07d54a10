#![no_std]

use common_errors::{
    ERROR_CANNOT_REVOKE_LAST_ADMIN, ERROR_CRITICAL_ROLE_REQUIRES_SCHEDULER, ERROR_MISSING_ROLE,
    ERROR_NOT_SCHEDULER, ERROR_ZERO_ADDRESS,
};
use common_structs::Role;

multiversx_sc::imports!();

/// Role based access control shared by the registry and every front-end.
///
/// Two tiers of configuration exist:
/// - routine changes, gated by `Role::Admin` and applied immediately;
/// - critical changes, gated by `require_critical_caller`, which needs both the
///   `Role::Critical` membership **and** the caller being the configured scheduler.
///   A direct call from a critical role holder that is not the scheduler is rejected.
#[multiversx_sc::module]
pub trait AccessControlModule: common_events::EventsModule {
    /// Bootstraps the role state: the deployer becomes the temporary admin and the
    /// scheduler receives the critical role.
    fn init_access_control(&self, scheduler: &ManagedAddress) {
        require!(!scheduler.is_zero(), ERROR_ZERO_ADDRESS);

        let deployer = self.blockchain().get_caller();
        self.scheduler().set(scheduler);
        self.scheduler_updated_event(scheduler);

        self.add_role_member(Role::Admin, &deployer, &deployer);
        self.add_role_member(Role::Critical, scheduler, &deployer);
    }

    /// Grants `role` to `account`.
    ///
    /// `Role::Critical` can only be granted through the scheduler; every other role
    /// is granted by an admin.
    #[endpoint(grantRole)]
    fn grant_role(&self, role: Role, account: ManagedAddress) {
        require!(!account.is_zero(), ERROR_ZERO_ADDRESS);
        self.require_role_admin(role);

        let sender = self.blockchain().get_caller();
        self.add_role_member(role, &account, &sender);
    }

    #[endpoint(revokeRole)]
    fn revoke_role(&self, role: Role, account: ManagedAddress) {
        self.require_role_admin(role);

        let sender = self.blockchain().get_caller();
        self.remove_role_member(role, &account, &sender);
    }

    /// Drops a role held by the caller. Used by the deployer to finish the admin handoff.
    #[endpoint(renounceRole)]
    fn renounce_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), ERROR_MISSING_ROLE);

        self.remove_role_member(role, &caller, &caller);
    }

    /// Rotates the scheduler. Critical path: only the current scheduler may call it.
    #[endpoint(setScheduler)]
    fn set_scheduler(&self, scheduler: ManagedAddress) {
        self.require_critical_caller();
        require!(!scheduler.is_zero(), ERROR_ZERO_ADDRESS);

        self.scheduler().set(&scheduler);
        self.scheduler_updated_event(&scheduler);
    }

    fn require_role(&self, role: Role) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(role, &caller), ERROR_MISSING_ROLE);
    }

    /// Two-factor guard for critical parameters: role membership **and** caller identity.
    fn require_critical_caller(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.has_role(Role::Critical, &caller), ERROR_MISSING_ROLE);
        require!(caller == self.scheduler().get(), ERROR_NOT_SCHEDULER);
    }

    fn require_role_admin(&self, role: Role) {
        if role.is_critical() {
            require!(
                self.blockchain().get_caller() == self.scheduler().get(),
                ERROR_CRITICAL_ROLE_REQUIRES_SCHEDULER
            );
            self.require_critical_caller();
        } else {
            self.require_role(Role::Admin);
        }
    }

    fn add_role_member(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        if self.role_members(role).insert(account.clone()) {
            self.role_granted_event(role, account, sender);
        }
    }

    fn remove_role_member(&self, role: Role, account: &ManagedAddress, sender: &ManagedAddress) {
        let mut members = self.role_members(role);
        if role == Role::Admin && members.contains(account) {
            require!(members.len() > 1, ERROR_CANNOT_REVOKE_LAST_ADMIN);
        }
        if members.swap_remove(account) {
            self.role_revoked_event(role, account, sender);
        }
    }

    fn has_role(&self, role: Role, account: &ManagedAddress) -> bool {
        self.role_members(role).contains(account)
    }

    #[view(hasRole)]
    fn has_role_view(&self, role: Role, account: ManagedAddress) -> bool {
        self.has_role(role, &account)
    }

    #[view(getRoleMembers)]
    fn get_role_members(&self, role: Role) -> MultiValueEncoded<ManagedAddress> {
        let mut members = MultiValueEncoded::new();
        for member in self.role_members(role).iter() {
            members.push(member);
        }
        members
    }

    #[view(getScheduler)]
    #[storage_mapper("scheduler")]
    fn scheduler(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("roleMembers")]
    fn role_members(&self, role: Role) -> UnorderedSetMapper<ManagedAddress>;
}
