use common_structs::Role;

multiversx_sc::imports!();

/// Circuit breaker for the pausable front-ends. Besides the owner's `pause`/`unpause`,
/// holders of `Role::Pauser` can halt and resume new operations. Callbacks of a loan
/// already in flight are not affected.
#[multiversx_sc::module]
pub trait PauserModule:
    multiversx_sc_modules::pause::PauseModule
    + common_access::AccessControlModule
    + common_events::EventsModule
{
    #[endpoint(guardianPause)]
    fn guardian_pause(&self) {
        self.require_role(Role::Pauser);
        self.set_paused(true);
        self.pause_event();
    }

    #[endpoint(guardianUnpause)]
    fn guardian_unpause(&self) {
        self.require_role(Role::Pauser);
        self.set_paused(false);
        self.unpause_event();
    }
}
