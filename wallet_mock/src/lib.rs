#![no_std]

use common_errors::{ERROR_MODULE_NOT_ENABLED, ERROR_NOT_WALLET_OWNER, ERROR_ZERO_ADDRESS};

multiversx_sc::imports!();

/// Multisig-style wallet reduced to what a module integration touches: an owner set, a
/// module set, owner-driven execution and module-driven execution.
#[multiversx_sc::contract]
pub trait WalletMock {
    #[init]
    fn init(&self, owners: MultiValueEncoded<ManagedAddress>) {
        for owner in owners {
            require!(!owner.is_zero(), ERROR_ZERO_ADDRESS);
            self.owner_flag(&owner).set(true);
            self.owners().insert(owner);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(enableModule)]
    fn enable_module(&self, module: ManagedAddress) {
        self.require_wallet_owner();
        require!(!module.is_zero(), ERROR_ZERO_ADDRESS);
        self.module_enabled(&module).set(true);
    }

    #[endpoint(disableModule)]
    fn disable_module(&self, module: ManagedAddress) {
        self.require_wallet_owner();
        self.module_enabled(&module).clear();
    }

    /// Owner-driven call or transfer from the wallet's balance.
    #[endpoint(execute)]
    fn execute(
        &self,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        function: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) {
        self.require_wallet_owner();
        self.perform(to, token, amount, function, args);
    }

    #[endpoint(execTransactionFromModule)]
    fn exec_transaction_from_module(
        &self,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        function: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) {
        let caller = self.blockchain().get_caller();
        require!(self.module_enabled(&caller).get(), ERROR_MODULE_NOT_ENABLED);
        self.perform(to, token, amount, function, args);
    }

    fn perform(
        &self,
        to: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        function: ManagedBuffer,
        args: MultiValueEncoded<ManagedBuffer>,
    ) {
        if function.is_empty() {
            self.tx()
                .to(&to)
                .egld_or_single_esdt(&token, 0, &amount)
                .transfer_if_not_empty();
            return;
        }

        self.tx()
            .to(&to)
            .raw_call(function)
            .arguments_raw(args.to_arg_buffer())
            .egld_or_single_esdt(&token, 0, &amount)
            .sync_call();
    }

    fn require_wallet_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.owner_flag(&caller).get(), ERROR_NOT_WALLET_OWNER);
    }

    #[view(getOwners)]
    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isOwner)]
    #[storage_mapper("isOwner")]
    fn owner_flag(&self, address: &ManagedAddress) -> SingleValueMapper<bool>;

    #[view(isModuleEnabled)]
    #[storage_mapper("moduleEnabled")]
    fn module_enabled(&self, module: &ManagedAddress) -> SingleValueMapper<bool>;
}
