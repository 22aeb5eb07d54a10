use common_errors::{
    ERROR_INVALID_PAYMENT, ERROR_MODULE_NOT_ENABLED, ERROR_NOT_WALLET_MEMBER, ERROR_ZERO_ADDRESS,
};
use common_proxies::proxy_wallet;
use common_structs::{Beneficiary, Role};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait WalletModule: common_access::AccessControlModule + common_events::EventsModule {
    /// Grants or revokes the global operator role. Operators may act for any wallet that
    /// enabled this module.
    #[endpoint(setOperator)]
    fn set_operator(&self, operator: ManagedAddress, enabled: bool) {
        self.require_role(Role::Admin);
        require!(!operator.is_zero(), ERROR_ZERO_ADDRESS);

        let sender = self.blockchain().get_caller();
        if enabled {
            self.add_role_member(Role::Operator, &operator, &sender);
        } else {
            self.remove_role_member(Role::Operator, &operator, &sender);
        }
        self.operator_set_event(&self.blockchain().get_sc_address(), &operator, enabled);
    }

    /// The wallet is both the position owner and the recipient of any surplus.
    fn authorize_wallet(&self, wallet: &ManagedAddress) -> Beneficiary<Self::Api> {
        require!(!wallet.is_zero(), ERROR_ZERO_ADDRESS);
        let sc_address = self.blockchain().get_sc_address();
        require!(
            self.wallet_module_enabled(wallet.clone(), &sc_address).get(),
            ERROR_MODULE_NOT_ENABLED
        );

        let caller = self.blockchain().get_caller();
        require!(
            &caller == wallet
                || self.wallet_owner_flag(wallet.clone(), &caller).get()
                || self.has_role(Role::Operator, &caller),
            ERROR_NOT_WALLET_MEMBER
        );

        Beneficiary {
            owner: wallet.clone(),
            recipient: wallet.clone(),
        }
    }

    /// Pulls the leverage principal out of the wallet. The received amount is measured on
    /// this contract's balance, not trusted from the wallet.
    fn pull_principal(
        &self,
        wallet: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    ) -> EgldOrEsdtTokenPayment<Self::Api> {
        require!(*amount > 0, ERROR_INVALID_PAYMENT);
        let before = self.blockchain().get_sc_balance(asset, 0);

        self.tx()
            .to(wallet)
            .typed(proxy_wallet::WalletMockProxy)
            .exec_transaction_from_module(
                self.blockchain().get_sc_address(),
                asset,
                amount,
                ManagedBuffer::new(),
                MultiValueEncoded::new(),
            )
            .sync_call();

        let after = self.blockchain().get_sc_balance(asset, 0);
        require!(after > before, ERROR_INVALID_PAYMENT);

        EgldOrEsdtTokenPayment::new(asset.clone(), 0, after - before)
    }

    /// PROXY STORAGE ///

    #[storage_mapper_from_address("moduleEnabled")]
    fn wallet_module_enabled(
        &self,
        wallet: ManagedAddress,
        module: &ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;

    #[storage_mapper_from_address("isOwner")]
    fn wallet_owner_flag(
        &self,
        wallet: ManagedAddress,
        account: &ManagedAddress,
    ) -> SingleValueMapper<bool, ManagedAddress>;
}
