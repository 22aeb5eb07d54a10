use common_proxies::proxy_handler;

multiversx_sc::imports!();

/// Calls into protocol handlers. Every call is synchronous, so a revert in a handler or its
/// market unwinds the whole operation.
#[multiversx_sc::module]
pub trait HandlerCallsModule {
    /// Returns the amount actually received.
    fn handler_borrow(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) -> BigUint {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .borrow(asset, amount, owner, extra_data)
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Returns the amount actually repaid; the unused part of `amount` comes back to the
    /// engine.
    fn handler_repay(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) -> BigUint {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .repay(asset, amount, owner, extra_data)
            .egld_or_single_esdt(asset, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn handler_supply(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .supply_collateral(asset, amount, owner, extra_data)
            .egld_or_single_esdt(asset, 0, amount)
            .sync_call();
    }

    fn handler_withdraw(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) -> BigUint {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .withdraw_collateral(asset, amount, owner, extra_data)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn handler_debt(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) -> BigUint {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .get_debt(asset, owner, extra_data)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn handler_collateral(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
    ) -> BigUint {
        self.tx()
            .to(handler)
            .typed(proxy_handler::ProtocolHandlerProxy)
            .get_collateral(asset, owner, extra_data)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
