use common_proxies::proxy_market;

multiversx_sc::imports!();

/// Calls into an asset-keyed market book (`supply`/`withdraw`/`borrow`/`repay`).
///
/// Shared by every handler whose market exposes the pooled interface; they differ only in
/// how the market address is resolved.
#[multiversx_sc::module]
pub trait PooledBookModule: crate::HandlerBaseModule + common_events::EventsModule {
    fn book_borrow(
        &self,
        market: &ManagedAddress,
        engine: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        on_behalf_of: &ManagedAddress,
    ) -> BigUint {
        let before = self.balance_of(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .borrow(asset, amount, on_behalf_of)
            .sync_call();

        let received = self.balance_gain(asset, &before);
        self.forward(engine, asset, &received);
        received
    }

    /// Repays with the payment held by the handler; the unused part goes back to the engine.
    fn book_repay(
        &self,
        market: &ManagedAddress,
        engine: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        on_behalf_of: &ManagedAddress,
    ) -> BigUint {
        let before = self.balance_of(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .repay(on_behalf_of)
            .egld_or_single_esdt(asset, 0, amount)
            .sync_call();

        let repaid = self.balance_spent(asset, &before);
        self.forward(engine, asset, &(amount - &repaid));
        repaid
    }

    fn book_supply(
        &self,
        market: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        on_behalf_of: &ManagedAddress,
    ) {
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .supply(on_behalf_of)
            .egld_or_single_esdt(asset, 0, amount)
            .sync_call();
    }

    fn book_withdraw(
        &self,
        market: &ManagedAddress,
        engine: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        on_behalf_of: &ManagedAddress,
    ) -> BigUint {
        let before = self.balance_of(asset);
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .withdraw(asset, amount, on_behalf_of)
            .sync_call();

        let received = self.balance_gain(asset, &before);
        self.forward(engine, asset, &received);
        received
    }

    fn book_debt(
        &self,
        market: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .get_debt(asset, owner)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn book_collateral(
        &self,
        market: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
    ) -> BigUint {
        self.tx()
            .to(market)
            .typed(proxy_market::MarketMockProxy)
            .get_collateral(asset, owner)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
