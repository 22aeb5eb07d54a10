#![no_std]

use common_errors::{ERROR_ADDRESS_IS_NOT_A_SC, ERROR_ASSET_MISMATCH};
use common_proxies::proxy_market::{self, IsolatedMarket};
use common_structs::IsolatedExtraData;

multiversx_sc::imports!();

/// Handler for isolated markets: one loan token against one collateral token per market
/// id, debt tracked in shares.
///
/// Extra data is a top-encoded `IsolatedExtraData`. A non-zero `repay_shares` repays by
/// shares, which is the only way to burn a share position to exactly zero.
#[multiversx_sc::contract]
pub trait IsolatedHandler: common_handler::HandlerBaseModule + common_events::EventsModule {
    #[init]
    fn init(&self, market: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&market),
            ERROR_ADDRESS_IS_NOT_A_SC
        );
        self.market().set(&market);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(borrow)]
    fn borrow(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        let extra = self.decode_isolated(&extra_data);
        self.require_loan_token(extra.market_id, &asset);

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .borrow_isolated(extra.market_id, &amount, &on_behalf_of)
            .sync_call();

        let received = self.balance_gain(&asset, &before);
        self.forward(&engine, &asset, &received);
        received
    }

    #[payable("*")]
    #[endpoint(repay)]
    fn repay(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        self.require_payment(&asset, &amount);
        let extra = self.decode_isolated(&extra_data);
        self.require_loan_token(extra.market_id, &asset);

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .repay_isolated(extra.market_id, &extra.repay_shares, &on_behalf_of)
            .egld_or_single_esdt(&asset, 0, &amount)
            .sync_call();

        let repaid = self.balance_spent(&asset, &before);
        self.forward(&engine, &asset, &(&amount - &repaid));
        repaid
    }

    #[payable("*")]
    #[endpoint(supplyCollateral)]
    fn supply_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        extra_data: ManagedBuffer,
    ) {
        self.require_engine();
        self.require_payment(&asset, &amount);
        let extra = self.decode_isolated(&extra_data);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .supply_isolated(extra.market_id, &on_behalf_of)
            .egld_or_single_esdt(&asset, 0, &amount)
            .sync_call();
    }

    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        let extra = self.decode_isolated(&extra_data);
        require!(
            self.isolated_market(extra.market_id).collateral_token == asset,
            ERROR_ASSET_MISMATCH
        );

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .withdraw_isolated(extra.market_id, &amount, &on_behalf_of)
            .sync_call();

        let received = self.balance_gain(&asset, &before);
        self.forward(&engine, &asset, &received);
        received
    }

    #[view(getDebt)]
    fn get_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let extra = self.decode_isolated(&extra_data);
        self.require_loan_token(extra.market_id, &asset);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .get_isolated_debt(extra.market_id, &owner)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    #[view(getCollateral)]
    fn get_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        let extra = self.decode_isolated(&extra_data);
        if self.isolated_market(extra.market_id).collateral_token != asset {
            return BigUint::zero();
        }

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .get_isolated_collateral(extra.market_id, &owner)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn decode_isolated(&self, extra_data: &ManagedBuffer) -> IsolatedExtraData<Self::Api> {
        self.decode_extra_data(extra_data)
    }

    fn isolated_market(&self, market_id: u64) -> IsolatedMarket<Self::Api> {
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .isolated_market(market_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn require_loan_token(&self, market_id: u64, asset: &EgldOrEsdtTokenIdentifier) {
        require!(
            &self.isolated_market(market_id).loan_token == asset,
            ERROR_ASSET_MISMATCH
        );
    }

    #[view(getMarket)]
    #[storage_mapper("market")]
    fn market(&self) -> SingleValueMapper<ManagedAddress>;
}
