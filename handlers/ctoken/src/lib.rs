#![no_std]

use common_errors::{ERROR_ADDRESS_IS_NOT_A_SC, ERROR_TOKEN_NOT_MAPPED};
use common_structs::Protocol;

multiversx_sc::imports!();

/// Handler for per-asset market contracts. The market of an asset is its wrapped
/// representation in the registry; unmapped assets are rejected.
#[multiversx_sc::contract]
pub trait CTokenHandler:
    common_handler::HandlerBaseModule
    + common_handler::pooled_book::PooledBookModule
    + common_events::EventsModule
{
    #[init]
    fn init(&self, registry: ManagedAddress) {
        require!(
            self.blockchain().is_smart_contract(&registry),
            ERROR_ADDRESS_IS_NOT_A_SC
        );
        self.registry().set(&registry);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(borrow)]
    fn borrow(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        let market = self.market_of(&asset);
        self.book_borrow(&market, &engine, &asset, &amount, &on_behalf_of)
    }

    #[payable("*")]
    #[endpoint(repay)]
    fn repay(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        self.require_payment(&asset, &amount);
        let market = self.market_of(&asset);
        self.book_repay(&market, &engine, &asset, &amount, &on_behalf_of)
    }

    #[payable("*")]
    #[endpoint(supplyCollateral)]
    fn supply_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) {
        self.require_engine();
        self.require_payment(&asset, &amount);
        let market = self.market_of(&asset);
        self.book_supply(&market, &asset, &amount, &on_behalf_of);
    }

    #[endpoint(withdrawCollateral)]
    fn withdraw_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
        on_behalf_of: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        let market = self.market_of(&asset);
        self.book_withdraw(&market, &engine, &asset, &amount, &on_behalf_of)
    }

    #[view(getDebt)]
    fn get_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_debt(&self.market_of(&asset), &asset, &owner)
    }

    #[view(getCollateral)]
    fn get_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_collateral(&self.market_of(&asset), &asset, &owner)
    }

    fn market_of(&self, asset: &EgldOrEsdtTokenIdentifier) -> ManagedAddress {
        let mapper = self.wrapped_token(self.registry().get(), Protocol::CToken, asset);
        require!(!mapper.is_empty(), ERROR_TOKEN_NOT_MAPPED);
        mapper.get()
    }

    #[view(getRegistry)]
    #[storage_mapper("registry")]
    fn registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper_from_address("wrappedToken")]
    fn wrapped_token(
        &self,
        registry: ManagedAddress,
        protocol: Protocol,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;
}
