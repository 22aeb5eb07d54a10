#![no_std]

use common_errors::ERROR_ADDRESS_IS_NOT_A_SC;

multiversx_sc::imports!();

/// Handler for a single pooled money market with one book per asset.
///
/// Extra data is ignored.
#[multiversx_sc::contract]
pub trait PooledHandler:
    common_handler::HandlerBaseModule
    + common_handler::pooled_book::PooledBookModule
    + common_events::EventsModule
{
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
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        let engine = self.require_engine();
        self.book_borrow(&self.market().get(), &engine, &asset, &amount, &on_behalf_of)
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
        self.book_repay(&self.market().get(), &engine, &asset, &amount, &on_behalf_of)
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
        self.book_supply(&self.market().get(), &asset, &amount, &on_behalf_of);
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
        self.book_withdraw(&self.market().get(), &engine, &asset, &amount, &on_behalf_of)
    }

    #[view(getDebt)]
    fn get_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_debt(&self.market().get(), &asset, &owner)
    }

    #[view(getCollateral)]
    fn get_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        _extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_collateral(&self.market().get(), &asset, &owner)
    }

    #[view(getMarket)]
    #[storage_mapper("market")]
    fn market(&self) -> SingleValueMapper<ManagedAddress>;
}
