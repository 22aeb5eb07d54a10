#![no_std]

use common_errors::ERROR_ADDRESS_IS_NOT_A_SC;
use common_structs::CometExtraData;

multiversx_sc::imports!();

/// Handler for single base-asset markets. Every call names its market in the extra data,
/// so one handler serves any number of deployments.
#[multiversx_sc::contract]
pub trait CometHandler:
    common_handler::HandlerBaseModule
    + common_handler::pooled_book::PooledBookModule
    + common_events::EventsModule
{
    #[init]
    fn init(&self) {}

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
        let market = self.market_from(&extra_data);
        self.book_borrow(&market, &engine, &asset, &amount, &on_behalf_of)
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
        let market = self.market_from(&extra_data);
        self.book_repay(&market, &engine, &asset, &amount, &on_behalf_of)
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
        let market = self.market_from(&extra_data);
        self.book_supply(&market, &asset, &amount, &on_behalf_of);
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
        let market = self.market_from(&extra_data);
        self.book_withdraw(&market, &engine, &asset, &amount, &on_behalf_of)
    }

    #[view(getDebt)]
    fn get_debt(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_debt(&self.market_from(&extra_data), &asset, &owner)
    }

    #[view(getCollateral)]
    fn get_collateral(
        &self,
        asset: EgldOrEsdtTokenIdentifier,
        owner: ManagedAddress,
        extra_data: ManagedBuffer,
    ) -> BigUint {
        self.book_collateral(&self.market_from(&extra_data), &asset, &owner)
    }

    fn market_from(&self, extra_data: &ManagedBuffer) -> ManagedAddress {
        let extra: CometExtraData<Self::Api> = self.decode_extra_data(extra_data);
        require!(
            self.blockchain().is_smart_contract(&extra.market),
            ERROR_ADDRESS_IS_NOT_A_SC
        );
        extra.market
    }
}
