#![no_std]

use common_errors::{ERROR_ADDRESS_IS_NOT_A_SC, ERROR_ASSET_MISMATCH, ERROR_POSITION_OWNER_MISMATCH};
use common_proxies::proxy_market::{self, VaultPosition};
use common_structs::VaultExtraData;

multiversx_sc::imports!();

/// Handler for vault positions addressed by id.
///
/// Extra data is a top-encoded `VaultExtraData`. The vault must belong to the account the
/// engine acts for. With `full_repay` set the payment must clear the whole debt; the rest
/// is refunded.
#[multiversx_sc::contract]
pub trait VaultHandler: common_handler::HandlerBaseModule + common_events::EventsModule {
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &on_behalf_of);
        require!(vault.debt_token == asset, ERROR_ASSET_MISMATCH);

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .vault_borrow(extra.position_id, &amount)
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &on_behalf_of);
        require!(vault.debt_token == asset, ERROR_ASSET_MISMATCH);

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .vault_repay(extra.position_id, extra.full_repay)
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &on_behalf_of);
        require!(vault.collateral_token == asset, ERROR_ASSET_MISMATCH);

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .vault_supply(extra.position_id)
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &on_behalf_of);
        require!(vault.collateral_token == asset, ERROR_ASSET_MISMATCH);

        let before = self.balance_of(&asset);
        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .vault_withdraw(extra.position_id, &amount)
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &owner);
        if vault.debt_token != asset {
            return BigUint::zero();
        }

        self.tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .get_vault_debt(extra.position_id)
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
        let extra: VaultExtraData = self.decode_extra_data(&extra_data);
        let vault = self.owned_vault(extra.position_id, &owner);
        if vault.collateral_token != asset {
            return BigUint::zero();
        }

        vault.collateral
    }

    fn owned_vault(&self, position_id: u64, owner: &ManagedAddress) -> VaultPosition<Self::Api> {
        let vault: VaultPosition<Self::Api> = self
            .tx()
            .to(self.market().get())
            .typed(proxy_market::MarketMockProxy)
            .vault_position(position_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(&vault.owner == owner, ERROR_POSITION_OWNER_MISMATCH);

        vault
    }

    #[view(getMarket)]
    #[storage_mapper("market")]
    fn market(&self) -> SingleValueMapper<ManagedAddress>;
}
