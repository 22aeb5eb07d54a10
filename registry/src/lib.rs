#![no_std]

multiversx_sc::imports!();

pub mod storage;

use common_constants::{FLASH_FACTORY_PARAMETER, MAX_ASSET_DECIMALS, SWAP_ROUTER_PARAMETER};
use common_errors::{
    ERROR_ADDRESS_IS_NOT_A_SC, ERROR_INVALID_ASSET, ERROR_INVALID_DECIMALS,
    ERROR_UNKNOWN_CRITICAL_PARAMETER, ERROR_ZERO_ADDRESS,
};
use common_structs::{Protocol, Role};

/// Directory shared by handlers and front-ends: token mappings, the collateral whitelist,
/// asset decimals and the timelock-gated critical parameters.
#[multiversx_sc::contract]
pub trait Registry:
    storage::Storage + common_access::AccessControlModule + common_events::EventsModule
{
    /// The deployer becomes a temporary admin. After configuration it must grant
    /// `Role::Admin` to the permanent operator and renounce its own admin role.
    ///
    /// # Arguments
    /// - `scheduler`: Timelock contract, the only valid caller for critical changes.
    #[init]
    fn init(&self, scheduler: ManagedAddress) {
        self.init_access_control(&scheduler);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Maps `asset` to its wrapped representation on `protocol`.
    /// A zero `wrapped` address removes the mapping.
    #[endpoint(setTokenMapping)]
    fn set_token_mapping(
        &self,
        protocol: Protocol,
        asset: EgldOrEsdtTokenIdentifier,
        wrapped: ManagedAddress,
    ) {
        self.require_role(Role::Admin);
        self.store_token_mapping(protocol, &asset, &wrapped);
    }

    #[endpoint(setTokenMappings)]
    fn set_token_mappings(
        &self,
        protocol: Protocol,
        mappings: MultiValueEncoded<MultiValue2<EgldOrEsdtTokenIdentifier, ManagedAddress>>,
    ) {
        self.require_role(Role::Admin);
        for mapping in mappings {
            let (asset, wrapped) = mapping.into_tuple();
            self.store_token_mapping(protocol, &asset, &wrapped);
        }
    }

    #[endpoint(addToWhitelist)]
    fn add_to_whitelist(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.require_role(Role::Admin);
        self.store_whitelisted(&asset, true);
    }

    #[endpoint(removeFromWhitelist)]
    fn remove_from_whitelist(&self, asset: EgldOrEsdtTokenIdentifier) {
        self.require_role(Role::Admin);
        self.store_whitelisted(&asset, false);
    }

    #[endpoint(addToWhitelistBatch)]
    fn add_to_whitelist_batch(&self, assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        self.require_role(Role::Admin);
        for asset in assets {
            self.store_whitelisted(&asset, true);
        }
    }

    #[endpoint(removeFromWhitelistBatch)]
    fn remove_from_whitelist_batch(&self, assets: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        self.require_role(Role::Admin);
        for asset in assets {
            self.store_whitelisted(&asset, false);
        }
    }

    #[endpoint(setAssetDecimals)]
    fn set_asset_decimals(&self, asset: EgldOrEsdtTokenIdentifier, decimals: usize) {
        self.require_role(Role::Admin);
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
        require!(decimals <= MAX_ASSET_DECIMALS, ERROR_INVALID_DECIMALS);

        self.asset_decimals(&asset).set(decimals);
        self.asset_decimals_set_event(&asset, decimals);
    }

    /// Critical path: only callable by the scheduler, which must also hold `Role::Critical`.
    ///
    /// # Arguments
    /// - `name`: `flash_factory` or `swap_router`.
    /// - `value`: Contract address, never zero.
    #[endpoint(setCriticalParameter)]
    fn set_critical_parameter(&self, name: ManagedBuffer, value: ManagedAddress) {
        self.require_critical_caller();
        require!(
            name == ManagedBuffer::new_from_bytes(FLASH_FACTORY_PARAMETER)
                || name == ManagedBuffer::new_from_bytes(SWAP_ROUTER_PARAMETER),
            ERROR_UNKNOWN_CRITICAL_PARAMETER
        );
        require!(!value.is_zero(), ERROR_ZERO_ADDRESS);
        require!(
            self.blockchain().is_smart_contract(&value),
            ERROR_ADDRESS_IS_NOT_A_SC
        );

        self.critical_parameter(&name).set(&value);
        self.critical_parameter_set_event(&name, &value);
    }

    /// `None` when the asset has no representation on `protocol`.
    #[view(resolve)]
    fn resolve(
        &self,
        protocol: Protocol,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> Option<ManagedAddress> {
        let mapper = self.wrapped_token(protocol, &asset);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(resolveReverse)]
    fn resolve_reverse(
        &self,
        protocol: Protocol,
        wrapped: ManagedAddress,
    ) -> Option<EgldOrEsdtTokenIdentifier> {
        let mapper = self.underlying_asset(protocol, &wrapped);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getAssetDecimals)]
    fn get_asset_decimals(&self, asset: EgldOrEsdtTokenIdentifier) -> Option<usize> {
        let mapper = self.asset_decimals(&asset);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    #[view(getCriticalParameter)]
    fn get_critical_parameter(&self, name: ManagedBuffer) -> Option<ManagedAddress> {
        let mapper = self.critical_parameter(&name);
        if mapper.is_empty() {
            None
        } else {
            Some(mapper.get())
        }
    }

    fn store_token_mapping(
        &self,
        protocol: Protocol,
        asset: &EgldOrEsdtTokenIdentifier,
        wrapped: &ManagedAddress,
    ) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);

        let mapper = self.wrapped_token(protocol, asset);
        if !mapper.is_empty() {
            let previous = mapper.get();
            let reverse = self.underlying_asset(protocol, &previous);
            if reverse.get() == *asset {
                reverse.clear();
            }
        }

        if wrapped.is_zero() {
            mapper.clear();
        } else {
            mapper.set(wrapped);
            self.underlying_asset(protocol, wrapped).set(asset);
        }

        self.token_mapping_set_event(protocol, asset, wrapped);
    }

    fn store_whitelisted(&self, asset: &EgldOrEsdtTokenIdentifier, whitelisted: bool) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);

        if whitelisted {
            self.whitelisted(asset).set(true);
        } else {
            self.whitelisted(asset).clear();
        }
        self.whitelist_updated_event(asset, whitelisted);
    }
}
