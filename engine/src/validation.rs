use common_constants::MAX_COLLATERAL_MOVES;
use common_errors::{
    ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_NOT_WHITELISTED,
    ERROR_CRITICAL_PARAMETER_NOT_SET, ERROR_HANDLER_NOT_SET, ERROR_INVALID_ASSET,
    ERROR_INVALID_LIQUIDITY_SOURCE, ERROR_SAME_PROTOCOL_AND_ASSET, ERROR_TOO_MANY_COLLATERALS,
};
use common_structs::{CloseParams, FlashSource, MigrateDebtParams, OpenLeverageParams, Protocol};

use crate::{cache::Cache, storage};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ValidationModule: storage::Storage {
    fn require_handler(&self, cache: &mut Cache<Self>, protocol: Protocol) -> ManagedAddress {
        match cache.get_handler(protocol) {
            Some(handler) => handler,
            None => sc_panic!(ERROR_HANDLER_NOT_SET),
        }
    }

    fn require_flash_factory(&self, cache: &Cache<Self>) -> ManagedAddress {
        match cache.flash_factory() {
            Some(factory) => factory,
            None => sc_panic!(ERROR_CRITICAL_PARAMETER_NOT_SET),
        }
    }

    fn require_swap_router(&self, cache: &Cache<Self>) -> ManagedAddress {
        match cache.swap_router() {
            Some(router) => router,
            None => sc_panic!(ERROR_CRITICAL_PARAMETER_NOT_SET),
        }
    }

    fn require_whitelisted(&self, cache: &Cache<Self>, asset: &EgldOrEsdtTokenIdentifier) {
        require!(cache.is_whitelisted(asset), ERROR_ASSET_NOT_WHITELISTED);
    }

    fn require_valid_asset(&self, asset: &EgldOrEsdtTokenIdentifier) {
        require!(asset.is_valid(), ERROR_INVALID_ASSET);
    }

    fn require_amount_greater_than_zero(&self, amount: &BigUint) {
        require!(*amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
    }

    /// The declared pool is only trusted if the factory maps the pool key
    /// `(flash_token, paired_token, fee_tier)` to that exact address.
    fn require_genuine_pool(
        &self,
        cache: &Cache<Self>,
        flash_token: &EgldOrEsdtTokenIdentifier,
        source: &FlashSource<Self::Api>,
    ) {
        require!(!source.pool.is_zero(), ERROR_INVALID_LIQUIDITY_SOURCE);
        let factory = self.require_flash_factory(cache);
        let derived = self.factory_pool(factory, flash_token, &source.paired_token, source.fee_tier);

        require!(
            !derived.is_empty() && derived.get() == source.pool,
            ERROR_INVALID_LIQUIDITY_SOURCE
        );
    }

    fn validate_migrate_params(&self, cache: &mut Cache<Self>, params: &MigrateDebtParams<Self::Api>) {
        self.require_valid_asset(&params.source_debt_asset);
        self.require_valid_asset(&params.destination_debt_asset);
        self.require_amount_greater_than_zero(&params.max_new_debt);
        require!(
            params.source != params.destination
                || params.source_debt_asset != params.destination_debt_asset,
            ERROR_SAME_PROTOCOL_AND_ASSET
        );
        require!(
            params.collaterals.len() <= MAX_COLLATERAL_MOVES,
            ERROR_TOO_MANY_COLLATERALS
        );
        for collateral in params.collaterals.iter() {
            self.require_valid_asset(&collateral.asset);
            self.require_amount_greater_than_zero(&collateral.amount);
            self.require_whitelisted(cache, &collateral.asset);
        }

        self.require_handler(cache, params.source.protocol);
        self.require_handler(cache, params.destination.protocol);
    }

    fn validate_open_params(&self, cache: &mut Cache<Self>, params: &OpenLeverageParams<Self::Api>) {
        self.require_valid_asset(&params.collateral_asset);
        self.require_valid_asset(&params.debt_asset);
        self.require_amount_greater_than_zero(&params.principal_amount);
        self.require_amount_greater_than_zero(&params.max_debt);
        self.require_whitelisted(cache, &params.collateral_asset);
        self.require_handler(cache, params.leg.protocol);
    }

    fn validate_close_params(&self, cache: &mut Cache<Self>, params: &CloseParams<Self::Api>) {
        self.require_valid_asset(&params.debt_asset);
        self.require_valid_asset(&params.collateral_asset);
        self.require_handler(cache, params.leg.protocol);
    }
}
