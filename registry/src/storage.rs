multiversx_sc::imports!();

use common_structs::Protocol;

/// Registry state. Every mapper here is also read cross-contract by the front-ends and the
/// token-mapped handlers, so the storage keys are part of the registry's interface.
#[multiversx_sc::module]
pub trait Storage {
    /// Protocol-specific wrapped representation (market contract) of a canonical asset.
    #[storage_mapper("wrappedToken")]
    fn wrapped_token(
        &self,
        protocol: Protocol,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("underlyingAsset")]
    fn underlying_asset(
        &self,
        protocol: Protocol,
        wrapped: &ManagedAddress,
    ) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    /// Assets the engine may move as collateral.
    #[view(isWhitelisted)]
    #[storage_mapper("whitelisted")]
    fn whitelisted(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<bool>;

    #[storage_mapper("assetDecimals")]
    fn asset_decimals(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<usize>;

    /// Timelock-gated addresses, e.g. the flash pool factory and the swap router.
    #[storage_mapper("criticalParameter")]
    fn critical_parameter(&self, name: &ManagedBuffer) -> SingleValueMapper<ManagedAddress>;
}
