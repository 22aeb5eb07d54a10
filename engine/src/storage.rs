multiversx_sc::imports!();

use common_structs::{PendingFlash, Protocol};

#[multiversx_sc::module]
pub trait Storage {
    /// Registry holding token mappings, the whitelist and the critical parameters.
    #[view(getRegistry)]
    #[storage_mapper("registry")]
    fn registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFeeRate)]
    #[storage_mapper("feeRate")]
    fn fee_rate(&self) -> SingleValueMapper<usize>;

    #[view(getFeeBeneficiary)]
    #[storage_mapper("feeBeneficiary")]
    fn fee_beneficiary(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("protocolHandler")]
    fn protocol_handler(&self, protocol: Protocol) -> SingleValueMapper<ManagedAddress>;

    /// Set between the flash request and the end of the flash call.
    #[storage_mapper("pendingFlash")]
    fn pending_flash(&self) -> SingleValueMapper<PendingFlash<Self::Api>>;

    /// PROXY STORAGE ///

    /// Registry collateral whitelist.
    #[storage_mapper_from_address("whitelisted")]
    fn registry_whitelisted(
        &self,
        registry: ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<bool, ManagedAddress>;

    #[storage_mapper_from_address("assetDecimals")]
    fn registry_asset_decimals(
        &self,
        registry: ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<usize, ManagedAddress>;

    /// Registry critical parameters (`flash_factory`, `swap_router`).
    #[storage_mapper_from_address("criticalParameter")]
    fn registry_critical_parameter(
        &self,
        registry: ManagedAddress,
        name: &ManagedBuffer,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    /// Pool directory of the trusted flash pool factory.
    #[storage_mapper_from_address("pools")]
    fn factory_pool(
        &self,
        factory: ManagedAddress,
        token_a: &EgldOrEsdtTokenIdentifier,
        token_b: &EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
    ) -> SingleValueMapper<ManagedAddress, ManagedAddress>;

    #[storage_mapper_from_address("token0")]
    fn pool_token0(
        &self,
        pool: ManagedAddress,
    ) -> SingleValueMapper<EgldOrEsdtTokenIdentifier, ManagedAddress>;
}
