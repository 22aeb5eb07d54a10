#![no_std]

use common_errors::{ERROR_INVALID_ASSET, ERROR_POOL_ALREADY_EXISTS, ERROR_TEMPLATE_EMPTY};
use common_proxies::proxy_flash_pool;

multiversx_sc::imports!();

/// Trusted pool factory. The pool directory is keyed by both token orders so a pool can be
/// derived from either side of the pair.
#[multiversx_sc::contract]
pub trait FactoryMock {
    #[init]
    fn init(&self, pool_template: ManagedAddress) {
        self.pool_template().set(&pool_template);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(createPool)]
    fn create_pool(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
    ) -> ManagedAddress {
        require!(!self.pool_template().is_empty(), ERROR_TEMPLATE_EMPTY);
        require!(
            token_a != token_b && token_a.is_valid() && token_b.is_valid(),
            ERROR_INVALID_ASSET
        );
        require!(
            self.pools(&token_a, &token_b, fee_tier).is_empty(),
            ERROR_POOL_ALREADY_EXISTS
        );

        let pool = self
            .tx()
            .typed(proxy_flash_pool::FlashMockProxy)
            .init(&token_a, &token_b, fee_tier)
            .from_source(self.pool_template().get())
            .code_metadata(
                CodeMetadata::UPGRADEABLE | CodeMetadata::READABLE | CodeMetadata::PAYABLE_BY_SC,
            )
            .returns(ReturnsNewManagedAddress)
            .sync_call();

        self.pools(&token_a, &token_b, fee_tier).set(&pool);
        self.pools(&token_b, &token_a, fee_tier).set(&pool);

        pool
    }

    #[view(getPool)]
    fn get_pool(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
    ) -> OptionalValue<ManagedAddress> {
        let mapper = self.pools(&token_a, &token_b, fee_tier);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getPoolTemplate)]
    #[storage_mapper("poolTemplate")]
    fn pool_template(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("pools")]
    fn pools(
        &self,
        token_a: &EgldOrEsdtTokenIdentifier,
        token_b: &EgldOrEsdtTokenIdentifier,
        fee_tier: u32,
    ) -> SingleValueMapper<ManagedAddress>;
}
