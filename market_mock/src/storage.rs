multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Interest book selector: pooled and vault debt accrue on the asset book, isolated debt on
/// its own market book.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub enum RateKey<M: ManagedTypeApi> {
    Asset(EgldOrEsdtTokenIdentifier<M>),
    Market(u64),
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct InterestState<M: ManagedTypeApi> {
    pub index: ManagedDecimal<M, NumDecimals>,
    pub rate_per_second: ManagedDecimal<M, NumDecimals>,
    pub last_update: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct IsolatedMarket<M: ManagedTypeApi> {
    pub loan_token: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct VaultPosition<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub collateral_token: EgldOrEsdtTokenIdentifier<M>,
    pub debt_token: EgldOrEsdtTokenIdentifier<M>,
    pub collateral: BigUint<M>,
    pub scaled_debt: BigUint<M>,
}

#[multiversx_sc::module]
pub trait Storage {
    #[view(isFrozen)]
    #[storage_mapper("frozen")]
    fn frozen(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("managers")]
    fn managers(&self, owner: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("interest")]
    fn interest(&self, key: &RateKey<Self::Api>) -> SingleValueMapper<InterestState<Self::Api>>;

    // Pooled book

    #[storage_mapper("collateral")]
    fn collateral(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaledDebt")]
    fn scaled_debt(
        &self,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;

    // Isolated book

    #[storage_mapper("isolatedMarkets")]
    fn isolated_markets(&self) -> VecMapper<IsolatedMarket<Self::Api>>;

    #[storage_mapper("isolatedCollateral")]
    fn isolated_collateral(&self, market_id: u64, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("isolatedShares")]
    fn isolated_shares(&self, market_id: u64, owner: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // Vault book

    #[storage_mapper("vaults")]
    fn vaults(&self) -> VecMapper<VaultPosition<Self::Api>>;
}
