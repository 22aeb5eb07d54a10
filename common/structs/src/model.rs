#![no_std]

use common_constants::MAX_AMOUNT;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Money markets the orchestrator can route through.
///
/// Each tag is bound to exactly one handler contract on every front-end.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Protocol {
    /// Single pooled market, one book per asset.
    Pooled,
    /// One market contract per asset, resolved through the registry token mapping.
    CToken,
    /// Isolated markets keyed by market id.
    Isolated,
    /// Single base-asset markets, market address carried in the extra data.
    Comet,
    /// Vault positions keyed by position id.
    Vault,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Admin,
    Critical,
    Operator,
    Pauser,
}

impl Role {
    pub fn is_critical(&self) -> bool {
        *self == Role::Critical
    }
}

/// Caller-declared flashloan pool.
///
/// `paired_token` and `fee_tier` complete the pool key together with the flashed asset; the
/// pool address is only trusted once the factory derives the same address from that key.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct FlashSource<M: ManagedTypeApi> {
    pub pool: ManagedAddress<M>,
    pub paired_token: EgldOrEsdtTokenIdentifier<M>,
    pub fee_tier: u32,
}

/// A position on one protocol, with the handler-owned extra data blob.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct PositionLeg<M: ManagedTypeApi> {
    pub protocol: Protocol,
    pub extra_data: ManagedBuffer<M>,
}

impl<M: ManagedTypeApi> PositionLeg<M> {
    pub fn new(protocol: Protocol, extra_data: ManagedBuffer<M>) -> Self {
        PositionLeg {
            protocol,
            extra_data,
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq)]
pub struct CollateralMove<M: ManagedTypeApi> {
    pub asset: EgldOrEsdtTokenIdentifier<M>,
    /// `MAX_AMOUNT` moves the whole collateral balance.
    pub amount: BigUint<M>,
}

/// Who the operation acts for and who receives any surplus.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct Beneficiary<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub recipient: ManagedAddress<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct MigrateDebtParams<M: ManagedTypeApi> {
    pub source: PositionLeg<M>,
    pub destination: PositionLeg<M>,
    pub source_debt_asset: EgldOrEsdtTokenIdentifier<M>,
    pub destination_debt_asset: EgldOrEsdtTokenIdentifier<M>,
    pub max_new_debt: BigUint<M>,
    pub collaterals: ManagedVec<M, CollateralMove<M>>,
    pub routing: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct OpenLeverageParams<M: ManagedTypeApi> {
    pub leg: PositionLeg<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    pub principal_amount: BigUint<M>,
    pub debt_asset: EgldOrEsdtTokenIdentifier<M>,
    pub max_debt: BigUint<M>,
    pub routing: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct CloseParams<M: ManagedTypeApi> {
    pub leg: PositionLeg<M>,
    pub debt_asset: EgldOrEsdtTokenIdentifier<M>,
    pub collateral_asset: EgldOrEsdtTokenIdentifier<M>,
    /// `MAX_AMOUNT` withdraws the whole collateral balance.
    pub collateral_amount: BigUint<M>,
    /// Surplus collateral goes to the recipient instead of being re-supplied.
    pub withdraw_surplus: bool,
    /// The position must end with zero debt.
    pub require_full_close: bool,
    pub routing: ManagedVec<M, ManagedBuffer<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub enum Operation<M: ManagedTypeApi> {
    MigrateDebt(MigrateDebtParams<M>),
    OpenLeverage(OpenLeverageParams<M>),
    Close(CloseParams<M>),
}

/// Everything the callback needs to resume an operation without reading caller input again.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct FlashCallbackData<M: ManagedTypeApi> {
    pub initiator: ManagedAddress<M>,
    pub beneficiary: Beneficiary<M>,
    pub flash_token: EgldOrEsdtTokenIdentifier<M>,
    pub flash_amount: BigUint<M>,
    pub source: FlashSource<M>,
    pub operation: Operation<M>,
}

/// Marker stored while a flash loan is in flight. Also acts as the reentrancy guard.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct PendingFlash<M: ManagedTypeApi> {
    pub pool: ManagedAddress<M>,
    pub data_hash: ManagedByteArray<M, 32>,
    /// Set by the callback; a second callback for the same loan is rejected.
    pub executed: bool,
}

/// Extra data for `Protocol::Isolated`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct IsolatedExtraData<M: ManagedTypeApi> {
    pub market_id: u64,
    /// Non-zero repays by shares instead of by assets.
    pub repay_shares: BigUint<M>,
}

/// Extra data for `Protocol::Comet`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct CometExtraData<M: ManagedTypeApi> {
    pub market: ManagedAddress<M>,
}

/// Extra data for `Protocol::Vault`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct VaultExtraData {
    pub position_id: u64,
    pub full_repay: bool,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimelockStatus {
    Pending,
    Done,
    Cancelled,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq)]
pub struct TimelockOperation<M: ManagedTypeApi> {
    pub target: ManagedAddress<M>,
    pub endpoint: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    pub ready_at: u64,
    pub status: TimelockStatus,
}

impl<M: ManagedTypeApi> TimelockOperation<M> {
    pub fn is_pending(&self) -> bool {
        self.status == TimelockStatus::Pending
    }

    pub fn is_ready(&self, now: u64) -> bool {
        self.is_pending() && now >= self.ready_at
    }
}

pub fn max_amount<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(MAX_AMOUNT)
}

pub fn is_max_amount<M: ManagedTypeApi>(amount: &BigUint<M>) -> bool {
    *amount == max_amount::<M>()
}
