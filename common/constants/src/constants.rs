#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

pub const BPS: usize = 10_000; // 100%

/// Upper bound for the orchestration fee (1%)
pub const MAX_FEE_RATE_BPS: usize = 100;

/// Flashloan pool fee tiers are expressed in hundredths of a basis point
pub const FEE_TIER_DENOMINATOR: u32 = 1_000_000;

/// Amount sentinel meaning "the full outstanding amount, resolved at execution time"
pub const MAX_AMOUNT: u128 = u128::MAX;

pub const MAX_ASSET_DECIMALS: usize = 18;

/// Upper bound on the number of collateral legs a single migration may carry
pub const MAX_COLLATERAL_MOVES: usize = 8;

/// Registry critical parameter: trusted flashloan pool factory
pub const FLASH_FACTORY_PARAMETER: &[u8] = b"flash_factory";
/// Registry critical parameter: exact-out swap aggregator
pub const SWAP_ROUTER_PARAMETER: &[u8] = b"swap_router";

/// Endpoint invoked by the flashloan pool on the borrower
pub const FLASH_CALLBACK_ENDPOINT: &[u8] = b"flashCallback";
/// Aggregator endpoint used for exact-out swaps
pub const SWAP_ENDPOINT: &[u8] = b"swap";
