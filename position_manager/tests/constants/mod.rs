#![allow(dead_code)]

use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const USDC_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("USDC-abcdef");
pub const USDC_DECIMALS: u64 = 6;

pub const DAI_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("DAI-abcdef");
pub const DAI_DECIMALS: u64 = 18;

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const WEGLD_DECIMALS: u64 = 18;
pub const WEGLD_PRICE_IN_USDC: u64 = 40; // $40

pub const UNLISTED_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("UNLISTED-abcdef");

pub const FEE_TIER: u32 = 500; // 0.05%
pub const FEE_RATE_BPS: usize = 10; // 0.1%
pub const MIN_DELAY: u64 = 3_600;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const USER_ADDRESS: TestAddress = TestAddress::new("user");
pub const OTHER_USER_ADDRESS: TestAddress = TestAddress::new("other-user");
pub const OPERATOR_ADDRESS: TestAddress = TestAddress::new("operator");
pub const ATTACKER_ADDRESS: TestAddress = TestAddress::new("attacker");
pub const GUARDIAN_ADDRESS: TestAddress = TestAddress::new("guardian");
pub const WALLET_OWNER_ADDRESS: TestAddress = TestAddress::new("wallet-owner");
pub const FEE_COLLECTOR_ADDRESS: TestAddress = TestAddress::new("fee-collector");

pub const POSITION_MANAGER_PATH: MxscPath = MxscPath::new("output/position-manager.mxsc.json");
pub const PAUSABLE_MANAGER_PATH: MxscPath = MxscPath::new("output/pausable-manager.mxsc.json");
pub const SAFE_MODULE_MANAGER_PATH: MxscPath =
    MxscPath::new("output/safe-module-manager.mxsc.json");
pub const REGISTRY_PATH: MxscPath = MxscPath::new("output/registry.mxsc.json");
pub const TIMELOCK_PATH: MxscPath = MxscPath::new("output/timelock.mxsc.json");
pub const POOLED_HANDLER_PATH: MxscPath = MxscPath::new("output/handler-pooled.mxsc.json");
pub const CTOKEN_HANDLER_PATH: MxscPath = MxscPath::new("output/handler-ctoken.mxsc.json");
pub const ISOLATED_HANDLER_PATH: MxscPath = MxscPath::new("output/handler-isolated.mxsc.json");
pub const COMET_HANDLER_PATH: MxscPath = MxscPath::new("output/handler-comet.mxsc.json");
pub const VAULT_HANDLER_PATH: MxscPath = MxscPath::new("output/handler-vault.mxsc.json");
pub const FLASH_POOL_PATH: MxscPath = MxscPath::new("output/flash-mock.mxsc.json");
pub const FACTORY_PATH: MxscPath = MxscPath::new("output/factory-mock.mxsc.json");
pub const SWAP_PATH: MxscPath = MxscPath::new("output/swap-mock.mxsc.json");
pub const MARKET_PATH: MxscPath = MxscPath::new("output/market-mock.mxsc.json");
pub const WALLET_PATH: MxscPath = MxscPath::new("output/wallet-mock.mxsc.json");
