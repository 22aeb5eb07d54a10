#![no_std]

// Authorization

pub static ERROR_MISSING_ROLE: &[u8] = b"Caller does not hold the required role.";

pub static ERROR_NOT_SCHEDULER: &[u8] =
    b"Critical parameters can only be changed through the timelock scheduler.";

pub static ERROR_CANNOT_REVOKE_LAST_ADMIN: &[u8] = b"Cannot remove the last admin.";

pub static ERROR_CRITICAL_ROLE_REQUIRES_SCHEDULER: &[u8] =
    b"Critical role membership can only be changed through the timelock scheduler.";

pub static ERROR_UNAUTHORIZED_CALLER: &[u8] = b"Caller is not the position owner or its operator.";

pub static ERROR_UNAUTHORIZED_ENGINE: &[u8] = b"Caller is not an authorized engine.";

pub static ERROR_MODULE_NOT_ENABLED: &[u8] = b"Module is not enabled on the wallet.";

pub static ERROR_NOT_WALLET_MEMBER: &[u8] =
    b"Caller is not the wallet, one of its owners or an operator.";

pub static ERROR_NOT_PROPOSER: &[u8] = b"Caller is not a timelock proposer.";

pub static ERROR_NOT_EXECUTOR: &[u8] = b"Caller is not a timelock executor.";

pub static ERROR_ONLY_TIMELOCK: &[u8] = b"Only the timelock itself can call this endpoint.";

pub static ERROR_NOT_MANAGER: &[u8] = b"Caller is not a manager of this position.";

pub static ERROR_NOT_WALLET_OWNER: &[u8] = b"Caller is not a wallet owner.";

// Validation

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset identifier.";

pub static ERROR_ZERO_ADDRESS: &[u8] = b"Address cannot be zero.";

pub static ERROR_ADDRESS_IS_NOT_A_SC: &[u8] = b"Address is not a smart contract.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_ASSET_NOT_WHITELISTED: &[u8] = b"Asset is not whitelisted as collateral.";

pub static ERROR_INVALID_LIQUIDITY_SOURCE: &[u8] =
    b"Invalid liquidity source, pool is not derived from the trusted factory.";

pub static ERROR_INVALID_CALLBACK: &[u8] = b"Flash callback was not requested by this contract.";

pub static ERROR_CALLBACK_DATA_MISMATCH: &[u8] =
    b"Flash callback data does not match the requested operation.";

pub static ERROR_INVALID_FLASH_PAYMENT: &[u8] = b"Flash payment does not match the requested loan.";

pub static ERROR_FLASH_ONGOING: &[u8] = b"Another flash operation is in progress.";

pub static ERROR_FLASH_CALLBACK_NOT_EXECUTED: &[u8] =
    b"Liquidity source returned without invoking the flash callback.";

pub static ERROR_HANDLER_NOT_SET: &[u8] = b"No handler bound to this protocol.";

pub static ERROR_TOKEN_NOT_MAPPED: &[u8] = b"Asset has no mapping for this protocol.";

pub static ERROR_CRITICAL_PARAMETER_NOT_SET: &[u8] = b"Critical parameter not set.";

pub static ERROR_UNKNOWN_CRITICAL_PARAMETER: &[u8] = b"Unknown critical parameter.";

pub static ERROR_FEE_TOO_HIGH: &[u8] = b"Fee rate exceeds the allowed maximum.";

pub static ERROR_INVALID_PERCENTAGE: &[u8] = b"Percentage must be in (0, 10000] basis points.";

pub static ERROR_INVALID_DECIMALS: &[u8] = b"Invalid asset decimals.";

pub static ERROR_NOTHING_TO_REPAY: &[u8] = b"Position has no debt to repay.";

pub static ERROR_NOTHING_TO_WITHDRAW: &[u8] = b"Position has no collateral to withdraw.";

pub static ERROR_TOO_MANY_COLLATERALS: &[u8] = b"Too many collateral moves requested.";

pub static ERROR_SAME_PROTOCOL_AND_ASSET: &[u8] =
    b"Source and destination debt legs are identical.";

pub static ERROR_INVALID_PAYMENT: &[u8] = b"Invalid payment for this operation.";

pub static ERROR_INVALID_EXTRA_DATA: &[u8] = b"Invalid handler extra data.";

pub static ERROR_ASSET_MISMATCH: &[u8] = b"Asset does not match the market.";
pub static ERROR_POSITION_OWNER_MISMATCH: &[u8] = b"Position is not owned by the given account.";

pub static ERROR_INSUFFICIENT_BALANCE: &[u8] = b"Amount exceeds the contract balance.";

// Accounting

pub static ERROR_RESIDUAL_BALANCE: &[u8] = b"Residual balance left after settlement.";

pub static ERROR_INSUFFICIENT_SWAP_OUTPUT: &[u8] = b"Swap returned less than the required amount.";

pub static ERROR_AMOUNT_EXCEEDS_DEBT: &[u8] = b"Requested amount exceeds outstanding debt.";

pub static ERROR_AMOUNT_EXCEEDS_COLLATERAL: &[u8] =
    b"Requested amount exceeds outstanding collateral.";

pub static ERROR_INSUFFICIENT_REPAYMENT_FUNDS: &[u8] =
    b"Not enough funds to repay the flash loan and fee.";

pub static ERROR_POSITION_NOT_CLOSED: &[u8] = b"Position still has outstanding debt.";

pub static ERROR_FLASH_NOT_REPAID: &[u8] = b"Flash loan was not repaid with its fee.";

// Timelock

pub static ERROR_DELAY_TOO_SHORT: &[u8] = b"Delay is shorter than the minimum delay.";

pub static ERROR_OPERATION_NOT_FOUND: &[u8] = b"Timelock operation not found.";

pub static ERROR_OPERATION_NOT_READY: &[u8] = b"Timelock operation is not ready.";

pub static ERROR_OPERATION_NOT_PENDING: &[u8] = b"Timelock operation is not pending.";

// Markets

pub static ERROR_MARKET_FROZEN: &[u8] = b"Market is frozen.";

pub static ERROR_INSUFFICIENT_LIQUIDITY: &[u8] = b"Not enough liquidity in the market.";

pub static ERROR_MARKET_NOT_FOUND: &[u8] = b"Market not found.";

pub static ERROR_VAULT_NOT_FOUND: &[u8] = b"Vault position not found.";

pub static ERROR_RATE_NOT_SET: &[u8] = b"No swap rate configured for this pair.";

pub static ERROR_POOL_ALREADY_EXISTS: &[u8] = b"Pool already exists.";

pub static ERROR_TEMPLATE_EMPTY: &[u8] = b"Pool template is empty.";

pub static ERROR_REPAY_PAYMENT_TOO_LOW: &[u8] = b"Payment does not cover the requested repayment.";
