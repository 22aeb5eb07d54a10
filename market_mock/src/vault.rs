use common_errors::{
    ERROR_AMOUNT_EXCEEDS_COLLATERAL, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO, ERROR_ASSET_MISMATCH,
    ERROR_REPAY_PAYMENT_TOO_LOW, ERROR_VAULT_NOT_FOUND,
};

use crate::{
    interest,
    storage::{self, RateKey, VaultPosition},
    utils,
};

multiversx_sc::imports!();

/// Single-collateral, single-debt positions addressed by id. Debt accrues on the debt
/// token's pooled rate.
#[multiversx_sc::module]
pub trait VaultModule:
    storage::Storage
    + interest::InterestModule
    + utils::UtilsModule
    + common_math::SharedMathModule
{
    #[endpoint(openVault)]
    fn open_vault(
        &self,
        owner: ManagedAddress,
        collateral_token: EgldOrEsdtTokenIdentifier,
        debt_token: EgldOrEsdtTokenIdentifier,
    ) -> u64 {
        self.vaults().push(&VaultPosition {
            owner,
            collateral_token,
            debt_token,
            collateral: BigUint::zero(),
            scaled_debt: BigUint::zero(),
        }) as u64
    }

    #[payable("*")]
    #[endpoint(vaultSupply)]
    fn vault_supply(&self, position_id: u64) {
        self.require_not_frozen();
        let mut position = self.vault_position(position_id);
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == position.collateral_token,
            ERROR_ASSET_MISMATCH
        );
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        position.collateral += &payment.amount;
        self.vaults().set(position_id as usize, &position);
    }

    #[endpoint(vaultWithdraw)]
    fn vault_withdraw(&self, position_id: u64, amount: BigUint) {
        self.require_not_frozen();
        let mut position = self.vault_position(position_id);
        self.require_manager(&position.owner);
        require!(amount <= position.collateral, ERROR_AMOUNT_EXCEEDS_COLLATERAL);

        position.collateral -= &amount;
        self.vaults().set(position_id as usize, &position);

        self.send_out(&position.collateral_token, &amount);
    }

    #[endpoint(vaultBorrow)]
    fn vault_borrow(&self, position_id: u64, amount: BigUint) {
        self.require_not_frozen();
        let mut position = self.vault_position(position_id);
        self.require_manager(&position.owner);
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let index = self.sync_index(&RateKey::Asset(position.debt_token.clone()));
        position.scaled_debt += self.scaled_for_borrow(&amount, &index);
        self.vaults().set(position_id as usize, &position);

        self.send_out(&position.debt_token, &amount);
    }

    /// Repays the vault debt. `full` requires the payment to cover the whole debt.
    #[payable("*")]
    #[endpoint(vaultRepay)]
    fn vault_repay(&self, position_id: u64, full: bool) -> BigUint {
        self.require_not_frozen();
        let mut position = self.vault_position(position_id);
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == position.debt_token,
            ERROR_ASSET_MISMATCH
        );

        let index = self.sync_index(&RateKey::Asset(position.debt_token.clone()));
        let (remaining, repaid) =
            self.apply_repayment(&position.scaled_debt, &payment.amount, &index);
        if full {
            require!(remaining == 0, ERROR_REPAY_PAYMENT_TOO_LOW);
        }
        position.scaled_debt = remaining;
        self.vaults().set(position_id as usize, &position);

        self.send_out(&position.debt_token, &(&payment.amount - &repaid));
        repaid
    }

    #[view(getVault)]
    fn vault_position(&self, position_id: u64) -> VaultPosition<Self::Api> {
        require!(
            position_id > 0 && position_id as usize <= self.vaults().len(),
            ERROR_VAULT_NOT_FOUND
        );
        self.vaults().get(position_id as usize)
    }

    #[view(getVaultDebt)]
    fn get_vault_debt(&self, position_id: u64) -> BigUint {
        let position = self.vault_position(position_id);
        let index = self.current_index(&RateKey::Asset(position.debt_token));
        self.debt_for_scaled(&position.scaled_debt, &index)
    }

    #[view(getVaultCollateral)]
    fn get_vault_collateral(&self, position_id: u64) -> BigUint {
        self.vault_position(position_id).collateral
    }
}
