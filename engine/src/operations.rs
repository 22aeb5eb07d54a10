use common_constants::BPS;
use common_errors::{
    ERROR_AMOUNT_EXCEEDS_COLLATERAL, ERROR_AMOUNT_EXCEEDS_DEBT, ERROR_INVALID_PAYMENT,
    ERROR_INVALID_PERCENTAGE, ERROR_NOTHING_TO_REPAY,
};
use common_structs::{
    is_max_amount, max_amount, Beneficiary, CloseParams, FlashCallbackData, FlashSource,
    MigrateDebtParams, OpenLeverageParams, Operation,
};

use crate::{cache::Cache, flash, handlers, storage, validation};

multiversx_sc::imports!();

/// Entry points shared by every front-end. Each one validates its request, resolves the
/// `MAX_AMOUNT` sentinels against the live position and starts the flash loan. Callers are
/// authorized by the front-end before reaching this module.
#[multiversx_sc::module]
pub trait OperationsModule:
    storage::Storage
    + validation::ValidationModule
    + flash::FlashModule
    + handlers::HandlerCallsModule
    + common_math::SharedMathModule
{
    /// Flashes `debt_amount` of the source debt asset (`MAX_AMOUNT` for the whole debt)
    /// and moves the debt to the destination leg.
    fn start_migrate_debt(
        &self,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: MigrateDebtParams<Self::Api>,
    ) {
        let mut cache = Cache::new(self);
        self.validate_migrate_params(&mut cache, &params);
        self.require_genuine_pool(&cache, &params.source_debt_asset, &source);

        let handler = self.require_handler(&mut cache, params.source.protocol);
        let flash_amount = self.resolve_debt_amount(
            &handler,
            &params.source_debt_asset,
            &beneficiary.owner,
            &params.source.extra_data,
            debt_amount,
        );

        let data = FlashCallbackData {
            initiator: self.blockchain().get_caller(),
            beneficiary,
            flash_token: params.source_debt_asset.clone(),
            flash_amount,
            source,
            operation: Operation::MigrateDebt(params),
        };
        self.execute_flash(&cache, &data, None);
    }

    /// Supplies `principal` plus `flash_amount` of collateral and borrows up to `max_debt`
    /// to pay the flash loan back.
    fn start_open_leverage(
        &self,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        flash_amount: BigUint,
        params: OpenLeverageParams<Self::Api>,
        principal: &EgldOrEsdtTokenPayment,
    ) {
        let mut cache = Cache::new(self);
        self.validate_open_params(&mut cache, &params);
        self.require_amount_greater_than_zero(&flash_amount);
        require!(
            principal.token_identifier == params.collateral_asset
                && principal.amount == params.principal_amount,
            ERROR_INVALID_PAYMENT
        );
        self.require_genuine_pool(&cache, &params.collateral_asset, &source);

        let data = FlashCallbackData {
            initiator: self.blockchain().get_caller(),
            beneficiary,
            flash_token: params.collateral_asset.clone(),
            flash_amount,
            source,
            operation: Operation::OpenLeverage(params),
        };
        self.execute_flash(&cache, &data, Some(principal));
    }

    /// Repays `debt_amount` (`MAX_AMOUNT` for the whole debt) using the position's own
    /// collateral.
    fn start_deleverage(
        &self,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        debt_amount: BigUint,
        params: CloseParams<Self::Api>,
    ) {
        let mut cache = Cache::new(self);
        self.validate_close_params(&mut cache, &params);
        self.require_genuine_pool(&cache, &params.debt_asset, &source);

        let handler = self.require_handler(&mut cache, params.leg.protocol);
        let flash_amount = self.resolve_debt_amount(
            &handler,
            &params.debt_asset,
            &beneficiary.owner,
            &params.leg.extra_data,
            debt_amount,
        );
        if !is_max_amount(&params.collateral_amount) {
            let collateral = self.handler_collateral(
                &handler,
                &params.collateral_asset,
                &beneficiary.owner,
                &params.leg.extra_data,
            );
            require!(
                params.collateral_amount <= collateral,
                ERROR_AMOUNT_EXCEEDS_COLLATERAL
            );
        }

        self.start_close(&cache, beneficiary, source, flash_amount, params);
    }

    /// Closes `percentage_bps` of both the debt and the collateral, measured now.
    /// `params.collateral_amount` is ignored. A full percentage also requires the debt to
    /// end at zero.
    fn start_close_position(
        &self,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        percentage_bps: usize,
        mut params: CloseParams<Self::Api>,
    ) {
        require!(
            percentage_bps > 0 && percentage_bps <= BPS,
            ERROR_INVALID_PERCENTAGE
        );
        let mut cache = Cache::new(self);
        self.validate_close_params(&mut cache, &params);
        self.require_genuine_pool(&cache, &params.debt_asset, &source);

        let handler = self.require_handler(&mut cache, params.leg.protocol);
        let debt = self.handler_debt(
            &handler,
            &params.debt_asset,
            &beneficiary.owner,
            &params.leg.extra_data,
        );
        let collateral = self.handler_collateral(
            &handler,
            &params.collateral_asset,
            &beneficiary.owner,
            &params.leg.extra_data,
        );

        let flash_amount = self.percentage_of(&debt, percentage_bps);
        require!(flash_amount > 0, ERROR_NOTHING_TO_REPAY);
        params.collateral_amount = self.percentage_of(&collateral, percentage_bps);
        if percentage_bps == BPS {
            params.require_full_close = true;
        }

        self.start_close(&cache, beneficiary, source, flash_amount, params);
    }

    /// Repays the whole debt. With `withdraw_collateral` the whole collateral is withdrawn
    /// and what is left after repayment goes to the recipient; otherwise
    /// `params.collateral_amount` is sold and the rest stays supplied.
    fn start_exit(
        &self,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        withdraw_collateral: bool,
        mut params: CloseParams<Self::Api>,
    ) {
        params.require_full_close = true;
        if withdraw_collateral {
            params.collateral_amount = max_amount();
            params.withdraw_surplus = true;
        }

        self.start_deleverage(beneficiary, source, max_amount(), params);
    }

    fn start_close(
        &self,
        cache: &Cache<Self>,
        beneficiary: Beneficiary<Self::Api>,
        source: FlashSource<Self::Api>,
        flash_amount: BigUint,
        params: CloseParams<Self::Api>,
    ) {
        let data = FlashCallbackData {
            initiator: self.blockchain().get_caller(),
            beneficiary,
            flash_token: params.debt_asset.clone(),
            flash_amount,
            source,
            operation: Operation::Close(params),
        };
        self.execute_flash(cache, &data, None);
    }

    /// `MAX_AMOUNT` resolves to the live debt; explicit amounts must not exceed it.
    fn resolve_debt_amount(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        owner: &ManagedAddress,
        extra_data: &ManagedBuffer,
        requested: BigUint,
    ) -> BigUint {
        let outstanding = self.handler_debt(handler, asset, owner, extra_data);
        let amount = if is_max_amount(&requested) {
            outstanding
        } else {
            require!(requested <= outstanding, ERROR_AMOUNT_EXCEEDS_DEBT);
            requested
        };
        require!(amount > 0, ERROR_NOTHING_TO_REPAY);

        amount
    }
}
