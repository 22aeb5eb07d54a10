use common_errors::{
    ERROR_AMOUNT_EXCEEDS_COLLATERAL, ERROR_AMOUNT_EXCEEDS_DEBT, ERROR_INSUFFICIENT_REPAYMENT_FUNDS,
    ERROR_NOTHING_TO_REPAY, ERROR_NOTHING_TO_WITHDRAW, ERROR_POSITION_NOT_CLOSED,
};
use common_structs::{
    is_max_amount, Beneficiary, CloseParams, FlashCallbackData, MigrateDebtParams,
    OpenLeverageParams, Operation,
};

use crate::{cache::Cache, fees, handlers, storage, swaps, validation};

multiversx_sc::imports!();

/// The legs run inside the flash callback. Each strategy ends by paying the protocol fee
/// and sending `flash_amount + premium` back to the pool.
#[multiversx_sc::module]
pub trait StrategiesModule:
    storage::Storage
    + validation::ValidationModule
    + handlers::HandlerCallsModule
    + swaps::SwapsModule
    + fees::FeesModule
    + common_math::SharedMathModule
    + common_events::EventsModule
{
    fn run_operation(
        &self,
        cache: &mut Cache<Self>,
        data: &FlashCallbackData<Self::Api>,
        premium: &BigUint,
    ) {
        match &data.operation {
            Operation::MigrateDebt(params) => self.run_migrate_debt(cache, data, params, premium),
            Operation::OpenLeverage(params) => self.run_open_leverage(cache, data, params, premium),
            Operation::Close(params) => self.run_close_position(cache, data, params, premium),
        }
    }

    /// Moves a debt from the source leg to the destination leg.
    ///
    /// 1. The flashed source asset repays the source debt.
    /// 2. Listed collaterals move from source to destination.
    /// 3. `max_new_debt` plus the fee on it is borrowed in the destination asset.
    /// 4. The destination asset is swapped exact-out into `repaid + premium` of the source
    ///    asset, spending at most `max_new_debt`.
    /// 5. The fee is charged on the amount spent; the rest repays the new debt.
    fn run_migrate_debt(
        &self,
        cache: &mut Cache<Self>,
        data: &FlashCallbackData<Self::Api>,
        params: &MigrateDebtParams<Self::Api>,
        premium: &BigUint,
    ) {
        let owner = &data.beneficiary.owner;
        let source_handler = self.require_handler(cache, params.source.protocol);
        let destination_handler = self.require_handler(cache, params.destination.protocol);

        let outstanding = self.handler_debt(
            &source_handler,
            &params.source_debt_asset,
            owner,
            &params.source.extra_data,
        );
        require!(data.flash_amount <= outstanding, ERROR_AMOUNT_EXCEEDS_DEBT);

        let repaid = self.handler_repay(
            &source_handler,
            &params.source_debt_asset,
            &data.flash_amount,
            owner,
            &params.source.extra_data,
        );
        require!(repaid > 0, ERROR_NOTHING_TO_REPAY);

        for collateral in params.collaterals.iter() {
            self.require_whitelisted(cache, &collateral.asset);

            let available = self.handler_collateral(
                &source_handler,
                &collateral.asset,
                owner,
                &params.source.extra_data,
            );
            let amount = if is_max_amount(&collateral.amount) {
                available
            } else {
                require!(collateral.amount <= available, ERROR_AMOUNT_EXCEEDS_COLLATERAL);
                collateral.amount.clone()
            };
            require!(amount > 0, ERROR_NOTHING_TO_WITHDRAW);

            let withdrawn = self.handler_withdraw(
                &source_handler,
                &collateral.asset,
                &amount,
                owner,
                &params.source.extra_data,
            );
            self.handler_supply(
                &destination_handler,
                &collateral.asset,
                &withdrawn,
                owner,
                &params.destination.extra_data,
            );
        }

        let max_fee = self.compute_protocol_fee(
            cache,
            &params.destination_debt_asset,
            &params.max_new_debt,
        );
        let borrowed = self.handler_borrow(
            &destination_handler,
            &params.destination_debt_asset,
            &(&params.max_new_debt + &max_fee),
            owner,
            &params.destination.extra_data,
        );
        require!(borrowed > max_fee, ERROR_INSUFFICIENT_REPAYMENT_FUNDS);
        let spendable = &borrowed - &max_fee;

        let router = self.require_swap_router(cache);
        let spent = self.swap_exact_out(
            &router,
            &params.destination_debt_asset,
            &spendable,
            &params.source_debt_asset,
            &(&repaid + premium),
            &params.routing,
            &data.beneficiary.recipient,
        );

        let fee = self.compute_protocol_fee(cache, &params.destination_debt_asset, &spent);
        self.repay_leftover(
            &destination_handler,
            &params.destination_debt_asset,
            &(&borrowed - &spent - &fee),
            &data.beneficiary,
            &params.destination.extra_data,
        );

        self.pay_protocol_fee(cache, &params.destination_debt_asset, &fee);
        self.repay_flash(data, premium);

        self.debt_migrated_event(
            owner,
            params.source.protocol,
            params.destination.protocol,
            &EgldOrEsdtTokenPayment::new(params.source_debt_asset.clone(), 0, repaid),
            &EgldOrEsdtTokenPayment::new(params.destination_debt_asset.clone(), 0, &spent + &fee),
        );
    }

    /// Opens a leveraged position: principal and the flashed collateral are supplied, the
    /// debt asset is borrowed and swapped back into `flash_amount + premium` of collateral.
    fn run_open_leverage(
        &self,
        cache: &mut Cache<Self>,
        data: &FlashCallbackData<Self::Api>,
        params: &OpenLeverageParams<Self::Api>,
        premium: &BigUint,
    ) {
        let owner = &data.beneficiary.owner;
        let handler = self.require_handler(cache, params.leg.protocol);
        self.require_whitelisted(cache, &params.collateral_asset);

        let supplied = &params.principal_amount + &data.flash_amount;
        self.handler_supply(
            &handler,
            &params.collateral_asset,
            &supplied,
            owner,
            &params.leg.extra_data,
        );

        let max_fee = self.compute_protocol_fee(cache, &params.debt_asset, &params.max_debt);
        let borrowed = self.handler_borrow(
            &handler,
            &params.debt_asset,
            &(&params.max_debt + &max_fee),
            owner,
            &params.leg.extra_data,
        );
        require!(borrowed > max_fee, ERROR_INSUFFICIENT_REPAYMENT_FUNDS);
        let spendable = &borrowed - &max_fee;

        let router = self.require_swap_router(cache);
        let spent = self.swap_exact_out(
            &router,
            &params.debt_asset,
            &spendable,
            &params.collateral_asset,
            &(&data.flash_amount + premium),
            &params.routing,
            &data.beneficiary.recipient,
        );

        let fee = self.compute_protocol_fee(cache, &params.debt_asset, &spent);
        self.repay_leftover(
            &handler,
            &params.debt_asset,
            &(&borrowed - &spent - &fee),
            &data.beneficiary,
            &params.leg.extra_data,
        );

        self.pay_protocol_fee(cache, &params.debt_asset, &fee);
        self.repay_flash(data, premium);

        self.position_opened_event(
            owner,
            params.leg.protocol,
            &EgldOrEsdtTokenPayment::new(params.collateral_asset.clone(), 0, supplied),
            &EgldOrEsdtTokenPayment::new(params.debt_asset.clone(), 0, &spent + &fee),
        );
    }

    /// Unwinds all or part of a position: the flashed debt asset repays the debt, collateral
    /// is withdrawn and swapped exact-out into `repaid + premium + fee`. Surplus collateral
    /// is re-supplied or sent to the recipient.
    fn run_close_position(
        &self,
        cache: &mut Cache<Self>,
        data: &FlashCallbackData<Self::Api>,
        params: &CloseParams<Self::Api>,
        premium: &BigUint,
    ) {
        let owner = &data.beneficiary.owner;
        let handler = self.require_handler(cache, params.leg.protocol);

        let outstanding = self.handler_debt(&handler, &params.debt_asset, owner, &params.leg.extra_data);
        require!(data.flash_amount <= outstanding, ERROR_AMOUNT_EXCEEDS_DEBT);

        let repaid = self.handler_repay(
            &handler,
            &params.debt_asset,
            &data.flash_amount,
            owner,
            &params.leg.extra_data,
        );
        require!(repaid > 0, ERROR_NOTHING_TO_REPAY);

        let available = self.handler_collateral(
            &handler,
            &params.collateral_asset,
            owner,
            &params.leg.extra_data,
        );
        let collateral_amount = if is_max_amount(&params.collateral_amount) {
            available
        } else {
            require!(params.collateral_amount <= available, ERROR_AMOUNT_EXCEEDS_COLLATERAL);
            params.collateral_amount.clone()
        };
        require!(collateral_amount > 0, ERROR_NOTHING_TO_WITHDRAW);

        let withdrawn = self.handler_withdraw(
            &handler,
            &params.collateral_asset,
            &collateral_amount,
            owner,
            &params.leg.extra_data,
        );

        let fee = self.compute_protocol_fee(cache, &params.debt_asset, &repaid);
        let router = self.require_swap_router(cache);
        let spent = self.swap_exact_out(
            &router,
            &params.collateral_asset,
            &withdrawn,
            &params.debt_asset,
            &(&repaid + premium + &fee),
            &params.routing,
            &data.beneficiary.recipient,
        );

        let surplus = &withdrawn - &spent;
        if surplus > 0 {
            if params.withdraw_surplus {
                self.tx()
                    .to(&data.beneficiary.recipient)
                    .egld_or_single_esdt(&params.collateral_asset, 0, &surplus)
                    .transfer();
            } else {
                self.handler_supply(
                    &handler,
                    &params.collateral_asset,
                    &surplus,
                    owner,
                    &params.leg.extra_data,
                );
            }
        }

        self.pay_protocol_fee(cache, &params.debt_asset, &fee);
        self.repay_flash(data, premium);

        if params.require_full_close {
            let remaining =
                self.handler_debt(&handler, &params.debt_asset, owner, &params.leg.extra_data);
            require!(remaining == 0, ERROR_POSITION_NOT_CLOSED);
        }

        self.position_closed_event(
            owner,
            params.leg.protocol,
            &EgldOrEsdtTokenPayment::new(params.debt_asset.clone(), 0, repaid),
            &EgldOrEsdtTokenPayment::new(params.collateral_asset.clone(), 0, withdrawn),
            params.require_full_close,
        );
    }

    /// Repays `amount` of freshly borrowed debt; anything the market does not take goes to
    /// the recipient.
    fn repay_leftover(
        &self,
        handler: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
        beneficiary: &Beneficiary<Self::Api>,
        extra_data: &ManagedBuffer,
    ) {
        if *amount == 0 {
            return;
        }

        let repaid = self.handler_repay(handler, asset, amount, &beneficiary.owner, extra_data);
        self.tx()
            .to(&beneficiary.recipient)
            .egld_or_single_esdt(asset, 0, &(amount - &repaid))
            .transfer_if_not_empty();
    }

    fn repay_flash(&self, data: &FlashCallbackData<Self::Api>, premium: &BigUint) {
        self.tx()
            .to(&data.source.pool)
            .egld_or_single_esdt(&data.flash_token, 0, &(&data.flash_amount + premium))
            .transfer();
    }
}
