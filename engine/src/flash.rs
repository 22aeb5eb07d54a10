use common_errors::{ERROR_FLASH_CALLBACK_NOT_EXECUTED, ERROR_FLASH_ONGOING, ERROR_RESIDUAL_BALANCE};
use common_proxies::proxy_flash_pool;
use common_structs::{FlashCallbackData, Operation, PendingFlash};

use crate::{cache::Cache, storage, validation};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait FlashModule: storage::Storage + validation::ValidationModule {
    /// Requests the flash loan described by `data` and waits for the pool to return.
    ///
    /// The pool is validated against the factory before anything is written. The pending
    /// marker binds the callback to this pool and to the exact encoded `data`; it is cleared
    /// once the pool returns. Every asset the operation touches must end at its balance from
    /// before the call, `principal` excluded.
    fn execute_flash(
        &self,
        cache: &Cache<Self>,
        data: &FlashCallbackData<Self::Api>,
        principal: Option<&EgldOrEsdtTokenPayment>,
    ) {
        require!(self.pending_flash().is_empty(), ERROR_FLASH_ONGOING);
        self.require_genuine_pool(cache, &data.flash_token, &data.source);

        let pool = data.source.pool.clone();
        let (amount0, amount1) = if self.pool_token0(pool.clone()).get() == data.flash_token {
            (data.flash_amount.clone(), BigUint::zero())
        } else {
            (BigUint::zero(), data.flash_amount.clone())
        };

        let baseline = self.snapshot_balances(&self.touched_assets(data), principal);

        let encoded = self.serializer().top_encode_to_managed_buffer(data);
        self.pending_flash().set(PendingFlash {
            pool: pool.clone(),
            data_hash: self.crypto().keccak256(&encoded),
            executed: false,
        });

        self.tx()
            .to(&pool)
            .typed(proxy_flash_pool::FlashMockProxy)
            .flash(amount0, amount1, encoded)
            .sync_call();

        let pending = self.pending_flash().take();
        require!(pending.executed, ERROR_FLASH_CALLBACK_NOT_EXECUTED);

        self.require_zero_residual(&baseline);
    }

    /// Every asset an operation can leave behind on the engine.
    fn touched_assets(
        &self,
        data: &FlashCallbackData<Self::Api>,
    ) -> ManagedVec<EgldOrEsdtTokenIdentifier> {
        let mut assets = ManagedVec::new();
        self.push_unique(&mut assets, &data.flash_token);

        match &data.operation {
            Operation::MigrateDebt(params) => {
                self.push_unique(&mut assets, &params.source_debt_asset);
                self.push_unique(&mut assets, &params.destination_debt_asset);
                for collateral in params.collaterals.iter() {
                    self.push_unique(&mut assets, &collateral.asset);
                }
            },
            Operation::OpenLeverage(params) => {
                self.push_unique(&mut assets, &params.collateral_asset);
                self.push_unique(&mut assets, &params.debt_asset);
            },
            Operation::Close(params) => {
                self.push_unique(&mut assets, &params.debt_asset);
                self.push_unique(&mut assets, &params.collateral_asset);
            },
        }

        assets
    }

    fn push_unique(
        &self,
        assets: &mut ManagedVec<EgldOrEsdtTokenIdentifier>,
        asset: &EgldOrEsdtTokenIdentifier,
    ) {
        if !assets.contains(asset) {
            assets.push(asset.clone());
        }
    }

    fn snapshot_balances(
        &self,
        assets: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        principal: Option<&EgldOrEsdtTokenPayment>,
    ) -> ManagedVec<EgldOrEsdtTokenPayment> {
        let mut snapshot = ManagedVec::new();
        for asset in assets.iter() {
            let mut balance = self.blockchain().get_sc_balance(&asset, 0);
            if let Some(payment) = principal {
                if payment.token_identifier == *asset {
                    balance -= &payment.amount;
                }
            }
            snapshot.push(EgldOrEsdtTokenPayment::new(asset.clone(), 0, balance));
        }

        snapshot
    }

    fn require_zero_residual(&self, baseline: &ManagedVec<EgldOrEsdtTokenPayment>) {
        for entry in baseline.iter() {
            let balance = self.blockchain().get_sc_balance(&entry.token_identifier, 0);
            require!(balance == entry.amount, ERROR_RESIDUAL_BALANCE);
        }
    }
}
