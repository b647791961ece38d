use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash, U256};

use crate::{
    error::Result,
    types::{sol::IMACOStrategyManager, tx::TxData},
    utils::evm::EvmClient,
};

/// Moving average crossover strategy managers, addressed per call
#[derive(Clone)]
pub struct MACOStrategyManagerWrapper {
    client: EvmClient,
}

impl MACOStrategyManagerWrapper {
    pub fn new(client: EvmClient) -> Self {
        Self { client }
    }

    fn instance(&self, manager: Address) -> IMACOStrategyManager::IMACOStrategyManagerInstance<DynProvider> {
        IMACOStrategyManager::new(manager, self.client.provider().clone())
    }

    pub async fn initial_propose(&self, manager: Address, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        let maco = self.instance(manager);
        self.client.send(maco.initialPropose(rebalancing_set), tx, "MACO initialPropose").await
    }

    pub async fn confirm_propose(&self, manager: Address, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        let maco = self.instance(manager);
        self.client.send(maco.confirmPropose(rebalancing_set), tx, "MACO confirmPropose").await
    }

    pub async fn rebalancing_set_token_address(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).rebalancingSetTokenAddress().call().await?)
    }

    pub async fn moving_average_price_feed(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).movingAveragePriceFeed().call().await?)
    }

    pub async fn risk_asset_address(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).riskAssetAddress().call().await?)
    }

    pub async fn stable_asset_address(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).stableAssetAddress().call().await?)
    }

    pub async fn risk_collateral_address(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).riskCollateralAddress().call().await?)
    }

    pub async fn stable_collateral_address(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).stableCollateralAddress().call().await?)
    }

    pub async fn moving_average_days(&self, manager: Address) -> Result<U256> {
        Ok(self.instance(manager).movingAverageDays().call().await?)
    }

    pub async fn auction_library(&self, manager: Address) -> Result<Address> {
        Ok(self.instance(manager).auctionLibrary().call().await?)
    }

    pub async fn auction_time_to_pivot(&self, manager: Address) -> Result<U256> {
        Ok(self.instance(manager).auctionTimeToPivot().call().await?)
    }

    pub async fn crossover_confirmation_min_time(&self, manager: Address) -> Result<U256> {
        Ok(self.instance(manager).crossoverConfirmationMinTime().call().await?)
    }

    pub async fn crossover_confirmation_max_time(&self, manager: Address) -> Result<U256> {
        Ok(self.instance(manager).crossoverConfirmationMaxTime().call().await?)
    }

    pub async fn last_crossover_confirmation_timestamp(&self, manager: Address) -> Result<U256> {
        Ok(self.instance(manager).lastCrossoverConfirmationTimestamp().call().await?)
    }
}
