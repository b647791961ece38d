use alloy::providers::DynProvider;
use alloy_primitives::{Address, Bytes, TxHash, B256, U256};

use crate::{
    error::Result,
    types::{sol::ISocialTradingManager, tx::TxData},
    utils::evm::EvmClient,
};

/// Pool record kept by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolRecord {
    pub trader: Address,
    pub allocator: Address,
    pub current_allocation: U256,
    pub new_entry_fee: U256,
    pub fee_update_timestamp: U256,
}

/// Raw `createTradingPool` arguments, names already `bytes32` and call data encoded
#[derive(Debug, Clone)]
pub struct CreateTradingPoolCall {
    pub allocator: Address,
    pub starting_base_asset_allocation: U256,
    pub starting_usd_value: U256,
    pub name: B256,
    pub symbol: B256,
    pub rebalancing_set_call_data: Bytes,
}

#[derive(Clone)]
pub struct SocialTradingManagerWrapper {
    client: EvmClient,
    address: Address,
}

impl SocialTradingManagerWrapper {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> ISocialTradingManager::ISocialTradingManagerInstance<DynProvider> {
        ISocialTradingManager::new(self.address, self.client.provider().clone())
    }

    pub async fn create_trading_pool(&self, call: CreateTradingPoolCall, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        let builder = manager.createTradingPool(
            call.allocator,
            call.starting_base_asset_allocation,
            call.starting_usd_value,
            call.name,
            call.symbol,
            call.rebalancing_set_call_data,
        );
        self.client.send(builder, tx, "createTradingPool").await
    }

    pub async fn update_allocation(&self, trading_pool: Address, new_allocation: U256, liquidator_data: Bytes, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.updateAllocation(trading_pool, new_allocation, liquidator_data), tx, "updateAllocation").await
    }

    pub async fn initiate_entry_fee_change(&self, trading_pool: Address, new_entry_fee: U256, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.initiateEntryFeeChange(trading_pool, new_entry_fee), tx, "initiateEntryFeeChange").await
    }

    pub async fn finalize_entry_fee_change(&self, trading_pool: Address, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.finalizeEntryFeeChange(trading_pool), tx, "finalizeEntryFeeChange").await
    }

    pub async fn set_trader(&self, trading_pool: Address, new_trader: Address, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.setTrader(trading_pool, new_trader), tx, "setTrader").await
    }

    pub async fn set_liquidator(&self, trading_pool: Address, new_liquidator: Address, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.setLiquidator(trading_pool, new_liquidator), tx, "setLiquidator").await
    }

    pub async fn set_fee_recipient(&self, trading_pool: Address, new_fee_recipient: Address, tx: &TxData) -> Result<TxHash> {
        let manager = self.instance();
        self.client.send(manager.setFeeRecipient(trading_pool, new_fee_recipient), tx, "setFeeRecipient").await
    }

    pub async fn pools(&self, trading_pool: Address) -> Result<PoolRecord> {
        let pool = self.instance().pools(trading_pool).call().await?;
        Ok(PoolRecord {
            trader: pool.trader,
            allocator: pool.allocator,
            current_allocation: pool.currentAllocation,
            new_entry_fee: pool.newEntryFee,
            fee_update_timestamp: pool.feeUpdateTimestamp,
        })
    }

    pub async fn max_entry_fee(&self) -> Result<U256> {
        Ok(self.instance().maxEntryFee().call().await?)
    }

    pub async fn fee_update_timelock(&self) -> Result<U256> {
        Ok(self.instance().feeUpdateTimelock().call().await?)
    }
}
