//! Social trading pools
//!
//! A trading pool is a Rebalancing Set V2 managed by the social trading manager on behalf
//! of a trader, who moves the allocation between a base and a quote asset.

use alloy::sol_types::SolValue;
use alloy_primitives::{Address, Bytes, TxHash, U256};

use crate::{
    assertions::{common, rebalancing as rebalancing_checks, social as checks},
    error::{Result, SetProtocolError},
    types::{
        set::RebalanceState,
        social::{CreateTradingPoolParams, TradingPoolDetails, UpdateAllocationParams},
        tx::TxData,
    },
    utils::{
        bytes::string_to_bytes32,
        evm::EvmClient,
        logs::{extract_trading_pool_address_from_logs, receipt_logs},
    },
    wrappers::{
        protocol_viewer::ProtocolViewerWrapper,
        social_trading_manager::{CreateTradingPoolCall, PoolRecord, SocialTradingManagerWrapper},
    },
};

/// =============================================================================
/// @function: rebalancing_set_v2_call_data
/// @description: Factory call data of a Rebalancing Set V2 managed by `manager`
///               abi.encode(manager, liquidator, feeRecipient, feeCalculator, rebalanceInterval,
///               failPeriod, lastRebalanceTimestamp, entryFee) followed by the raw fee
///               calculator data, abi.encode(rebalanceFee)
/// @behavior:
/// - The factory reads 8 fixed words and hands `callData[256..]` to the fee calculator,
///   so the fee data is appended without an offset or length prefix
/// =============================================================================
pub fn rebalancing_set_v2_call_data(manager: Address, params: &CreateTradingPoolParams) -> Bytes {
    let mut encoded = (
        manager,
        params.liquidator,
        params.fee_recipient,
        params.fee_calculator,
        params.rebalance_interval,
        params.fail_auction_period,
        params.last_rebalance_timestamp,
        params.entry_fee,
    )
        .abi_encode_params();
    encoded.extend_from_slice(&params.rebalance_fee.abi_encode());
    Bytes::from(encoded)
}

#[derive(Clone)]
pub struct SocialTradingAPI {
    client: EvmClient,
    manager: SocialTradingManagerWrapper,
    viewer: ProtocolViewerWrapper,
}

impl SocialTradingAPI {
    pub fn new(client: EvmClient, manager: SocialTradingManagerWrapper, viewer: ProtocolViewerWrapper) -> Self {
        Self { client, manager, viewer }
    }

    pub fn manager_address(&self) -> Address {
        self.manager.address()
    }

    async fn trader_pool(&self, trading_pool: Address, caller: Address) -> Result<PoolRecord> {
        let pool = self.manager.pools(trading_pool).await?;
        checks::is_trader(caller, pool.trader)?;
        Ok(pool)
    }

    /// =============================================================================
    /// @function: create_trading_pool
    /// @description: Create a trading pool and its Rebalancing Set V2
    /// @param params: Allocator, starting allocation and value, names, V2 parameters
    /// @param tx: Transaction options, `from` becomes the trader
    /// @return Result<TxHash>: Hash of the creation transaction
    /// =============================================================================
    pub async fn create_trading_pool(&self, params: &CreateTradingPoolParams, tx: &TxData) -> Result<TxHash> {
        common::is_not_empty_string(&params.name, "name")?;
        common::is_not_empty_string(&params.symbol, "symbol")?;
        common::greater_than_zero(params.starting_usd_value)?;
        checks::valid_allocation(params.starting_base_asset_allocation)?;
        let max_fee = self.manager.max_entry_fee().await?;
        checks::valid_fee(params.entry_fee, max_fee)?;

        let call = CreateTradingPoolCall {
            allocator: params.allocator,
            starting_base_asset_allocation: params.starting_base_asset_allocation,
            starting_usd_value: params.starting_usd_value,
            name: string_to_bytes32(&params.name)?,
            symbol: string_to_bytes32(&params.symbol)?,
            rebalancing_set_call_data: rebalancing_set_v2_call_data(self.manager.address(), params),
        };
        self.manager.create_trading_pool(call, tx).await
    }

    /// =============================================================================
    /// @function: update_allocation
    /// @description: Move the pool to a new base asset allocation, starting a rebalance
    /// @behavior:
    /// - Allocation at most 100% and a whole percent
    /// - Caller is the pool trader
    /// - Pool Rebalancing Set is in Default state and its rebalance interval elapsed
    /// =============================================================================
    pub async fn update_allocation(&self, params: &UpdateAllocationParams, tx: &TxData) -> Result<TxHash> {
        checks::valid_allocation(params.new_allocation)?;
        let details = self.viewer.fetch_new_trading_pool_details(params.trading_pool).await?;
        checks::is_trader(tx.from, details.trader)?;
        rebalancing_checks::is_in_state(params.trading_pool, details.state, RebalanceState::Default)?;
        let now = self.client.latest_timestamp().await?;
        rebalancing_checks::sufficient_time_between_rebalance(details.last_rebalanced_at, details.rebalance_interval, now)?;
        self.manager
            .update_allocation(params.trading_pool, params.new_allocation, params.liquidator_data.clone(), tx)
            .await
    }

    pub async fn initiate_entry_fee_change(&self, trading_pool: Address, new_entry_fee: U256, tx: &TxData) -> Result<TxHash> {
        self.trader_pool(trading_pool, tx.from).await?;
        let max_fee = self.manager.max_entry_fee().await?;
        checks::valid_fee(new_entry_fee, max_fee)?;
        self.manager.initiate_entry_fee_change(trading_pool, new_entry_fee, tx).await
    }

    pub async fn finalize_entry_fee_change(&self, trading_pool: Address, tx: &TxData) -> Result<TxHash> {
        let pool = self.trader_pool(trading_pool, tx.from).await?;
        let now = self.client.latest_timestamp().await?;
        checks::fee_update_ready(pool.fee_update_timestamp, now)?;
        self.manager.finalize_entry_fee_change(trading_pool, tx).await
    }

    pub async fn set_trader(&self, trading_pool: Address, new_trader: Address, tx: &TxData) -> Result<TxHash> {
        self.trader_pool(trading_pool, tx.from).await?;
        self.manager.set_trader(trading_pool, new_trader, tx).await
    }

    pub async fn set_liquidator(&self, trading_pool: Address, new_liquidator: Address, tx: &TxData) -> Result<TxHash> {
        self.trader_pool(trading_pool, tx.from).await?;
        self.manager.set_liquidator(trading_pool, new_liquidator, tx).await
    }

    pub async fn set_fee_recipient(&self, trading_pool: Address, new_fee_recipient: Address, tx: &TxData) -> Result<TxHash> {
        self.trader_pool(trading_pool, tx.from).await?;
        self.manager.set_fee_recipient(trading_pool, new_fee_recipient, tx).await
    }

    pub async fn fetch_trading_pool_details(&self, trading_pool: Address) -> Result<TradingPoolDetails> {
        self.viewer.fetch_new_trading_pool_details(trading_pool).await
    }

    /// Address of the pool created by a mined `createTradingPool` transaction
    pub async fn get_trading_pool_address_from_create_tx_hash(&self, hash: TxHash) -> Result<Address> {
        let receipt = match self.client.fetch_receipt(hash).await? {
            Some(receipt) => receipt,
            None => return Err(SetProtocolError::LogNotFound(format!("No receipt for transaction {}, not mined yet", hash))),
        };
        let logs = receipt_logs(&receipt, hash)?;
        extract_trading_pool_address_from_logs(&logs, self.manager.address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CreateTradingPoolParams {
        CreateTradingPoolParams {
            allocator: Address::repeat_byte(0x01),
            starting_base_asset_allocation: U256::from(10u64).pow(U256::from(18u64)),
            starting_usd_value: U256::from(100u64),
            name: "ETH Trend".into(),
            symbol: "ETT".into(),
            liquidator: Address::repeat_byte(0x02),
            fee_recipient: Address::repeat_byte(0x03),
            fee_calculator: Address::repeat_byte(0x04),
            rebalance_interval: U256::from(86_400u64),
            fail_auction_period: U256::from(3_600u64),
            last_rebalance_timestamp: U256::from(1_000u64),
            entry_fee: U256::ZERO,
            rebalance_fee: U256::from(5u64),
        }
    }

    #[test]
    fn v2_call_data_layout() {
        let manager = Address::repeat_byte(0xaa);
        let mut pool = params();
        pool.rebalance_fee = U256::from(10u64).pow(U256::from(16u64));
        let data = rebalancing_set_v2_call_data(manager, &pool);
        // 8 static words, then the fee calculator data read from byte 256
        assert_eq!(data.len(), 32 * 9);
        assert_eq!(&data[12..32], manager.as_slice());
        assert_eq!(&data[32 + 12..64], pool.liquidator.as_slice());
        assert_eq!(U256::from_be_slice(&data[4 * 32..5 * 32]), pool.rebalance_interval);
        assert_eq!(U256::from_be_slice(&data[7 * 32..8 * 32]), pool.entry_fee);
        assert_eq!(U256::from_be_slice(&data[256..288]), pool.rebalance_fee);
    }
}
