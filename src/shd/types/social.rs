use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;

use super::set::RebalanceState;

/// Everything the viewer returns about a social trading pool
#[derive(Debug, Clone, Serialize)]
pub struct TradingPoolDetails {
    pub address: Address,
    pub trader: Address,
    pub allocator: Address,
    pub current_allocation: U256,
    pub new_entry_fee: U256,
    pub fee_update_timestamp: U256,
    pub manager: Address,
    pub fee_recipient: Address,
    pub current_set: Address,
    pub liquidator: Address,
    pub unit_shares: U256,
    pub natural_unit: U256,
    pub rebalance_interval: U256,
    pub entry_fee: U256,
    pub rebalance_fee: U256,
    pub last_rebalanced_at: U256,
    pub state: RebalanceState,
    pub name: String,
    pub symbol: String,
    pub collateral_components: Vec<Address>,
    pub collateral_units: Vec<U256>,
    pub collateral_natural_unit: U256,
}

/// Inputs of `createTradingPool`, the Rebalancing Set V2 parameters are encoded into call data
#[derive(Debug, Clone)]
pub struct CreateTradingPoolParams {
    pub allocator: Address,
    pub starting_base_asset_allocation: U256,
    pub starting_usd_value: U256,
    pub name: String,
    pub symbol: String,
    pub liquidator: Address,
    pub fee_recipient: Address,
    pub fee_calculator: Address,
    pub rebalance_interval: U256,
    pub fail_auction_period: U256,
    pub last_rebalance_timestamp: U256,
    pub entry_fee: U256,
    pub rebalance_fee: U256,
}

/// Inputs of `updateAllocation`
#[derive(Debug, Clone)]
pub struct UpdateAllocationParams {
    pub trading_pool: Address,
    pub new_allocation: U256,
    pub liquidator_data: Bytes,
}
