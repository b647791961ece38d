use alloy_primitives::{Address, U256};
use serde::Serialize;

/// State of a moving average crossover (MACO) strategy manager
#[derive(Debug, Clone, Serialize)]
pub struct MacoManagerDetails {
    pub address: Address,
    pub rebalancing_set: Address,
    pub moving_average_oracle: Address,
    pub risk_asset: Address,
    pub stable_asset: Address,
    pub risk_collateral: Address,
    pub stable_collateral: Address,
    pub moving_average_days: U256,
    pub auction_library: Address,
    pub auction_time_to_pivot: U256,
    pub crossover_confirmation_min_time: U256,
    pub crossover_confirmation_max_time: U256,
    pub last_crossover_confirmation: U256,
}

/// Prices compared to decide whether a crossover happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossoverPrices {
    pub risk_asset_price: U256,
    pub moving_average_price: U256,
}
