use alloy_primitives::{Address, U256};
use serde::Serialize;
use strum_macros::{Display, EnumString};

/// Units and natural unit of a Set to create
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetUnits {
    pub units: Vec<U256>,
    pub natural_unit: U256,
}

/// On-chain description of a Set token
#[derive(Debug, Clone, Serialize)]
pub struct SetDetails {
    pub address: Address,
    pub factory: Address,
    pub components: Vec<Address>,
    pub units: Vec<U256>,
    pub natural_unit: U256,
    pub name: String,
    pub symbol: String,
}

/// Lifecycle of a Rebalancing Set, mirrors the contract enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
pub enum RebalanceState {
    Default = 0,
    Proposal = 1,
    Rebalance = 2,
    Drawdown = 3,
}

impl TryFrom<u8> for RebalanceState {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RebalanceState::Default),
            1 => Ok(RebalanceState::Proposal),
            2 => Ok(RebalanceState::Rebalance),
            3 => Ok(RebalanceState::Drawdown),
            _ => Err(format!("Unknown rebalance state: {}", value)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RebalancingSetDetails {
    pub address: Address,
    pub manager: Address,
    pub current_set: Address,
    pub unit_shares: U256,
    pub natural_unit: U256,
    pub state: RebalanceState,
    pub last_rebalanced_at: U256,
    pub rebalance_interval: U256,
    pub proposal_period: U256,
    pub supply: U256,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RebalancingProposalDetails {
    pub state: RebalanceState,
    pub next_set: Address,
    pub auction_library: Address,
    pub proposal_started_at: U256,
    pub auction_time_to_pivot: U256,
    pub auction_start_price: U256,
    pub auction_pivot_price: U256,
}

#[derive(Debug, Clone, Serialize)]
pub struct RebalancingProgressDetails {
    pub state: RebalanceState,
    pub starting_current_set_amount: U256,
    pub auction_start_time: U256,
    pub minimum_bid: U256,
    pub remaining_current_sets: U256,
}

/// Token flows of a bid, aligned with the combined token array
#[derive(Debug, Clone, Serialize)]
pub struct BidPrice {
    pub tokens: Vec<Address>,
    pub inflow: Vec<U256>,
    pub outflow: Vec<U256>,
}

/// Auction parameters passed when proposing a rebalance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalParams {
    pub next_set: Address,
    pub auction_library: Address,
    pub auction_time_to_pivot: U256,
    pub auction_start_price: U256,
    pub auction_pivot_price: U256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn rebalance_state_conversions() {
        assert_eq!(RebalanceState::try_from(2u8).unwrap(), RebalanceState::Rebalance);
        assert!(RebalanceState::try_from(4u8).is_err());
        assert_eq!(RebalanceState::Proposal.to_string(), "Proposal");
        assert_eq!(RebalanceState::from_str("Drawdown").unwrap(), RebalanceState::Drawdown);
    }
}
