//! Contract Call Wrappers Module
//!
//! One thin wrapper per contract: reads return decoded values, writes apply the
//! transaction options and return the transaction hash. No validation happens here,
//! callers go through the APIs for that.
pub mod core;
pub mod erc20;
pub mod maco_manager;
pub mod oracle;
pub mod protocol_viewer;
pub mod rebalance_auction_module;
pub mod rebalancing_set_issuance_module;
pub mod rebalancing_set_token;
pub mod set_token;
pub mod social_trading_manager;
