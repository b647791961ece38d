//! API Module
//!
//! Validation then dispatch. Each API checks its inputs (locally, then against
//! on-chain state when needed) and only then forwards to the contract wrappers.
pub mod blockchain;
pub mod erc20;
pub mod factory;
pub mod issuance;
pub mod maco_manager;
pub mod rebalancing;
pub mod rebalancing_set_issuance;
pub mod set_token;
pub mod social_trading;
