//! Pre-flight Validation Module
//!
//! Every API method validates its inputs here before any transaction is built.
//! Failures are `SetProtocolError::Validation` with fixed message templates.
pub mod common;
pub mod erc20;
pub mod maco;
pub mod rebalancing;
pub mod schema;
pub mod set;
pub mod social;
