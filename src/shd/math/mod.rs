//! Unit Arithmetic Module
//!
//! Deterministic helpers converting prices, allocations and quantities into the
//! integer units and natural units the Set contracts work with.
pub mod units;
