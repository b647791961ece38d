//! Type Definitions Module
//!
//! Configuration, transaction options, contract bindings and the typed results
//! returned by the wrappers.
pub mod builder;
pub mod config;
pub mod maco;
pub mod set;
pub mod social;
pub mod sol;
pub mod tx;
