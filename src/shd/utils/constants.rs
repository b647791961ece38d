//! Protocol constants and default values

/// Decimals of every Set and Rebalancing Set token
pub const SET_TOKEN_DECIMALS: u32 = 18;

/// Natural unit used for Rebalancing Sets created through the factory API
pub const DEFAULT_REBALANCING_NATURAL_UNIT_EXPONENT: u32 = 10;

/// Largest natural unit exponent tried when deriving Set units
pub const MAX_NATURAL_UNIT_EXPONENT: u32 = 36;

/// Default tolerated rounding error (in %) when deriving Set units
pub const DEFAULT_PERCENT_ERROR: f64 = 10.0;

/// Allocations must sum to one within this tolerance
pub const ALLOCATION_SUM_TOLERANCE: f64 = 1e-9;

/// One day in seconds, floor for proposal period and rebalance interval
pub const ONE_DAY_IN_SECONDS: u64 = 86_400;

/// 10 ** 16, one percent in 18 decimals precision
pub const ONE_PERCENT: u128 = 10_000_000_000_000_000;

/// 10 ** 14, one basis point in 18 decimals precision
pub const ONE_BASIS_POINT: u128 = 100_000_000_000_000;

/// 10 ** 18, one hundred percent in 18 decimals precision
pub const ONE_HUNDRED_PERCENT: u128 = 1_000_000_000_000_000_000;

/// Default gas limit when none is configured
pub const DEFAULT_GAS_LIMIT: u64 = 6_000_000;

/// Receipt polling defaults
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;
pub const DEFAULT_MINING_TIMEOUT_SECS: u64 = 300;
