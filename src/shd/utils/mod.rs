///   =============================================================================
/// Utility Functions Module
///   =============================================================================
///
/// @description: Constants, provider helpers, byte conversions, receipt log
/// parsing and miscellaneous helpers shared by the wrappers and the APIs.
///   =============================================================================
pub mod bytes;
pub mod constants;
pub mod evm;
pub mod logs;
pub mod misc;
