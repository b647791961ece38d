///   =============================================================================
/// Set Protocol SDK Core Library (shd)
///   =============================================================================
///
/// @description: Typed access to the Set Protocol contracts. Wrappers encode the
/// contract calls, APIs validate inputs before dispatching through them, and the
/// math helpers derive Set units from prices and allocations.
///   =============================================================================
pub mod api;
pub mod assertions;
pub mod error;
pub mod math;
pub mod protocol;
pub mod types;
pub mod utils;
pub mod wrappers;
