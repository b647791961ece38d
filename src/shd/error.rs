/// =============================================================================
/// Error Handling Module
/// =============================================================================
///
/// @description: Centralized error handling for the SDK. Pre-flight validation
/// failures are raised locally with fixed message templates, everything coming
/// from the provider or the contracts is surfaced as-is.
/// =============================================================================
use thiserror::Error;

/// =============================================================================
/// @enum: SetProtocolError
/// @description: Main error type for SDK operations
/// @variants:
/// - Validation: Pre-flight input validation failures
/// - Contract: Contract call or revert errors
/// - Transport: JSON-RPC transport errors
/// - PendingTransaction: Errors while waiting for a receipt
/// - AbiDecode: ABI decoding errors (logs, call data)
/// - UnexpectedResponse: Decoded values with an unexpected shape
/// - Config: Configuration-related errors
/// - LogNotFound: Expected event missing from a receipt
/// - Timeout: Polling gave up before the transaction was mined
/// - Serialization: JSON errors
/// - Toml: TOML parsing errors
/// - Io: Input/output errors
/// - EnvVar: Environment variable errors
/// =============================================================================
#[derive(Error, Debug)]
pub enum SetProtocolError {
    #[error("{0}")]
    Validation(String),

    #[error("Contract error: {0}")]
    Contract(#[from] alloy::contract::Error),

    #[error("Transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("Pending transaction error: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    #[error("ABI decoding error: {0}")]
    AbiDecode(#[from] alloy::sol_types::Error),

    #[error("Unexpected contract response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log not found: {0}")]
    LogNotFound(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable not found: {0}")]
    EnvVar(String),
}

impl SetProtocolError {
    /// Whether the error was raised locally before any network call
    pub fn is_validation(&self) -> bool {
        matches!(self, SetProtocolError::Validation(_))
    }
}

/// =============================================================================
/// @type: Result
/// @description: Type alias for Result with SetProtocolError
/// @generic T: Success type
/// =============================================================================
pub type Result<T> = std::result::Result<T, SetProtocolError>;

/// =============================================================================
/// @function: from
/// @description: Convert std::env::VarError to SetProtocolError
/// @param err: Environment variable error
/// @return SetProtocolError: Converted error
/// =============================================================================
impl From<std::env::VarError> for SetProtocolError {
    fn from(err: std::env::VarError) -> Self {
        SetProtocolError::EnvVar(err.to_string())
    }
}
