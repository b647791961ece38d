use std::process::Command;

use chrono::{DateTime, Utc};

use crate::error::{Result, SetProtocolError};

/// Get the current Git commit hash
pub fn commit() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output();
    match output {
        Ok(output) => {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                let error_message = String::from_utf8_lossy(&output.stderr);
                tracing::debug!("Error status to get commit hash: {}", error_message);
                None
            }
        }
        Err(e) => {
            tracing::error!("Failed to exec git rev-parse: {}", e);
            None
        }
    }
}

/// Get a required environment variable
pub fn get(key: &str) -> Result<String> {
    std::env::var(key).map_err(|e| SetProtocolError::EnvVar(format!("{} ({})", key, e)))
}

/// Get an optional environment variable, blank counts as unset
pub fn get_optional(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(x) if !x.trim().is_empty() => Ok(Some(x.trim().to_string())),
        Ok(_) | Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Human readable UTC date for a unix timestamp, used in validation messages
pub fn format_timestamp(seconds: u64) -> String {
    match i64::try_from(seconds).ok().and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0)) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => seconds.to_string(),
    }
}
