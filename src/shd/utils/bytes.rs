//! Conversions between Rust strings and the `bytes32` names/symbols Core expects.

use alloy_primitives::B256;

use crate::error::{Result, SetProtocolError};

/// Right pad a UTF-8 string with zeros into a `bytes32`
pub fn string_to_bytes32(value: &str) -> Result<B256> {
    let raw = value.as_bytes();
    if raw.len() > 32 {
        return Err(SetProtocolError::Validation(format!("The string {} is longer than 32 bytes and cannot be converted to bytes32.", value)));
    }
    let mut out = [0u8; 32];
    out[..raw.len()].copy_from_slice(raw);
    Ok(B256::from(out))
}

/// Read back a zero padded `bytes32` as a string
pub fn bytes32_to_string(value: &B256) -> String {
    let raw = value.as_slice();
    let end = raw.iter().rposition(|b| *b != 0).map(|i| i + 1).unwrap_or(0);
    String::from_utf8_lossy(&raw[..end]).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_and_trims() {
        let encoded = string_to_bytes32("StableSet").unwrap();
        assert_eq!(&encoded.as_slice()[..9], b"StableSet");
        assert!(encoded.as_slice()[9..].iter().all(|b| *b == 0));
        assert_eq!(bytes32_to_string(&encoded), "StableSet");
    }

    #[test]
    fn rejects_long_strings() {
        let long = "a".repeat(33);
        assert!(string_to_bytes32(&long).is_err());
        assert!(string_to_bytes32(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn empty_bytes32_is_empty_string() {
        assert_eq!(bytes32_to_string(&B256::ZERO), "");
    }
}
