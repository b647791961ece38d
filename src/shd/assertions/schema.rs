use alloy_primitives::Address;

use crate::error::{Result, SetProtocolError};

fn address_error(name: &str, value: &str) -> SetProtocolError {
    SetProtocolError::Validation(format!("Expected {} to conform to schema /Address.\n\nEncountered: {}", name, value))
}

/// `0x` followed by exactly 40 hex characters, any case
pub fn is_address_format(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

pub fn is_valid_address(name: &str, value: &str) -> Result<()> {
    if is_address_format(value) {
        Ok(())
    } else {
        Err(address_error(name, value))
    }
}

/// Validate then parse, checksums are not enforced
pub fn parse_address(name: &str, value: &str) -> Result<Address> {
    is_valid_address(name, value)?;
    value.parse::<Address>().map_err(|_| address_error(name, value))
}

pub fn parse_addresses(name: &str, values: &[&str]) -> Result<Vec<Address>> {
    values.iter().map(|value| parse_address(name, value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_mixed_case_addresses() {
        assert!(is_address_format("0xF5029A50494714b3f80b39F05acC2c9Cea017FD6"));
        assert!(is_address_format("0x0000000000000000000000000000000000000000"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_address_format("F5029A50494714b3f80b39F05acC2c9Cea017FD6"));
        assert!(!is_address_format("0xF5029A50494714b3f80b39F05acC2c9Cea017FD"));
        assert!(!is_address_format("0xZ5029A50494714b3f80b39F05acC2c9Cea017FD6"));
        let err = parse_address("components", "0xabc").unwrap_err();
        assert_eq!(err.to_string(), "Expected components to conform to schema /Address.\n\nEncountered: 0xabc");
    }
}
