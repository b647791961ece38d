use alloy_primitives::U256;

use crate::error::{Result, SetProtocolError};

fn fail<T>(message: String) -> Result<T> {
    Err(SetProtocolError::Validation(message))
}

pub fn greater_than_zero(quantity: U256) -> Result<()> {
    if quantity.is_zero() {
        return fail(format!("The quantity {} inputted needs to be greater than zero.", quantity));
    }
    Ok(())
}

pub fn is_equal_length(first_len: usize, second_len: usize, first: &str, second: &str) -> Result<()> {
    if first_len != second_len {
        return fail(format!("The {} and {} arrays need to be equal lengths.", first, second));
    }
    Ok(())
}

pub fn is_not_empty_string(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return fail(format!("The string {} cannot be empty.", name));
    }
    Ok(())
}

pub fn is_not_empty_array(len: usize, name: &str) -> Result<()> {
    if len == 0 {
        return fail(format!("The array {} cannot be empty.", name));
    }
    Ok(())
}

/// `quantity` must be a whole number of `natural_unit`
pub fn is_multiple_of(quantity: U256, natural_unit: U256, name: &str) -> Result<()> {
    if natural_unit.is_zero() || !(quantity % natural_unit).is_zero() {
        return fail(format!("{} needs to be multiple of natural unit.", name));
    }
    Ok(())
}

pub fn is_greater_or_equal_than(value: U256, minimum: U256, message: &str) -> Result<()> {
    if value < minimum {
        return fail(message.to_string());
    }
    Ok(())
}

pub fn is_less_or_equal_than(value: U256, maximum: U256, message: &str) -> Result<()> {
    if value > maximum {
        return fail(message.to_string());
    }
    Ok(())
}

pub fn natural_unit_above_minimum(natural_unit: U256, minimum: U256) -> Result<()> {
    if natural_unit < minimum {
        return fail(format!("Natural unit must be larger than minimum unit, {}.", minimum));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_must_be_positive() {
        let err = greater_than_zero(U256::ZERO).unwrap_err();
        assert_eq!(err.to_string(), "The quantity 0 inputted needs to be greater than zero.");
        assert!(greater_than_zero(U256::from(1)).is_ok());
    }

    #[test]
    fn multiple_of_natural_unit() {
        assert!(is_multiple_of(U256::from(2_000), U256::from(1_000), "Issuance quantity").is_ok());
        let err = is_multiple_of(U256::from(1_500), U256::from(1_000), "Issuance quantity").unwrap_err();
        assert_eq!(err.to_string(), "Issuance quantity needs to be multiple of natural unit.");
        assert!(is_multiple_of(U256::from(1_500), U256::ZERO, "Issuance quantity").is_err());
    }

    #[test]
    fn equal_lengths() {
        let err = is_equal_length(2, 3, "components", "units").unwrap_err();
        assert_eq!(err.to_string(), "The components and units arrays need to be equal lengths.");
    }

    #[test]
    fn empty_strings() {
        assert!(is_not_empty_string("  ", "name").is_err());
        assert!(is_not_empty_string("Set", "name").is_ok());
    }
}
