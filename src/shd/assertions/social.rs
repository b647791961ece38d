use alloy_primitives::{Address, U256};

use super::common;
use crate::{
    error::{Result, SetProtocolError},
    utils::{
        constants::{ONE_BASIS_POINT, ONE_HUNDRED_PERCENT, ONE_PERCENT},
        misc::format_timestamp,
    },
};

fn fail<T>(message: String) -> Result<T> {
    Err(SetProtocolError::Validation(message))
}

/// Allocations are 18 decimals fractions in whole percents
pub fn valid_allocation(allocation: U256) -> Result<()> {
    if allocation > U256::from(ONE_HUNDRED_PERCENT) {
        return fail(format!("Provided allocation {} is greater than 100%.", allocation));
    }
    if !(allocation % U256::from(ONE_PERCENT)).is_zero() {
        return fail(format!("Provided allocation {} is not multiple of 1% (10 ** 16)", allocation));
    }
    Ok(())
}

pub fn valid_fee(fee: U256, max_fee: U256) -> Result<()> {
    if !(fee % U256::from(ONE_BASIS_POINT)).is_zero() {
        return fail(format!("Passed fee {} is not multiple of 1 basis point.", fee));
    }
    common::is_less_or_equal_than(fee, max_fee, &format!("Passed fee {} is greater than max fee {}.", fee, max_fee))
}

pub fn is_trader(caller: Address, trader: Address) -> Result<()> {
    if caller != trader {
        return fail(format!("Caller {} is not trader of tradingPool.", caller));
    }
    Ok(())
}

/// A fee change must have been initiated and its timelock expired
pub fn fee_update_ready(fee_update_timestamp: U256, now: u64) -> Result<()> {
    if fee_update_timestamp.is_zero() {
        return fail("Must call initiateEntryFeeChange first to start fee update process.".into());
    }
    let available = fee_update_timestamp.saturating_to::<u64>();
    if now < available {
        return fail(format!("Attempting to finalize fee update too soon. Update available at {}", format_timestamp(available)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_bounds() {
        assert!(valid_allocation(U256::from(ONE_PERCENT) * U256::from(37)).is_ok());
        assert!(valid_allocation(U256::from(ONE_HUNDRED_PERCENT)).is_ok());
        assert!(valid_allocation(U256::ZERO).is_ok());
        let over = U256::from(ONE_HUNDRED_PERCENT) + U256::from(ONE_PERCENT);
        assert_eq!(valid_allocation(over).unwrap_err().to_string(), format!("Provided allocation {} is greater than 100%.", over));
        let odd = U256::from(ONE_PERCENT) + U256::from(1);
        assert_eq!(valid_allocation(odd).unwrap_err().to_string(), format!("Provided allocation {} is not multiple of 1% (10 ** 16)", odd));
    }

    #[test]
    fn fee_bounds() {
        let max = U256::from(ONE_PERCENT) * U256::from(5);
        assert!(valid_fee(U256::from(ONE_BASIS_POINT) * U256::from(30), max).is_ok());
        assert!(valid_fee(U256::from(ONE_BASIS_POINT) + U256::from(1), max).is_err());
        assert!(valid_fee(max + U256::from(ONE_BASIS_POINT), max).is_err());
    }

    #[test]
    fn fee_timelock() {
        assert!(fee_update_ready(U256::ZERO, 100).is_err());
        assert!(fee_update_ready(U256::from(200u64), 100).is_err());
        assert!(fee_update_ready(U256::from(200u64), 200).is_ok());
    }
}
