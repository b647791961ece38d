///   =============================================================================
/// Set Units Module
///   =============================================================================
///
/// @description: Proportional allocation of a target Set price across components and
/// the natural unit search that keeps every integer unit within a rounding tolerance.
///   =============================================================================
use alloy_primitives::U256;

use crate::{
    assertions::common,
    error::{Result, SetProtocolError},
    types::set::SetUnits,
    utils::constants::{ALLOCATION_SUM_TOLERANCE, MAX_NATURAL_UNIT_EXPONENT, SET_TOKEN_DECIMALS},
};

pub fn pow10(exponent: u32) -> U256 {
    U256::from(10).pow(U256::from(exponent))
}

/// Exponent of the smallest natural unit allowed for components with these decimals
pub fn minimum_natural_unit_exponent(decimals: &[u8]) -> u32 {
    // No information means zero decimals, hence the largest (safest) minimum
    let lowest = decimals.iter().min().copied().unwrap_or(0) as u32;
    SET_TOKEN_DECIMALS.saturating_sub(lowest)
}

/// =============================================================================
/// @function: minimum_natural_unit
/// @description: 10 ** (18 - min(decimals)), the smallest natural unit for which every
///               component keeps at least one base unit per Set base unit
/// @param decimals: Decimals of every component
/// @return U256: Minimum natural unit
/// =============================================================================
pub fn minimum_natural_unit(decimals: &[u8]) -> U256 {
    pow10(minimum_natural_unit_exponent(decimals))
}

fn positive(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SetProtocolError::Validation(format!("The quantity {} inputted needs to be greater than zero.", value)));
    }
    Ok(())
}

/// Tokens of each component (whole tokens, not base units) held by one whole Set
pub fn required_component_amounts(prices: &[f64], allocations: &[f64], target_price: f64) -> Vec<f64> {
    prices.iter().zip(allocations).map(|(price, allocation)| allocation * target_price / price).collect()
}

/// =============================================================================
/// @function: calculate_set_params
/// @description: Derive integer units and a shared natural unit so that a Set built
///               from them is worth `target_price`, split according to `allocations`
/// @param prices: Price of one whole token of each component
/// @param allocations: Share of the Set value per component, must sum to 1
/// @param decimals: Decimals of each component
/// @param target_price: Price of one whole Set
/// @param percent_error: Tolerated relative rounding error per unit, in %
/// @return Result<SetUnits>: Units and natural unit, or a validation error
///
/// @behavior:
/// - Natural units 10 ** k are tried from the decimals minimum upward
/// - The first k where every unit rounds to > 0 within `percent_error` wins
/// =============================================================================
pub fn calculate_set_params(prices: &[f64], allocations: &[f64], decimals: &[u8], target_price: f64, percent_error: f64) -> Result<SetUnits> {
    common::is_not_empty_array(prices.len(), "prices")?;
    common::is_equal_length(prices.len(), allocations.len(), "prices", "allocations")?;
    common::is_equal_length(prices.len(), decimals.len(), "prices", "decimals")?;
    for price in prices {
        positive(*price)?;
    }
    for allocation in allocations {
        positive(*allocation)?;
    }
    positive(target_price)?;
    positive(percent_error)?;
    let total: f64 = allocations.iter().sum();
    if (total - 1.0).abs() > ALLOCATION_SUM_TOLERANCE {
        return Err(SetProtocolError::Validation("The component percentages inputted do not add up to 1".into()));
    }

    let required = required_component_amounts(prices, allocations, target_price);
    let start = minimum_natural_unit_exponent(decimals);
    for exponent in start..=MAX_NATURAL_UNIT_EXPONENT {
        if let Some(units) = units_for_exponent(&required, decimals, exponent, percent_error) {
            tracing::debug!("Derived units {:?} with natural unit 10^{}", units, exponent);
            return Ok(SetUnits {
                units,
                natural_unit: pow10(exponent),
            });
        }
    }
    Err(SetProtocolError::Validation(format!(
        "Unable to derive units within {}% error with a natural unit up to 10^{}.",
        percent_error, MAX_NATURAL_UNIT_EXPONENT
    )))
}

fn units_for_exponent(required: &[f64], decimals: &[u8], exponent: u32, percent_error: f64) -> Option<Vec<U256>> {
    let mut units = Vec::with_capacity(required.len());
    for (amount, decimals) in required.iter().zip(decimals) {
        // unit / naturalUnit = base units per Set base unit = amount * 10^decimals / 10^18
        let shift = *decimals as i32 + exponent as i32 - SET_TOKEN_DECIMALS as i32;
        let ideal = amount * 10f64.powi(shift);
        let rounded = ideal.round();
        if rounded < 1.0 || rounded >= u128::MAX as f64 {
            return None;
        }
        if (rounded - ideal).abs() / ideal * 100.0 > percent_error {
            return None;
        }
        units.push(U256::from(rounded as u128));
    }
    Some(units)
}

/// Component quantities moved when issuing or redeeming `quantity` of a Set
pub fn component_quantities(quantity: U256, units: &[U256], natural_unit: U256) -> Result<Vec<U256>> {
    if natural_unit.is_zero() {
        return Err(SetProtocolError::UnexpectedResponse("Natural unit of zero".into()));
    }
    units.iter().map(|unit| Ok(checked_product(quantity, *unit, "component quantity")? / natural_unit)).collect()
}

fn checked_product(a: U256, b: U256, what: &str) -> Result<U256> {
    a.checked_mul(b).ok_or_else(|| SetProtocolError::Validation(format!("Quantity {} overflows the {} computation.", a, what)))
}

fn base_set_quantity(rebalancing_quantity: U256, unit_shares: U256, rebalancing_natural_unit: U256) -> Result<U256> {
    if rebalancing_natural_unit.is_zero() {
        return Err(SetProtocolError::UnexpectedResponse("Rebalancing Set natural unit of zero".into()));
    }
    Ok(checked_product(rebalancing_quantity, unit_shares, "base Set quantity")? / rebalancing_natural_unit)
}

/// Base Set quantity needed to issue `rebalancing_quantity`, rounded up to the base natural unit
pub fn base_set_issue_quantity(rebalancing_quantity: U256, unit_shares: U256, rebalancing_natural_unit: U256, base_natural_unit: U256) -> Result<U256> {
    let required = base_set_quantity(rebalancing_quantity, unit_shares, rebalancing_natural_unit)?;
    if base_natural_unit.is_zero() {
        return Err(SetProtocolError::UnexpectedResponse("Base Set natural unit of zero".into()));
    }
    let remainder = required % base_natural_unit;
    if remainder.is_zero() {
        Ok(required)
    } else {
        (required - remainder)
            .checked_add(base_natural_unit)
            .ok_or_else(|| SetProtocolError::Validation(format!("Quantity {} overflows the base Set quantity computation.", rebalancing_quantity)))
    }
}

/// Base Set quantity released by redeeming `rebalancing_quantity`, rounded down to the base natural unit
pub fn base_set_redeem_quantity(rebalancing_quantity: U256, unit_shares: U256, rebalancing_natural_unit: U256, base_natural_unit: U256) -> Result<U256> {
    let released = base_set_quantity(rebalancing_quantity, unit_shares, rebalancing_natural_unit)?;
    if base_natural_unit.is_zero() {
        return Err(SetProtocolError::UnexpectedResponse("Base Set natural unit of zero".into()));
    }
    Ok(released - released % base_natural_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_natural_unit_follows_lowest_decimals() {
        assert_eq!(minimum_natural_unit(&[18, 18]), U256::from(1));
        assert_eq!(minimum_natural_unit(&[18, 6, 8]), pow10(12));
        assert_eq!(minimum_natural_unit(&[]), pow10(18));
        assert_eq!(minimum_natural_unit(&[24]), U256::from(1));
    }

    #[test]
    fn quantities_overflow_is_an_error() {
        let err = component_quantities(U256::MAX, &[U256::from(2)], U256::from(1)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), format!("Quantity {} overflows the component quantity computation.", U256::MAX));
        assert!(base_set_issue_quantity(U256::MAX, U256::from(2), U256::from(1), U256::from(1)).unwrap_err().is_validation());
        assert!(base_set_redeem_quantity(U256::MAX, U256::from(2), U256::from(1), U256::from(1)).unwrap_err().is_validation());
        // Rounding up past the top of the range
        assert!(base_set_issue_quantity(U256::MAX, U256::from(1), U256::from(1), U256::from(2)).unwrap_err().is_validation());
    }

    #[test]
    fn base_set_rounding() {
        let rb_nu = pow10(10);
        let shares = U256::from(1_500_000u64);
        let base_nu = pow10(6);
        // 10^16 * 1.5e6 / 10^10 = 1.5e12, already a multiple of 10^6
        assert_eq!(base_set_issue_quantity(pow10(16), shares, rb_nu, base_nu).unwrap(), U256::from(1_500_000_000_000u64));
        // 3 * 10^10 * 1.5e6 / 10^10 = 4.5e6 -> up to 5e6 / down to 4e6
        let qty = U256::from(3u64) * rb_nu;
        assert_eq!(base_set_issue_quantity(qty, shares, rb_nu, base_nu).unwrap(), U256::from(5_000_000u64));
        assert_eq!(base_set_redeem_quantity(qty, shares, rb_nu, base_nu).unwrap(), U256::from(4_000_000u64));
    }
}
