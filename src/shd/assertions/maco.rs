use alloy_primitives::{Address, U256};

use crate::{
    error::{Result, SetProtocolError},
    types::maco::CrossoverPrices,
    utils::misc::format_timestamp,
};

fn seconds(value: U256) -> u64 {
    value.saturating_to::<u64>()
}

/// Holding risk collateral needs the price under the moving average to move out,
/// holding stable collateral needs it above to move in
pub fn crossover_holds(current_collateral: Address, risk_collateral: Address, prices: CrossoverPrices) -> Result<()> {
    let CrossoverPrices {
        risk_asset_price,
        moving_average_price,
    } = prices;
    if current_collateral == risk_collateral {
        if risk_asset_price >= moving_average_price {
            return Err(SetProtocolError::Validation(format!(
                "Current Risk Collateral {} must be below moving average {} to trigger rebalance.",
                risk_asset_price, moving_average_price
            )));
        }
    } else if risk_asset_price <= moving_average_price {
        return Err(SetProtocolError::Validation(format!(
            "Current Stable Collateral requires risk asset price {} to be above moving average {} to trigger rebalance.",
            risk_asset_price, moving_average_price
        )));
    }
    Ok(())
}

/// A new crossover can only be flagged once the previous confirmation window closed
pub fn initial_propose_window(last_confirmation: U256, max_time: U256, now: u64) -> Result<()> {
    let available = seconds(last_confirmation).saturating_add(seconds(max_time));
    if now <= available {
        return Err(SetProtocolError::Validation(format!(
            "Initial propose can only be called {} seconds after the last crossover confirmation. Next available on {}",
            max_time,
            format_timestamp(available)
        )));
    }
    Ok(())
}

/// Confirmation must land between `min_time` and `max_time` after the initial propose
pub fn confirm_propose_window(last_confirmation: U256, min_time: U256, max_time: U256, now: u64) -> Result<()> {
    let start = seconds(last_confirmation).saturating_add(seconds(min_time));
    let end = seconds(last_confirmation).saturating_add(seconds(max_time));
    if now < start || now > end {
        return Err(SetProtocolError::Validation(format!(
            "Confirm propose must be called between {} and {}.",
            format_timestamp(start),
            format_timestamp(end)
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(risk: u64, ma: u64) -> CrossoverPrices {
        CrossoverPrices {
            risk_asset_price: U256::from(risk),
            moving_average_price: U256::from(ma),
        }
    }

    #[test]
    fn crossover_direction() {
        let risk = Address::repeat_byte(0x01);
        let stable = Address::repeat_byte(0x02);
        // Holding risk collateral, price dropped under the average
        assert!(crossover_holds(risk, risk, prices(90, 100)).is_ok());
        let err = crossover_holds(risk, risk, prices(110, 100)).unwrap_err();
        assert_eq!(err.to_string(), "Current Risk Collateral 110 must be below moving average 100 to trigger rebalance.");
        // Holding stable collateral, price climbed over the average
        assert!(crossover_holds(stable, risk, prices(110, 100)).is_ok());
        assert!(crossover_holds(stable, risk, prices(90, 100)).is_err());
    }

    #[test]
    fn confirmation_windows() {
        let last = U256::from(10_000u64);
        let min = U256::from(21_600u64);
        let max = U256::from(43_200u64);
        assert!(initial_propose_window(last, max, 53_200).is_err());
        assert!(initial_propose_window(last, max, 53_201).is_ok());
        assert!(confirm_propose_window(last, min, max, 31_599).is_err());
        assert!(confirm_propose_window(last, min, max, 31_600).is_ok());
        assert!(confirm_propose_window(last, min, max, 53_200).is_ok());
        assert!(confirm_propose_window(last, min, max, 53_201).is_err());
    }
}
