use alloy_primitives::{Address, U256};

use crate::{
    error::{Result, SetProtocolError},
    types::set::RebalanceState,
    utils::misc::format_timestamp,
};

fn fail<T>(message: String) -> Result<T> {
    Err(SetProtocolError::Validation(message))
}

fn seconds(value: U256) -> u64 {
    value.saturating_to::<u64>()
}

pub fn is_in_state(rebalancing_set: Address, current: RebalanceState, expected: RebalanceState) -> Result<()> {
    if current != expected {
        return fail(format!("Rebalancing token at {} must be in {} state to call that function.", rebalancing_set, expected));
    }
    Ok(())
}

pub fn is_manager(caller: Address, manager: Address) -> Result<()> {
    if caller != manager {
        return fail(format!("Caller {} is not the manager of this Rebalancing Set Token.", caller));
    }
    Ok(())
}

/// `now` must be at least `last_rebalance + rebalance_interval`
pub fn sufficient_time_between_rebalance(last_rebalance: U256, rebalance_interval: U256, now: u64) -> Result<()> {
    let next = seconds(last_rebalance).saturating_add(seconds(rebalance_interval));
    if now < next {
        return fail(format!("Attempting to rebalance too soon. Rebalancing next available on {}", format_timestamp(next)));
    }
    Ok(())
}

/// The proposal must have been open for the full proposal period
pub fn sufficient_time_in_proposal(rebalancing_set: Address, proposal_start: U256, proposal_period: U256, now: u64) -> Result<()> {
    let next = seconds(proposal_start).saturating_add(seconds(proposal_period));
    if now < next {
        return fail(format!(
            "Rebalancing token at {} must be in Proposal state for at least {} seconds. Rebalance can start on {}",
            rebalancing_set,
            proposal_period,
            format_timestamp(next)
        ));
    }
    Ok(())
}

pub fn bid_is_multiple_of_minimum_bid(quantity: U256, minimum_bid: U256) -> Result<()> {
    if minimum_bid.is_zero() || !(quantity % minimum_bid).is_zero() {
        return fail(format!("The submitted bid quantity, {}, must be a multiple of the minimumBid, {}.", quantity, minimum_bid));
    }
    Ok(())
}

pub fn bid_within_remaining(quantity: U256, remaining: U256) -> Result<()> {
    if quantity > remaining {
        return fail(format!("The submitted bid quantity, {}, exceeds the remaining current sets, {}.", quantity, remaining));
    }
    Ok(())
}

/// Settlement requires the auction to have consumed what it can: remaining below one minimum bid
pub fn auction_can_settle(remaining: U256, minimum_bid: U256) -> Result<()> {
    if remaining >= minimum_bid {
        return fail(format!("In order to settle rebalance, remaining current sets, {}, must be less than the minimum bid, {}.", remaining, minimum_bid));
    }
    Ok(())
}

/// Failed auctions can be ended once the pivot time has passed without settlement
pub fn pivot_time_passed(auction_start_time: U256, auction_time_to_pivot: U256, now: u64) -> Result<()> {
    let pivot = seconds(auction_start_time).saturating_add(seconds(auction_time_to_pivot));
    if now < pivot {
        return fail(format!("Pivot time not yet reached. Pivot time starts at {}", format_timestamp(pivot)));
    }
    Ok(())
}
