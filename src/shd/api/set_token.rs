use alloy_primitives::Address;

use crate::{
    error::Result,
    types::set::{RebalancingSetDetails, SetDetails},
    wrappers::{rebalancing_set_token::RebalancingSetTokenWrapper, set_token::SetTokenWrapper},
};

/// Read-only views over Sets and Rebalancing Sets
#[derive(Clone)]
pub struct SetTokenAPI {
    set_token: SetTokenWrapper,
    rebalancing_set_token: RebalancingSetTokenWrapper,
}

impl SetTokenAPI {
    pub fn new(set_token: SetTokenWrapper, rebalancing_set_token: RebalancingSetTokenWrapper) -> Self {
        Self {
            set_token,
            rebalancing_set_token,
        }
    }

    pub async fn get_details(&self, set: Address) -> Result<SetDetails> {
        let st = &self.set_token;
        let (factory, components, units, natural_unit, name, symbol) =
            tokio::try_join!(st.factory(set), st.components(set), st.units(set), st.natural_unit(set), st.name(set), st.symbol(set))?;
        Ok(SetDetails {
            address: set,
            factory,
            components,
            units,
            natural_unit,
            name,
            symbol,
        })
    }

    pub async fn get_rebalancing_details(&self, rebalancing_set: Address) -> Result<RebalancingSetDetails> {
        let rb = &self.rebalancing_set_token;
        let (manager, current_set, unit_shares, natural_unit, state, last_rebalanced_at) = tokio::try_join!(
            rb.manager(rebalancing_set),
            rb.current_set(rebalancing_set),
            rb.unit_shares(rebalancing_set),
            rb.natural_unit(rebalancing_set),
            rb.rebalance_state(rebalancing_set),
            rb.last_rebalance_timestamp(rebalancing_set)
        )?;
        let (rebalance_interval, proposal_period, supply, name, symbol) = tokio::try_join!(
            rb.rebalance_interval(rebalancing_set),
            rb.proposal_period(rebalancing_set),
            rb.total_supply(rebalancing_set),
            rb.name(rebalancing_set),
            rb.symbol(rebalancing_set)
        )?;
        Ok(RebalancingSetDetails {
            address: rebalancing_set,
            manager,
            current_set,
            unit_shares,
            natural_unit,
            state,
            last_rebalanced_at,
            rebalance_interval,
            proposal_period,
            supply,
            name,
            symbol,
        })
    }
}
