//! Moving average crossover (MACO) strategy managers
//!
//! A manager flips its Rebalancing Set between a risk and a stable collateral when the
//! risk asset price crosses its moving average. The crossover is flagged with
//! `initialPropose` and confirmed with `confirmPropose` inside a time window.

use alloy_primitives::{Address, TxHash, U256};

use crate::{
    assertions::{maco as maco_checks, rebalancing as rebalancing_checks},
    error::Result,
    types::{
        maco::{CrossoverPrices, MacoManagerDetails},
        set::RebalanceState,
        tx::TxData,
    },
    utils::evm::EvmClient,
    wrappers::{
        maco_manager::MACOStrategyManagerWrapper,
        oracle::{MovingAverageOracle, OracleFactory, OracleType, PriceOracle},
        rebalancing_set_token::RebalancingSetTokenWrapper,
    },
};

#[derive(Clone)]
pub struct MACOManagerAPI {
    client: EvmClient,
    maco: MACOStrategyManagerWrapper,
    rebalancing_set_token: RebalancingSetTokenWrapper,
}

impl MACOManagerAPI {
    pub fn new(client: EvmClient) -> Self {
        Self {
            maco: MACOStrategyManagerWrapper::new(client.clone()),
            rebalancing_set_token: RebalancingSetTokenWrapper::new(client.clone()),
            client,
        }
    }

    pub async fn get_maco_details(&self, manager: Address) -> Result<MacoManagerDetails> {
        let m = &self.maco;
        let (rebalancing_set, moving_average_oracle, risk_asset, stable_asset, risk_collateral, stable_collateral) = tokio::try_join!(
            m.rebalancing_set_token_address(manager),
            m.moving_average_price_feed(manager),
            m.risk_asset_address(manager),
            m.stable_asset_address(manager),
            m.risk_collateral_address(manager),
            m.stable_collateral_address(manager)
        )?;
        let (moving_average_days, auction_library, auction_time_to_pivot, min_time, max_time, last_confirmation) = tokio::try_join!(
            m.moving_average_days(manager),
            m.auction_library(manager),
            m.auction_time_to_pivot(manager),
            m.crossover_confirmation_min_time(manager),
            m.crossover_confirmation_max_time(manager),
            m.last_crossover_confirmation_timestamp(manager)
        )?;
        Ok(MacoManagerDetails {
            address: manager,
            rebalancing_set,
            moving_average_oracle,
            risk_asset,
            stable_asset,
            risk_collateral,
            stable_collateral,
            moving_average_days,
            auction_library,
            auction_time_to_pivot,
            crossover_confirmation_min_time: min_time,
            crossover_confirmation_max_time: max_time,
            last_crossover_confirmation: last_confirmation,
        })
    }

    /// Earliest timestamp the managed Rebalancing Set can rebalance again
    pub async fn next_rebalance_available_at(&self, manager: Address) -> Result<U256> {
        let rebalancing_set = self.maco.rebalancing_set_token_address(manager).await?;
        let rb = &self.rebalancing_set_token;
        let (last, interval) = tokio::try_join!(rb.last_rebalance_timestamp(rebalancing_set), rb.rebalance_interval(rebalancing_set))?;
        Ok(last.saturating_add(interval))
    }

    /// Risk asset spot price (from the medianizer behind the moving average) and the moving average
    pub async fn crossover_prices(&self, details: &MacoManagerDetails) -> Result<CrossoverPrices> {
        let moving_average = MovingAverageOracle::new(self.client.clone(), details.moving_average_oracle);
        let medianizer = moving_average.source_medianizer().await?;
        let spot = OracleFactory::create(OracleType::Medianizer, self.client.clone(), medianizer);
        let (risk_asset_price, moving_average_price) = tokio::try_join!(spot.read(), moving_average.read(details.moving_average_days))?;
        tracing::debug!("{} price {} vs {} days moving average {}", spot.name(), risk_asset_price, details.moving_average_days, moving_average_price);
        Ok(CrossoverPrices {
            risk_asset_price,
            moving_average_price,
        })
    }

    /// Checks shared by both proposal steps, returns the block timestamp used
    async fn check_rebalance_ready(&self, details: &MacoManagerDetails) -> Result<u64> {
        let rb = &self.rebalancing_set_token;
        let rebalancing_set = details.rebalancing_set;
        let (state, current_set, last, interval) = tokio::try_join!(
            rb.rebalance_state(rebalancing_set),
            rb.current_set(rebalancing_set),
            rb.last_rebalance_timestamp(rebalancing_set),
            rb.rebalance_interval(rebalancing_set)
        )?;
        rebalancing_checks::is_in_state(rebalancing_set, state, RebalanceState::Default)?;
        let now = self.client.latest_timestamp().await?;
        rebalancing_checks::sufficient_time_between_rebalance(last, interval, now)?;
        let prices = self.crossover_prices(details).await?;
        maco_checks::crossover_holds(current_set, details.risk_collateral, prices)?;
        Ok(now)
    }

    /// =============================================================================
    /// @function: initial_propose
    /// @description: Flag a crossover, starting the confirmation window
    /// @param manager: MACO strategy manager
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the transaction
    /// =============================================================================
    pub async fn initial_propose(&self, manager: Address, tx: &TxData) -> Result<TxHash> {
        let details = self.get_maco_details(manager).await?;
        let now = self.check_rebalance_ready(&details).await?;
        maco_checks::initial_propose_window(details.last_crossover_confirmation, details.crossover_confirmation_max_time, now)?;
        self.maco.initial_propose(manager, details.rebalancing_set, tx).await
    }

    /// =============================================================================
    /// @function: confirm_propose
    /// @description: Confirm the crossover and propose the rebalance
    /// @param manager: MACO strategy manager
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the transaction
    /// =============================================================================
    pub async fn confirm_propose(&self, manager: Address, tx: &TxData) -> Result<TxHash> {
        let details = self.get_maco_details(manager).await?;
        let now = self.check_rebalance_ready(&details).await?;
        maco_checks::confirm_propose_window(
            details.last_crossover_confirmation,
            details.crossover_confirmation_min_time,
            details.crossover_confirmation_max_time,
            now,
        )?;
        self.maco.confirm_propose(manager, details.rebalancing_set, tx).await
    }
}
