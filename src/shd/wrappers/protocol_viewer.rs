use alloy::providers::DynProvider;
use alloy_primitives::{Address, U256};

use crate::{
    error::{Result, SetProtocolError},
    types::{
        set::{RebalanceState, RebalancingProgressDetails, RebalancingProposalDetails},
        social::TradingPoolDetails,
        sol::IProtocolViewer,
    },
    utils::evm::EvmClient,
};

fn state(raw: u8) -> Result<RebalanceState> {
    RebalanceState::try_from(raw).map_err(SetProtocolError::UnexpectedResponse)
}

fn expect_len<T>(values: &[T], expected: usize, what: &str) -> Result<()> {
    if values.len() != expected {
        return Err(SetProtocolError::UnexpectedResponse(format!("{} returned {} values, expected {}", what, values.len(), expected)));
    }
    Ok(())
}

/// Batched reads through the ProtocolViewer contract
#[derive(Clone)]
pub struct ProtocolViewerWrapper {
    client: EvmClient,
    address: Address,
}

impl ProtocolViewerWrapper {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> IProtocolViewer::IProtocolViewerInstance<DynProvider> {
        IProtocolViewer::new(self.address, self.client.provider().clone())
    }

    pub async fn batch_fetch_balances_of(&self, tokens: Vec<Address>, owner: Address) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchBalancesOf(tokens, owner).call().await?)
    }

    /// Pairwise `tokens[i].balanceOf(users[i])`
    pub async fn batch_fetch_users_balances(&self, tokens: Vec<Address>, users: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchUsersBalances(tokens, users).call().await?)
    }

    pub async fn batch_fetch_supplies(&self, tokens: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchSupplies(tokens).call().await?)
    }

    pub async fn fetch_rebalance_proposal_state(&self, rebalancing_set: Address) -> Result<RebalancingProposalDetails> {
        let raw = self.instance().fetchRebalanceProposalStateAsync(rebalancing_set).call().await?;
        expect_len(&raw.proposalAddresses, 2, "fetchRebalanceProposalStateAsync addresses")?;
        expect_len(&raw.auctionParameters, 4, "fetchRebalanceProposalStateAsync parameters")?;
        Ok(RebalancingProposalDetails {
            state: state(raw.rebalanceState)?,
            next_set: raw.proposalAddresses[0],
            auction_library: raw.proposalAddresses[1],
            proposal_started_at: raw.auctionParameters[0],
            auction_time_to_pivot: raw.auctionParameters[1],
            auction_start_price: raw.auctionParameters[2],
            auction_pivot_price: raw.auctionParameters[3],
        })
    }

    /// Auction progress, the state is read separately by the caller
    pub async fn fetch_rebalance_auction_state(&self, rebalancing_set: Address, current: RebalanceState) -> Result<RebalancingProgressDetails> {
        let raw = self.instance().fetchRebalanceAuctionStateAsync(rebalancing_set).call().await?;
        expect_len(&raw, 4, "fetchRebalanceAuctionStateAsync")?;
        Ok(RebalancingProgressDetails {
            state: current,
            starting_current_set_amount: raw[0],
            auction_start_time: raw[1],
            minimum_bid: raw[2],
            remaining_current_sets: raw[3],
        })
    }

    pub async fn batch_fetch_rebalance_state(&self, rebalancing_sets: Vec<Address>) -> Result<Vec<RebalanceState>> {
        let raw = self.instance().batchFetchRebalanceStateAsync(rebalancing_sets).call().await?;
        raw.into_iter().map(state).collect()
    }

    pub async fn batch_fetch_unit_shares(&self, rebalancing_sets: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchUnitSharesAsync(rebalancing_sets).call().await?)
    }

    pub async fn fetch_new_trading_pool_details(&self, trading_pool: Address) -> Result<TradingPoolDetails> {
        let raw = self.instance().fetchNewTradingPoolDetails(trading_pool).call().await?;
        let pool = raw.poolInfo;
        let rb = raw.rbSetInfo;
        let collateral = raw.collateralInfo;
        Ok(TradingPoolDetails {
            address: trading_pool,
            trader: pool.trader,
            allocator: pool.allocator,
            current_allocation: pool.currentAllocation,
            new_entry_fee: pool.newEntryFee,
            fee_update_timestamp: pool.feeUpdateTimestamp,
            manager: rb.manager,
            fee_recipient: rb.feeRecipient,
            current_set: rb.currentSet,
            liquidator: rb.liquidator,
            unit_shares: rb.unitShares,
            natural_unit: rb.naturalUnit,
            rebalance_interval: rb.rebalanceInterval,
            entry_fee: rb.entryFee,
            rebalance_fee: rb.rebalanceFee,
            last_rebalanced_at: rb.lastRebalanceTimestamp,
            state: state(rb.rebalanceState)?,
            name: rb.name,
            symbol: rb.symbol,
            collateral_components: collateral.components,
            collateral_units: collateral.units,
            collateral_natural_unit: collateral.naturalUnit,
        })
    }

    pub async fn batch_fetch_trading_pool_operator(&self, trading_pools: Vec<Address>) -> Result<Vec<Address>> {
        Ok(self.instance().batchFetchTradingPoolOperator(trading_pools).call().await?)
    }

    pub async fn batch_fetch_trading_pool_allocations(&self, trading_pools: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchTradingPoolAllocations(trading_pools).call().await?)
    }

    pub async fn batch_fetch_oracle_prices(&self, oracles: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchOraclePrices(oracles).call().await?)
    }

    pub async fn batch_fetch_maco_crossover_timestamps(&self, managers: Vec<Address>) -> Result<Vec<U256>> {
        Ok(self.instance().batchFetchMACOCrossoverTimestamp(managers).call().await?)
    }
}
