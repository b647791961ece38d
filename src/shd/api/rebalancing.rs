use alloy_primitives::{Address, TxHash, U256};

use crate::{
    assertions::{common, erc20 as erc20_checks, rebalancing as checks, set as set_checks},
    error::Result,
    types::{
        set::{BidPrice, ProposalParams, RebalanceState, RebalancingProgressDetails, RebalancingProposalDetails},
        tx::TxData,
    },
    utils::evm::EvmClient,
    wrappers::{
        core::CoreWrapper, erc20::ERC20Wrapper, protocol_viewer::ProtocolViewerWrapper, rebalance_auction_module::RebalanceAuctionModuleWrapper,
        rebalancing_set_token::RebalancingSetTokenWrapper,
    },
};

/// Rebalancing lifecycle: propose, start, bid, settle or fail
#[derive(Clone)]
pub struct RebalancingAPI {
    client: EvmClient,
    core: CoreWrapper,
    erc20: ERC20Wrapper,
    rebalancing_set_token: RebalancingSetTokenWrapper,
    auction_module: RebalanceAuctionModuleWrapper,
    viewer: ProtocolViewerWrapper,
    transfer_proxy: Address,
}

impl RebalancingAPI {
    pub fn new(client: EvmClient, core: CoreWrapper, auction_module: RebalanceAuctionModuleWrapper, viewer: ProtocolViewerWrapper, transfer_proxy: Address) -> Self {
        Self {
            erc20: ERC20Wrapper::new(client.clone()),
            rebalancing_set_token: RebalancingSetTokenWrapper::new(client.clone()),
            client,
            core,
            auction_module,
            viewer,
            transfer_proxy,
        }
    }

    async fn check_state(&self, rebalancing_set: Address, expected: RebalanceState) -> Result<()> {
        let current = self.rebalancing_set_token.rebalance_state(rebalancing_set).await?;
        checks::is_in_state(rebalancing_set, current, expected)
    }

    /// =============================================================================
    /// @function: propose
    /// @description: Propose a rebalance into `params.next_set`
    /// @param rebalancing_set: Rebalancing Set in Default state
    /// @param params: Next Set and auction parameters
    /// @param tx: Transaction options, `from` must be the manager
    /// @return Result<TxHash>: Hash of the proposal transaction
    ///
    /// @behavior:
    /// - Next Set must be registered in Core
    /// - Rebalance interval since the last rebalance must have elapsed (latest block time)
    /// =============================================================================
    pub async fn propose(&self, rebalancing_set: Address, params: &ProposalParams, tx: &TxData) -> Result<TxHash> {
        set_checks::is_valid_set(&self.core, params.next_set).await?;
        self.check_state(rebalancing_set, RebalanceState::Default).await?;
        let rb = &self.rebalancing_set_token;
        let (manager, last_rebalance, interval) =
            tokio::try_join!(rb.manager(rebalancing_set), rb.last_rebalance_timestamp(rebalancing_set), rb.rebalance_interval(rebalancing_set))?;
        checks::is_manager(tx.from, manager)?;
        let now = self.client.latest_timestamp().await?;
        checks::sufficient_time_between_rebalance(last_rebalance, interval, now)?;
        rb.propose(rebalancing_set, params, tx).await
    }

    /// Start the auction once the proposal period is over
    pub async fn start_rebalance(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        self.check_state(rebalancing_set, RebalanceState::Proposal).await?;
        let rb = &self.rebalancing_set_token;
        let (proposal_start, proposal_period) = tokio::try_join!(rb.proposal_start_time(rebalancing_set), rb.proposal_period(rebalancing_set))?;
        let now = self.client.latest_timestamp().await?;
        checks::sufficient_time_in_proposal(rebalancing_set, proposal_start, proposal_period, now)?;
        rb.start_rebalance(rebalancing_set, tx).await
    }

    /// Settle once less than one minimum bid of current Sets remains
    pub async fn settle_rebalance(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        self.check_state(rebalancing_set, RebalanceState::Rebalance).await?;
        let rb = &self.rebalancing_set_token;
        let (remaining, minimum_bid) = tokio::try_join!(rb.remaining_current_sets(rebalancing_set), rb.minimum_bid(rebalancing_set))?;
        checks::auction_can_settle(remaining, minimum_bid)?;
        rb.settle_rebalance(rebalancing_set, tx).await
    }

    /// End an auction that reached its pivot time without clearing
    pub async fn end_failed_auction(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        self.check_state(rebalancing_set, RebalanceState::Rebalance).await?;
        let rb = &self.rebalancing_set_token;
        let params = rb.auction_parameters(rebalancing_set).await?;
        let now = self.client.latest_timestamp().await?;
        checks::pivot_time_passed(params.auction_start_time, params.auction_time_to_pivot, now)?;
        rb.end_failed_auction(rebalancing_set, tx).await
    }

    /// =============================================================================
    /// @function: bid
    /// @description: Bid on a running auction, optionally withdrawing proceeds from the vault
    /// @param rebalancing_set: Rebalancing Set in Rebalance state
    /// @param quantity: Current Sets to take, multiple of the minimum bid
    /// @param allow_partial_fill: Accept a fill smaller than `quantity`
    /// @param withdraw: Use `bidAndWithdraw`
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the bid transaction
    /// =============================================================================
    pub async fn bid(&self, rebalancing_set: Address, quantity: U256, allow_partial_fill: bool, withdraw: bool, tx: &TxData) -> Result<TxHash> {
        common::greater_than_zero(quantity)?;
        self.check_state(rebalancing_set, RebalanceState::Rebalance).await?;
        let rb = &self.rebalancing_set_token;
        let (minimum_bid, remaining) = tokio::try_join!(rb.minimum_bid(rebalancing_set), rb.remaining_current_sets(rebalancing_set))?;
        checks::bid_is_multiple_of_minimum_bid(quantity, minimum_bid)?;
        if !allow_partial_fill {
            checks::bid_within_remaining(quantity, remaining)?;
        }

        let price = self.get_bid_price(rebalancing_set, quantity).await?;
        // Only tokens the bidder sends in need balance and allowance
        let (tokens, required): (Vec<Address>, Vec<U256>) = price
            .tokens
            .iter()
            .zip(&price.inflow)
            .filter(|(_, inflow)| !inflow.is_zero())
            .map(|(token, inflow)| (*token, *inflow))
            .unzip();
        erc20_checks::has_sufficient_balances_and_allowances(&self.erc20, &tokens, &required, tx.from, self.transfer_proxy).await?;

        if withdraw {
            self.auction_module.bid_and_withdraw(rebalancing_set, quantity, allow_partial_fill, tx).await
        } else {
            self.auction_module.bid(rebalancing_set, quantity, allow_partial_fill, tx).await
        }
    }

    pub async fn get_proposal_details(&self, rebalancing_set: Address) -> Result<RebalancingProposalDetails> {
        self.viewer.fetch_rebalance_proposal_state(rebalancing_set).await
    }

    pub async fn get_progress_details(&self, rebalancing_set: Address) -> Result<RebalancingProgressDetails> {
        let state = self.rebalancing_set_token.rebalance_state(rebalancing_set).await?;
        self.viewer.fetch_rebalance_auction_state(rebalancing_set, state).await
    }

    /// Token flows of a bid of `quantity`, aligned with the combined token array
    pub async fn get_bid_price(&self, rebalancing_set: Address, quantity: U256) -> Result<BidPrice> {
        common::greater_than_zero(quantity)?;
        let rb = &self.rebalancing_set_token;
        let (tokens, (inflow, outflow)) = tokio::try_join!(rb.combined_token_array(rebalancing_set), rb.get_bid_price(rebalancing_set, quantity))?;
        common::is_equal_length(tokens.len(), inflow.len(), "combined token", "inflow")?;
        common::is_equal_length(tokens.len(), outflow.len(), "combined token", "outflow")?;
        Ok(BidPrice { tokens, inflow, outflow })
    }
}
