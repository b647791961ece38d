use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash, U256};

use crate::{
    error::{Result, SetProtocolError},
    types::{
        set::{ProposalParams, RebalanceState},
        sol::IRebalancingSetToken,
        tx::TxData,
    },
    utils::evm::EvmClient,
};

/// Auction parameters as stored by the Rebalancing Set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuctionParameters {
    pub auction_start_time: U256,
    pub auction_time_to_pivot: U256,
    pub auction_start_price: U256,
    pub auction_pivot_price: U256,
}

#[derive(Clone)]
pub struct RebalancingSetTokenWrapper {
    client: EvmClient,
}

impl RebalancingSetTokenWrapper {
    pub fn new(client: EvmClient) -> Self {
        Self { client }
    }

    fn instance(&self, rebalancing_set: Address) -> IRebalancingSetToken::IRebalancingSetTokenInstance<DynProvider> {
        IRebalancingSetToken::new(rebalancing_set, self.client.provider().clone())
    }

    pub async fn propose(&self, rebalancing_set: Address, params: &ProposalParams, tx: &TxData) -> Result<TxHash> {
        let token = self.instance(rebalancing_set);
        let call = token.propose(
            params.next_set,
            params.auction_library,
            params.auction_time_to_pivot,
            params.auction_start_price,
            params.auction_pivot_price,
        );
        self.client.send(call, tx, "RebalancingSetToken propose").await
    }

    pub async fn start_rebalance(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        let token = self.instance(rebalancing_set);
        self.client.send(token.startRebalance(), tx, "RebalancingSetToken startRebalance").await
    }

    pub async fn settle_rebalance(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        let token = self.instance(rebalancing_set);
        self.client.send(token.settleRebalance(), tx, "RebalancingSetToken settleRebalance").await
    }

    pub async fn end_failed_auction(&self, rebalancing_set: Address, tx: &TxData) -> Result<TxHash> {
        let token = self.instance(rebalancing_set);
        self.client.send(token.endFailedAuction(), tx, "RebalancingSetToken endFailedAuction").await
    }

    pub async fn manager(&self, rebalancing_set: Address) -> Result<Address> {
        Ok(self.instance(rebalancing_set).manager().call().await?)
    }

    pub async fn current_set(&self, rebalancing_set: Address) -> Result<Address> {
        Ok(self.instance(rebalancing_set).currentSet().call().await?)
    }

    pub async fn next_set(&self, rebalancing_set: Address) -> Result<Address> {
        Ok(self.instance(rebalancing_set).nextSet().call().await?)
    }

    pub async fn unit_shares(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).unitShares().call().await?)
    }

    pub async fn natural_unit(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).naturalUnit().call().await?)
    }

    pub async fn rebalance_state(&self, rebalancing_set: Address) -> Result<RebalanceState> {
        let raw = self.instance(rebalancing_set).rebalanceState().call().await?;
        RebalanceState::try_from(raw).map_err(SetProtocolError::UnexpectedResponse)
    }

    pub async fn proposal_start_time(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).proposalStartTime().call().await?)
    }

    pub async fn last_rebalance_timestamp(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).lastRebalanceTimestamp().call().await?)
    }

    pub async fn rebalance_interval(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).rebalanceInterval().call().await?)
    }

    pub async fn proposal_period(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).proposalPeriod().call().await?)
    }

    pub async fn auction_library(&self, rebalancing_set: Address) -> Result<Address> {
        Ok(self.instance(rebalancing_set).auctionLibrary().call().await?)
    }

    pub async fn auction_parameters(&self, rebalancing_set: Address) -> Result<AuctionParameters> {
        let params = self.instance(rebalancing_set).auctionParameters().call().await?;
        Ok(AuctionParameters {
            auction_start_time: params.auctionStartTime,
            auction_time_to_pivot: params.auctionTimeToPivot,
            auction_start_price: params.auctionStartPrice,
            auction_pivot_price: params.auctionPivotPrice,
        })
    }

    pub async fn minimum_bid(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).minimumBid().call().await?)
    }

    pub async fn remaining_current_sets(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).remainingCurrentSets().call().await?)
    }

    pub async fn starting_current_set_amount(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).startingCurrentSetAmount().call().await?)
    }

    pub async fn combined_token_array(&self, rebalancing_set: Address) -> Result<Vec<Address>> {
        Ok(self.instance(rebalancing_set).getCombinedTokenArray().call().await?)
    }

    /// Inflow and outflow arrays for a bid of `quantity`
    pub async fn get_bid_price(&self, rebalancing_set: Address, quantity: U256) -> Result<(Vec<U256>, Vec<U256>)> {
        let price = self.instance(rebalancing_set).getBidPrice(quantity).call().await?;
        Ok((price.inflow, price.outflow))
    }

    pub async fn name(&self, rebalancing_set: Address) -> Result<String> {
        Ok(self.instance(rebalancing_set).name().call().await?)
    }

    pub async fn symbol(&self, rebalancing_set: Address) -> Result<String> {
        Ok(self.instance(rebalancing_set).symbol().call().await?)
    }

    pub async fn total_supply(&self, rebalancing_set: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).totalSupply().call().await?)
    }

    pub async fn balance_of(&self, rebalancing_set: Address, owner: Address) -> Result<U256> {
        Ok(self.instance(rebalancing_set).balanceOf(owner).call().await?)
    }
}
