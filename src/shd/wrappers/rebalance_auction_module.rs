use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash, U256};

use crate::{
    error::Result,
    types::{sol::IRebalanceAuctionModule, tx::TxData},
    utils::evm::EvmClient,
};

/// Bidding on running rebalance auctions
#[derive(Clone)]
pub struct RebalanceAuctionModuleWrapper {
    client: EvmClient,
    address: Address,
}

impl RebalanceAuctionModuleWrapper {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> IRebalanceAuctionModule::IRebalanceAuctionModuleInstance<DynProvider> {
        IRebalanceAuctionModule::new(self.address, self.client.provider().clone())
    }

    pub async fn bid(&self, rebalancing_set: Address, quantity: U256, allow_partial_fill: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        self.client.send(module.bid(rebalancing_set, quantity, allow_partial_fill), tx, "RebalanceAuctionModule bid").await
    }

    pub async fn bid_and_withdraw(&self, rebalancing_set: Address, quantity: U256, allow_partial_fill: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        let call = module.bidAndWithdraw(rebalancing_set, quantity, allow_partial_fill);
        self.client.send(call, tx, "RebalanceAuctionModule bidAndWithdraw").await
    }
}
