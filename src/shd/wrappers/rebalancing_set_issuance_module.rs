use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash, U256};

use crate::{
    error::Result,
    types::{sol::IRebalancingSetIssuanceModule, tx::TxData},
    utils::evm::EvmClient,
};

/// Issues and redeems Rebalancing Sets straight from (and to) base components
#[derive(Clone)]
pub struct RebalancingSetIssuanceModuleWrapper {
    client: EvmClient,
    address: Address,
}

impl RebalancingSetIssuanceModuleWrapper {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> IRebalancingSetIssuanceModule::IRebalancingSetIssuanceModuleInstance<DynProvider> {
        IRebalancingSetIssuanceModule::new(self.address, self.client.provider().clone())
    }

    pub async fn issue_rebalancing_set(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        let call = module.issueRebalancingSet(rebalancing_set, quantity, keep_change_in_vault);
        self.client.send(call, tx, "issueRebalancingSet").await
    }

    /// `tx.value` carries the ether wrapped into WETH by the module
    pub async fn issue_rebalancing_set_wrapping_ether(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        let call = module.issueRebalancingSetWrappingEther(rebalancing_set, quantity, keep_change_in_vault);
        self.client.send(call, tx, "issueRebalancingSetWrappingEther").await
    }

    pub async fn redeem_rebalancing_set(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        let call = module.redeemRebalancingSet(rebalancing_set, quantity, keep_change_in_vault);
        self.client.send(call, tx, "redeemRebalancingSet").await
    }

    pub async fn redeem_rebalancing_set_unwrapping_ether(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        let module = self.instance();
        let call = module.redeemRebalancingSetUnwrappingEther(rebalancing_set, quantity, keep_change_in_vault);
        self.client.send(call, tx, "redeemRebalancingSetUnwrappingEther").await
    }
}
