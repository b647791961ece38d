use alloy::providers::DynProvider;
use alloy_primitives::{Address, Bytes, TxHash, B256, U256};

use crate::{
    error::Result,
    types::{sol::ICore, tx::TxData},
    utils::evm::EvmClient,
};

/// Inputs of `Core.create`, names and symbols are already `bytes32`
#[derive(Debug, Clone)]
pub struct CreateSetCall {
    pub factory: Address,
    pub components: Vec<Address>,
    pub units: Vec<U256>,
    pub natural_unit: U256,
    pub name: B256,
    pub symbol: B256,
    pub call_data: Bytes,
}

/// Core contract: Set creation, issuance, redemption and vault transfers
#[derive(Clone)]
pub struct CoreWrapper {
    client: EvmClient,
    address: Address,
}

impl CoreWrapper {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    fn instance(&self) -> ICore::ICoreInstance<DynProvider> {
        ICore::new(self.address, self.client.provider().clone())
    }

    pub async fn create(&self, call: CreateSetCall, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        let builder = core.create(call.factory, call.components, call.units, call.natural_unit, call.name, call.symbol, call.call_data);
        self.client.send(builder, tx, "Core create").await
    }

    pub async fn issue(&self, set: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.issue(set, quantity), tx, "Core issue").await
    }

    pub async fn issue_to(&self, recipient: Address, set: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.issueTo(recipient, set, quantity), tx, "Core issueTo").await
    }

    pub async fn redeem(&self, set: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.redeem(set, quantity), tx, "Core redeem").await
    }

    /// `to_exclude` is a bitmask of component indexes left in the vault
    pub async fn redeem_and_withdraw_to(&self, set: Address, to: Address, quantity: U256, to_exclude: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.redeemAndWithdrawTo(set, to, quantity, to_exclude), tx, "Core redeemAndWithdrawTo").await
    }

    pub async fn deposit(&self, token: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.deposit(token, quantity), tx, "Core deposit").await
    }

    pub async fn withdraw(&self, token: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.withdraw(token, quantity), tx, "Core withdraw").await
    }

    pub async fn batch_deposit(&self, tokens: Vec<Address>, quantities: Vec<U256>, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.batchDeposit(tokens, quantities), tx, "Core batchDeposit").await
    }

    pub async fn batch_withdraw(&self, tokens: Vec<Address>, quantities: Vec<U256>, tx: &TxData) -> Result<TxHash> {
        let core = self.instance();
        self.client.send(core.batchWithdraw(tokens, quantities), tx, "Core batchWithdraw").await
    }

    pub async fn valid_sets(&self, set: Address) -> Result<bool> {
        Ok(self.instance().validSets(set).call().await?)
    }

    pub async fn valid_factories(&self, factory: Address) -> Result<bool> {
        Ok(self.instance().validFactories(factory).call().await?)
    }

    pub async fn set_tokens(&self) -> Result<Vec<Address>> {
        Ok(self.instance().setTokens().call().await?)
    }

    pub async fn transfer_proxy(&self) -> Result<Address> {
        Ok(self.instance().transferProxy().call().await?)
    }

    pub async fn vault(&self) -> Result<Address> {
        Ok(self.instance().vault().call().await?)
    }
}
