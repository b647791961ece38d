use alloy::providers::DynProvider;
use alloy_primitives::{Address, TxHash, U256};

use crate::{
    error::Result,
    types::{sol::IERC20, tx::TxData},
    utils::evm::EvmClient,
};

/// Any ERC20 token, addressed per call
#[derive(Clone)]
pub struct ERC20Wrapper {
    client: EvmClient,
}

impl ERC20Wrapper {
    pub fn new(client: EvmClient) -> Self {
        Self { client }
    }

    fn instance(&self, token: Address) -> IERC20::IERC20Instance<DynProvider> {
        IERC20::new(token, self.client.provider().clone())
    }

    pub async fn name(&self, token: Address) -> Result<String> {
        Ok(self.instance(token).name().call().await?)
    }

    pub async fn symbol(&self, token: Address) -> Result<String> {
        Ok(self.instance(token).symbol().call().await?)
    }

    pub async fn decimals(&self, token: Address) -> Result<u8> {
        Ok(self.instance(token).decimals().call().await?)
    }

    pub async fn total_supply(&self, token: Address) -> Result<U256> {
        Ok(self.instance(token).totalSupply().call().await?)
    }

    pub async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        Ok(self.instance(token).balanceOf(owner).call().await?)
    }

    pub async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        Ok(self.instance(token).allowance(owner, spender).call().await?)
    }

    pub async fn transfer(&self, token: Address, to: Address, value: U256, tx: &TxData) -> Result<TxHash> {
        let erc20 = self.instance(token);
        self.client.send(erc20.transfer(to, value), tx, "ERC20 transfer").await
    }

    pub async fn transfer_from(&self, token: Address, from: Address, to: Address, value: U256, tx: &TxData) -> Result<TxHash> {
        let erc20 = self.instance(token);
        self.client.send(erc20.transferFrom(from, to, value), tx, "ERC20 transferFrom").await
    }

    pub async fn approve(&self, token: Address, spender: Address, value: U256, tx: &TxData) -> Result<TxHash> {
        let erc20 = self.instance(token);
        tracing::debug!("Approving {} of {} for spender {}", value, token, spender);
        self.client.send(erc20.approve(spender, value), tx, "ERC20 approve").await
    }
}
