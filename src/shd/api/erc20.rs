use alloy_primitives::{Address, TxHash, U256};

use crate::{
    assertions::{common, erc20 as erc20_checks},
    error::Result,
    types::tx::TxData,
    wrappers::erc20::ERC20Wrapper,
};

/// Plain token reads and approvals
#[derive(Clone)]
pub struct ERC20API {
    erc20: ERC20Wrapper,
}

impl ERC20API {
    pub fn new(erc20: ERC20Wrapper) -> Self {
        Self { erc20 }
    }

    pub async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        self.erc20.balance_of(token, owner).await
    }

    pub async fn allowance(&self, token: Address, owner: Address, spender: Address) -> Result<U256> {
        self.erc20.allowance(token, owner, spender).await
    }

    pub async fn decimals(&self, token: Address) -> Result<u8> {
        self.erc20.decimals(token).await
    }

    pub async fn name(&self, token: Address) -> Result<String> {
        self.erc20.name(token).await
    }

    pub async fn symbol(&self, token: Address) -> Result<String> {
        self.erc20.symbol(token).await
    }

    pub async fn total_supply(&self, token: Address) -> Result<U256> {
        self.erc20.total_supply(token).await
    }

    pub async fn approve(&self, token: Address, spender: Address, value: U256, tx: &TxData) -> Result<TxHash> {
        self.erc20.approve(token, spender, value, tx).await
    }

    /// Sender must hold at least `value`
    pub async fn transfer(&self, token: Address, to: Address, value: U256, tx: &TxData) -> Result<TxHash> {
        common::greater_than_zero(value)?;
        erc20_checks::has_sufficient_balance(&self.erc20, token, tx.from, value).await?;
        self.erc20.transfer(token, to, value, tx).await
    }
}
