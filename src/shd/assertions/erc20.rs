use alloy_primitives::{Address, U256};

use crate::{
    error::{Result, SetProtocolError},
    wrappers::erc20::ERC20Wrapper,
};

pub fn check_balance(token: Address, user: Address, balance: U256, required: U256) -> Result<()> {
    if balance < required {
        return Err(SetProtocolError::Validation(format!(
            "User: {} has balance of {} when required balance is {} at token address {}.",
            user, balance, required, token
        )));
    }
    Ok(())
}

pub fn check_allowance(token: Address, user: Address, allowance: U256, required: U256) -> Result<()> {
    if allowance < required {
        return Err(SetProtocolError::Validation(format!(
            "User: {} has allowance of {} when required allowance is {} at token address {}.",
            user, allowance, required, token
        )));
    }
    Ok(())
}

pub async fn has_sufficient_balance(erc20: &ERC20Wrapper, token: Address, user: Address, required: U256) -> Result<()> {
    let balance = erc20.balance_of(token, user).await?;
    check_balance(token, user, balance, required)
}

pub async fn has_sufficient_allowance(erc20: &ERC20Wrapper, token: Address, user: Address, spender: Address, required: U256) -> Result<()> {
    let allowance = erc20.allowance(token, user, spender).await?;
    check_allowance(token, user, allowance, required)
}

/// Balance and allowance towards `spender` for every component, in order
pub async fn has_sufficient_balances_and_allowances(erc20: &ERC20Wrapper, tokens: &[Address], required: &[U256], user: Address, spender: Address) -> Result<()> {
    for (token, required) in tokens.iter().zip(required) {
        has_sufficient_balance(erc20, *token, user, *required).await?;
        has_sufficient_allowance(erc20, *token, user, spender, *required).await?;
    }
    Ok(())
}

/// Any failure of `totalSupply()` means the contract is not a usable ERC20
pub async fn implements_erc20(erc20: &ERC20Wrapper, token: Address) -> Result<()> {
    match erc20.total_supply(token).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::debug!("totalSupply failed on {}: {}", token, e);
            Err(SetProtocolError::Validation(format!("Contract at {} does not implement ERC20 interface.", token)))
        }
    }
}
