use alloy_primitives::{Address, TxHash, U256};

use crate::{
    assertions::{common, erc20 as erc20_checks, set as set_checks},
    error::{Result, SetProtocolError},
    math::units::component_quantities,
    types::tx::TxData,
    wrappers::{core::CoreWrapper, erc20::ERC20Wrapper, set_token::SetTokenWrapper},
};

/// =============================================================================
/// @function: exclusion_bitmask
/// @description: Bit i set when component i must stay in the vault on redemption
/// @param components: Set components, in Set order
/// @param excluded: Components to leave in the vault
/// @return Result<U256>: Bitmask passed to `redeemAndWithdrawTo`
/// =============================================================================
pub fn exclusion_bitmask(components: &[Address], excluded: &[Address]) -> Result<U256> {
    let mut mask = U256::ZERO;
    for token in excluded {
        match components.iter().position(|component| component == token) {
            Some(index) => mask |= U256::from(1) << index,
            None => return Err(SetProtocolError::Validation(format!("Token {} is not a component of the Set.", token))),
        }
    }
    Ok(mask)
}

/// Issue and redeem Sets through Core
#[derive(Clone)]
pub struct IssuanceAPI {
    core: CoreWrapper,
    set_token: SetTokenWrapper,
    erc20: ERC20Wrapper,
    transfer_proxy: Address,
}

impl IssuanceAPI {
    pub fn new(core: CoreWrapper, set_token: SetTokenWrapper, erc20: ERC20Wrapper, transfer_proxy: Address) -> Self {
        Self {
            core,
            set_token,
            erc20,
            transfer_proxy,
        }
    }

    async fn check_quantity(&self, set: Address, quantity: U256, name: &str) -> Result<()> {
        common::greater_than_zero(quantity)?;
        set_checks::is_valid_set(&self.core, set).await?;
        let natural_unit = self.set_token.natural_unit(set).await?;
        common::is_multiple_of(quantity, natural_unit, name)
    }

    /// =============================================================================
    /// @function: issue
    /// @description: Issue `quantity` of `set`, components are pulled through the transfer proxy
    /// @param set: Set address, must be registered in Core
    /// @param quantity: Multiple of the Set natural unit
    /// @param tx: Transaction options, `from` must hold and approve every component
    /// @return Result<TxHash>: Hash of the issuance transaction
    /// =============================================================================
    pub async fn issue(&self, set: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(set, quantity, "Issuance quantity").await?;
        let (components, units, natural_unit) = tokio::try_join!(self.set_token.components(set), self.set_token.units(set), self.set_token.natural_unit(set))?;
        let required = component_quantities(quantity, &units, natural_unit)?;
        erc20_checks::has_sufficient_balances_and_allowances(&self.erc20, &components, &required, tx.from, self.transfer_proxy).await?;
        self.core.issue(set, quantity, tx).await
    }

    /// Redeem `quantity` of `set`, components land in the vault
    pub async fn redeem(&self, set: Address, quantity: U256, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(set, quantity, "Redemption quantity").await?;
        erc20_checks::has_sufficient_balance(&self.erc20, set, tx.from, quantity).await?;
        self.core.redeem(set, quantity, tx).await
    }

    /// Redeem and withdraw to `tx.from`, leaving `tokens_to_exclude` in the vault
    pub async fn redeem_and_withdraw(&self, set: Address, quantity: U256, tokens_to_exclude: &[Address], tx: &TxData) -> Result<TxHash> {
        self.check_quantity(set, quantity, "Redemption quantity").await?;
        erc20_checks::has_sufficient_balance(&self.erc20, set, tx.from, quantity).await?;
        let components = self.set_token.components(set).await?;
        let mask = exclusion_bitmask(&components, tokens_to_exclude)?;
        self.core.redeem_and_withdraw_to(set, tx.from, quantity, mask, tx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmask_follows_component_order() {
        let components = vec![Address::repeat_byte(1), Address::repeat_byte(2), Address::repeat_byte(3)];
        assert_eq!(exclusion_bitmask(&components, &[]).unwrap(), U256::ZERO);
        assert_eq!(exclusion_bitmask(&components, &[Address::repeat_byte(3), Address::repeat_byte(1)]).unwrap(), U256::from(0b101));
        assert!(exclusion_bitmask(&components, &[Address::repeat_byte(9)]).is_err());
    }
}
