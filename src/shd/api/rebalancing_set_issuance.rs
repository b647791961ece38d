use alloy_primitives::{Address, TxHash, U256};

use crate::{
    assertions::{common, erc20 as erc20_checks, set as set_checks},
    error::{Result, SetProtocolError},
    math::units::{base_set_issue_quantity, component_quantities},
    types::tx::TxData,
    wrappers::{
        core::CoreWrapper, erc20::ERC20Wrapper, rebalancing_set_issuance_module::RebalancingSetIssuanceModuleWrapper,
        rebalancing_set_token::RebalancingSetTokenWrapper, set_token::SetTokenWrapper,
    },
};

/// Components of the base Set and what issuing a quantity of the Rebalancing Set needs from each
struct BaseSetRequirement {
    components: Vec<Address>,
    required: Vec<U256>,
}

impl BaseSetRequirement {
    fn weth_index(&self, weth: Address) -> Result<usize> {
        match self.components.iter().position(|component| *component == weth) {
            Some(index) => Ok(index),
            None => Err(SetProtocolError::Validation(format!("Token address at {} is not a component of the base Set.", weth))),
        }
    }
}

/// Issue and redeem Rebalancing Sets in one transaction from (and to) base components
#[derive(Clone)]
pub struct RebalancingSetIssuanceAPI {
    module: RebalancingSetIssuanceModuleWrapper,
    core: CoreWrapper,
    erc20: ERC20Wrapper,
    set_token: SetTokenWrapper,
    rebalancing_set_token: RebalancingSetTokenWrapper,
    transfer_proxy: Address,
    weth: Address,
}

impl RebalancingSetIssuanceAPI {
    pub fn new(
        module: RebalancingSetIssuanceModuleWrapper,
        core: CoreWrapper,
        erc20: ERC20Wrapper,
        set_token: SetTokenWrapper,
        rebalancing_set_token: RebalancingSetTokenWrapper,
        transfer_proxy: Address,
        weth: Address,
    ) -> Self {
        Self {
            module,
            core,
            erc20,
            set_token,
            rebalancing_set_token,
            transfer_proxy,
            weth,
        }
    }

    async fn check_quantity(&self, rebalancing_set: Address, quantity: U256) -> Result<()> {
        common::greater_than_zero(quantity)?;
        set_checks::is_valid_set(&self.core, rebalancing_set).await?;
        let natural_unit = self.rebalancing_set_token.natural_unit(rebalancing_set).await?;
        common::is_multiple_of(quantity, natural_unit, "Quantity of rebalancing set")
    }

    async fn base_set_requirement(&self, rebalancing_set: Address, quantity: U256) -> Result<BaseSetRequirement> {
        let rb = &self.rebalancing_set_token;
        let (base_set, unit_shares, rb_natural_unit) =
            tokio::try_join!(rb.current_set(rebalancing_set), rb.unit_shares(rebalancing_set), rb.natural_unit(rebalancing_set))?;
        let st = &self.set_token;
        let (components, units, base_natural_unit) = tokio::try_join!(st.components(base_set), st.units(base_set), st.natural_unit(base_set))?;
        let base_quantity = base_set_issue_quantity(quantity, unit_shares, rb_natural_unit, base_natural_unit)?;
        let required = component_quantities(base_quantity, &units, base_natural_unit)?;
        tracing::debug!("Issuing {} of {} needs {} of base Set {}", quantity, rebalancing_set, base_quantity, base_set);
        Ok(BaseSetRequirement { components, required })
    }

    /// =============================================================================
    /// @function: issue_rebalancing_set
    /// @description: Issue a Rebalancing Set from the base Set components held by `tx.from`
    /// @param rebalancing_set: Rebalancing Set address
    /// @param quantity: Multiple of the Rebalancing Set natural unit
    /// @param keep_change_in_vault: Leave base Set change in the vault
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the issuance transaction
    /// =============================================================================
    pub async fn issue_rebalancing_set(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(rebalancing_set, quantity).await?;
        let requirement = self.base_set_requirement(rebalancing_set, quantity).await?;
        erc20_checks::has_sufficient_balances_and_allowances(&self.erc20, &requirement.components, &requirement.required, tx.from, self.transfer_proxy).await?;
        self.module.issue_rebalancing_set(rebalancing_set, quantity, keep_change_in_vault, tx).await
    }

    /// =============================================================================
    /// @function: issue_rebalancing_set_wrapping_ether
    /// @description: Same as `issue_rebalancing_set`, the WETH component is wrapped from
    ///               the ether attached to the transaction
    /// @behavior:
    /// - WETH must be a base Set component
    /// - `tx.value` must cover the WETH requirement
    /// - Other components need balance and allowance to the transfer proxy
    /// =============================================================================
    pub async fn issue_rebalancing_set_wrapping_ether(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(rebalancing_set, quantity).await?;
        let requirement = self.base_set_requirement(rebalancing_set, quantity).await?;
        let weth_index = requirement.weth_index(self.weth)?;
        let required_ether = requirement.required[weth_index];
        let provided = tx.value_or_zero();
        if provided < required_ether {
            return Err(SetProtocolError::Validation(format!(
                "Ether value must be greater than required wrapped ether quantity. Required: {}, Provided: {}",
                required_ether, provided
            )));
        }
        let (tokens, required): (Vec<Address>, Vec<U256>) = requirement
            .components
            .iter()
            .zip(&requirement.required)
            .filter(|(component, _)| **component != self.weth)
            .map(|(component, amount)| (*component, *amount))
            .unzip();
        erc20_checks::has_sufficient_balances_and_allowances(&self.erc20, &tokens, &required, tx.from, self.transfer_proxy).await?;
        self.module.issue_rebalancing_set_wrapping_ether(rebalancing_set, quantity, keep_change_in_vault, tx).await
    }

    /// Redeem a Rebalancing Set into the base Set components
    pub async fn redeem_rebalancing_set(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(rebalancing_set, quantity).await?;
        erc20_checks::has_sufficient_balance(&self.erc20, rebalancing_set, tx.from, quantity).await?;
        self.module.redeem_rebalancing_set(rebalancing_set, quantity, keep_change_in_vault, tx).await
    }

    /// Redeem into the base Set components, WETH is unwrapped and sent as ether
    pub async fn redeem_rebalancing_set_unwrapping_ether(&self, rebalancing_set: Address, quantity: U256, keep_change_in_vault: bool, tx: &TxData) -> Result<TxHash> {
        self.check_quantity(rebalancing_set, quantity).await?;
        erc20_checks::has_sufficient_balance(&self.erc20, rebalancing_set, tx.from, quantity).await?;
        let base_set = self.rebalancing_set_token.current_set(rebalancing_set).await?;
        let components = self.set_token.components(base_set).await?;
        if !components.contains(&self.weth) {
            return Err(SetProtocolError::Validation(format!("Token address at {} is not a component of the base Set.", self.weth)));
        }
        self.module.redeem_rebalancing_set_unwrapping_ether(rebalancing_set, quantity, keep_change_in_vault, tx).await
    }
}
