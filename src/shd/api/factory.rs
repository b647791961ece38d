use alloy::sol_types::SolValue;
use alloy_primitives::{Address, Bytes, TxHash, U256};
use futures::future::{join_all, try_join_all};

use crate::{
    assertions::{common, erc20 as erc20_checks, set as set_checks},
    error::{Result, SetProtocolError},
    math::units::{self, pow10},
    types::{set::SetUnits, tx::TxData},
    utils::{
        bytes::string_to_bytes32,
        constants::{DEFAULT_PERCENT_ERROR, DEFAULT_REBALANCING_NATURAL_UNIT_EXPONENT, ONE_DAY_IN_SECONDS, SET_TOKEN_DECIMALS},
        evm::EvmClient,
        logs::{extract_new_set_token_address_from_logs, receipt_logs},
    },
    wrappers::{
        core::{CoreWrapper, CreateSetCall},
        erc20::ERC20Wrapper,
    },
};

/// Inputs of a Rebalancing Set created through Core
#[derive(Debug, Clone)]
pub struct CreateRebalancingSetParams {
    pub manager: Address,
    pub initial_set: Address,
    pub initial_unit_shares: U256,
    pub proposal_period: U256,
    pub rebalance_interval: U256,
    pub name: String,
    pub symbol: String,
}

/// =============================================================================
/// @function: rebalancing_set_call_data
/// @description: Factory call data of a Rebalancing Set, abi.encode(manager, proposalPeriod, rebalanceInterval)
/// =============================================================================
pub fn rebalancing_set_call_data(manager: Address, proposal_period: U256, rebalance_interval: U256) -> Bytes {
    Bytes::from((manager, proposal_period, rebalance_interval).abi_encode_params())
}

/// Set and Rebalancing Set creation
#[derive(Clone)]
pub struct FactoryAPI {
    client: EvmClient,
    core: CoreWrapper,
    erc20: ERC20Wrapper,
    set_token_factory: Address,
    rebalancing_set_token_factory: Address,
}

impl FactoryAPI {
    pub fn new(client: EvmClient, core: CoreWrapper, set_token_factory: Address, rebalancing_set_token_factory: Address) -> Self {
        let erc20 = ERC20Wrapper::new(client.clone());
        Self {
            client,
            core,
            erc20,
            set_token_factory,
            rebalancing_set_token_factory,
        }
    }

    /// =============================================================================
    /// @function: create_set
    /// @description: Create a Set through Core and the Set token factory
    /// @param components: ERC20 components
    /// @param units: Units of each component per natural unit
    /// @param natural_unit: Must be at least the components minimum natural unit
    /// @param name: Set name, at most 32 bytes
    /// @param symbol: Set symbol, at most 32 bytes
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the creation transaction
    /// =============================================================================
    pub async fn create_set(&self, components: &[Address], units: &[U256], natural_unit: U256, name: &str, symbol: &str, tx: &TxData) -> Result<TxHash> {
        common::is_not_empty_array(components.len(), "components")?;
        common::is_equal_length(components.len(), units.len(), "components", "units")?;
        common::is_not_empty_string(name, "name")?;
        common::is_not_empty_string(symbol, "symbol")?;
        common::greater_than_zero(natural_unit)?;
        for unit in units {
            common::greater_than_zero(*unit)?;
        }
        try_join_all(components.iter().map(|component| erc20_checks::implements_erc20(&self.erc20, *component))).await?;
        let minimum = self.calculate_minimum_natural_unit(components).await?;
        common::natural_unit_above_minimum(natural_unit, minimum)?;

        let call = CreateSetCall {
            factory: self.set_token_factory,
            components: components.to_vec(),
            units: units.to_vec(),
            natural_unit,
            name: string_to_bytes32(name)?,
            symbol: string_to_bytes32(symbol)?,
            call_data: Bytes::new(),
        };
        self.core.create(call, tx).await
    }

    /// =============================================================================
    /// @function: create_rebalancing_set
    /// @description: Create a Rebalancing Set wrapping `initial_set`, natural unit 10 ** 10
    /// @param params: Manager, initial Set, unit shares, proposal period, rebalance interval, name, symbol
    /// @param tx: Transaction options
    /// @return Result<TxHash>: Hash of the creation transaction
    /// =============================================================================
    pub async fn create_rebalancing_set(&self, params: &CreateRebalancingSetParams, tx: &TxData) -> Result<TxHash> {
        common::is_not_empty_string(&params.name, "name")?;
        common::is_not_empty_string(&params.symbol, "symbol")?;
        common::greater_than_zero(params.initial_unit_shares)?;
        let one_day = U256::from(ONE_DAY_IN_SECONDS);
        common::is_greater_or_equal_than(params.proposal_period, one_day, "Proposal period must be greater than one day.")?;
        common::is_greater_or_equal_than(params.rebalance_interval, one_day, "Rebalance interval must be greater than one day.")?;
        set_checks::is_valid_set(&self.core, params.initial_set).await?;

        let call = CreateSetCall {
            factory: self.rebalancing_set_token_factory,
            components: vec![params.initial_set],
            units: vec![params.initial_unit_shares],
            natural_unit: pow10(DEFAULT_REBALANCING_NATURAL_UNIT_EXPONENT),
            name: string_to_bytes32(&params.name)?,
            symbol: string_to_bytes32(&params.symbol)?,
            call_data: rebalancing_set_call_data(params.manager, params.proposal_period, params.rebalance_interval),
        };
        self.core.create(call, tx).await
    }

    /// Address of the Set created by a mined `Core.create` transaction
    pub async fn get_set_address_from_create_tx_hash(&self, hash: TxHash) -> Result<Address> {
        let receipt = match self.client.fetch_receipt(hash).await? {
            Some(receipt) => receipt,
            None => return Err(SetProtocolError::LogNotFound(format!("No receipt for transaction {}, not mined yet", hash))),
        };
        let logs = receipt_logs(&receipt, hash)?;
        extract_new_set_token_address_from_logs(&logs, self.core.address())
    }

    /// =============================================================================
    /// @function: calculate_minimum_natural_unit
    /// @description: 10 ** (18 - min(decimals)) over the components, 10 ** 18 as soon as
    ///               one component does not answer `decimals()`
    /// =============================================================================
    pub async fn calculate_minimum_natural_unit(&self, components: &[Address]) -> Result<U256> {
        let answers = join_all(components.iter().map(|component| self.erc20.decimals(*component))).await;
        let mut decimals = Vec::with_capacity(answers.len());
        for (component, answer) in components.iter().zip(answers) {
            match answer {
                Ok(value) => decimals.push(value),
                Err(e) => {
                    tracing::warn!("decimals() unavailable on {} ({}), using the largest minimum natural unit", component, e);
                    return Ok(pow10(SET_TOKEN_DECIMALS));
                }
            }
        }
        Ok(units::minimum_natural_unit(&decimals))
    }

    /// =============================================================================
    /// @function: calculate_set_params
    /// @description: Units and natural unit for a Set worth `target_price`
    /// @param components: Components, their decimals are read on-chain
    /// @param prices: Price of one whole token of each component
    /// @param allocations: Value share of each component, summing to 1
    /// @param target_price: Price of one whole Set
    /// @param percent_error: Tolerated rounding error per unit in %, 10 when None
    /// @return Result<SetUnits>: Units and natural unit
    /// =============================================================================
    pub async fn calculate_set_params(&self, components: &[Address], prices: &[f64], allocations: &[f64], target_price: f64, percent_error: Option<f64>) -> Result<SetUnits> {
        common::is_not_empty_array(components.len(), "components")?;
        common::is_equal_length(components.len(), prices.len(), "components", "prices")?;
        let decimals = try_join_all(components.iter().map(|component| self.erc20.decimals(*component))).await?;
        units::calculate_set_params(prices, allocations, &decimals, target_price, percent_error.unwrap_or(DEFAULT_PERCENT_ERROR))
    }
}
