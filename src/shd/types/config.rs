use serde::Deserialize;
use std::{fs, str::FromStr};

use alloy_chains::NamedChain;
use alloy_primitives::Address;

use crate::{
    assertions::schema,
    error::{Result, SetProtocolError},
    utils,
};

/// Environment configuration expected
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub path: String,
    pub testing: bool,
    // Wallet, only needed to sign
    pub wallet_public_key: Option<String>,
    pub wallet_private_key: Option<String>,
}

impl EnvConfig {
    /// Reads `CONFIG_PATH` (required), `TESTING` and the optional wallet keys
    pub fn new() -> Result<Self> {
        Ok(EnvConfig {
            path: utils::misc::get("CONFIG_PATH")?,
            testing: utils::misc::get_optional("TESTING")?.as_deref() == Some("true"),
            wallet_public_key: utils::misc::get_optional("WALLET_PUBLIC_KEY")?,
            wallet_private_key: utils::misc::get_optional("WALLET_PRIVATE_KEY")?,
        })
    }

    pub fn print(&self) {
        tracing::debug!("Env Config:");
        tracing::debug!("  Config path:           {}", self.path);
        tracing::debug!("  Testing:               {}", self.testing);
        tracing::debug!("  Public key:            {}", self.wallet_public_key.as_deref().unwrap_or("none"));
    }
}

/// Deployed protocol contracts, exact match with the `[addresses]` table
#[derive(Debug, Deserialize, Clone)]
pub struct ProtocolAddressesConfig {
    pub core: String,
    pub transfer_proxy: String,
    pub vault: String,
    pub set_token_factory: String,
    pub rebalancing_set_token_factory: String,
    pub rebalance_auction_module: String,
    pub rebalancing_set_issuance_module: String,
    pub protocol_viewer: String,
    pub weth: String,
    #[serde(default)]
    pub social_trading_manager: Option<String>,
}

/// Parsed counterpart of [`ProtocolAddressesConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolAddresses {
    pub core: Address,
    pub transfer_proxy: Address,
    pub vault: Address,
    pub set_token_factory: Address,
    pub rebalancing_set_token_factory: Address,
    pub rebalance_auction_module: Address,
    pub rebalancing_set_issuance_module: Address,
    pub protocol_viewer: Address,
    pub weth: Address,
    pub social_trading_manager: Option<Address>,
}

impl ProtocolAddressesConfig {
    fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = vec![
            ("core", self.core.as_str()),
            ("transfer_proxy", self.transfer_proxy.as_str()),
            ("vault", self.vault.as_str()),
            ("set_token_factory", self.set_token_factory.as_str()),
            ("rebalancing_set_token_factory", self.rebalancing_set_token_factory.as_str()),
            ("rebalance_auction_module", self.rebalance_auction_module.as_str()),
            ("rebalancing_set_issuance_module", self.rebalancing_set_issuance_module.as_str()),
            ("protocol_viewer", self.protocol_viewer.as_str()),
            ("weth", self.weth.as_str()),
        ];
        if let Some(stm) = self.social_trading_manager.as_deref() {
            entries.push(("social_trading_manager", stm));
        }
        entries
    }

    pub fn parse(&self) -> Result<ProtocolAddresses> {
        Ok(ProtocolAddresses {
            core: schema::parse_address("core", &self.core)?,
            transfer_proxy: schema::parse_address("transfer_proxy", &self.transfer_proxy)?,
            vault: schema::parse_address("vault", &self.vault)?,
            set_token_factory: schema::parse_address("set_token_factory", &self.set_token_factory)?,
            rebalancing_set_token_factory: schema::parse_address("rebalancing_set_token_factory", &self.rebalancing_set_token_factory)?,
            rebalance_auction_module: schema::parse_address("rebalance_auction_module", &self.rebalance_auction_module)?,
            rebalancing_set_issuance_module: schema::parse_address("rebalancing_set_issuance_module", &self.rebalancing_set_issuance_module)?,
            protocol_viewer: schema::parse_address("protocol_viewer", &self.protocol_viewer)?,
            weth: schema::parse_address("weth", &self.weth)?,
            social_trading_manager: self
                .social_trading_manager
                .as_deref()
                .map(|stm| schema::parse_address("social_trading_manager", stm))
                .transpose()?,
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SetProtocolConfig {
    // Exact match with config (e.g. config/mainnet.toml)
    pub network_name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: String,
    #[serde(default)]
    pub tx_gas_limit: Option<u64>,
    pub addresses: ProtocolAddressesConfig,
}

impl SetProtocolConfig {
    pub fn print(&self) {
        tracing::debug!("Set Protocol Config:");
        tracing::debug!("  Network:               {} with ID {}", self.network_name, self.chain_id);
        tracing::debug!("  RPC:                   {}", self.rpc_url);
        tracing::debug!("  Explorer:              {}", self.explorer_url);
        tracing::debug!("  Gas Limit:             {:?}", self.tx_gas_limit);
        for (name, address) in self.addresses.entries() {
            tracing::debug!("  {:<32} {}", name, address);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.network_name.trim().is_empty() {
            return Err(SetProtocolError::Config("network_name cannot be empty".into()));
        }
        if self.chain_id == 0 {
            return Err(SetProtocolError::Config("chain_id must be greater than zero".into()));
        }
        url::Url::parse(&self.rpc_url).map_err(|e| SetProtocolError::Config(format!("Invalid rpc_url '{}': {}", self.rpc_url, e)))?;
        // Unknown names are accepted (local chains), known ones must agree with chain_id
        if let Ok(named) = NamedChain::from_str(&self.network_name) {
            if named as u64 != self.chain_id {
                return Err(SetProtocolError::Config(format!(
                    "chain_id {} does not match network '{}' (expected {})",
                    self.chain_id, self.network_name, named as u64
                )));
            }
        }
        for (name, address) in self.addresses.entries() {
            schema::is_valid_address(name, address)?;
        }
        Ok(())
    }

    /// Link to a transaction on the configured block explorer
    pub fn explorer_tx(&self, hash: impl std::fmt::Display) -> String {
        format!("{}tx/{}", self.explorer_url, hash)
    }
}

pub fn load_set_protocol_config(path: &str) -> Result<SetProtocolConfig> {
    let contents = fs::read_to_string(path)?;
    parse_set_protocol_config(&contents)
}

pub fn parse_set_protocol_config(contents: &str) -> Result<SetProtocolConfig> {
    let config: SetProtocolConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}
