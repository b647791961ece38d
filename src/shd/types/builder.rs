use alloy::providers::DynProvider;
use alloy_primitives::Address;

use super::config::SetProtocolConfig;
use crate::{
    error::Result,
    protocol::SetProtocol,
    utils::{
        constants::DEFAULT_GAS_LIMIT,
        evm::{create_provider, create_signer_provider, EvmClient},
    },
};

/// Builder for creating SetProtocol instances
pub struct SetProtocolBuilder {
    config: SetProtocolConfig,
    private_key: Option<String>,
    provider: Option<DynProvider>,
}

impl SetProtocolBuilder {
    pub fn new(config: SetProtocolConfig) -> Self {
        Self {
            config,
            private_key: None,
            provider: None,
        }
    }

    /// Sign transactions locally with this key
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Use an already connected provider, the RPC URL and private key are then ignored
    pub fn with_provider(mut self, provider: DynProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn build(self) -> Result<SetProtocol> {
        self.config.validate()?;
        let addresses = self.config.addresses.parse()?;
        let (provider, account): (DynProvider, Option<Address>) = match (self.provider, self.private_key) {
            (Some(provider), _) => (provider, None),
            (None, Some(pk)) => {
                let (provider, account) = create_signer_provider(&self.config.rpc_url, self.config.chain_id, &pk)?;
                (provider, Some(account))
            }
            (None, None) => (create_provider(&self.config.rpc_url)?, None),
        };
        let gas_limit = self.config.tx_gas_limit.unwrap_or(DEFAULT_GAS_LIMIT);
        let client = EvmClient::new(provider, self.config.explorer_url.clone(), Some(gas_limit));
        tracing::info!(
            "Building SetProtocol on {} (chain {}) | Signer: {}",
            self.config.network_name,
            self.config.chain_id,
            account.map(|a| a.to_string()).unwrap_or_else(|| "none".into())
        );
        Ok(SetProtocol::new(self.config, client, addresses, account))
    }
}
