use std::str::FromStr;

use alloy::{
    contract::{CallBuilder, CallDecoder},
    eips::BlockNumberOrTag,
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
};
use alloy_primitives::{Address, TxHash};

use crate::{
    error::{Result, SetProtocolError},
    types::tx::TxData,
};

/// =============================================================================
/// EVM Blockchain Utilities
/// =============================================================================
///
/// @description: Provider construction and the single transaction dispatch path
/// used by every wrapper
/// =============================================================================

/// =============================================================================
/// @function: create_provider
/// @description: Create a read-only HTTP provider from an RPC URL
/// @param rpc: RPC endpoint URL as string
/// @return Result<DynProvider>: Type erased provider
/// =============================================================================
pub fn create_provider(rpc: &str) -> Result<DynProvider> {
    let url = rpc.parse::<url::Url>().map_err(|e| SetProtocolError::Config(format!("Failed to parse RPC URL '{}': {}", rpc, e)))?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// =============================================================================
/// @function: create_signer_provider
/// @description: Create an HTTP provider signing with a local private key
/// @param rpc: RPC endpoint URL as string
/// @param chain_id: Chain id used for signing
/// @param private_key: Hex private key
/// @return Result<(DynProvider, Address)>: Provider and the signer address
/// =============================================================================
pub fn create_signer_provider(rpc: &str, chain_id: u64, private_key: &str) -> Result<(DynProvider, Address)> {
    let url = rpc.parse::<url::Url>().map_err(|e| SetProtocolError::Config(format!("Failed to parse RPC URL '{}': {}", rpc, e)))?;
    let signer = PrivateKeySigner::from_str(private_key).map_err(|e| SetProtocolError::Config(format!("Invalid private key: {}", e)))?;
    let address = signer.address();
    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new().with_chain_id(chain_id).wallet(wallet).connect_http(url).erased();
    Ok((provider, address))
}

/// Provider plus the settings every state changing call needs
#[derive(Clone)]
pub struct EvmClient {
    provider: DynProvider,
    explorer_url: String,
    gas_limit: Option<u64>,
}

impl EvmClient {
    pub fn new(provider: DynProvider, explorer_url: impl Into<String>, gas_limit: Option<u64>) -> Self {
        Self {
            provider,
            explorer_url: explorer_url.into(),
            gas_limit,
        }
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    pub fn explorer_url(&self) -> &str {
        &self.explorer_url
    }

    /// Apply transaction options, send and return the hash without waiting for the receipt
    pub async fn send<P, D>(&self, call: CallBuilder<P, D>, tx: &TxData, label: &str) -> Result<TxHash>
    where
        P: Provider,
        D: CallDecoder,
    {
        let call = tx.apply(call, self.gas_limit);
        match call.send().await {
            Ok(pending) => {
                let hash = *pending.tx_hash();
                tracing::info!("{} sent by {} | Explorer: {}tx/{}", label, tx.from, self.explorer_url, hash);
                Ok(hash)
            }
            Err(e) => {
                tracing::error!("Failed to send {}: {:?}", label, e);
                Err(e.into())
            }
        }
    }

    /// =============================================================================
    /// @function: latest_timestamp
    /// @description: Timestamp of the latest block, the clock used by time based checks
    /// @return Result<u64>: Unix timestamp in seconds
    /// =============================================================================
    pub async fn latest_timestamp(&self) -> Result<u64> {
        let block = self.provider.get_block_by_number(BlockNumberOrTag::Latest).await?;
        match block {
            Some(block) => Ok(block.header.timestamp),
            None => Err(SetProtocolError::Config("Latest block not returned by the node".into())),
        }
    }

    pub async fn latest_block(&self) -> Result<u64> {
        Ok(self.provider.get_block_number().await?)
    }

    /// =============================================================================
    /// @function: fetch_receipt
    /// @description: Fetch the receipt for a transaction hash, None while pending
    /// @param hash: Transaction hash
    /// @return Result<Option<TransactionReceipt>>: Receipt if mined
    /// =============================================================================
    pub async fn fetch_receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>> {
        Ok(self.provider.get_transaction_receipt(hash).await?)
    }
}
