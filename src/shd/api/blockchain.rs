use std::time::Duration;

use alloy::rpc::types::TransactionReceipt;
use alloy_primitives::TxHash;

use crate::{
    error::{Result, SetProtocolError},
    utils::{
        constants::{DEFAULT_MINING_TIMEOUT_SECS, DEFAULT_POLL_INTERVAL_MS},
        evm::EvmClient,
    },
};

/// Chain level helpers: block clock and receipt polling
#[derive(Clone)]
pub struct BlockchainAPI {
    client: EvmClient,
}

impl BlockchainAPI {
    pub fn new(client: EvmClient) -> Self {
        Self { client }
    }

    /// =============================================================================
    /// @function: await_transaction_mined
    /// @description: Poll for the receipt of `hash` until it is mined or `timeout` elapses
    /// @param hash: Transaction hash
    /// @param poll_interval: Delay between two polls, 1s when None
    /// @param timeout: Total wait, 300s when None
    /// @return Result<TransactionReceipt>: Receipt, reverted or not
    /// =============================================================================
    pub async fn await_transaction_mined(&self, hash: TxHash, poll_interval: Option<Duration>, timeout: Option<Duration>) -> Result<TransactionReceipt> {
        let poll_interval = poll_interval.unwrap_or(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS));
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_MINING_TIMEOUT_SECS));
        let polling = async {
            loop {
                if let Some(receipt) = self.client.fetch_receipt(hash).await? {
                    tracing::debug!("Transaction {} mined in block {:?}", hash, receipt.block_number);
                    return Ok::<_, SetProtocolError>(receipt);
                }
                tokio::time::sleep(poll_interval).await;
            }
        };
        match tokio::time::timeout(timeout, polling).await {
            Ok(receipt) => receipt,
            Err(_) => Err(SetProtocolError::Timeout(format!("Transaction {} not mined after {:?}", hash, timeout))),
        }
    }

    pub async fn latest_timestamp(&self) -> Result<u64> {
        self.client.latest_timestamp().await
    }

    pub async fn latest_block(&self) -> Result<u64> {
        self.client.latest_block().await
    }
}
