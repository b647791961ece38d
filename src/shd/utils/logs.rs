//! Receipt log parsing
//!
//! Creation transactions only return a hash; the address of the new Set (or trading pool)
//! is recovered from the events the contracts emit.

use alloy::{
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};
use alloy_primitives::{Address, TxHash};

use crate::{
    error::{Result, SetProtocolError},
    types::sol::{ICore, ISocialTradingManager},
};

fn matches<E: SolEvent>(log: &Log, emitter: Address) -> bool {
    log.address() == emitter && log.topics().first() == Some(&E::SIGNATURE_HASH)
}

/// Decode every `E` emitted by `emitter`, other logs are skipped
pub fn decode_events<E: SolEvent>(logs: &[Log], emitter: Address) -> Result<Vec<E>> {
    logs.iter()
        .filter(|log| matches::<E>(log, emitter))
        .map(|log| log.log_decode::<E>().map(|decoded| decoded.inner.data).map_err(SetProtocolError::from))
        .collect()
}

/// Address of the Set created by Core, from the first `SetTokenCreated` it emitted
pub fn extract_new_set_token_address_from_logs(logs: &[Log], core: Address) -> Result<Address> {
    let created = decode_events::<ICore::SetTokenCreated>(logs, core)?;
    match created.first() {
        Some(event) => Ok(event._setTokenAddress),
        None => Err(SetProtocolError::LogNotFound(format!("No SetTokenCreated event emitted by Core {}", core))),
    }
}

/// Address of the trading pool created by the social trading manager
pub fn extract_trading_pool_address_from_logs(logs: &[Log], manager: Address) -> Result<Address> {
    let created = decode_events::<ISocialTradingManager::TradingPoolCreated>(logs, manager)?;
    match created.first() {
        Some(event) => Ok(event.tradingPool),
        None => Err(SetProtocolError::LogNotFound(format!("No TradingPoolCreated event emitted by manager {}", manager))),
    }
}

/// Receipt logs, failing on reverted transactions
pub fn receipt_logs(receipt: &TransactionReceipt, hash: TxHash) -> Result<Vec<Log>> {
    if !receipt.status() {
        return Err(SetProtocolError::Validation(format!("Transaction {} reverted, no logs to parse.", hash)));
    }
    Ok(receipt.inner.logs().to_vec())
}
