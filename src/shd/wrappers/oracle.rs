use alloy_primitives::{Address, U256};
use async_trait::async_trait;

use crate::{
    error::{Result, SetProtocolError},
    types::sol::{IChainLinkPF, IMedianizer, IMovingAverageOracle},
    utils::evm::EvmClient,
};

/// Price source read by strategy managers and the APIs
#[async_trait]
pub trait PriceOracle: Send + Sync {
    /// Current price with 18 decimals
    async fn read(&self) -> Result<U256>;

    /// Oracle name for logging
    fn name(&self) -> &'static str;

    fn address(&self) -> Address;
}

pub enum OracleType {
    Medianizer,
    Chainlink,
}

impl OracleType {
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "medianizer" => Ok(OracleType::Medianizer),
            "chainlink" => Ok(OracleType::Chainlink),
            _ => Err(SetProtocolError::Config(format!("Unknown oracle type: {}", s))),
        }
    }
}

/// === Medianizer ===
pub struct MedianizerOracle {
    client: EvmClient,
    address: Address,
}

impl MedianizerOracle {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }
}

#[async_trait]
impl PriceOracle for MedianizerOracle {
    async fn read(&self) -> Result<U256> {
        let medianizer = IMedianizer::new(self.address, self.client.provider().clone());
        let raw = medianizer.read().call().await?;
        Ok(U256::from_be_bytes(raw.0))
    }

    fn name(&self) -> &'static str {
        "MedianizerOracle"
    }

    fn address(&self) -> Address {
        self.address
    }
}

/// === Chainlink ===
pub struct ChainlinkOracle {
    client: EvmClient,
    address: Address,
}

impl ChainlinkOracle {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }
}

/// Rescale an aggregator answer with `decimals` decimals to 18 decimals
pub fn scale_to_18_decimals(value: U256, decimals: u8) -> U256 {
    let decimals = decimals as u64;
    if decimals <= 18 {
        value * U256::from(10).pow(U256::from(18 - decimals))
    } else {
        value / U256::from(10).pow(U256::from(decimals - 18))
    }
}

#[async_trait]
impl PriceOracle for ChainlinkOracle {
    async fn read(&self) -> Result<U256> {
        let aggregator = IChainLinkPF::new(self.address, self.client.provider().clone());
        let answer = aggregator.latestAnswer().call().await?;
        let decimals = aggregator.decimals().call().await?;
        if answer.is_negative() {
            let msg = format!("Negative answer {} from chainlink oracle {}", answer, self.address);
            tracing::error!("{}", msg);
            return Err(SetProtocolError::UnexpectedResponse(msg));
        }
        Ok(scale_to_18_decimals(answer.into_raw(), decimals))
    }

    fn name(&self) -> &'static str {
        "ChainlinkOracle"
    }

    fn address(&self) -> Address {
        self.address
    }
}

/// Moving average over a number of days, backed by a medianizer
#[derive(Clone)]
pub struct MovingAverageOracle {
    client: EvmClient,
    address: Address,
}

impl MovingAverageOracle {
    pub fn new(client: EvmClient, address: Address) -> Self {
        Self { client, address }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub async fn read(&self, days: U256) -> Result<U256> {
        let oracle = IMovingAverageOracle::new(self.address, self.client.provider().clone());
        let raw = oracle.read(days).call().await?;
        Ok(U256::from_be_bytes(raw.0))
    }

    pub async fn source_medianizer(&self) -> Result<Address> {
        let oracle = IMovingAverageOracle::new(self.address, self.client.provider().clone());
        Ok(oracle.getSourceMedianizer().call().await?)
    }
}

/// Dynamic oracle factory
pub struct OracleFactory;

impl OracleFactory {
    pub fn create(kind: OracleType, client: EvmClient, address: Address) -> Box<dyn PriceOracle> {
        match kind {
            OracleType::Medianizer => Box::new(MedianizerOracle::new(client, address)),
            OracleType::Chainlink => Box::new(ChainlinkOracle::new(client, address)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_aggregator_answers() {
        // 8 decimals USD feed
        assert_eq!(scale_to_18_decimals(U256::from(200_000_000_000u64), 8), U256::from(2_000u64) * U256::from(10).pow(U256::from(18)));
        assert_eq!(scale_to_18_decimals(U256::from(5), 18), U256::from(5));
        assert_eq!(scale_to_18_decimals(U256::from(5_000), 21), U256::from(5));
    }

    #[test]
    fn parses_oracle_types() {
        assert!(matches!(OracleType::parse("chainlink"), Ok(OracleType::Chainlink)));
        assert!(OracleType::parse("binance").is_err());
    }
}
