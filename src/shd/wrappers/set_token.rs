use alloy::providers::DynProvider;
use alloy_primitives::{Address, U256};

use crate::{error::Result, types::sol::ISetToken, utils::evm::EvmClient};

/// Read-only access to any Set token
#[derive(Clone)]
pub struct SetTokenWrapper {
    client: EvmClient,
}

impl SetTokenWrapper {
    pub fn new(client: EvmClient) -> Self {
        Self { client }
    }

    fn instance(&self, set: Address) -> ISetToken::ISetTokenInstance<DynProvider> {
        ISetToken::new(set, self.client.provider().clone())
    }

    pub async fn components(&self, set: Address) -> Result<Vec<Address>> {
        Ok(self.instance(set).getComponents().call().await?)
    }

    pub async fn units(&self, set: Address) -> Result<Vec<U256>> {
        Ok(self.instance(set).getUnits().call().await?)
    }

    pub async fn natural_unit(&self, set: Address) -> Result<U256> {
        Ok(self.instance(set).naturalUnit().call().await?)
    }

    pub async fn factory(&self, set: Address) -> Result<Address> {
        Ok(self.instance(set).factory().call().await?)
    }

    pub async fn name(&self, set: Address) -> Result<String> {
        Ok(self.instance(set).name().call().await?)
    }

    pub async fn symbol(&self, set: Address) -> Result<String> {
        Ok(self.instance(set).symbol().call().await?)
    }

    pub async fn total_supply(&self, set: Address) -> Result<U256> {
        Ok(self.instance(set).totalSupply().call().await?)
    }

    pub async fn balance_of(&self, set: Address, owner: Address) -> Result<U256> {
        Ok(self.instance(set).balanceOf(owner).call().await?)
    }
}
