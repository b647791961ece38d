use alloy::{
    contract::{CallBuilder, CallDecoder},
    providers::Provider,
};
use alloy_primitives::{Address, U256};

/// Transaction options forwarded with every state changing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxData {
    pub from: Address,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
    pub nonce: Option<u64>,
    pub value: Option<U256>,
}

impl TxData {
    pub fn new(from: Address) -> Self {
        Self {
            from,
            gas: None,
            gas_price: None,
            nonce: None,
            value: None,
        }
    }

    pub fn with_gas(mut self, gas: u64) -> Self {
        self.gas = Some(gas);
        self
    }

    pub fn with_gas_price(mut self, gas_price: u128) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Ether attached to the call, zero when unset
    pub fn value_or_zero(&self) -> U256 {
        self.value.unwrap_or(U256::ZERO)
    }

    /// Copy the options onto a contract call, `default_gas` is used when no gas was given
    pub fn apply<P, D>(&self, call: CallBuilder<P, D>, default_gas: Option<u64>) -> CallBuilder<P, D>
    where
        P: Provider,
        D: CallDecoder,
    {
        let mut call = call.from(self.from);
        if let Some(gas) = self.gas.or(default_gas) {
            call = call.gas(gas);
        }
        if let Some(gas_price) = self.gas_price {
            call = call.gas_price(gas_price);
        }
        if let Some(nonce) = self.nonce {
            call = call.nonce(nonce);
        }
        if let Some(value) = self.value {
            call = call.value(value);
        }
        call
    }
}
