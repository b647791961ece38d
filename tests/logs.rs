use alloy::{rpc::types::Log, sol_types::SolEvent};
use alloy_primitives::{Address, B256, U256};
use shd::{
    error::SetProtocolError,
    types::sol::{ICore, ISocialTradingManager},
    utils::{
        bytes::string_to_bytes32,
        logs::{decode_events, extract_new_set_token_address_from_logs, extract_trading_pool_address_from_logs},
    },
};

fn rpc_log<E: SolEvent>(emitter: Address, event: &E) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address: emitter,
            data: event.encode_log_data(),
        },
        ..Default::default()
    }
}

fn set_created(set: Address) -> ICore::SetTokenCreated {
    ICore::SetTokenCreated {
        _setTokenAddress: set,
        _factory: Address::repeat_byte(0xfa),
        _components: vec![Address::repeat_byte(0x01), Address::repeat_byte(0x02)],
        _units: vec![U256::from(25), U256::from(5000)],
        _naturalUnit: U256::from(100),
        _name: string_to_bytes32("StableSet").unwrap(),
        _symbol: string_to_bytes32("STBL").unwrap(),
    }
}

#[test]
fn test_extract_new_set_address() {
    let core = Address::repeat_byte(0xc0);
    let set = Address::repeat_byte(0x5e);
    let logs = vec![rpc_log(core, &set_created(set))];
    assert_eq!(extract_new_set_token_address_from_logs(&logs, core).unwrap(), set);

    let decoded = decode_events::<ICore::SetTokenCreated>(&logs, core).unwrap();
    assert_eq!(decoded.len(), 1);
    assert_eq!(decoded[0]._naturalUnit, U256::from(100));
    assert_ne!(decoded[0]._name, B256::ZERO);
}

#[test]
fn test_other_emitters_are_ignored() {
    let core = Address::repeat_byte(0xc0);
    let impostor = Address::repeat_byte(0xee);
    let first = Address::repeat_byte(0x5e);
    let second = Address::repeat_byte(0x5f);
    let logs = vec![rpc_log(impostor, &set_created(first)), rpc_log(core, &set_created(second))];
    assert_eq!(extract_new_set_token_address_from_logs(&logs, core).unwrap(), second);

    let err = extract_new_set_token_address_from_logs(&logs[..1], core).unwrap_err();
    assert!(matches!(err, SetProtocolError::LogNotFound(_)));
}

#[test]
fn test_extract_trading_pool_address() {
    let manager = Address::repeat_byte(0x77);
    let pool = Address::repeat_byte(0x88);
    let event = ISocialTradingManager::TradingPoolCreated {
        trader: Address::repeat_byte(0x01),
        allocator: Address::repeat_byte(0x02),
        tradingPool: pool,
        startingAllocation: U256::from(10u64).pow(U256::from(18)),
    };
    let logs = vec![rpc_log(manager, &set_created(Address::repeat_byte(0x5e))), rpc_log(manager, &event)];
    assert_eq!(extract_trading_pool_address_from_logs(&logs, manager).unwrap(), pool);
}
