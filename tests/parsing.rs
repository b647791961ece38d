use shd::types::config::{load_set_protocol_config, parse_set_protocol_config};

const LOCAL_CONFIG: &str = r#"
network_name = "set-devnet"
chain_id = 50
rpc_url = "http://127.0.0.1:8545"
explorer_url = "http://127.0.0.1:4000/"

[addresses]
core = "0x2c6a5a49bb9bd0ee7d1c4f8b1bd3f3b8d4b31b0a"
transfer_proxy = "0x0f0aC5Fd25e2fFa1b6c8F4Fcc9E0B3a0b8E4D4c1"
vault = "0x3b0b2e2a0d1b3d3b7e5c0e3f2a1b4c5d6e7f8091"
set_token_factory = "0x4c1c3f3b1e2c4e4c8f6d1f4a3b2c5d6e7f809102"
rebalancing_set_token_factory = "0x5d2d4a4c2f3d5f5d9a7e2a5b4c3d6e7f80910213"
rebalance_auction_module = "0x6e3e5b5d3a4e6a6eab8f3b6c5d4e7f8091021324"
rebalancing_set_issuance_module = "0x7f4f6c6e4b5f7b7fbc9a4c7d6e5f809102132435"
protocol_viewer = "0x805a7d7f5c6a8c8acdab5d8e7f60910213243546"
weth = "0x916b8e8a6d7b9d9bdebc6e9f80a1021324354657"
social_trading_manager = "0xa27c9f9b7e8cae0cefcd7fa091b2132435465768"
"#;

#[test]
fn test_parse_all_configs() {
    let config_files = vec!["config/mainnet.toml"];

    println!("\n🔍 Testing parsing of all config files...\n");

    for config_path in config_files {
        println!("📄 Testing: {}", config_path);
        let config = load_set_protocol_config(config_path);
        assert!(config.is_ok(), "Failed to parse config {}: {:?}", config_path, config);
        let config = config.unwrap();

        assert!(!config.network_name.is_empty(), "network_name is empty in {}", config_path);
        assert!(config.chain_id > 0, "chain_id is 0 in {}", config_path);
        assert!(!config.rpc_url.is_empty(), "rpc_url is empty in {}", config_path);
        assert!(config.addresses.parse().is_ok(), "addresses do not parse in {}", config_path);

        println!("  ✅ Config parsed successfully");
        println!("     Network: {} (Chain ID: {})", config.network_name, config.chain_id);
        println!();
    }
}

#[test]
fn test_parse_local_config() {
    let config = parse_set_protocol_config(LOCAL_CONFIG).expect("local config should parse");
    assert_eq!(config.chain_id, 50);
    assert_eq!(config.tx_gas_limit, None);

    let addresses = config.addresses.parse().unwrap();
    assert!(addresses.social_trading_manager.is_some());
    // Mixed case is accepted without checksum enforcement
    assert_eq!(addresses.transfer_proxy.to_string().to_lowercase(), "0x0f0ac5fd25e2ffa1b6c8f4fcc9e0b3a0b8e4d4c1");
    assert_eq!(config.explorer_tx("0xabc"), "http://127.0.0.1:4000/tx/0xabc");
}

#[test]
fn test_reject_malformed_address() {
    let broken = LOCAL_CONFIG.replace("0x3b0b2e2a0d1b3d3b7e5c0e3f2a1b4c5d6e7f8091", "0x3b0b2e");
    let err = parse_set_protocol_config(&broken).unwrap_err();
    assert_eq!(err.to_string(), "Expected vault to conform to schema /Address.\n\nEncountered: 0x3b0b2e");
}

#[test]
fn test_reject_chain_id_mismatch() {
    let mismatched = LOCAL_CONFIG.replace("network_name = \"set-devnet\"", "network_name = \"mainnet\"");
    let err = parse_set_protocol_config(&mismatched).unwrap_err();
    println!("Mismatch error: {}", err);
    assert!(err.to_string().contains("does not match network 'mainnet'"));
}

#[test]
fn test_reject_invalid_rpc_url() {
    let invalid = LOCAL_CONFIG.replace("http://127.0.0.1:8545", "not a url");
    assert!(parse_set_protocol_config(&invalid).is_err());
}

#[test]
fn test_social_trading_manager_is_optional() {
    let without: String = LOCAL_CONFIG.lines().filter(|line| !line.starts_with("social_trading_manager")).collect::<Vec<_>>().join("\n");
    let config = parse_set_protocol_config(&without).unwrap();
    assert_eq!(config.addresses.parse().unwrap().social_trading_manager, None);
}
