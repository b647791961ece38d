//! API checks against a mocked JSON-RPC transport, no node needed
//!
//! Every `eth_call` pops the next queued response, so each test scripts the reads of one
//! flow in the order the API issues them. Failing flows queue a last block number behind
//! the script: reading it back afterwards shows the flow stopped before any send.

use alloy::{
    providers::{Provider, ProviderBuilder},
    rpc::types::Block,
    sol_types::SolValue,
    transports::mock::Asserter,
};
use alloy_primitives::{Address, Bytes, U256, U64};
use shd::{
    api::{
        blockchain::BlockchainAPI, factory::FactoryAPI, issuance::IssuanceAPI, maco_manager::MACOManagerAPI, rebalancing::RebalancingAPI,
        rebalancing_set_issuance::RebalancingSetIssuanceAPI, social_trading::SocialTradingAPI,
    },
    assertions::erc20::implements_erc20,
    math::units::pow10,
    types::{
        set::{ProposalParams, RebalanceState},
        tx::TxData,
    },
    utils::{evm::EvmClient, misc::format_timestamp},
    wrappers::{
        core::CoreWrapper, erc20::ERC20Wrapper, protocol_viewer::ProtocolViewerWrapper, rebalance_auction_module::RebalanceAuctionModuleWrapper,
        rebalancing_set_issuance_module::RebalancingSetIssuanceModuleWrapper, rebalancing_set_token::RebalancingSetTokenWrapper,
        set_token::SetTokenWrapper, social_trading_manager::SocialTradingManagerWrapper,
    },
};

const LAST_BLOCK: u64 = 424_242;

fn mocked_client() -> (EvmClient, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased();
    (EvmClient::new(provider, "https://etherscan.io/", None), asserter)
}

fn addr(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

fn caller() -> Address {
    addr(0x01)
}

/// ABI encoding of a single static word
fn word(value: U256) -> Bytes {
    Bytes::from(value.to_be_bytes::<32>().to_vec())
}

fn uint(value: u64) -> Bytes {
    word(U256::from(value))
}

fn flag(value: bool) -> Bytes {
    uint(value as u64)
}

fn encoded<T: SolValue>(value: T) -> Bytes {
    Bytes::from(value.abi_encode())
}

fn block_at(timestamp: u64) -> Block {
    let mut block: Block = Block::default();
    block.header.inner.timestamp = timestamp;
    block
}

fn core(client: &EvmClient) -> CoreWrapper {
    CoreWrapper::new(client.clone(), addr(0xc0))
}

fn transfer_proxy() -> Address {
    addr(0x99)
}

fn factory(client: &EvmClient) -> FactoryAPI {
    FactoryAPI::new(client.clone(), core(client), addr(0xf1), addr(0xf2))
}

fn issuance(client: &EvmClient) -> IssuanceAPI {
    IssuanceAPI::new(core(client), SetTokenWrapper::new(client.clone()), ERC20Wrapper::new(client.clone()), transfer_proxy())
}

fn rebalancing(client: &EvmClient) -> RebalancingAPI {
    RebalancingAPI::new(
        client.clone(),
        core(client),
        RebalanceAuctionModuleWrapper::new(client.clone(), addr(0xa0)),
        ProtocolViewerWrapper::new(client.clone(), addr(0xb0)),
        transfer_proxy(),
    )
}

fn weth() -> Address {
    addr(0xee)
}

fn rebalancing_set_issuance(client: &EvmClient) -> RebalancingSetIssuanceAPI {
    RebalancingSetIssuanceAPI::new(
        RebalancingSetIssuanceModuleWrapper::new(client.clone(), addr(0xd0)),
        core(client),
        ERC20Wrapper::new(client.clone()),
        SetTokenWrapper::new(client.clone()),
        RebalancingSetTokenWrapper::new(client.clone()),
        transfer_proxy(),
        weth(),
    )
}

fn social_trading(client: &EvmClient) -> SocialTradingAPI {
    SocialTradingAPI::new(client.clone(), SocialTradingManagerWrapper::new(client.clone(), addr(0x50)), ProtocolViewerWrapper::new(client.clone(), addr(0xb0)))
}

/// Queue the closing block number once the flow script is in place
fn close_script(asserter: &Asserter) {
    asserter.push_success(&U64::from(LAST_BLOCK));
}

async fn assert_nothing_sent(client: &EvmClient) {
    assert_eq!(client.latest_block().await.unwrap(), LAST_BLOCK);
}

#[tokio::test]
async fn test_minimum_natural_unit_from_decimals() {
    let (client, asserter) = mocked_client();
    asserter.push_success(&uint(18));
    asserter.push_success(&uint(6));

    let components = vec![addr(0x01), addr(0x02)];
    let minimum = factory(&client).calculate_minimum_natural_unit(&components).await.unwrap();
    println!("Minimum natural unit: {}", minimum);
    assert_eq!(minimum, pow10(12));
}

#[tokio::test]
async fn test_minimum_natural_unit_without_decimals() {
    let (client, asserter) = mocked_client();
    asserter.push_failure_msg("execution reverted");
    asserter.push_success(&uint(6));

    let components = vec![addr(0x01), addr(0x02)];
    let minimum = factory(&client).calculate_minimum_natural_unit(&components).await.unwrap();
    assert_eq!(minimum, pow10(18));
}

#[tokio::test]
async fn test_issue_rejects_unknown_set() {
    let (client, asserter) = mocked_client();
    // Core.validSets(set) == false
    asserter.push_success(&flag(false));
    close_script(&asserter);

    let issuance = issuance(&client);
    let set = addr(0x5e);
    let tx = TxData::new(caller());

    let err = issuance.issue(set, U256::from(100), &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Contract at {} is not a valid Set token address.", set));

    // Zero quantity fails before any request
    let err = issuance.issue(set, U256::ZERO, &tx).await.unwrap_err();
    assert!(err.is_validation());
    assert_nothing_sent(&client).await;
}

#[tokio::test]
async fn test_redeem_and_withdraw_checks() {
    let (client, asserter) = mocked_client();
    let set = addr(0x5e);
    let tx = TxData::new(caller());

    // Balance below the redeemed quantity
    asserter.push_success(&flag(true));
    asserter.push_success(&uint(10));
    asserter.push_success(&uint(50));
    close_script(&asserter);
    let err = issuance(&client).redeem_and_withdraw(set, U256::from(100), &[], &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("User: {} has balance of 50 when required balance is 100 at token address {}.", caller(), set));
    assert_nothing_sent(&client).await;

    // Excluded token outside the component list
    asserter.push_success(&flag(true));
    asserter.push_success(&uint(10));
    asserter.push_success(&uint(100));
    asserter.push_success(&encoded(vec![addr(0x0a), addr(0x0b)]));
    close_script(&asserter);
    let stranger = addr(0x0c);
    let err = issuance(&client).redeem_and_withdraw(set, U256::from(100), &[stranger], &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Token {} is not a component of the Set.", stranger));
    assert_nothing_sent(&client).await;
}

#[tokio::test]
async fn test_non_erc20_contract() {
    let (client, asserter) = mocked_client();
    asserter.push_failure_msg("execution reverted");

    let token = addr(0x42);
    let err = implements_erc20(&ERC20Wrapper::new(client), token).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Contract at {} does not implement ERC20 interface.", token));
}

#[tokio::test]
async fn test_latest_block() {
    let (client, asserter) = mocked_client();
    asserter.push_success(&U64::from(19_000_000u64));
    let latest = BlockchainAPI::new(client).latest_block().await.unwrap();
    assert_eq!(latest, 19_000_000);
}

fn proposal() -> ProposalParams {
    ProposalParams {
        next_set: addr(0x6e),
        auction_library: addr(0x1b),
        auction_time_to_pivot: U256::from(86_400u64),
        auction_start_price: U256::from(500u64),
        auction_pivot_price: U256::from(1_500u64),
    }
}

/// validSets(next), rebalanceState, manager, lastRebalanceTimestamp, rebalanceInterval
fn script_proposal_reads(asserter: &Asserter, state: u64, manager: Address) {
    asserter.push_success(&flag(true));
    asserter.push_success(&uint(state));
    asserter.push_success(&encoded(manager));
    asserter.push_success(&uint(1_000));
    asserter.push_success(&uint(86_400));
}

#[tokio::test]
async fn test_propose_checks() {
    let (client, asserter) = mocked_client();
    let rebalancing_set = addr(0x70);
    let tx = TxData::new(caller());

    // Not in Default state, stops before reading the manager
    asserter.push_success(&flag(true));
    asserter.push_success(&uint(1));
    close_script(&asserter);
    let err = rebalancing(&client).propose(rebalancing_set, &proposal(), &tx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("Rebalancing token at {} must be in {} state to call that function.", rebalancing_set, RebalanceState::Default)
    );
    assert_nothing_sent(&client).await;

    // Caller is not the manager
    script_proposal_reads(&asserter, 0, addr(0x77));
    close_script(&asserter);
    let err = rebalancing(&client).propose(rebalancing_set, &proposal(), &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Caller {} is not the manager of this Rebalancing Set Token.", caller()));
    assert_nothing_sent(&client).await;

    // Rebalance interval not elapsed at the latest block
    script_proposal_reads(&asserter, 0, caller());
    asserter.push_success(&block_at(50_000));
    close_script(&asserter);
    let err = rebalancing(&client).propose(rebalancing_set, &proposal(), &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Attempting to rebalance too soon. Rebalancing next available on {}", format_timestamp(87_400)));
    assert_nothing_sent(&client).await;
}

#[tokio::test]
async fn test_start_rebalance_before_proposal_period() {
    let (client, asserter) = mocked_client();
    let rebalancing_set = addr(0x70);
    asserter.push_success(&uint(1));
    asserter.push_success(&uint(10_000));
    asserter.push_success(&uint(86_400));
    asserter.push_success(&block_at(20_000));
    close_script(&asserter);

    let err = rebalancing(&client).start_rebalance(rebalancing_set, &TxData::new(caller())).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "Rebalancing token at {} must be in Proposal state for at least 86400 seconds. Rebalance can start on {}",
            rebalancing_set,
            format_timestamp(96_400)
        )
    );
    assert_nothing_sent(&client).await;
}

#[tokio::test]
async fn test_settle_and_fail_auction_checks() {
    let (client, asserter) = mocked_client();
    let rebalancing_set = addr(0x70);
    let tx = TxData::new(caller());

    // One full minimum bid still remains
    asserter.push_success(&uint(2));
    asserter.push_success(&uint(100));
    asserter.push_success(&uint(100));
    close_script(&asserter);
    let err = rebalancing(&client).settle_rebalance(rebalancing_set, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), "In order to settle rebalance, remaining current sets, 100, must be less than the minimum bid, 100.");
    assert_nothing_sent(&client).await;

    // Pivot time not reached: start 50_000 + 3_600 > 52_000
    asserter.push_success(&uint(2));
    let params = (U256::from(50_000u64), U256::from(3_600u64), U256::from(500u64), U256::from(1_500u64));
    asserter.push_success(&Bytes::from(params.abi_encode_params()));
    asserter.push_success(&block_at(52_000));
    close_script(&asserter);
    let err = rebalancing(&client).end_failed_auction(rebalancing_set, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Pivot time not yet reached. Pivot time starts at {}", format_timestamp(53_600)));
    assert_nothing_sent(&client).await;

    // Wrong state fails on the first read
    asserter.push_success(&uint(0));
    close_script(&asserter);
    let err = rebalancing(&client).settle_rebalance(rebalancing_set, &tx).await.unwrap_err();
    assert!(err.to_string().ends_with("must be in Rebalance state to call that function."));
    assert_nothing_sent(&client).await;
}

#[tokio::test]
async fn test_bid_checks_only_inflow_tokens() {
    let (client, asserter) = mocked_client();
    let rebalancing_set = addr(0x70);
    let (outgoing, incoming) = (addr(0x0a), addr(0x0b));
    let tx = TxData::new(caller());

    // Not a multiple of the minimum bid
    asserter.push_success(&uint(2));
    asserter.push_success(&uint(100));
    asserter.push_success(&uint(1_000));
    close_script(&asserter);
    let err = rebalancing(&client).bid(rebalancing_set, U256::from(250), false, false, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), "The submitted bid quantity, 250, must be a multiple of the minimumBid, 100.");
    assert_nothing_sent(&client).await;

    // The first token only flows out to the bidder: no balance or allowance read for it.
    // The allowance read of the second token is the one failing.
    asserter.push_success(&uint(2));
    asserter.push_success(&uint(100));
    asserter.push_success(&uint(1_000));
    asserter.push_success(&encoded(vec![outgoing, incoming]));
    let flows = (vec![U256::ZERO, U256::from(500)], vec![U256::from(300), U256::ZERO]);
    asserter.push_success(&Bytes::from(flows.abi_encode_params()));
    asserter.push_success(&uint(1_000));
    asserter.push_success(&uint(10));
    close_script(&asserter);
    let err = rebalancing(&client).bid(rebalancing_set, U256::from(200), false, false, &tx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("User: {} has allowance of 10 when required allowance is 500 at token address {}.", caller(), incoming)
    );
    assert_nothing_sent(&client).await;
}

/// validSets, naturalUnit, currentSet, unitShares, naturalUnit, getComponents, getUnits, naturalUnit
fn script_base_set_reads(asserter: &Asserter, components: Vec<Address>) {
    asserter.push_success(&flag(true));
    asserter.push_success(&word(pow10(10)));
    asserter.push_success(&encoded(addr(0x5b)));
    asserter.push_success(&word(pow10(6)));
    asserter.push_success(&word(pow10(10)));
    asserter.push_success(&encoded(components));
    asserter.push_success(&encoded(vec![U256::from(500u64), U256::from(1_000u64)]));
    asserter.push_success(&word(pow10(6)));
}

#[tokio::test]
async fn test_issue_wrapping_ether_checks() {
    let (client, asserter) = mocked_client();
    let rebalancing_set = addr(0x70);
    let dai = addr(0xda);
    let quantity = pow10(10);

    // Base Set needs 500 wei of WETH, only 499 sent along
    script_base_set_reads(&asserter, vec![weth(), dai]);
    close_script(&asserter);
    let tx = TxData::new(caller()).with_value(U256::from(499u64));
    let err = rebalancing_set_issuance(&client)
        .issue_rebalancing_set_wrapping_ether(rebalancing_set, quantity, false, &tx)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Ether value must be greater than required wrapped ether quantity. Required: 500, Provided: 499");
    assert_nothing_sent(&client).await;

    // Enough ether: WETH is skipped, DAI is checked and its allowance is missing
    script_base_set_reads(&asserter, vec![weth(), dai]);
    asserter.push_success(&uint(1_000));
    asserter.push_success(&uint(0));
    close_script(&asserter);
    let tx = TxData::new(caller()).with_value(U256::from(500u64));
    let err = rebalancing_set_issuance(&client)
        .issue_rebalancing_set_wrapping_ether(rebalancing_set, quantity, false, &tx)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        format!("User: {} has allowance of 0 when required allowance is 1000 at token address {}.", caller(), dai)
    );
    assert_nothing_sent(&client).await;

    // Base Set without WETH
    script_base_set_reads(&asserter, vec![addr(0x0a), dai]);
    close_script(&asserter);
    let err = rebalancing_set_issuance(&client)
        .issue_rebalancing_set_wrapping_ether(rebalancing_set, quantity, false, &tx)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), format!("Token address at {} is not a component of the base Set.", weth()));
    assert_nothing_sent(&client).await;
}

const MACO_NOW: u64 = 1_000_000;

/// Manager details, Rebalancing Set readiness, then medianizer and moving average prices
fn script_maco_reads(asserter: &Asserter, last_confirmation: u64, risk_price: u64, moving_average: u64) {
    let risk_collateral = addr(0x3c);
    // rebalancingSetTokenAddress, movingAveragePriceFeed, riskAsset, stableAsset, riskCollateral, stableCollateral
    for address in [addr(0x70), addr(0x3a), addr(0x3e), addr(0x3d), risk_collateral, addr(0x3f)] {
        asserter.push_success(&encoded(address));
    }
    // movingAverageDays, auctionLibrary, auctionTimeToPivot, min time, max time, last confirmation
    asserter.push_success(&uint(20));
    asserter.push_success(&encoded(addr(0x1b)));
    asserter.push_success(&uint(3_600));
    asserter.push_success(&uint(21_600));
    asserter.push_success(&uint(43_200));
    asserter.push_success(&uint(last_confirmation));
    // rebalanceState, currentSet (risk collateral), lastRebalanceTimestamp, rebalanceInterval
    asserter.push_success(&uint(0));
    asserter.push_success(&encoded(risk_collateral));
    asserter.push_success(&uint(0));
    asserter.push_success(&uint(86_400));
    asserter.push_success(&block_at(MACO_NOW));
    // getSourceMedianizer, medianizer read, moving average read
    asserter.push_success(&encoded(addr(0x3b)));
    asserter.push_success(&uint(risk_price));
    asserter.push_success(&uint(moving_average));
}

#[tokio::test]
async fn test_maco_propose_checks() {
    let (client, asserter) = mocked_client();
    let manager = addr(0x3a);
    let tx = TxData::new(caller());

    // Holding risk collateral while the price is over its average
    script_maco_reads(&asserter, 0, 110, 100);
    close_script(&asserter);
    let err = MACOManagerAPI::new(client.clone()).initial_propose(manager, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), "Current Risk Collateral 110 must be below moving average 100 to trigger rebalance.");
    assert_nothing_sent(&client).await;

    // Crossover holds but the last confirmation window is still open
    let last_confirmation = MACO_NOW - 1_000;
    script_maco_reads(&asserter, last_confirmation, 90, 100);
    close_script(&asserter);
    let err = MACOManagerAPI::new(client.clone()).initial_propose(manager, &tx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "Initial propose can only be called 43200 seconds after the last crossover confirmation. Next available on {}",
            format_timestamp(last_confirmation + 43_200)
        )
    );
    assert_nothing_sent(&client).await;

    // Confirming before the minimum wait
    script_maco_reads(&asserter, last_confirmation, 90, 100);
    close_script(&asserter);
    let err = MACOManagerAPI::new(client.clone()).confirm_propose(manager, &tx).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "Confirm propose must be called between {} and {}.",
            format_timestamp(last_confirmation + 21_600),
            format_timestamp(last_confirmation + 43_200)
        )
    );
    assert_nothing_sent(&client).await;
}

fn pool_record(trader: Address, fee_update_timestamp: u64) -> Bytes {
    let record = (trader, addr(0x0a), pow10(17), U256::from(1_000u64), U256::from(fee_update_timestamp));
    Bytes::from(record.abi_encode_params())
}

#[tokio::test]
async fn test_social_trading_gates() {
    let (client, asserter) = mocked_client();
    let pool = addr(0x90);
    let tx = TxData::new(caller());

    // Only the trader may hand the pool over
    asserter.push_success(&pool_record(addr(0x77), 0));
    close_script(&asserter);
    let err = social_trading(&client).set_trader(pool, addr(0x02), &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Caller {} is not trader of tradingPool.", caller()));
    assert_nothing_sent(&client).await;

    // Finalizing without an initiated fee change
    asserter.push_success(&pool_record(caller(), 0));
    asserter.push_success(&block_at(1_000_000));
    close_script(&asserter);
    let err = social_trading(&client).finalize_entry_fee_change(pool, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), "Must call initiateEntryFeeChange first to start fee update process.");
    assert_nothing_sent(&client).await;

    // Timelock not expired
    asserter.push_success(&pool_record(caller(), 2_000_000));
    asserter.push_success(&block_at(1_000_000));
    close_script(&asserter);
    let err = social_trading(&client).finalize_entry_fee_change(pool, &tx).await.unwrap_err();
    assert_eq!(err.to_string(), format!("Attempting to finalize fee update too soon. Update available at {}", format_timestamp(2_000_000)));
    assert_nothing_sent(&client).await;
}
