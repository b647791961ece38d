/// =============================================================================
/// Set Protocol Entry Point
/// =============================================================================
///
/// @description: Every API wired over a single client and one set of deployed
/// protocol addresses. Built through `SetProtocolBuilder`.
/// =============================================================================
use alloy_primitives::Address;

use crate::{
    api::{
        blockchain::BlockchainAPI, erc20::ERC20API, factory::FactoryAPI, issuance::IssuanceAPI, maco_manager::MACOManagerAPI,
        rebalancing::RebalancingAPI, rebalancing_set_issuance::RebalancingSetIssuanceAPI, set_token::SetTokenAPI, social_trading::SocialTradingAPI,
    },
    types::{
        config::{ProtocolAddresses, SetProtocolConfig},
        tx::TxData,
    },
    utils::evm::EvmClient,
    wrappers::{
        core::CoreWrapper, erc20::ERC20Wrapper, protocol_viewer::ProtocolViewerWrapper, rebalance_auction_module::RebalanceAuctionModuleWrapper,
        rebalancing_set_issuance_module::RebalancingSetIssuanceModuleWrapper, rebalancing_set_token::RebalancingSetTokenWrapper,
        set_token::SetTokenWrapper, social_trading_manager::SocialTradingManagerWrapper,
    },
};

pub struct SetProtocol {
    pub config: SetProtocolConfig,
    pub addresses: ProtocolAddresses,
    /// Local signer, None when read-only or when the provider signs
    pub account: Option<Address>,
    pub client: EvmClient,
    pub blockchain: BlockchainAPI,
    pub erc20: ERC20API,
    pub factory: FactoryAPI,
    pub issuance: IssuanceAPI,
    pub set_token: SetTokenAPI,
    pub rebalancing: RebalancingAPI,
    pub rebalancing_set_issuance: RebalancingSetIssuanceAPI,
    pub maco_manager: MACOManagerAPI,
    /// Only on networks with a social trading manager deployed
    pub social_trading: Option<SocialTradingAPI>,
    pub protocol_viewer: ProtocolViewerWrapper,
}

impl SetProtocol {
    pub fn new(config: SetProtocolConfig, client: EvmClient, addresses: ProtocolAddresses, account: Option<Address>) -> Self {
        let core = CoreWrapper::new(client.clone(), addresses.core);
        let erc20 = ERC20Wrapper::new(client.clone());
        let set_token = SetTokenWrapper::new(client.clone());
        let rebalancing_set_token = RebalancingSetTokenWrapper::new(client.clone());
        let viewer = ProtocolViewerWrapper::new(client.clone(), addresses.protocol_viewer);
        let auction_module = RebalanceAuctionModuleWrapper::new(client.clone(), addresses.rebalance_auction_module);
        let issuance_module = RebalancingSetIssuanceModuleWrapper::new(client.clone(), addresses.rebalancing_set_issuance_module);

        let social_trading = addresses
            .social_trading_manager
            .map(|manager| SocialTradingAPI::new(client.clone(), SocialTradingManagerWrapper::new(client.clone(), manager), viewer.clone()));

        Self {
            blockchain: BlockchainAPI::new(client.clone()),
            erc20: ERC20API::new(erc20.clone()),
            factory: FactoryAPI::new(client.clone(), core.clone(), addresses.set_token_factory, addresses.rebalancing_set_token_factory),
            issuance: IssuanceAPI::new(core.clone(), set_token.clone(), erc20.clone(), addresses.transfer_proxy),
            set_token: SetTokenAPI::new(set_token.clone(), rebalancing_set_token.clone()),
            rebalancing: RebalancingAPI::new(client.clone(), core.clone(), auction_module, viewer.clone(), addresses.transfer_proxy),
            rebalancing_set_issuance: RebalancingSetIssuanceAPI::new(
                issuance_module,
                core,
                erc20,
                set_token,
                rebalancing_set_token,
                addresses.transfer_proxy,
                addresses.weth,
            ),
            maco_manager: MACOManagerAPI::new(client.clone()),
            social_trading,
            protocol_viewer: viewer,
            config,
            addresses,
            account,
            client,
        }
    }

    /// Transaction options sent from the local signer
    pub fn tx(&self) -> Option<TxData> {
        self.account.map(TxData::new)
    }
}
