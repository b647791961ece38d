/// =============================================================================
/// Inspect Binary Entry Point
/// =============================================================================
///
/// @description: Connects to the configured network and logs the state of a Set,
/// a Rebalancing Set or a MACO strategy manager. Read-only, nothing is sent.
/// =============================================================================
use alloy_primitives::Address;
use shd::{
    assertions::schema,
    error::{Result, SetProtocolError},
    protocol::SetProtocol,
    types::{
        builder::SetProtocolBuilder,
        config::{load_set_protocol_config, EnvConfig},
        set::RebalanceState,
    },
    utils::misc::{commit, format_timestamp, get_optional},
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn optional_address(key: &str) -> Result<Option<Address>> {
    match get_optional(key)? {
        Some(value) => Ok(Some(schema::parse_address(key, &value)?)),
        None => Ok(None),
    }
}

/// Rebalancing Sets answer `manager()`, plain Sets revert on it
async fn inspect_set(protocol: &SetProtocol, set: Address) -> Result<()> {
    match protocol.set_token.get_rebalancing_details(set).await {
        Ok(details) => {
            tracing::info!(
                "Rebalancing Set {} ({}) | State: {} | Supply: {} | Current Set: {} | Unit shares: {}",
                details.name,
                details.symbol,
                details.state,
                details.supply,
                details.current_set,
                details.unit_shares
            );
            let next = details.last_rebalanced_at.saturating_add(details.rebalance_interval);
            tracing::info!("Last rebalance: {} | Next available: {}", format_timestamp(details.last_rebalanced_at.saturating_to::<u64>()), format_timestamp(next.saturating_to::<u64>()));
            match details.state {
                RebalanceState::Proposal => {
                    let proposal = protocol.rebalancing.get_proposal_details(set).await?;
                    tracing::info!("Proposal: {:?}", proposal);
                }
                RebalanceState::Rebalance => {
                    let progress = protocol.rebalancing.get_progress_details(set).await?;
                    tracing::info!("Auction progress: {:?}", progress);
                }
                _ => {}
            }
            let base = protocol.set_token.get_details(details.current_set).await?;
            tracing::info!("Base Set {}: components {:?} | units {:?} | natural unit {}", base.symbol, base.components, base.units, base.natural_unit);
        }
        Err(e) => {
            tracing::debug!("{} is not a Rebalancing Set ({}), reading it as a Set", set, e);
            let details = protocol.set_token.get_details(set).await?;
            tracing::info!(
                "Set {} ({}) | Factory: {} | Components: {:?} | Units: {:?} | Natural unit: {}",
                details.name,
                details.symbol,
                details.factory,
                details.components,
                details.units,
                details.natural_unit
            );
        }
    }
    Ok(())
}

async fn initialize() -> Result<()> {
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt().with_max_level(Level::TRACE).with_env_filter(filter).init();

    tracing::info!("Set Protocol SDK inspect | Commit: {}", commit().unwrap_or_else(|| "unknown".into()));
    let secrets = std::env::var("SECRET_PATH").unwrap_or_else(|_| "config/.env".to_string());
    tracing::info!("Loading secrets from: {}", secrets);
    dotenv::from_filename(secrets).ok();
    let env = EnvConfig::new()?;
    env.print();

    tracing::info!("Set Protocol Config Path: '{}'", env.path);
    let config = match load_set_protocol_config(env.path.as_str()) {
        Ok(config) => config,
        Err(e) => return Err(SetProtocolError::Config(format!("Failed to load config: {}", e))),
    };
    config.print();

    let protocol = SetProtocolBuilder::new(config).build()?;
    let latest = protocol.blockchain.latest_block().await?;
    let timestamp = protocol.blockchain.latest_timestamp().await?;
    tracing::info!("Connected to {} | 🧪 Testing mode: {:?} | Latest block: {} at {}", protocol.config.network_name, env.testing, latest, format_timestamp(timestamp));

    let supplies = protocol.protocol_viewer.batch_fetch_supplies(vec![protocol.addresses.weth]).await?;
    tracing::debug!("WETH supply: {:?}", supplies);

    if let Some(set) = optional_address("SET_ADDRESS")? {
        inspect_set(&protocol, set).await?;
    }

    if let Some(manager) = optional_address("MACO_MANAGER_ADDRESS")? {
        let details = protocol.maco_manager.get_maco_details(manager).await?;
        tracing::info!("MACO manager: {:?}", details);
        let prices = protocol.maco_manager.crossover_prices(&details).await?;
        tracing::info!("Risk asset price {} | Moving average {}", prices.risk_asset_price, prices.moving_average_price);
    }

    if let (Some(pool), Some(social)) = (optional_address("TRADING_POOL_ADDRESS")?, protocol.social_trading.as_ref()) {
        let details = social.fetch_trading_pool_details(pool).await?;
        tracing::info!("Trading pool {} ({}) | Trader: {} | Allocation: {}", details.name, details.symbol, details.trader, details.current_allocation);
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = initialize().await {
        tracing::error!("Inspect failed: {}", e);
        std::process::exit(1);
    }
}
