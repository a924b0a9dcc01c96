mod config;

pub use config::CatalogTables;

use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use figment::{Figment, providers::Env};
use serde::de::DeserializeOwned;

pub trait ContextProvider<Config> {
    fn new(
        config: Config,
        aws_config: aws_config::SdkConfig,
    ) -> impl Future<Output = Self>;
}

/// What services persisting catalog records start from: where each record
/// kind is stored and the AWS configuration to build their clients with.
#[derive(Debug, Clone)]
pub struct CatalogContext {
    pub tables: CatalogTables,
    pub aws_config: aws_config::SdkConfig,
}

impl ContextProvider<CatalogTables> for CatalogContext {
    async fn new(
        tables: CatalogTables,
        aws_config: aws_config::SdkConfig,
    ) -> Self {
        tracing::info!(
            rubrics = %tables.rubrics_table,
            series = %tables.series_table,
            series_rubrics = %tables.series_rubrics_table,
            episodes = %tables.episodes_table,
            free_episodes = %tables.free_episodes_table,
            "catalog tables configured"
        );

        Self { tables, aws_config }
    }
}

/// Installs the global JSON log subscriber.
///
/// # Panics
/// Panics if a global subscriber has already been installed.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_current_span(false)
        // ANSI color codes are noise in collected logs
        .with_ansi(false)
        // the log sink records ingestion time
        .without_time()
        .with_target(false)
        .init();
}

/// Extracts configuration from environment variables.
///
/// Variable names are matched case-insensitively against the fields of
/// `Config`.
///
/// # Errors
/// If a required variable is missing or cannot be parsed.
pub fn load_config<Config: DeserializeOwned>()
-> Result<Config, figment::Error> {
    let figment = Figment::new().merge(Env::raw());

    let config = figment.extract()?;
    tracing::debug!("configuration loaded from environment");

    Ok(config)
}

/// Initialize the application context with configuration from environment
/// variables.
/// The configuration is extracted using figment.
/// The AWS configuration is loaded using the default provider chain.
///
/// # Returns
/// The application context with the configuration and AWS configuration as
/// specified by the trait.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
///
/// # Panics
/// If tracing has already been initialized.
pub async fn create_app_context<A, Config>() -> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
    Config: DeserializeOwned,
{
    init_tracing();

    let config: Config = load_config().inspect_err(|e| {
        tracing::error!("failed to load configuration: {e}");
    })?;

    let region_provider =
        RegionProviderChain::default_provider().or_else("us-east-1");
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let context = A::new(config, aws_config).await;

    Ok(context)
}
