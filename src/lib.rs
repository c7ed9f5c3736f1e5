pub mod cli;
pub mod core;
pub mod providers;
pub mod screen;

use crate::core::config::{AppConfig, SourceKind};
use crate::core::currency::CurrencyCode;
use crate::core::rates::RateSource;
use crate::providers::{ExchangeRateApiSource, StaticCrossRateSource};
use crate::screen::ConverterScreen;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert {
        amount: String,
        from: CurrencyCode,
        to: CurrencyCode,
    },
    Rates,
    Interactive,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match config.source {
        SourceKind::Static => {
            let source = StaticCrossRateSource::new();
            match command {
                AppCommand::Convert { amount, from, to } => {
                    cli::convert::run_static(&source, &amount, from, to)
                }
                AppCommand::Rates => cli::rates::run_static(&source, &config).await,
                AppCommand::Interactive => cli::interactive::run_static(&source, &config),
            }
        }
        SourceKind::Live => {
            let api = config.providers.exchange_rate_api.as_ref().context(
                "Live rate source requires a providers.exchange_rate_api section; \
                 run `valuta setup` to create a config",
            )?;
            if api.api_key.is_empty() {
                anyhow::bail!(
                    "Missing API key for exchangerate-api.com; \
                     set providers.exchange_rate_api.api_key in the config"
                );
            }
            let source: Arc<dyn RateSource> =
                Arc::new(ExchangeRateApiSource::new(&api.base_url, &api.api_key)?);
            let screen = ConverterScreen::new(source, config.base);
            match command {
                AppCommand::Convert { amount, from, to } => {
                    cli::convert::run(&screen, &amount, from, to).await
                }
                AppCommand::Rates => cli::rates::run(&screen, &config).await,
                AppCommand::Interactive => cli::interactive::run(&screen, &config).await,
            }
        }
    }
}
