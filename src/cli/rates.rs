//! Rate table display command

use crate::cli::ui;
use crate::core::config::AppConfig;
use crate::core::currency::CurrencyCode;
use crate::core::rates::RateTable;
use crate::providers::StaticCrossRateSource;
use crate::screen::{ConverterScreen, Phase};
use anyhow::Result;
use comfy_table::Cell;

/// Fetches and displays the live rate table for the selectable currencies.
pub async fn run(screen: &ConverterScreen, config: &AppConfig) -> Result<()> {
    let spinner = ui::new_spinner("Fetching exchange rates...");
    if let Some(handle) = screen.activate().await {
        handle.await?;
    }
    spinner.finish_and_clear();

    if screen.phase().await == Phase::Failed {
        let message = screen
            .error_message()
            .await
            .unwrap_or_else(|| "Rate fetch failed".to_string());
        println!("{}", ui::style_text(&message, ui::StyleType::Error));
        return Ok(());
    }

    let rates = screen.rates().await.unwrap_or_default();
    print_table(screen.base(), &config.currencies, &rates);
    Ok(())
}

/// Displays the built-in cross-rate row for the configured base.
pub async fn run_static(source: &StaticCrossRateSource, config: &AppConfig) -> Result<()> {
    use crate::core::rates::RateSource;

    let rates = source
        .fetch_rates(config.base)
        .await
        .unwrap_or_default();
    print_table(config.base, &config.currencies, &rates);
    Ok(())
}

fn print_table(base: CurrencyCode, currencies: &[CurrencyCode], rates: &RateTable) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Rate per 1 {base}")),
    ]);

    for currency in currencies {
        table.add_row(vec![
            Cell::new(currency.as_str()),
            ui::rate_cell(rates.get(currency.as_str()).copied()),
        ]);
    }

    println!(
        "Exchange rates ({})\n",
        ui::style_text(base.as_str(), ui::StyleType::Label)
    );
    println!("{table}");
}
