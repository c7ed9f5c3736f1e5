//! One-shot conversion command

use crate::cli::ui;
use crate::core::currency::CurrencyCode;
use crate::providers::StaticCrossRateSource;
use crate::screen::{ConverterScreen, Phase};
use anyhow::Result;

/// Runs a single conversion against a live session: activate, wait for the
/// fetch, then render the result or the fetch error.
pub async fn run(
    screen: &ConverterScreen,
    amount: &str,
    from: CurrencyCode,
    to: CurrencyCode,
) -> Result<()> {
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

    let result = screen.convert(amount, from, to).await;
    print_conversion(amount, from, to, &result);
    Ok(())
}

/// Runs a single conversion against the built-in cross-rate tables.
pub fn run_static(
    source: &StaticCrossRateSource,
    amount: &str,
    from: CurrencyCode,
    to: CurrencyCode,
) -> Result<()> {
    let result = source.convert(amount, from, to);
    print_conversion(amount, from, to, &result);
    Ok(())
}

fn print_conversion(amount: &str, from: CurrencyCode, to: CurrencyCode, result: &str) {
    println!(
        "{} {} = {} {}",
        amount,
        from,
        ui::style_text(result, ui::StyleType::ResultValue),
        to
    );
}
