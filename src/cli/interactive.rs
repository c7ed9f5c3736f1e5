//! Interactive conversion session

use crate::cli::ui;
use crate::core::config::AppConfig;
use crate::core::currency::CurrencyCode;
use crate::providers::StaticCrossRateSource;
use crate::screen::{ConverterScreen, Phase};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Welcome screen plus a read-eval loop. Rates are fetched once when the
/// session starts; every subsequent input line is recomputed against the
/// same table.
pub async fn run(screen: &ConverterScreen, config: &AppConfig) -> Result<()> {
    print_welcome(config);

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
        println!("Start a new session to try again.");
        return Ok(());
    }

    let stdin = std::io::stdin();
    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if is_quit(&line) {
            break;
        }
        match parse_request(&line, &config.currencies) {
            Ok((amount, from, to)) => {
                let result = screen.convert(&amount, from, to).await;
                println!(
                    "  {} {}",
                    ui::style_text(&result, ui::StyleType::ResultValue),
                    to
                );
            }
            Err(hint) => println!("  {}", ui::style_text(&hint, ui::StyleType::Subtle)),
        }
        print_prompt()?;
    }
    Ok(())
}

/// Same session loop against the built-in cross-rate tables; no fetch.
pub fn run_static(source: &StaticCrossRateSource, config: &AppConfig) -> Result<()> {
    print_welcome(config);

    let stdin = std::io::stdin();
    print_prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if is_quit(&line) {
            break;
        }
        match parse_request(&line, &config.currencies) {
            Ok((amount, from, to)) => {
                let result = source.convert(&amount, from, to);
                println!(
                    "  {} {}",
                    ui::style_text(&result, ui::StyleType::ResultValue),
                    to
                );
            }
            Err(hint) => println!("  {}", ui::style_text(&hint, ui::StyleType::Subtle)),
        }
        print_prompt()?;
    }
    Ok(())
}

fn print_welcome(config: &AppConfig) {
    println!("{}", ui::style_text("Welcome to valuta", ui::StyleType::Title));
    println!("Convert an amount between two currencies.\n");
    let codes: Vec<&str> = config.currencies.iter().map(|c| c.as_str()).collect();
    println!(
        "Available currencies: {}",
        ui::style_text(&codes.join(", "), ui::StyleType::Label)
    );
    println!("Enter {} (or 'q' to quit):", ui::style_text("AMOUNT FROM TO", ui::StyleType::Label));
}

fn print_prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim(), "q" | "quit" | "exit")
}

/// Parses one `AMOUNT FROM TO` input line. The amount is kept as text; the
/// converter owns its parsing rules. Currency codes must belong to the
/// selectable set.
fn parse_request(
    line: &str,
    currencies: &[CurrencyCode],
) -> Result<(String, CurrencyCode, CurrencyCode), String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [amount, from, to] = parts.as_slice() else {
        return Err("Expected: AMOUNT FROM TO (e.g. 100 USD EUR)".to_string());
    };

    let from = parse_selectable(from, currencies)?;
    let to = parse_selectable(to, currencies)?;
    Ok(((*amount).to_string(), from, to))
}

fn parse_selectable(text: &str, currencies: &[CurrencyCode]) -> Result<CurrencyCode, String> {
    let code: CurrencyCode = text
        .parse()
        .map_err(|_| format!("Unknown currency code: {text}"))?;
    if !currencies.contains(&code) {
        return Err(format!("{code} is not in the configured currency list"));
    }
    Ok(code)
}
