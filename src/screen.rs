//! Conversion session state: rate fetching and recomputation

use crate::core::convert;
use crate::core::currency::CurrencyCode;
use crate::core::rates::{RateSource, RateTable};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

/// Lifecycle of a conversion session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug)]
struct ScreenState {
    phase: Phase,
    rates: Option<RateTable>,
    error_message: Option<String>,
}

/// Owns the rate table for one session and recomputes conversions against
/// it. Activation triggers at most one fetch; a session that already holds
/// a table keeps serving it without any freshness check.
pub struct ConverterScreen {
    state: Arc<Mutex<ScreenState>>,
    source: Arc<dyn RateSource>,
    base: CurrencyCode,
}

impl ConverterScreen {
    pub fn new(source: Arc<dyn RateSource>, base: CurrencyCode) -> Self {
        ConverterScreen {
            state: Arc::new(Mutex::new(ScreenState {
                phase: Phase::Idle,
                rates: None,
                error_message: None,
            })),
            source,
            base,
        }
    }

    /// Starts the rate fetch for this session, returning a handle to the
    /// in-flight task. Returns `None` when no fetch is needed: a table is
    /// already held, or one fetch is already running.
    ///
    /// The spawned task keeps only a weak reference to the session state.
    /// If the screen is dropped mid-fetch the completion is a no-op instead
    /// of a write to a dead session.
    pub async fn activate(&self) -> Option<JoinHandle<()>> {
        let mut state = self.state.lock().await;
        if state.rates.is_some() {
            debug!("Rate table already held, skipping fetch");
            return None;
        }
        if state.phase == Phase::Loading {
            debug!("Fetch already in flight");
            return None;
        }
        state.phase = Phase::Loading;
        drop(state);

        let weak = Arc::downgrade(&self.state);
        let source = Arc::clone(&self.source);
        let base = self.base;
        Some(tokio::spawn(async move {
            let outcome = source.fetch_rates(base).await;
            let Some(state) = weak.upgrade() else {
                debug!("Screen dismissed before fetch completed");
                return;
            };
            let mut state = state.lock().await;
            match outcome {
                Ok(table) => {
                    debug!(rates = table.len(), "Rate fetch succeeded");
                    state.rates = Some(table);
                    state.phase = Phase::Ready;
                }
                Err(err) => {
                    debug!(error = %err, "Rate fetch failed");
                    // A previously held table stays usable; the error
                    // message is sticky for the rest of the activation.
                    state.error_message = Some(err.to_string());
                    state.phase = Phase::Failed;
                }
            }
        }))
    }

    /// Recomputes a conversion against the held table. With no table held
    /// every conversion renders the fallback result.
    pub async fn convert(&self, amount_text: &str, from: CurrencyCode, to: CurrencyCode) -> String {
        let state = self.state.lock().await;
        match &state.rates {
            Some(rates) => convert::convert(amount_text, from, to, rates),
            None => convert::FALLBACK_RESULT.to_string(),
        }
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    pub async fn error_message(&self) -> Option<String> {
        self.state.lock().await.error_message.clone()
    }

    pub async fn rates(&self) -> Option<RateTable> {
        self.state.lock().await.rates.clone()
    }

    pub fn base(&self) -> CurrencyCode {
        self.base
    }
}
