use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::core::currency::CurrencyCode;
use crate::core::rates::{FetchError, RateSource, RateTable};

/// The service has no documented latency bound; without a timeout a stalled
/// connection would hang the session forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Live rates from exchangerate-api.com, expressed relative to a base
/// currency. One request per fetch; no retries and no caching.
pub struct ExchangeRateApiSource {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExchangeRateApiSource {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("valuta/0.3")
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(ExchangeRateApiSource {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    // The service reports "success"/"error" here; any body that decodes is
    // accepted, so the field is only logged.
    #[serde(default)]
    result: String,
    conversion_rates: RateTable,
}

#[async_trait]
impl RateSource for ExchangeRateApiSource {
    async fn fetch_rates(&self, base: CurrencyCode) -> Result<RateTable, FetchError> {
        let url = format!("{}/v6/{}/latest/{}", self.base_url, self.api_key, base);
        debug!("Requesting exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if body.is_empty() {
            return Err(FetchError::Empty);
        }

        let data: LatestRatesResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(
            result = %data.result,
            rates = data.conversion_rates.len(),
            "Decoded rate response"
        );

        Ok(data.conversion_rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const API_KEY: &str = "test-key";

    async fn create_mock_server(base: &str, response: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/v6/{API_KEY}/latest/{base}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_response = r#"{
            "result": "success",
            "conversion_rates": {
                "USD": 1.0,
                "EUR": 0.92,
                "NGN": 1340.0
            }
        }"#;

        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let rates = source.fetch_rates(CurrencyCode::Usd).await.unwrap();

        assert_eq!(rates.len(), 3);
        assert_eq!(rates["USD"], 1.0);
        assert_eq!(rates["EUR"], 0.92);
        assert_eq!(rates["NGN"], 1340.0);
    }

    #[tokio::test]
    async fn test_rates_are_passed_through_verbatim() {
        // Codes outside the selectable set are kept; completeness is
        // checked at lookup time, not here.
        let mock_response = r#"{
            "result": "success",
            "conversion_rates": {"XYZ": 2.5}
        }"#;

        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let rates = source.fetch_rates(CurrencyCode::Usd).await.unwrap();
        assert_eq!(rates, RateTable::from([("XYZ".to_string(), 2.5)]));
    }

    #[tokio::test]
    async fn test_result_field_is_not_branched_upon() {
        let mock_response = r#"{
            "result": "error",
            "conversion_rates": {"USD": 1.0}
        }"#;

        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let rates = source.fetch_rates(CurrencyCode::Usd).await.unwrap();
        assert_eq!(rates["USD"], 1.0);
    }

    #[tokio::test]
    async fn test_empty_body_yields_empty_error() {
        let mock_server = create_mock_server("USD", ResponseTemplate::new(200)).await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let result = source.fetch_rates(CurrencyCode::Usd).await;

        assert!(matches!(result, Err(FetchError::Empty)));
    }

    #[tokio::test]
    async fn test_malformed_body_yields_decode_error() {
        let mock_response = r#"{"result": "success", "rates": {}}"#;

        let mock_server = create_mock_server(
            "USD",
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let result = source.fetch_rates(CurrencyCode::Usd).await;

        match result {
            Err(FetchError::Decode(message)) => {
                assert!(message.contains("conversion_rates"), "got: {message}");
            }
            other => panic!("Expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_failure_yields_network_error() {
        // Nothing listens on the discard port
        let source = ExchangeRateApiSource::new("http://127.0.0.1:9", API_KEY).unwrap();
        let result = source.fetch_rates(CurrencyCode::Usd).await;

        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[tokio::test]
    async fn test_base_currency_selects_endpoint() {
        let mock_response = r#"{
            "result": "success",
            "conversion_rates": {"EUR": 1.0, "USD": 1.09}
        }"#;

        let mock_server = create_mock_server(
            "EUR",
            ResponseTemplate::new(200).set_body_string(mock_response),
        )
        .await;

        let source = ExchangeRateApiSource::new(&mock_server.uri(), API_KEY).unwrap();
        let rates = source.fetch_rates(CurrencyCode::Eur).await.unwrap();
        assert_eq!(rates["USD"], 1.09);
    }
}
