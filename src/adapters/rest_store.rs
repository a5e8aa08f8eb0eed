use crate::domain::model::{NewOffer, OfferRecord};
use crate::domain::ports::{OfferStore, StoreConfigProvider};
use crate::utils::error::{OfferError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Offers table behind a PostgREST-style endpoint (`{url}/rest/v1/{table}`).
pub struct RestOfferStore {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RestOfferStore {
    pub fn new<C: StoreConfigProvider>(config: &C) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client<C: StoreConfigProvider>(client: Client, config: &C) -> Self {
        let endpoint = format!(
            "{}/rest/v1/{}",
            config.store_url().trim_end_matches('/'),
            config.table()
        );

        Self {
            client,
            endpoint,
            api_key: config.api_key().to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Pulls the `message` out of a PostgREST error body, falling back to the raw text.
fn store_error_message(status: StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(|m| m.as_str());

    match message {
        Some(message) => message.to_string(),
        None if body.trim().is_empty() => status
            .canonical_reason()
            .unwrap_or("empty response")
            .to_string(),
        None => body.trim().to_string(),
    }
}

/// The store answers with the created row, either bare or wrapped in a one-element array.
fn parse_inserted_row(status: StatusCode, body: &str) -> Result<OfferRecord> {
    let missing_row = || OfferError::PersistenceError {
        status: status.as_u16(),
        message: "store did not return the inserted row".to_string(),
    };

    if body.trim().is_empty() {
        return Err(missing_row());
    }

    let value: serde_json::Value = serde_json::from_str(body)?;

    let row = match value {
        serde_json::Value::Array(rows) => rows.into_iter().next(),
        serde_json::Value::Null => None,
        row => Some(row),
    };

    let row = row.ok_or_else(missing_row)?;

    Ok(serde_json::from_value(row)?)
}

#[async_trait]
impl OfferStore for RestOfferStore {
    async fn insert_offer(&self, offer: &NewOffer) -> Result<OfferRecord> {
        tracing::debug!("Making insert request to: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
            .json(offer)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Store response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(OfferError::PersistenceError {
                status: status.as_u16(),
                message: store_error_message(status, &body),
            });
        }

        parse_inserted_row(status, &body)
    }
}
