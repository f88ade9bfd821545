//! Historical facts about calendar dates, used to decorate birthday messages.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::models::MonthDay;
use crate::utils::message_formatter::{build_date_fallback_fact, build_generic_fallback_fact};
use crate::utils::validation::parse_birthday_date;

/// Errors that can occur while fetching a fact.
#[derive(Debug, thiserror::Error)]
pub enum FactError {
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Facts service returned status {0}")]
    UnexpectedStatus(u16),
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("Facts service returned an empty body")]
    EmptyBody,
    #[error("Cannot look up facts for date '{0}'")]
    InvalidDate(String),
}

/// Something that knows a fact about a calendar date.
#[async_trait]
pub trait FactSource: Send + Sync {
    async fn fetch_fact(&self, date: MonthDay) -> Result<String, FactError>;
}

/// Client for the numbersapi.com date facts endpoint.
pub struct NumbersApiClient {
    http_client: Client,
    base_url: String,
}

impl NumbersApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn date_url(&self, date: MonthDay) -> String {
        format!("{}/{}/{}/date", self.base_url, date.month, date.day)
    }
}

#[async_trait]
impl FactSource for NumbersApiClient {
    async fn fetch_fact(&self, date: MonthDay) -> Result<String, FactError> {
        let response = self
            .http_client
            .get(self.date_url(date))
            .send()
            .await
            .map_err(FactError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FactError::UnexpectedStatus(status.as_u16()));
        }

        let fact = response.text().await.map_err(FactError::Body)?;
        let fact = fact.trim();
        if fact.is_empty() {
            return Err(FactError::EmptyBody);
        }

        Ok(fact.to_string())
    }
}

/// Pick the fallback sentence for a failed lookup.
///
/// An error status still names the date; anything else gets the generic line.
pub fn fallback_fact(error: &FactError, date: Option<MonthDay>) -> String {
    match (error, date) {
        (FactError::UnexpectedStatus(_), Some(date)) => {
            build_date_fallback_fact(date.month, date.day)
        }
        _ => build_generic_fallback_fact(),
    }
}

/// Get a fact for a stored `M/D` date, never failing.
pub async fn historical_fact(source: &dyn FactSource, date: &str) -> String {
    let (error, month_day) = match parse_birthday_date(date) {
        Ok(month_day) => match source.fetch_fact(month_day).await {
            Ok(fact) => return fact,
            Err(e) => (e, Some(month_day)),
        },
        Err(_) => (FactError::InvalidDate(date.to_string()), None),
    };

    warn!("Error fetching historical fact for {}: {}", date, error);
    fallback_fact(&error, month_day)
}
