use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use thiserror::Error;

use crate::data_mgmt::models::{AqiValue, Record};
use crate::settings::ApiSettings;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Request(#[from] ureq::Error),
    #[error("could not decode feed response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("feed API error: {0}")]
    Api(String),
}

/// The feed answers HTTP 200 for API-level failures as well, with the error
/// message in `data`.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FeedResponse {
    Ok { data: FeedData },
    Error { data: String },
}

#[derive(Debug, Deserialize)]
struct FeedData {
    aqi: AqiValue,
    time: FeedTime,
}

#[derive(Debug, Deserialize)]
struct FeedTime {
    iso: DateTime<FixedOffset>,
}

pub struct Fetcher {
    agent: ureq::Agent,
    base_url: String,
    token: Secret<String>,
}

impl Fetcher {
    pub fn new(api: &ApiSettings, token: Secret<String>) -> Result<Self> {
        let agent = ureq::AgentBuilder::new()
            .tls_connector(Arc::new(native_tls::TlsConnector::new()?))
            .timeout(Duration::from_secs(api.timeout_secs))
            .build();

        Ok(Self {
            agent,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetch the latest measurement for each city. A city whose request or
    /// response handling fails is logged and contributes no entry this cycle.
    pub fn fetch_latest(&self, cities: &[String]) -> HashMap<String, Record> {
        let mut records = HashMap::new();
        for city in cities {
            match self.fetch_city(city) {
                Ok(record) => {
                    records.insert(city.clone(), record);
                }
                Err(e) => log::error!("Could not fetch feed for {city}: {e}"),
            }
        }
        records
    }

    fn fetch_city(&self, city: &str) -> Result<Record, FetchError> {
        let url = format!(
            "{}/feed/{}/?token={}",
            self.base_url,
            city,
            self.token.expose_secret()
        );
        let response = self.agent.get(&url).call()?;
        match response.into_json::<FeedResponse>()? {
            FeedResponse::Ok { data } => Ok(Record {
                aqi: data.aqi,
                time: data.time.iso,
            }),
            FeedResponse::Error { data } => Err(FetchError::Api(data)),
        }
    }
}

/// Read the API token, stripping surrounding whitespace. The file typically
/// ends in a newline, which must not end up in request URLs.
pub fn read_token(path: &Path) -> Result<Secret<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read API token from {}", path.display()))?;
    let token = raw.trim();
    if token.is_empty() {
        bail!("API token file {} is empty", path.display());
    }
    Ok(Secret::new(token.to_string()))
}
