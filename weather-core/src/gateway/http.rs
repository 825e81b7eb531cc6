use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::{
    error::{FETCH_FAILED_MESSAGE, WeatherError},
    model::{WeatherRequest, WeatherResponse},
};

use super::{WEATHER_PATH, WeatherGateway};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    base_url: String,
    http: Client,
}

impl HttpGateway {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl WeatherGateway for HttpGateway {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        let url = format!("{}{}", self.base_url, WEATHER_PATH);
        tracing::debug!(%url, city, "Requesting weather");

        let res = self
            .http
            .post(&url)
            .json(&WeatherRequest { city })
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(transport);
        }

        // A non-2xx body that is not JSON counts as a transport failure.
        let parsed: serde_json::Value = serde_json::from_str(&body).map_err(transport)?;
        let message = parsed
            .get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(FETCH_FAILED_MESSAGE)
            .to_string();

        tracing::warn!(status = status.as_u16(), "Backend rejected weather request: {message}");
        Err(WeatherError::Backend { status: status.as_u16(), message })
    }
}

fn transport(err: impl std::fmt::Display) -> WeatherError {
    let detail = err.to_string();
    tracing::error!("Error fetching weather: {detail}");
    WeatherError::Transport { detail }
}
