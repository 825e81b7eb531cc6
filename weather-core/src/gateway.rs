use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WeatherResponse, error::WeatherError};

pub mod http;

pub use http::HttpGateway;

/// Backend path serving weather lookups.
pub const WEATHER_PATH: &str = "/get_weather";

/// One outbound weather lookup.
///
/// Implementations never panic on bad input or bad responses: every failure
/// resolves to [`WeatherError::Transport`] or [`WeatherError::Backend`].
#[async_trait]
pub trait WeatherGateway: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError>;
}

#[async_trait]
impl<T: WeatherGateway + ?Sized> WeatherGateway for Box<T> {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherResponse, WeatherError> {
        (**self).fetch_weather(city).await
    }
}

/// Construct the HTTP gateway from config.
pub fn gateway_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherGateway>> {
    let gateway = HttpGateway::new(&config.backend_url, config.timeout())?;
    Ok(Box::new(gateway))
}
