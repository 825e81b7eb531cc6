//! Core library for the `weather` client.
//!
//! This crate defines:
//! - Configuration handling
//! - Last-search persistence over a key-value store
//! - The gateway to the backend `POST /get_weather` endpoint
//! - Rendering of weather responses into display text
//! - The UI state controller that ties them together behind a view handle
//!
//! It is used by `weather-cli`, but any presentation surface implementing
//! [`WeatherView`] can drive it.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod model;
pub mod render;
pub mod store;
pub mod view;

pub use config::Config;
pub use controller::{Controller, Intent, Timings, UiState};
pub use error::{StoreError, WeatherError};
pub use gateway::{HttpGateway, WeatherGateway};
pub use model::{SearchQuery, WeatherResponse};
pub use render::{RenderedWeather, Renderer};
pub use store::{FileStore, KeyValueStore, LastSearch, MemoryStore};
pub use view::{MemoryView, Panel, WeatherView};
