use thiserror::Error;

/// Generic message shown when the backend reports a failure without details.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data";

/// Generic message shown for transport failures.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Message shown when a search is submitted with an empty city.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Failures of one weather search. Every variant ends in the error panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("{}", EMPTY_CITY_MESSAGE)]
    Validation,

    /// Connection refused, timeout or a body that is not valid JSON.
    /// `detail` is kept for diagnostics only.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Transport { detail: String },

    /// Non-2xx status with a JSON body.
    #[error("{message}")]
    Backend { status: u16, message: String },
}

impl WeatherError {
    /// Human-readable text for the error panel.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}

/// Failures of the key-value store behind the last-search adapter.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("store contents could not be encoded or decoded: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
