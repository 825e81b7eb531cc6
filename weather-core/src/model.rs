use serde::{Deserialize, Serialize};

/// A trimmed, non-empty city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Trim the raw input; whitespace-only input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /get_weather`.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherRequest<'a> {
    pub city: &'a str,
}

/// Envelope returned by the backend on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentConditions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub description: String,
    #[serde(rename = "weather_icon")]
    pub icon: String,
    pub feels_like: f64,
    pub humidity: f64,
    #[serde(default)]
    pub wind_speed: f64,
    #[serde(default)]
    pub wind_direction: f64,
    pub pressure: f64,
    /// Kilometres.
    #[serde(default)]
    pub visibility: f64,
    #[serde(default)]
    pub weather_main: Option<String>,
    /// Epoch seconds.
    pub sunrise: i64,
    /// Epoch seconds.
    pub sunset: i64,
    /// Offset from UTC in seconds.
    pub timezone: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
    #[serde(default)]
    pub hourly: Vec<HourlyForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar date as `YYYY-MM-DD`.
    pub date: String,
    pub icon: String,
    pub description: String,
    pub temp_max: f64,
    pub temp_min: f64,
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Epoch seconds.
    pub timestamp: i64,
    pub icon: String,
    pub description: String,
    pub temperature: f64,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub wind_speed: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_trims_input() {
        let q = SearchQuery::parse("  New York \t").expect("non-empty");
        assert_eq!(q.as_str(), "New York");
    }

    #[test]
    fn search_query_rejects_whitespace() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse("   \n\t").is_none());
    }

    #[test]
    fn envelope_without_forecast_parses() {
        let json = serde_json::json!({
            "current": {
                "city": "Paris", "country": "FR", "temperature": 18,
                "description": "Clear Sky", "weather_icon": "01d",
                "feels_like": 17, "humidity": 60, "wind_speed": 3.5,
                "pressure": 1015, "visibility": 10,
                "sunrise": 1700000000, "sunset": 1700030000, "timezone": 3600
            }
        });

        let parsed: WeatherResponse = serde_json::from_value(json).expect("valid envelope");
        assert_eq!(parsed.current.city, "Paris");
        assert_eq!(parsed.current.icon, "01d");
        assert!(parsed.forecast.is_none());
    }
}
