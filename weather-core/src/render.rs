//! Converts a [`WeatherResponse`] into display text.
//!
//! Everything here is pure: the viewer's time zone and "now" are supplied by
//! the caller, so the same response always renders the same way.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

use crate::model::{CurrentConditions, DailyForecast, HourlyForecast, WeatherResponse};

pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

const UNKNOWN_TIME: &str = "--:--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Current conditions.
    Large,
    /// Daily cards.
    Medium,
    /// Hourly cards.
    Small,
}

impl IconSize {
    pub fn suffix(&self) -> &'static str {
        match self {
            IconSize::Large => "@4x",
            IconSize::Medium => "@2x",
            IconSize::Small => "",
        }
    }
}

pub fn icon_url(code: &str, size: IconSize) -> String {
    format!("{ICON_BASE_URL}/{code}{}.png", size.suffix())
}

/// Clock time at the queried city: the offset is added to the instant, which
/// is then read as UTC. The viewer's own zone plays no part.
pub fn format_sun_time(timestamp: i64, utc_offset_secs: i64) -> String {
    timestamp
        .checked_add(utc_offset_secs)
        .and_then(|shifted| DateTime::from_timestamp(shifted, 0))
        .map(|at| at.format("%I:%M %p").to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCurrent {
    pub city_label: String,
    pub date_label: String,
    pub temperature: String,
    pub description: String,
    pub feels_like: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub visibility: String,
    pub sunrise: String,
    pub sunset: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyCard {
    pub day_label: String,
    pub day_month: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub temp_max: String,
    pub temp_min: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyCard {
    pub time_label: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub temperature: String,
}

/// Display fields for every region. `daily` and `hourly` are `None` when the
/// response carried no forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedWeather {
    pub current: RenderedCurrent,
    pub daily: Option<Vec<DailyCard>>,
    pub hourly: Option<Vec<HourlyCard>>,
}

#[derive(Debug, Clone)]
pub struct Renderer<Tz: TimeZone> {
    viewer_tz: Tz,
}

impl Renderer<Local> {
    pub fn local() -> Self {
        Self::new(Local)
    }
}

impl<Tz> Renderer<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(viewer_tz: Tz) -> Self {
        Self { viewer_tz }
    }

    pub fn render(&self, weather: &WeatherResponse, now: DateTime<Utc>) -> RenderedWeather {
        let forecast = weather.forecast.as_ref();
        RenderedWeather {
            current: self.render_current(&weather.current, now),
            daily: forecast.map(|f| f.daily.iter().enumerate().map(render_daily).collect()),
            hourly: forecast.map(|f| f.hourly.iter().map(|h| self.render_hourly(h)).collect()),
        }
    }

    fn render_current(&self, current: &CurrentConditions, now: DateTime<Utc>) -> RenderedCurrent {
        RenderedCurrent {
            city_label: format!("{}, {}", current.city, current.country),
            date_label: self.format_current_date(now),
            temperature: current.temperature.to_string(),
            description: current.description.clone(),
            feels_like: format!("Feels like {}°C", current.feels_like),
            icon_url: icon_url(&current.icon, IconSize::Large),
            icon_alt: current.description.clone(),
            humidity: format!("{}%", current.humidity),
            wind_speed: format!("{} m/s", current.wind_speed),
            pressure: format!("{} hPa", current.pressure),
            visibility: format!("{} km", current.visibility),
            sunrise: format_sun_time(current.sunrise, current.timezone),
            sunset: format_sun_time(current.sunset, current.timezone),
        }
    }

    /// e.g. "Wednesday, October 14, 2026" in the viewer's zone.
    pub fn format_current_date(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.viewer_tz).format("%A, %B %-d, %Y").to_string()
    }

    fn render_hourly(&self, hour: &HourlyForecast) -> HourlyCard {
        let time_label = DateTime::from_timestamp(hour.timestamp, 0)
            .map(|at| at.with_timezone(&self.viewer_tz).format("%-I %p").to_string())
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());

        HourlyCard {
            time_label,
            icon_url: icon_url(&hour.icon, IconSize::Small),
            icon_alt: hour.description.clone(),
            temperature: format!("{}°", hour.temperature),
        }
    }
}

fn render_daily((index, day): (usize, &DailyForecast)) -> DailyCard {
    let date = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d").ok();

    let day_label = match (index, date) {
        (0, _) => "Today".to_string(),
        (_, Some(d)) => d.format("%a").to_string(),
        (_, None) => day.date.clone(),
    };
    let day_month = date
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| day.date.clone());

    DailyCard {
        day_label,
        day_month,
        icon_url: icon_url(&day.icon, IconSize::Medium),
        icon_alt: day.description.clone(),
        temp_max: format!("{}°", day.temp_max),
        temp_min: format!("{}°", day.temp_min),
        description: day.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Forecast;
    use chrono::FixedOffset;

    fn current() -> CurrentConditions {
        CurrentConditions {
            city: "Paris".into(),
            country: "FR".into(),
            temperature: 18.0,
            description: "Clear Sky".into(),
            icon: "01d".into(),
            feels_like: 17.0,
            humidity: 60.0,
            wind_speed: 3.5,
            wind_direction: 220.0,
            pressure: 1015.0,
            visibility: 10.0,
            weather_main: Some("Clear".into()),
            sunrise: 1700000000,
            sunset: 1700030000,
            timezone: 3600,
        }
    }

    fn day(date: &str) -> DailyForecast {
        DailyForecast {
            date: date.into(),
            icon: "10d".into(),
            description: "Light Rain".into(),
            temp_max: 12.0,
            temp_min: 4.0,
            timestamp: None,
            humidity: None,
            wind_speed: None,
        }
    }

    fn hour(timestamp: i64, temperature: f64) -> HourlyForecast {
        HourlyForecast {
            timestamp,
            icon: "02n".into(),
            description: "Few Clouds".into(),
            temperature,
            time: None,
            humidity: None,
            wind_speed: None,
        }
    }

    fn utc_renderer() -> Renderer<Utc> {
        Renderer::new(Utc)
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-14T12:00:00Z").unwrap().with_timezone(&Utc)
    }

    #[test]
    fn current_panel_labels() {
        let weather = WeatherResponse { current: current(), forecast: None };
        let out = utc_renderer().render(&weather, now()).current;

        assert_eq!(out.city_label, "Paris, FR");
        assert_eq!(out.temperature, "18");
        assert_eq!(out.feels_like, "Feels like 17°C");
        assert_eq!(out.humidity, "60%");
        assert_eq!(out.wind_speed, "3.5 m/s");
        assert_eq!(out.pressure, "1015 hPa");
        assert_eq!(out.visibility, "10 km");
        assert_eq!(out.icon_url, "https://openweathermap.org/img/wn/01d@4x.png");
        assert_eq!(out.icon_alt, "Clear Sky");
        assert_eq!(out.date_label, "Wednesday, October 14, 2026");
    }

    #[test]
    fn sun_times_use_city_offset_not_viewer_zone() {
        // 1700000000 + 3600 = 2023-11-14 23:13:20 UTC
        assert_eq!(format_sun_time(1700000000, 3600), "11:13 PM");
        assert_eq!(format_sun_time(1700030000, 3600), "07:33 AM");

        let far_west = Renderer::new(FixedOffset::west_opt(8 * 3600).unwrap());
        let weather = WeatherResponse { current: current(), forecast: None };
        let out = far_west.render(&weather, now()).current;
        assert_eq!(out.sunrise, "11:13 PM");
        assert_eq!(out.sunset, "07:33 AM");
    }

    #[test]
    fn current_date_follows_viewer_zone() {
        let late = DateTime::parse_from_rfc3339("2026-10-14T23:30:00Z").unwrap().with_timezone(&Utc);
        let tokyo = Renderer::new(FixedOffset::east_opt(9 * 3600).unwrap());
        assert_eq!(tokyo.format_current_date(late), "Thursday, October 15, 2026");
    }

    #[test]
    fn daily_cards_keep_order_and_label_today() {
        let weather = WeatherResponse {
            current: current(),
            forecast: Some(Forecast {
                daily: vec![day("2023-11-14"), day("2023-11-15"), day("2023-11-13")],
                hourly: vec![],
            }),
        };
        let daily = utc_renderer().render(&weather, now()).daily.unwrap();

        let labels: Vec<_> = daily.iter().map(|d| d.day_label.as_str()).collect();
        assert_eq!(labels, ["Today", "Wed", "Mon"]);
        assert_eq!(daily[0].day_month, "Nov 14");
        assert_eq!(daily[1].day_month, "Nov 15");
        assert_eq!(daily[1].temp_max, "12°");
        assert_eq!(daily[1].temp_min, "4°");
        assert_eq!(daily[1].icon_url, "https://openweathermap.org/img/wn/10d@2x.png");
    }

    #[test]
    fn hourly_cards_use_viewer_zone_twelve_hour_clock() {
        let weather = WeatherResponse {
            current: current(),
            forecast: Some(Forecast {
                daily: vec![],
                hourly: vec![hour(1700000000, 9.0), hour(1700010800, 7.0)],
            }),
        };

        let hourly = utc_renderer().render(&weather, now()).hourly.unwrap();
        assert_eq!(hourly[0].time_label, "10 PM");
        assert_eq!(hourly[1].time_label, "1 AM");
        assert_eq!(hourly[0].temperature, "9°");
        assert_eq!(hourly[0].icon_url, "https://openweathermap.org/img/wn/02n.png");

        let new_york = Renderer::new(FixedOffset::west_opt(5 * 3600).unwrap());
        let hourly = new_york.render(&weather, now()).hourly.unwrap();
        assert_eq!(hourly[0].time_label, "5 PM");
    }

    #[test]
    fn missing_forecast_renders_no_cards() {
        let weather = WeatherResponse { current: current(), forecast: None };
        let out = utc_renderer().render(&weather, now());
        assert!(out.daily.is_none());
        assert!(out.hourly.is_none());
    }

    #[test]
    fn unparsable_daily_date_falls_back_to_raw_text() {
        let card = render_daily((2, &day("soon")));
        assert_eq!(card.day_label, "soon");
        assert_eq!(card.day_month, "soon");
    }
}
