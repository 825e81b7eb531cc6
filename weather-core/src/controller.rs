//! The search lifecycle: `Idle -> Loading -> (Result | Error)`, plus clearing
//! and restoring the last search.
//!
//! All user-triggered input arrives as an [`Intent`] through
//! [`Controller::dispatch`]. The only suspension point is the gateway call;
//! a `Submit` that arrives while a request is pending is ignored. Dropping a
//! `dispatch(Submit)` future mid-request returns the controller to `Idle`.

use chrono::{Local, TimeZone, Utc};
use std::{fmt::Display, time::Duration};
use tokio::time::Instant;

use crate::{
    Config,
    error::WeatherError,
    gateway::WeatherGateway,
    model::{SearchQuery, WeatherResponse},
    render::Renderer,
    store::{KeyValueStore, LastSearch},
    view::{LOADING_LABEL, Panel, SEARCH_LABEL, WeatherView},
};

#[derive(Debug, Clone, PartialEq)]
pub enum UiState {
    Idle,
    Loading,
    Result(Box<WeatherResponse>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Search button or Enter key.
    Submit,
    Clear,
    /// The input field now holds this text.
    InputChanged(String),
    /// The restore indicator's display time is over.
    IndicatorElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub restore_delay: Duration,
    pub indicator: Duration,
}

impl Timings {
    pub const ZERO: Timings = Timings { restore_delay: Duration::ZERO, indicator: Duration::ZERO };

    pub fn from_config(config: &Config) -> Self {
        Self { restore_delay: config.restore_delay(), indicator: config.indicator_duration() }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Held across the gateway call. Dropping it, whether the call finished or its
/// future was dropped, hides the loading panel and re-enables the trigger. A
/// search abandoned mid-flight leaves the controller `Idle`.
struct PendingSearch<'a, V: WeatherView> {
    view: &'a mut V,
    state: &'a mut UiState,
}

impl<V: WeatherView> Drop for PendingSearch<'_, V> {
    fn drop(&mut self) {
        self.view.set_panel_visible(Panel::Loading, false);
        self.view.set_trigger(true, SEARCH_LABEL);
        if *self.state == UiState::Loading {
            *self.state = UiState::Idle;
        }
    }
}

pub struct Controller<G, S, V, Tz: TimeZone = Local> {
    gateway: G,
    last_search: LastSearch<S>,
    view: V,
    renderer: Renderer<Tz>,
    timings: Timings,
    state: UiState,
    indicator_deadline: Option<Instant>,
}

impl<G, S, V, Tz> Controller<G, S, V, Tz>
where
    G: WeatherGateway,
    S: KeyValueStore,
    V: WeatherView,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(gateway: G, store: S, view: V, renderer: Renderer<Tz>, timings: Timings) -> Self {
        Self {
            gateway,
            last_search: LastSearch::new(store),
            view,
            renderer,
            timings,
            state: UiState::Idle,
            indicator_deadline: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn last_search(&self) -> &LastSearch<S> {
        &self.last_search
    }

    /// When the restore indicator should be hidden, if it is showing.
    pub fn indicator_deadline(&self) -> Option<Instant> {
        self.indicator_deadline
    }

    pub async fn dispatch(&mut self, intent: Intent) -> &UiState {
        tracing::debug!(?intent, state = ?self.state, "Dispatching intent");
        match intent {
            Intent::Submit => self.submit().await,
            Intent::Clear => self.clear(),
            Intent::InputChanged(text) => self.input_changed(&text),
            Intent::IndicatorElapsed => self.hide_indicator(),
        }
        &self.state
    }

    /// Page-load behavior: focus the input and, if a city is remembered,
    /// show the indicator, fill the input and search for it after a short delay.
    pub async fn startup(&mut self) -> &UiState {
        self.refresh_clear_visibility();
        self.view.focus_input();

        if let Some(city) = self.last_search.load().filter(|c| !c.is_empty()) {
            tracing::info!(%city, "Restoring last search");
            self.view.set_panel_visible(Panel::LastSearchIndicator, true);
            self.indicator_deadline = Some(Instant::now() + self.timings.indicator);
            self.view.set_input_text(&city);
            self.refresh_clear_visibility();

            tokio::time::sleep(self.timings.restore_delay).await;
            self.submit().await;
        }
        &self.state
    }

    async fn submit(&mut self) {
        if self.state == UiState::Loading {
            tracing::debug!("Search already in flight; ignoring submit");
            return;
        }

        let Some(query) = SearchQuery::parse(&self.view.input_text()) else {
            self.show_error(&WeatherError::Validation.user_message());
            return;
        };

        self.show_loading();
        let outcome = {
            let _pending = PendingSearch { view: &mut self.view, state: &mut self.state };
            self.gateway.fetch_weather(query.as_str()).await
        };

        match outcome {
            Ok(weather) => {
                // Failure is already logged by the adapter and never blocks display.
                let _ = self.last_search.save(query.as_str());
                tracing::info!(city = %query, "Weather loaded");
                self.display(weather);
            }
            Err(err) => {
                tracing::debug!(city = %query, ?err, "Weather search failed");
                self.show_error(&err.user_message());
            }
        }
    }

    fn clear(&mut self) {
        // Failure is logged by the adapter; the rest of the reset still happens.
        let _ = self.last_search.clear();
        self.view.set_input_text("");
        self.view.set_panel_visible(Panel::Result, false);
        self.view.set_panel_visible(Panel::Error, false);
        self.refresh_clear_visibility();
        self.view.focus_input();
        self.state = UiState::Idle;
    }

    fn input_changed(&mut self, text: &str) {
        self.view.set_input_text(text);
        if text.is_empty() {
            self.refresh_clear_visibility();
        } else {
            self.view.set_clear_visible(true);
        }
    }

    fn display(&mut self, weather: WeatherResponse) {
        let rendered = self.renderer.render(&weather, Utc::now());

        self.view.render_current(&rendered.current);
        if let Some(daily) = &rendered.daily {
            self.view.render_daily(daily);
        }
        if let Some(hourly) = &rendered.hourly {
            self.view.render_hourly(hourly);
        }

        self.view.set_panel_visible(Panel::Error, false);
        self.view.set_panel_visible(Panel::Result, true);
        self.state = UiState::Result(Box::new(weather));
    }

    fn show_loading(&mut self) {
        self.view.set_panel_visible(Panel::Loading, true);
        self.view.set_panel_visible(Panel::Result, false);
        self.view.set_panel_visible(Panel::Error, false);
        self.hide_indicator();
        self.view.set_trigger(false, LOADING_LABEL);
        self.state = UiState::Loading;
    }

    fn show_error(&mut self, message: &str) {
        self.view.set_error_text(message);
        self.view.set_panel_visible(Panel::Error, true);
        self.view.set_panel_visible(Panel::Result, false);
        self.state = UiState::Error(message.to_string());
    }

    fn hide_indicator(&mut self) {
        self.indicator_deadline = None;
        self.view.set_panel_visible(Panel::LastSearchIndicator, false);
    }

    fn refresh_clear_visibility(&mut self) {
        let visible = self.last_search.has_saved();
        self.view.set_clear_visible(visible);
    }
}
