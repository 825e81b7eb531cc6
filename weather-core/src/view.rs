use std::collections::BTreeSet;

use crate::render::{DailyCard, HourlyCard, RenderedCurrent};

pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_LABEL: &str = "Loading...";

/// Regions that are shown or hidden as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    Loading,
    Result,
    Error,
    LastSearchIndicator,
}

/// Handle to the presentation surface the controller drives.
pub trait WeatherView {
    fn set_panel_visible(&mut self, panel: Panel, visible: bool);

    /// Enabled flag and label of the control that starts a search.
    fn set_trigger(&mut self, enabled: bool, label: &str);

    fn set_error_text(&mut self, message: &str);

    fn input_text(&self) -> String;
    fn set_input_text(&mut self, text: &str);
    fn focus_input(&mut self);

    fn set_clear_visible(&mut self, visible: bool);

    fn render_current(&mut self, current: &RenderedCurrent);

    /// Replaces the daily container's contents.
    fn render_daily(&mut self, cards: &[DailyCard]);

    /// Replaces the hourly container's contents.
    fn render_hourly(&mut self, cards: &[HourlyCard]);
}

/// A view that only records what it was told. Used headless and in tests.
#[derive(Debug, Clone)]
pub struct MemoryView {
    pub visible: BTreeSet<Panel>,
    pub trigger_enabled: bool,
    pub trigger_label: String,
    pub error_text: String,
    pub input: String,
    pub input_focused: bool,
    pub clear_visible: bool,
    pub current: Option<RenderedCurrent>,
    pub daily: Vec<DailyCard>,
    pub hourly: Vec<HourlyCard>,
    /// Every panel ever made visible, in order.
    pub shown_history: Vec<Panel>,
    /// Every trigger update as `(enabled, label)`, in order.
    pub trigger_history: Vec<(bool, String)>,
}

impl Default for MemoryView {
    fn default() -> Self {
        Self {
            visible: BTreeSet::new(),
            trigger_enabled: true,
            trigger_label: SEARCH_LABEL.to_string(),
            error_text: String::new(),
            input: String::new(),
            input_focused: false,
            clear_visible: false,
            current: None,
            daily: Vec::new(),
            hourly: Vec::new(),
            shown_history: Vec::new(),
            trigger_history: Vec::new(),
        }
    }
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }
}

impl WeatherView for MemoryView {
    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        if visible {
            self.visible.insert(panel);
            self.shown_history.push(panel);
        } else {
            self.visible.remove(&panel);
        }
    }

    fn set_trigger(&mut self, enabled: bool, label: &str) {
        self.trigger_enabled = enabled;
        self.trigger_label = label.to_string();
        self.trigger_history.push((enabled, label.to_string()));
    }

    fn set_error_text(&mut self, message: &str) {
        self.error_text = message.to_string();
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn focus_input(&mut self) {
        self.input_focused = true;
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }

    fn render_current(&mut self, current: &RenderedCurrent) {
        self.current = Some(current.clone());
    }

    fn render_daily(&mut self, cards: &[DailyCard]) {
        self.daily = cards.to_vec();
    }

    fn render_hourly(&mut self, cards: &[HourlyCard]) {
        self.hourly = cards.to_vec();
    }
}
