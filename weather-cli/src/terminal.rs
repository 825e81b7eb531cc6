use weather_core::{
    Panel, WeatherView,
    render::{DailyCard, HourlyCard, RenderedCurrent},
};

/// Prints the controller's panels to stdout as they become visible.
#[derive(Debug, Default)]
pub struct TerminalView {
    input: String,
    error_text: String,
    clear_visible: bool,
    current: Option<RenderedCurrent>,
    daily: Vec<DailyCard>,
    hourly: Vec<HourlyCard>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    fn print_result(&self) {
        let Some(current) = &self.current else {
            return;
        };

        println!();
        println!("{}", current.city_label);
        println!("{}", current.date_label);
        println!("{}°C  {}  ({})", current.temperature, current.description, current.feels_like);
        println!(
            "Humidity {}  Wind {}  Pressure {}  Visibility {}",
            current.humidity, current.wind_speed, current.pressure, current.visibility
        );
        println!("Sunrise {}  Sunset {}", current.sunrise, current.sunset);
        println!("Icon: {}", current.icon_url);

        if !self.daily.is_empty() {
            println!();
            println!("Forecast:");
            for day in &self.daily {
                println!(
                    "  {:<6} {:<7} {:>5} / {:<5} {}",
                    day.day_label, day.day_month, day.temp_max, day.temp_min, day.description
                );
            }
        }

        if !self.hourly.is_empty() {
            println!();
            println!("Hourly:");
            let line: Vec<String> = self
                .hourly
                .iter()
                .map(|h| format!("{} {}", h.time_label, h.temperature))
                .collect();
            println!("  {}", line.join("  |  "));
        }
        println!();
    }
}

impl WeatherView for TerminalView {
    fn set_panel_visible(&mut self, panel: Panel, visible: bool) {
        if !visible {
            return;
        }
        match panel {
            Panel::Loading => println!("Fetching weather..."),
            Panel::Error => eprintln!("Error: {}", self.error_text),
            Panel::Result => self.print_result(),
            Panel::LastSearchIndicator => println!("Loading your last search..."),
        }
    }

    // No separate trigger control: the prompt is not offered while a search runs.
    fn set_trigger(&mut self, _enabled: bool, _label: &str) {}

    fn set_error_text(&mut self, message: &str) {
        self.error_text = message.to_string();
    }

    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    // The prompt always owns the cursor.
    fn focus_input(&mut self) {}

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
