use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, InquireError, Text};
use weather_core::{
    Config, Controller, FileStore, Intent, LastSearch, Renderer, Timings, UiState, WeatherGateway,
    WeatherView,
    gateway::gateway_from_config,
};

use crate::terminal::TerminalView;

type TerminalController = Controller<Box<dyn WeatherGateway>, FileStore, TerminalView>;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search interactively; the last successful city is restored on start.
    Interactive,

    /// Show weather for a single city.
    Show {
        /// City name.
        city: String,
    },

    /// Forget the remembered city.
    Clear,

    /// Configure the backend URL and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;

        match self.command.unwrap_or(Command::Interactive) {
            Command::Interactive => interactive(&config).await,
            Command::Show { city } => show(&config, city).await,
            Command::Clear => {
                let store = FileStore::new(config.store_file_path()?);
                if LastSearch::new(store).clear().is_err() {
                    eprintln!("Could not clear the last search; see logs for details.");
                    return Ok(ExitCode::FAILURE);
                }
                println!("Last search cleared.");
                Ok(ExitCode::SUCCESS)
            }
            Command::Configure => configure(config),
        }
    }
}

fn build_controller(config: &Config) -> anyhow::Result<TerminalController> {
    let gateway = gateway_from_config(config)?;
    let store = FileStore::new(config.store_file_path()?);
    tracing::debug!(store = %store.path().display(), backend = %config.backend_url, "Starting");

    Ok(Controller::new(
        gateway,
        store,
        TerminalView::new(),
        Renderer::local(),
        Timings::from_config(config),
    ))
}

async fn show(config: &Config, city: String) -> anyhow::Result<ExitCode> {
    let mut ctl = build_controller(config)?;
    ctl.dispatch(Intent::InputChanged(city)).await;

    match ctl.dispatch(Intent::Submit).await {
        UiState::Error(_) => Ok(ExitCode::FAILURE),
        _ => Ok(ExitCode::SUCCESS),
    }
}

async fn interactive(config: &Config) -> anyhow::Result<ExitCode> {
    let mut ctl = build_controller(config)?;
    ctl.startup().await;

    while let Some(line) = next_line(&mut ctl).await? {
        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => {
                ctl.dispatch(Intent::Clear).await;
                println!("Last search cleared.");
            }
            _ => {
                ctl.dispatch(Intent::InputChanged(line)).await;
                ctl.dispatch(Intent::Submit).await;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Waits for the next prompt line while still delivering the indicator timeout.
/// `None` means the user cancelled the prompt.
async fn next_line(ctl: &mut TerminalController) -> anyhow::Result<Option<String>> {
    let help = if ctl.view().clear_visible() {
        "Enter a city; :clear forgets the last search, :quit exits"
    } else {
        "Enter a city; :quit exits"
    };
    let initial = ctl.view().input_text();

    let mut prompt = tokio::task::spawn_blocking(move || {
        Text::new("City:").with_initial_value(&initial).with_help_message(help).prompt()
    });

    let answer = loop {
        let deadline = ctl.indicator_deadline();
        tokio::select! {
            res = &mut prompt => break res.context("Prompt task failed")?,
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(tokio::time::Instant::now)),
                if deadline.is_some() =>
            {
                ctl.dispatch(Intent::IndicatorElapsed).await;
            }
        }
    };

    match answer {
        Ok(line) => Ok(Some(line)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e).context("Failed to read city"),
    }
}

fn configure(mut config: Config) -> anyhow::Result<ExitCode> {
    let url = Text::new("Backend URL:").with_default(&config.backend_url).prompt()?;
    config.set_backend_url(&url)?;

    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .prompt()?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(ExitCode::SUCCESS)
}
