use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use visa_predictor::api::HttpClient;
use visa_predictor::app::App;
use visa_predictor::config::{self, ConfigResult};
use visa_predictor::logging;
use visa_predictor::worker;

/// How long to wait for input before checking on the worker
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Interactive form for visa application predictions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the prediction service
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Config file to use instead of ~/.config/visa-predictor/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append log records to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    // CLI flags win over the config file
    let server_url = args.url.unwrap_or(config.server.url);
    if let Some(path) = args.log_file.or(config.log.file) {
        logging::init_file_logging(&path)?;
    }
    if let Some(warning) = &warning {
        log::warn!("{}", warning);
    }
    let client = HttpClient::new(server_url.clone());
    log::info!("Using prediction service at {}", client.base_url());

    let channels = worker::spawn_worker(client)?;
    let mut app = App::new(channels, server_url);
    if let Some(warning) = warning {
        app.notification.show_warning(warning);
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(stdout(), EnableBracketedPaste)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(stdout(), DisableBracketedPaste);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
        }
        app.poll_worker();
        app.notification.clear_expired();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
