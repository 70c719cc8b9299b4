// crates/dashboard-terminal/src/main.rs

use std::path::PathBuf;
use std::{io, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::{error, info};

use dashboard_terminal::{
    logging, network, poller, ui, ApiClient, ApiCommand, ApiEvent, App, ClientConfig, PollState,
};

#[derive(Parser)]
#[clap(name = "options-dashboard")]
#[clap(about = "Terminal dashboard for the options trading backend")]
struct Cli {
    /// Backend base URL (overrides config file and DASHBOARD_API_BASE)
    #[clap(short, long)]
    api_base: Option<String>,

    /// Underlying selected at startup
    #[clap(short, long)]
    symbol: Option<String>,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log file (the terminal is taken by the UI)
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

fn build_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    }
    .with_env_overrides();

    if let Some(api_base) = &cli.api_base {
        config.api_base = api_base.clone();
    }
    if let Some(symbol) = &cli.symbol {
        config.default_symbol = symbol.to_uppercase();
    }
    if let Some(log_file) = &cli.log_file {
        config.log_file = log_file.clone();
    }

    Ok(config.validate()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    logging::init(&config.log_file, cli.debug)?;
    info!(api_base = %config.api_base, symbol = %config.default_symbol, "Starting dashboard");

    let client = ApiClient::new(&config.api_base, config.request_timeout())
        .context("failed to build HTTP client")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(config.symbols.clone(), config.default_symbol_index());
    let res = run_app(&mut terminal, app, client, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Dashboard exited with error: {:?}", err);
    }
    res
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: ApiClient,
    config: &ClientConfig,
) -> Result<()> {
    let (tx_commands, rx_commands) = mpsc::unbounded_channel::<ApiCommand>();
    let (tx_events, mut rx_events) = mpsc::unbounded_channel::<ApiEvent>();
    let (state_tx, state_rx) = watch::channel(PollState::default());

    app.set_command_sender(tx_commands.clone());
    app.set_state_publisher(state_tx);
    // No handshake with the backend; the badge starts green.
    app.set_connected(true);

    let dispatcher = tokio::spawn(network::run_dispatcher(client, rx_commands, tx_events));
    let pollers = tokio::spawn(poller::run_pollers(
        state_rx,
        tx_commands,
        config.fast_poll(),
        config.slow_poll(),
    ));

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        while let Ok(event) = rx_events.try_recv() {
            app.handle_api_event(event);
        }

        if app.should_quit {
            break;
        }
    }

    info!(messages = app.message_count, "Shutting down");
    pollers.abort();
    dispatcher.abort();
    Ok(())
}
