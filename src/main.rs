use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use cityscout::app::App;
use cityscout::config::{self, Config};
use cityscout::history::HistoryState;
use cityscout::suggest::{EngineOptions, HttpPlaceSource, SuggestEngine};

/// Explore cities from the terminal with live place suggestions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (defaults to <config dir>/cityscout/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Geocoding endpoint, overriding the config file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Keep search history in memory only
    #[arg(long)]
    no_history: bool,

    /// Start with this text in the search box
    #[arg(long, value_name = "TEXT")]
    query: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    init_logging();

    let config = effective_config(&args)?;
    if args.print_config {
        print!("{}", toml::to_string(&config)?);
        return Ok(());
    }

    let timeout = match config.suggest.timeout_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };
    let source = HttpPlaceSource::new(config.suggest.endpoint.clone(), timeout)?;
    log::info!("Using endpoint {}", source.endpoint());

    let engine = SuggestEngine::spawn(EngineOptions::from(&config.suggest), Arc::new(source))?;
    let history = HistoryState::load(&config.history, None);
    let mut app = App::new(engine, history);
    if let Some(query) = &args.query {
        app.prefill(query, Instant::now());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn effective_config(args: &Args) -> Result<Config> {
    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        config.suggest.endpoint = endpoint.clone();
    }
    if args.no_history {
        config.history.enabled = false;
    }
    Ok(config)
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, but never past the next engine deadline
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (avoid duplicates)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file; stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_logging() {
    use std::fs::{self, File};

    let Some(dir) = dirs::cache_dir().map(|dir| dir.join("cityscout")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("debug.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
}

#[cfg(not(debug_assertions))]
fn init_logging() {}
