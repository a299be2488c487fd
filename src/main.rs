use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use connect_four::config::AppConfig;
use connect_four::game::GameEngine;
use connect_four::ui::App;

/// Play Connect Four in the terminal, two players on one keyboard.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    height: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    width: Option<usize>,

    /// Override the first player's color (name or #rrggbb)
    #[arg(long)]
    p1_color: Option<String>,

    /// Override the second player's color (name or #rrggbb)
    #[arg(long)]
    p2_color: Option<String>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let _guard = cli.log_file.as_deref().map(init_logging).transpose()?;

    // Load configuration
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(height) = cli.height {
        app_config.board.height = height;
    }
    if let Some(width) = cli.width {
        app_config.board.width = width;
    }
    if let Some(color) = cli.p1_color {
        app_config.players.first.color = color;
    }
    if let Some(color) = cli.p2_color {
        app_config.players.second.color = color;
    }
    app_config.validate().context("invalid settings")?;

    let engine = app_config.build_engine();
    info!(
        height = app_config.board.height,
        width = app_config.board.width,
        "starting game"
    );

    run(engine).context("terminal error")
}

/// Route tracing output to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn run(engine: GameEngine) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(engine);
    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
