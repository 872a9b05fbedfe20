use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use connect_n::config::{GameConfig, DEFAULT_CONFIG_PATH};
use connect_n::game::Game;
use connect_n::ui::{run_plain, App};

/// Play connect N in a row against another human in the terminal.
#[derive(Parser)]
#[command(name = "connect_n", about = "Two-player connect N in a row")]
struct Cli {
    /// Path to TOML configuration file; defaults are used if it is missing
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override number of rows
    #[arg(long, allow_hyphen_values = true)]
    rows: Option<isize>,

    /// Override number of columns
    #[arg(long, allow_hyphen_values = true)]
    columns: Option<isize>,

    /// Override markers in a row needed to win
    #[arg(long, short = 'n', allow_hyphen_values = true)]
    connect: Option<isize>,

    /// Line-prompt mode instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Write logs to this file instead of stderr. Without it the full-screen
    /// UI only logs warnings.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.plain)?;

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.rows = rows;
    }
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    if let Some(n) = cli.connect {
        config.n = n;
    }

    let mut game = config.new_game().context("could not initialize game")?;
    info!(rows = config.rows, columns = config.columns, n = config.n, "starting game");

    if cli.plain {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        run_plain(&mut game, stdin.lock(), &mut stdout, true)?;
        Ok(())
    } else {
        run_tui(game).context("terminal UI failed")
    }
}

/// Filter directive for the subscriber. `RUST_LOG` is ignored when logs would
/// land on stderr underneath the full-screen UI.
fn filter_directive(rust_log: Option<String>, to_file: bool, plain: bool) -> String {
    match rust_log {
        Some(directive) if to_file || plain => directive,
        _ => "warn".to_string(),
    }
}

fn init_logging(log_file: Option<&Path>, plain: bool) -> Result<()> {
    let directive = filter_directive(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        log_file.is_some(),
        plain,
    );
    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("invalid log filter '{directive}'"))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn run_tui(game: Game) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_defaults_to_connect_n_toml() {
        let cli = Cli::try_parse_from(["connect_n"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("connect_n.toml"));

        let cli = Cli::try_parse_from(["connect_n", "--config", "big.toml", "--rows", "-1"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("big.toml"));
        assert_eq!(cli.rows, Some(-1));
    }

    #[test]
    fn test_tui_on_stderr_only_logs_warnings() {
        let debug = || Some("debug".to_string());
        assert_eq!(filter_directive(debug(), false, false), "warn");
        assert_eq!(filter_directive(debug(), true, false), "debug");
        assert_eq!(filter_directive(debug(), false, true), "debug");
        assert_eq!(filter_directive(None, true, true), "warn");
    }
}
