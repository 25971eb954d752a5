//! modalkit demo: the canonical decision-dialog scenarios in a terminal.

mod app;

use anyhow::Result;
use app::{install_panic_hook, restore_terminal, App};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use modalkit_tui::Theme;
use modalkit_util::log::{self, LogConfig, LogLevel};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modalkit")]
#[command(author, version, about = "iOS-styled decision dialog demo", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Log file path (defaults to the platform data dir)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Color theme (dark, light)
    #[arg(long, default_value = "dark")]
    theme: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to a file: stderr would scribble over the raw-mode screen.
    let level = LogLevel::parse(&cli.log_level).unwrap_or_default();
    log::init(LogConfig {
        level,
        print: false,
        file: cli.log_file.or_else(log::default_log_path),
    })?;
    tracing::info!("modalkit demo starting");

    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = App::new(Theme::by_name(&cli.theme)).run(&mut terminal).await;

    restore_terminal();
    result
}
