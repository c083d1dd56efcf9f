mod app;
mod config;
mod fetch;
mod game;
mod models;
mod ui;
pub mod utils;

use anyhow::{Context, Result};
use app::App;
use clap::{ArgAction, Parser};
use crate::config::{AppConfig, InflectionKind, APP_NAME};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use directories::ProjectDirs;
use fetch::WikipediaClient;
use game::Session;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "wikiguess")]
#[command(version)]
#[command(about = "Guess the words of a masked random Wikipedia article", long_about = None)]
// disable the default flags so they can be customized below
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(help_template = "\
{name} {version}
{about-section}
{usage-heading} {usage}

{all-args}
")]
struct Cli {
    /// Wikipedia language edition (e.g. "fr", "en", "de")
    #[arg(short, long)]
    lang: Option<String>,

    /// Full URL of a random-summary endpoint, overrides --lang
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Only accept exact word matches (no plural/singular fallback)
    #[arg(long, default_value_t = false, help_heading = "Flags")]
    no_inflection: bool,

    /// Print help
    #[arg(short, long, action = ArgAction::Help, help_heading = "Flags")]
    help: Option<bool>,

    /// Print version
    #[arg(short = 'V', long, action = ArgAction::Version, help_heading = "Flags")]
    version: Option<bool>,
}

fn init_logging() -> Result<()> {
    let dirs = ProjectDirs::from("", "", APP_NAME).context("no home directory for logs")?;
    let log_dir = dirs.data_local_dir();
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "wikiguess.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_env("WIKIGUESS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // file only, the terminal belongs to the TUI
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // keep the writer alive for the whole process
    std::mem::forget(guard);

    tracing::info!(log_dir = %log_dir.display(), "logging initialized");
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled. Error: {}", e);
    }

    let mut app_config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config, using defaults. Error: {}",
            e
        );
        // load() already tolerates a missing file, this only catches format errors
        AppConfig::default()
    });

    if let Some(lang) = cli.lang {
        app_config.game.language = lang;
    }
    if let Some(endpoint) = cli.endpoint {
        app_config.game.endpoint = Some(endpoint);
    }
    if cli.no_inflection {
        app_config.game.inflection = InflectionKind::Exact;
    }

    let game_config = &app_config.game;
    let client = WikipediaClient::new(game_config.endpoint(), game_config.timeout())
        .context("building HTTP client")?;
    tracing::info!(endpoint = %client.endpoint(), inflection = ?game_config.inflection, "starting");

    let session = Session::new(game_config.glyphs(), game_config.inflection.build());
    let mut app = App::new(Box::new(client), session, app_config.theme.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "exited with error");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // the loading frame is on screen, now block on the request
        if app.has_pending() {
            app.run_pending();
            continue;
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        KeyCode::Esc => app.quit(),
                        KeyCode::Char('q') if ctrl => app.quit(),
                        KeyCode::Char('c') if ctrl => app.quit(),
                        KeyCode::Char('d') if ctrl => app.toggle_hint(),
                        KeyCode::Char('r') if ctrl => app.reveal_random_vowel(),
                        KeyCode::Tab => app.restart(),
                        KeyCode::Enter => app.submit_guess(),
                        KeyCode::Backspace => app.on_backspace(),
                        KeyCode::Up => app.scroll_history_up(),
                        KeyCode::Down => app.scroll_history_down(),
                        KeyCode::Char(c) if !ctrl => app.on_key(c),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
