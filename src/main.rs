//! `speedread` - show an article one word at a time, centered on each word's
//! optimal recognition point.

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::{io, panic, process::ExitCode, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use speedread::article::{load_words, ArticleClient};
use speedread::config::{expand_path, Config};
use speedread::error::{Error, Result};
use speedread::input::CrosstermKeys;
use speedread::render::TerminalRenderer;
use speedread::style::{HighlightColor, HighlightStyle};
use speedread::types::{OutputType, WordSource};
use speedread::ui::{run_reader, ReaderWindow};

/// Speed-read an article one word at a time
#[derive(Parser, Debug)]
#[command(name = "speedread")]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to display the words (also: SPEEDREAD_OUTPUT)
    #[arg(long, value_enum)]
    output_type: Option<OutputType>,

    /// Article JSON URL (also: SPEEDREAD_ARTICLE_URL)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Read text or HTML from a file instead of fetching; "-" reads stdin
    #[arg(long, value_name = "PATH")]
    file: Option<String>,

    /// Pause per word in milliseconds (also: SPEEDREAD_DELAY_MS)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Highlight color for the fixation letter (also: SPEEDREAD_COLOR)
    #[arg(long, value_enum)]
    color: Option<HighlightColor>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.debug);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                if !matches!(e, Error::Config { .. }) {
                    eprintln!("Hint: {hint}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={default_level}", env!("CARGO_CRATE_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    config.apply_overrides(args.output_type, args.url.as_deref(), args.delay_ms, args.color)?;

    let source = match args.file.as_deref() {
        Some("-") => WordSource::Stdin,
        Some(path) => WordSource::File(expand_path(path)),
        None => WordSource::Url(config.article_url.clone()),
    };

    tracing::info!(
        "{} v{} reading {source} ({} output)",
        config.app_name(),
        config.app_version(),
        config.output_type
    );

    let words = load_words(&source, &ArticleClient::new()).await?;
    if words.is_empty() {
        return Err(Error::Msg(format!("No readable words found in {source}")));
    }

    match config.output_type {
        OutputType::Terminal => {
            let mut renderer = TerminalRenderer::new(io::stdout(), config.style, config.delay);
            renderer.render(&words).await?;
        }
        OutputType::Ui => run_window(&words, config.style, config.delay)?,
    }

    Ok(())
}

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_window(words: &[String], style: HighlightStyle, delay: Duration) -> Result<()> {
    // Restore the terminal before the default panic output
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;

    let mut window = ReaderWindow::new(terminal, words.len(), style);
    let res = run_reader(&mut window, &mut CrosstermKeys, words, delay);

    if let Err(e) = cleanup_terminal(window.terminal_mut()) {
        eprintln!("Error cleaning up terminal: {e}");
    }

    res.map(|shown| tracing::info!("Displayed {shown} words"))
}
