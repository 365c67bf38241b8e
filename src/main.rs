//! Terminal merge puzzle runner (default binary).
//!
//! Reads keys with crossterm, feeds them to the session through [`App`] and
//! redraws with the framebuffer renderer after every event. Logs go to a file
//! so they never mix with the game screen.

use std::path::Path;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tui_merge::app::App;
use tui_merge::cli::{parse_args, Command, USAGE};
use tui_merge::input::{handle_key_event, should_quit};
use tui_merge::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match parse_args(&args)? {
        Command::Play(cli) => cli,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let _guard = init_logging(&cli.log)?;
    tracing::info!(seed = ?cli.seed, "tui-merge starting");

    let mut app = App::start(&cli)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();

    let saved = app.save_on_exit();
    if let Err(err) = &result {
        tracing::error!(error = %format!("{err:#}"), "game loop failed");
    }
    result?;
    saved
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let viewport = term.viewport().unwrap_or(Viewport::new(80, 24));
        view.render_into(&app.view(), viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    tracing::info!(score = app.session().score(), "quit");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.handle(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Route `tracing` output to `path`; the returned guard flushes on drop.
fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
