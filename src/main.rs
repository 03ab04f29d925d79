//! Resume Tailor
//!
//! Terminal client for a resume analysis service. Pick a resume, paste a
//! job description, submit, and read back the ATS score, modifications,
//! upskilling suggestions and optimized resume.

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::{self, OpenOptions};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use resume_tailor::application::App;
use resume_tailor::config::Config;
use resume_tailor::infrastructure::HttpAnalysisService;
use resume_tailor::presentation::{render_ui, InputHandler};

const TICK: Duration = Duration::from_millis(100);

/// Entry point for the Resume Tailor terminal client.
///
/// Reads configuration, builds the HTTP service and the initial form,
/// then runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if configuration inputs cannot be read, the HTTP
/// client cannot be built, or terminal setup fails.
fn main() -> Result<()> {
    let config = Config::load();
    init_logging(&config)?;

    let service = HttpAnalysisService::new(config.endpoint.clone())
        .context("Failed to create HTTP client")?;
    info!(endpoint = %service.endpoint(), "starting resume-tailor");

    let mut app = App::new(Arc::new(service));
    if let Some(path) = config.description_file.as_ref() {
        let description = fs::read_to_string(path)
            .with_context(|| format!("Failed to read job description from {}", path.display()))?;
        app.controller.set_description(description);
    }
    if let Some(path) = config.resume.as_ref() {
        app.select_resume_path(&path.to_string_lossy());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Installs a file subscriber when a log file is configured.
///
/// The terminal owns stdout, so without a log file nothing is recorded.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("resume_tailor=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Main application event loop.
///
/// Redraws, applies a finished request if one has settled, and processes
/// key presses and pastes. Waiting for input is bounded so request
/// completion shows up without a key press.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.poll_submission();
        terminal.draw(|f| render_ui(f, app))?;

        if !event::poll(TICK)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if InputHandler::is_quit(app, key.code, key.modifiers) {
                    return Ok(());
                }
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Paste(text) => InputHandler::handle_paste(app, &text),
            _ => {}
        }
    }
}
