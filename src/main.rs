//! Mathscope - a terminal client for an interactive mathematics API.

mod cli;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mathscope::app::App;
use mathscope::chart::{PanDirection, ZOOM_IN, ZOOM_OUT};
use mathscope::config::{Config, API_URL_ENV, DEFAULT_API_URL};
use mathscope::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mathscope")]
#[command(about = "Solvers, matrices, calculus and plots on top of a math API", long_about = None)]
struct Args {
    /// Base URL of the computation backend
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Directory exported PNG files are written to
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<cli::Command>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
        tracing::info!("Starting Mathscope");
    }

    let config = Config::new(&args.api_url)
        .with_timeout(Duration::from_secs(args.timeout))
        .with_export_dir(&args.export_dir);

    if let Some(command) = args.command {
        if let Err(err) = cli::run(command, &config) {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(config);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Mathscope exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_worker();
        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.modifiers, key.code) {
            // Quit
            (_, KeyCode::Esc) | (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Ok(()),

            // Pages
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => app.next_page(),
            (KeyModifiers::CONTROL, KeyCode::Char('p')) => app.prev_page(),

            // Features
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => app.export_chart(),
            (KeyModifiers::CONTROL, KeyCode::Char('y')) => app.copy_result(),
            (KeyModifiers::CONTROL, KeyCode::Char('t')) => app.cycle_theme(),

            // Fields
            (_, KeyCode::Tab) => app.focus_next(),
            (_, KeyCode::BackTab) => app.focus_prev(),
            (_, KeyCode::Enter) => app.submit(),
            (_, KeyCode::Backspace) => app.backspace(),
            (_, KeyCode::F(n)) if (2..=8).contains(&n) => app.action(n),

            // Chart
            (_, KeyCode::Left) => app.pan(PanDirection::Left),
            (_, KeyCode::Right) => app.pan(PanDirection::Right),
            (_, KeyCode::Up) => app.pan(PanDirection::Up),
            (_, KeyCode::Down) => app.pan(PanDirection::Down),
            (_, KeyCode::PageUp) => app.zoom(ZOOM_IN),
            (_, KeyCode::PageDown) => app.zoom(ZOOM_OUT),
            (_, KeyCode::Home) => app.reset_zoom(),

            (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                app.input(c)
            },

            _ => {},
        }
    }
}
