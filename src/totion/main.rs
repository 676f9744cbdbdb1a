use anyhow::{bail, Context};
use clap::Parser;
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::{self, OpenOptions};
use std::io::{self, IsTerminal, Stdout};
use std::panic;
use std::path::Path;
use std::sync::Mutex;
use totion::app::{Action, App};
use totion::config::TotionConfig;
use totion::keymap::action_for;
use totion::store::fs::FileStore;
use totion::store::NoteStore;
use totion::ui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod args;
use args::Cli;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = TotionConfig::from_home()?;
    init_logging(config.log_file(), cli.verbose);

    let store = FileStore::init(config.storage_dir()).inspect_err(|e| {
        error!(error = ?e, fatal = e.is_startup(), "startup failed");
    })?;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!("totion needs an interactive terminal (TTY)");
    }

    run_tui(App::new(store))
}

/// Logs go to a file: the terminal belongs to the UI. If the file cannot be
/// opened, logging stays off.
fn init_logging(log_file: Option<&Path>, verbose: bool) {
    let Some(path) = log_file else {
        return;
    };
    let file = match path.parent().map_or(Ok(()), fs::create_dir_all).and_then(|()| {
        OpenOptions::new().create(true).append(true).open(path)
    }) {
        Ok(file) => file,
        Err(_) => return,
    };

    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("totion={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

fn run_tui<S: NoteStore>(mut app: App<S>) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal().context("unable to set up the terminal")?;
    info!("session started");

    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    info!("session ended");
    result?;
    restored.context("unable to restore the terminal")
}

fn event_loop<S: NoteStore>(terminal: &mut Tui, app: &mut App<S>) -> anyhow::Result<()> {
    let size = terminal.size()?;
    app.handle(Action::Resize(size.width, size.height));

    while app.is_running() {
        terminal.draw(|frame| ui::render(frame, app))?;
        if let Some(action) = action_for(&event::read()?) {
            app.handle(action);
        }
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
