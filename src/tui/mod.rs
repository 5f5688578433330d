//! Full-screen terminal interface.

pub mod app;
pub mod input;
mod ui;

use anyhow::{Context, Result};
use chrono::Locale;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::Stdout;

pub use app::{App, Focus};

use crate::store::{KeyValueStore, NoteStore};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive editor until the user quits.
pub fn run<S: KeyValueStore>(store: NoteStore<S>, locale: Locale) -> Result<()> {
    let mut terminal = setup_terminal()?;
    install_restore_hook();

    let result = event_loop(&mut terminal, App::new(store, locale));
    let restored = restore_terminal(&mut terminal);

    result?;
    restored
}

fn event_loop<S: KeyValueStore>(terminal: &mut Tui, mut app: App<S>) -> Result<()> {
    info!("event=ui_start notes={}", app.store().collection().len());
    let mut dirty = true;
    loop {
        if dirty {
            terminal
                .draw(|f| ui::render(f, &app))
                .context("drawing frame")?;
        }

        dirty = match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key);
                true
            }
            Event::Resize(_, _) => true,
            _ => app.refresh(),
        };

        if app.should_quit() {
            break;
        }
    }
    info!("event=ui_stop notes={}", app.store().collection().len());
    Ok(())
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("creating terminal backend")
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    terminal.show_cursor().context("showing cursor")?;
    Ok(())
}

/// Leaves raw mode before a panic message is printed.
fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        previous(info);
    }));
}
