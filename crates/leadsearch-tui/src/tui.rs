//! Terminal session: raw mode plus alternate screen, undone exactly once.

use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::{
    cursor, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Size};

/// The terminal while the landing page is on screen.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    active: bool,
}

impl Tui {
    /// Take over the terminal: raw mode, alternate screen, hidden cursor.
    pub fn start() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        enable_raw_mode()?;
        let mut tui = Self {
            terminal,
            active: true,
        };
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        tui.terminal.clear()?;
        Ok(tui)
    }

    /// Give the terminal back. Later calls do nothing.
    pub fn stop(&mut self) {
        if std::mem::take(&mut self.active) {
            restore_terminal();
        }
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    pub fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Best effort; each step runs even if the previous one failed.
fn restore_terminal() {
    let _ = execute!(stdout(), cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// color-eyre reports without the env section, and a panic hook that
/// restores the terminal before the report prints. Install before
/// [`Tui::start`].
pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    let report = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        report(info);
    }));
    Ok(())
}
