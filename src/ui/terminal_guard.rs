use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use parking_lot::Mutex;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;

pub type HeliosTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal on drop and on panic, whichever comes first.
pub struct TerminalGuard {
    restored: Arc<Mutex<bool>>,
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

impl TerminalGuard {
    fn new() -> Self {
        let guard = Self {
            restored: Arc::new(Mutex::new(false)),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let restored = Arc::clone(&self.restored);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&restored);
            default_hook(info);
        }));
    }
}

fn restore_once(restored: &Mutex<bool>) {
    let mut restored = restored.lock();
    if !*restored {
        restore_terminal();
        *restored = true;
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored);
    }
}

pub fn setup_terminal() -> io::Result<(HeliosTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let guard = TerminalGuard::new();
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
