use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Prompt => match key.code {
            KeyCode::Enter => app.submit_prompt(),
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.prompt_backspace(),
            KeyCode::Char(ch) => app.prompt_push(ch),
            _ => {}
        },
        Focus::Panel => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            KeyCode::Char('e') => app.open_prompt(),
            KeyCode::Char('c') => app.console().clear(),
            _ => {}
        },
    }
}
