use std::sync::Arc;

use parking_lot::RwLock;

use crate::animation::{AnimationTiming, ConsoleSurface};
use crate::console::Console;
use crate::panel::{HostPanel, PanelStore};

/// Console surface backed by a string the draw loop reads.
#[derive(Clone, Default)]
pub struct ConsoleLine {
    text: Arc<RwLock<String>>,
}

impl ConsoleLine {
    pub fn text(&self) -> String {
        self.text.read().clone()
    }
}

impl ConsoleSurface for ConsoleLine {
    fn show(&self, text: &str) {
        let mut current = self.text.write();
        current.clear();
        current.push_str(text);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Panel,
    Prompt,
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    prompt_input: String,
    endpoint: String,
    panels: PanelStore,
    console_line: ConsoleLine,
    console: Console,
}

impl App {
    pub fn new(endpoint: impl Into<String>, panels: PanelStore, timing: AnimationTiming) -> Self {
        let console_line = ConsoleLine::default();
        let surface: Arc<dyn ConsoleSurface> = Arc::new(console_line.clone());
        Self {
            should_quit: false,
            focus: Focus::Panel,
            prompt_input: String::new(),
            endpoint: endpoint.into(),
            panels,
            console_line,
            console: Console::new(surface, timing),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn panels(&self) -> &PanelStore {
        &self.panels
    }

    pub fn panel(&self) -> Option<HostPanel> {
        self.panels.current()
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// What the console surface currently shows.
    pub fn console_text(&self) -> String {
        self.console_line.text()
    }

    pub fn prompt_input(&self) -> &str {
        &self.prompt_input
    }

    pub fn open_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = Focus::Prompt;
    }

    pub fn prompt_push(&mut self, ch: char) {
        self.prompt_input.push(ch);
    }

    pub fn prompt_backspace(&mut self) {
        self.prompt_input.pop();
    }

    /// Sends the entered text to the console. Empty input clears it.
    pub fn submit_prompt(&mut self) {
        let answer = std::mem::take(&mut self.prompt_input);
        self.focus = Focus::Panel;
        self.console.prompt(Some(answer));
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt_input.clear();
        self.focus = Focus::Panel;
        self.console.prompt(None);
    }
}
