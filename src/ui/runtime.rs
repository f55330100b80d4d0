use std::io;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::{interval, MissedTickBehavior};

use crate::animation::AnimationTiming;
use crate::config::Config;
use crate::panel::PanelStore;
use crate::poll::{PollError, Poller, Renderer, StatusClient};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Redraw cadence; faster than the write period so every character shows.
const FRAME_INTERVAL: Duration = Duration::from_millis(25);
const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("Failed to set up status polling: {0}")]
    Poll(#[from] PollError),
}

/// Runs the terminal client until the user quits.
pub async fn run(config: &Config) -> Result<(), ClientError> {
    let client = StatusClient::from_config(&config.poll)?;
    let endpoint = client.url().to_string();
    let panels = PanelStore::new(config.panel.user.clone());
    let renderer: Arc<dyn Renderer> = Arc::new(panels.clone());
    let mut poller = Poller::new(client, renderer).start(config.poll.interval());

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(endpoint, panels, AnimationTiming::from(&config.animation));
    if let Some(greeting) = &config.panel.greeting {
        app.console().write(greeting);
    }

    let mut events = EventHandler::new(INPUT_POLL);
    let mut frames = interval(FRAME_INTERVAL);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit() {
        tokio::select! {
            _ = frames.tick() => {
                terminal.draw(|frame| draw(frame, &app))?;
            }
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                // the next draw picks up the new size
                Some(AppEvent::Resize) => {}
                None => break,
            },
        }
    }

    poller.stop();
    drop(guard);
    Ok(())
}
