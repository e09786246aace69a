//! Application state and core logic

use crate::config::RegisterConfig;
use crate::platform::ACTION_MODIFIER;
use crate::signup::{SignupClient, SimulatedSignupClient};
use crate::state::{AppState, FormEvent, TaskScheduler};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

/// Main application struct
pub struct App {
    /// Form state, the single mutable owner
    pub state: AppState,
    /// Runs submissions and timers, aborts them on drop
    scheduler: TaskScheduler,
    /// Events sent back by scheduled tasks
    task_events: UnboundedReceiver<FormEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated signup client
    pub fn new(config: &RegisterConfig) -> Self {
        let client = SimulatedSignupClient::new(config.signup_endpoint(), config.submit_delay());
        tracing::debug!(
            endpoint = client.endpoint(),
            delay_ms = client.delay().as_millis() as u64,
            "Using simulated signup client"
        );
        Self::with_client(config, Arc::new(client))
    }

    /// Create an App with a specific signup client
    pub fn with_client(config: &RegisterConfig, client: Arc<dyn SignupClient>) -> Self {
        let (sender, task_events) = unbounded_channel();
        Self {
            state: AppState::new(),
            scheduler: TaskScheduler::new(client, sender, config.success_reset_delay()),
            task_events,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission or auto-clear is still scheduled
    pub fn has_pending_tasks(&self) -> bool {
        self.scheduler.has_pending_submission() || self.scheduler.has_pending_auto_clear()
    }

    /// Apply an event to the form and run whatever it schedules
    pub fn dispatch(&mut self, event: FormEvent) {
        for effect in self.state.update(event) {
            self.scheduler.apply(effect);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }
        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }
        if let Some(event) = Self::map_key(&key) {
            self.dispatch(event);
        }
        Ok(())
    }

    /// Translate a key press into a form event
    fn map_key(key: &KeyEvent) -> Option<FormEvent> {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(ACTION_MODIFIER) => {
                Some(FormEvent::Submit)
            }
            KeyCode::Char('r') if key.modifiers.contains(ACTION_MODIFIER) => {
                Some(FormEvent::Reset)
            }
            KeyCode::Tab | KeyCode::Down => Some(FormEvent::NextFocus),
            KeyCode::BackTab | KeyCode::Up => Some(FormEvent::PrevFocus),
            KeyCode::Enter => Some(FormEvent::Activate),
            KeyCode::Backspace => Some(FormEvent::Backspace),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(FormEvent::Input(c))
            }
            _ => None,
        }
    }

    /// Apply every event the scheduled tasks have sent so far
    pub fn drain_task_events(&mut self) {
        while let Ok(event) = self.task_events.try_recv() {
            self.dispatch(event);
        }
    }

    /// Wait for the next task event and apply it; false once no task can send
    #[cfg(test)]
    async fn next_task_event(&mut self) -> bool {
        match self.task_events.recv().await {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }
}
