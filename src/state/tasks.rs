//! Cancellable scheduled work tied to the form's lifetime
//!
//! The scheduler runs the [`Effect`]s returned by [`AppState::update`](super::AppState::update).
//! Each task reports back by sending a [`FormEvent`] on the app's channel.
//! Handles are aborted when replaced, on [`Effect::CancelPending`], and on drop,
//! so nothing fires after teardown.

use super::app_state::{Effect, FormEvent};
use super::forms::RegistrationInput;
use crate::signup::SignupClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub struct TaskScheduler {
    client: Arc<dyn SignupClient>,
    sender: UnboundedSender<FormEvent>,
    success_reset_delay: Duration,
    submission: Option<JoinHandle<()>>,
    auto_clear: Option<JoinHandle<()>>,
}

impl TaskScheduler {
    pub fn new(
        client: Arc<dyn SignupClient>,
        sender: UnboundedSender<FormEvent>,
        success_reset_delay: Duration,
    ) -> Self {
        Self {
            client,
            sender,
            success_reset_delay,
            submission: None,
            auto_clear: None,
        }
    }

    /// Carry out one effect; must be called from within a Tokio runtime
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::StartSubmission { id, input } => self.start_submission(id, input),
            Effect::ScheduleAutoClear { id } => self.schedule_auto_clear(id),
            Effect::CancelPending => self.cancel_all(),
        }
    }

    fn start_submission(&mut self, id: Uuid, input: RegistrationInput) {
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let result = client.sign_up(&input).await;
            if sender
                .send(FormEvent::SubmissionFinished { id, result })
                .is_err()
            {
                tracing::debug!(%id, "Form closed before submission finished");
            }
        });
        if let Some(previous) = self.submission.replace(handle) {
            previous.abort();
        }
    }

    fn schedule_auto_clear(&mut self, id: Uuid) {
        let sender = self.sender.clone();
        let delay = self.success_reset_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if sender.send(FormEvent::AutoClearElapsed { id }).is_err() {
                tracing::debug!(%id, "Form closed before auto-clear fired");
            }
        });
        if let Some(previous) = self.auto_clear.replace(handle) {
            previous.abort();
        }
    }

    /// Abort every pending task
    pub fn cancel_all(&mut self) {
        if let Some(handle) = self.submission.take() {
            handle.abort();
        }
        if let Some(handle) = self.auto_clear.take() {
            handle.abort();
        }
    }

    pub fn has_pending_submission(&self) -> bool {
        self.submission.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn has_pending_auto_clear(&self) -> bool {
        self.auto_clear.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for TaskScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
