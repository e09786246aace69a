//! Application state and its event-driven update function

use super::forms::{
    validate, FieldErrors, FieldPath, Focus, Form, RegistrationForm, RegistrationInput,
};
use super::submission::{Highlight, SubmissionStatus};
use crate::signup::SignupError;
use uuid::Uuid;

/// Banner text shown after a successful signup
pub const SUCCESS_MESSAGE: &str = "you have registered successfully";

/// Discrete, ordered inputs to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Printable character typed into the focused input
    Input(char),
    Backspace,
    NextFocus,
    PrevFocus,
    /// Enter on whatever has focus
    Activate,
    Submit,
    Reset,
    /// The signup task for `id` returned
    SubmissionFinished {
        id: Uuid,
        result: Result<(), SignupError>,
    },
    /// The post-success timer for `id` fired
    AutoClearElapsed { id: Uuid },
}

/// Side effects requested by [`AppState::update`], carried out by the task scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartSubmission { id: Uuid, input: RegistrationInput },
    ScheduleAutoClear { id: Uuid },
    CancelPending,
}

/// Main application state, owned by the form unit
#[derive(Debug, Default)]
pub struct AppState {
    pub form: RegistrationForm,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub show_success: bool,
    pub highlight: Highlight,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Submit and reset controls are disabled while a submission is in flight
    pub fn controls_enabled(&self) -> bool {
        !self.is_submitting()
    }

    pub fn error_for(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(path)
    }

    /// Apply one event and return the effects it requests
    pub fn update(&mut self, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::Input(c) => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.push_char(c);
                }
                Vec::new()
            }
            FormEvent::Backspace => {
                if let Some(field) = self.form.get_active_field_mut() {
                    field.pop_char();
                }
                Vec::new()
            }
            FormEvent::NextFocus => {
                self.form.next_field();
                Vec::new()
            }
            FormEvent::PrevFocus => {
                self.form.prev_field();
                Vec::new()
            }
            FormEvent::Activate => match self.form.focus() {
                Focus::Field(_) | Focus::SubmitButton => self.submit(),
                Focus::ClearButton => self.reset(),
            },
            FormEvent::Submit => self.submit(),
            FormEvent::Reset => self.reset(),
            FormEvent::SubmissionFinished { id, result } => self.finish_submission(id, result),
            FormEvent::AutoClearElapsed { id } => self.auto_clear(id),
        }
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.is_submitting() {
            tracing::debug!("Submit ignored, a submission is already in flight");
            return Vec::new();
        }

        let input = self.input();
        match validate(&input) {
            Err(errors) => {
                let fields: Vec<&str> = errors.iter().map(|(path, _)| path.as_str()).collect();
                tracing::debug!(error_count = errors.len(), ?fields, "Registration input rejected");
                self.errors = errors;
                if self.status == SubmissionStatus::Failed {
                    self.status = SubmissionStatus::Idle;
                }
                Vec::new()
            }
            Ok(()) => {
                let mut effects = Vec::new();
                if self.status.succeeded_id().is_some() {
                    // A fresh submit supersedes the pending auto-clear
                    effects.push(Effect::CancelPending);
                    self.show_success = false;
                    self.highlight = Highlight::Idle;
                }

                let id = Uuid::new_v4();
                tracing::info!(%id, email = %input.email, "Submitting registration");
                self.errors.clear();
                self.status = SubmissionStatus::Submitting { id };
                effects.push(Effect::StartSubmission { id, input });
                effects
            }
        }
    }

    fn finish_submission(&mut self, id: Uuid, result: Result<(), SignupError>) -> Vec<Effect> {
        if self.status.submitting_id() != Some(id) {
            tracing::debug!(%id, "Ignoring result of a stale submission");
            return Vec::new();
        }

        match result {
            Ok(()) => {
                tracing::info!(%id, "Registration succeeded");
                self.status = SubmissionStatus::Succeeded { id };
                self.show_success = true;
                self.highlight = Highlight::Success;
                vec![Effect::ScheduleAutoClear { id }]
            }
            Err(err) => {
                tracing::warn!(%id, error = %err, "Registration failed");
                self.status = SubmissionStatus::Failed;
                self.errors
                    .set(FieldPath::Root, format!("Server Error , {err}"));
                Vec::new()
            }
        }
    }

    fn auto_clear(&mut self, id: Uuid) -> Vec<Effect> {
        if self.status.succeeded_id() != Some(id) {
            tracing::debug!(%id, "Ignoring stale auto-clear");
            return Vec::new();
        }
        tracing::debug!(%id, "Auto-clearing form after success");
        self.clear();
        Vec::new()
    }

    fn reset(&mut self) -> Vec<Effect> {
        if self.is_submitting() {
            tracing::debug!("Reset ignored while submitting");
            return Vec::new();
        }
        self.clear();
        vec![Effect::CancelPending]
    }

    /// Back to the empty idle form
    fn clear(&mut self) {
        self.form.clear_values();
        self.errors.clear();
        self.show_success = false;
        self.highlight = Highlight::Idle;
        self.status = SubmissionStatus::Idle;
    }

    /// Snapshot of the current values
    pub fn input(&self) -> RegistrationInput {
        self.form.to_input()
    }
}
