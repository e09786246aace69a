//! Submission lifecycle and visual feedback

use ratatui::style::Color;
use uuid::Uuid;

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A signup call is in flight; submit and reset are disabled
    Submitting { id: Uuid },
    /// The call succeeded; an auto-clear is pending for this id
    Succeeded { id: Uuid },
    /// The call failed; the root error stays until the next submit or reset
    Failed,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting { .. })
    }

    /// Id of the in-flight submission, if any
    pub fn submitting_id(&self) -> Option<Uuid> {
        match self {
            SubmissionStatus::Submitting { id } => Some(*id),
            _ => None,
        }
    }

    /// Id of the succeeded submission whose auto-clear is pending
    pub fn succeeded_id(&self) -> Option<Uuid> {
        match self {
            SubmissionStatus::Succeeded { id } => Some(*id),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Registering..."
        } else {
            "Register"
        }
    }
}

/// Accent color of the title, icon and banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Idle,
    Success,
}

impl Highlight {
    pub fn color(&self) -> Color {
        match self {
            // #ff6467
            Highlight::Idle => Color::Rgb(0xff, 0x64, 0x67),
            // #05df72
            Highlight::Success => Color::Rgb(0x05, 0xdf, 0x72),
        }
    }
}
