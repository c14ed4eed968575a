//! Submission state machine for the add-property form.
//!
//! ```text
//! Editing --Submit--> Submitting --Succeeded--> Done
//!    ^                    |
//!    |                 Failed
//!   Edit                  v
//!    +---------------- Error --Submit--> Submitting
//! ```
//!
//! Edits are accepted while a request is in flight and duplicate
//! submits are allowed. Once `Done`, the draft has been consumed and
//! only late outcomes of duplicate requests are absorbed.

use crate::error::CoreError;

/// Where the form is in its submit lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Editing,
    Submitting,
    Done,
    /// The last request failed; carries a user-facing reason.
    Error(String),
}

/// Inputs that drive [`FormState::transition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTransition {
    Edit,
    Submit,
    Succeeded,
    Failed(String),
}

impl FormTransition {
    fn name(&self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Submit => "submit",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

impl FormState {
    /// Short lowercase name, used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Done => "done",
            Self::Error(_) => "error",
        }
    }

    /// `true` once the draft has been created on the server.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Compute the next state, or reject an event that is not valid here.
    pub fn transition(self, event: FormTransition) -> Result<FormState, CoreError> {
        use FormState::*;
        use FormTransition as T;

        let next = match (&self, &event) {
            (Editing, T::Edit) | (Error(_), T::Edit) => Editing,
            (Submitting, T::Edit) => Submitting,

            (Editing | Error(_) | Submitting, T::Submit) => Submitting,

            (Submitting | Done, T::Succeeded) => Done,

            (Submitting, T::Failed(reason)) => Error(reason.clone()),
            (Done, T::Failed(_)) => Done,

            _ => {
                return Err(CoreError::InvalidTransition {
                    from: self.name(),
                    event: event.name(),
                })
            }
        };
        Ok(next)
    }
}
