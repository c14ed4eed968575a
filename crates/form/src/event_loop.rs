//! Single-task event loop driving a [`FormController`].
//!
//! User input arrives as [`FormEvent`]s over a channel. Submits spawn the
//! request onto a [`JoinSet`] so edits keep being applied while it is in
//! flight; outcomes are settled as they complete.

use listing_client::api::SubmissionClient;
use listing_client::outcome::{FailureReason, SubmissionOutcome};
use listing_core::draft::FieldName;
use listing_core::state::FormState;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::controller::FormController;
use crate::navigation::Navigator;

/// Input from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Edit { field: FieldName, value: String },
    Submit,
}

/// Run the form until it is done, or until input ends and nothing is
/// pending. Returns the final state.
///
/// Requests still running when the form completes are detached, not
/// aborted.
pub async fn run<C, N>(
    controller: &mut FormController<C, N>,
    mut events: mpsc::Receiver<FormEvent>,
) -> FormState
where
    C: SubmissionClient + 'static,
    N: Navigator,
{
    let mut in_flight: JoinSet<SubmissionOutcome> = JoinSet::new();
    let mut events_open = true;

    loop {
        if controller.state().is_terminal() || (!events_open && in_flight.is_empty()) {
            break;
        }

        tokio::select! {
            event = events.recv(), if events_open => {
                match event {
                    Some(FormEvent::Edit { field, value }) => {
                        if let Err(e) = controller.set_field(field, value) {
                            tracing::warn!(error = %e, %field, "Edit rejected");
                        }
                    }
                    Some(FormEvent::Submit) => match controller.submit() {
                        Ok(pending) => {
                            in_flight.spawn(pending.send());
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "Submit rejected");
                        }
                    },
                    None => {
                        tracing::debug!("Form input closed");
                        events_open = false;
                    }
                }
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                let outcome = joined.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Submission task ended unexpectedly");
                    SubmissionOutcome::Failure(FailureReason::Transport(e.to_string()))
                });
                if let Err(e) = controller.settle(outcome) {
                    tracing::error!(error = %e, "Could not settle submission");
                }
            }
        }
    }

    in_flight.detach_all();
    controller.state().clone()
}
