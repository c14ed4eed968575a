//! Form controller for the add-property page.
//!
//! [`FormController`] owns the [`PropertyDraft`] and its [`FormState`].
//! A submit snapshots the draft into a [`PendingSubmission`]; the caller
//! drives that request and hands the outcome back through
//! [`FormController::settle`]. Navigation happens only there, on the
//! first success.

use std::sync::Arc;

use listing_client::api::SubmissionClient;
use listing_client::outcome::SubmissionOutcome;
use listing_core::draft::{FieldName, PropertyDraft};
use listing_core::error::CoreError;
use listing_core::state::{FormState, FormTransition};

use crate::navigation::{Navigator, ROOT_PATH};

/// Holds the editable draft and reacts to submission outcomes.
pub struct FormController<C, N> {
    draft: PropertyDraft,
    state: FormState,
    client: Arc<C>,
    navigator: Arc<N>,
    redirect_path: String,
    submissions: u64,
    in_flight: usize,
}

/// A create-request captured at submit time.
///
/// Later edits to the form do not change the snapshot. Every pending
/// submission must be [`send`](Self::send)-ed and its outcome settled.
pub struct PendingSubmission<C> {
    seq: u64,
    draft: PropertyDraft,
    client: Arc<C>,
}

impl<C: SubmissionClient> PendingSubmission<C> {
    /// 1-based number of this submission on its form.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The snapshot that will be sent.
    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    /// Issue the request.
    pub async fn send(self) -> SubmissionOutcome {
        tracing::debug!(seq = self.seq, "Sending property submission");
        self.client.create_property(self.draft).await
    }
}

impl<C: SubmissionClient, N: Navigator> FormController<C, N> {
    /// A blank form that redirects to `/` on success.
    pub fn new(client: Arc<C>, navigator: Arc<N>) -> Self {
        Self {
            draft: PropertyDraft::new(),
            state: FormState::Editing,
            client,
            navigator,
            redirect_path: ROOT_PATH.to_string(),
            submissions: 0,
            in_flight: 0,
        }
    }

    /// Redirect somewhere other than `/` after a successful create.
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_path = path.into();
        self
    }

    pub fn draft(&self) -> &PropertyDraft {
        &self.draft
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Requests issued so far.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Requests issued but not yet settled.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Overwrite one field.
    ///
    /// Accepted while a request is pending. Fails once the form is done,
    /// since the draft has already been consumed.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), CoreError> {
        self.state = self.state.clone().transition(FormTransition::Edit)?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Overwrite a field named by wire key, snake_case name or label keyword.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), CoreError> {
        let field: FieldName = name.parse()?;
        self.set_field(field, value)
    }

    /// Snapshot the draft and move to `Submitting`.
    ///
    /// Fields are left as they are. Calling this twice issues two
    /// requests.
    pub fn submit(&mut self) -> Result<PendingSubmission<C>, CoreError> {
        self.state = self.state.clone().transition(FormTransition::Submit)?;
        self.submissions += 1;
        self.in_flight += 1;

        tracing::info!(seq = self.submissions, in_flight = self.in_flight, "Property form submitted");

        Ok(PendingSubmission {
            seq: self.submissions,
            draft: self.draft.clone(),
            client: Arc::clone(&self.client),
        })
    }

    /// Apply the outcome of a pending submission.
    ///
    /// The first success moves to `Done`, drops the draft and navigates.
    /// A failure moves to `Error` unless another request is still
    /// pending, in which case the form keeps waiting for it.
    pub fn settle(&mut self, outcome: SubmissionOutcome) -> Result<&FormState, CoreError> {
        let event = match &outcome {
            SubmissionOutcome::Success(_) => FormTransition::Succeeded,
            SubmissionOutcome::Failure(reason) => FormTransition::Failed(reason.to_string()),
        };

        if self.in_flight == 0 {
            return Err(CoreError::InvalidTransition {
                from: self.state.name(),
                event: match event {
                    FormTransition::Succeeded => "succeeded",
                    _ => "failed",
                },
            });
        }
        self.in_flight -= 1;

        if self.state.is_terminal() {
            tracing::debug!(success = outcome.is_success(), "Ignoring outcome of duplicate submission");
            return Ok(&self.state);
        }

        if let SubmissionOutcome::Failure(reason) = &outcome {
            if self.in_flight > 0 {
                tracing::warn!(reason = %reason, in_flight = self.in_flight, "Submission failed, awaiting remaining requests");
                return Ok(&self.state);
            }
        }

        self.state = self.state.clone().transition(event)?;

        match &self.state {
            FormState::Done => {
                self.draft = PropertyDraft::new();
                tracing::info!(path = %self.redirect_path, "Property created, navigating");
                self.navigator.push(&self.redirect_path);
            }
            FormState::Error(reason) => {
                tracing::warn!(reason = %reason, "Property submission failed, staying on form");
            }
            _ => {}
        }

        Ok(&self.state)
    }

    /// Submit, wait for the single request, and settle its outcome.
    pub async fn submit_and_settle(&mut self) -> Result<&FormState, CoreError> {
        let pending = self.submit()?;
        let outcome = pending.send().await;
        self.settle(outcome)
    }
}
