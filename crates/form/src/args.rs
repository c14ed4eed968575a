//! `field=value` command-line arguments for `listing-add`.

use listing_client::api::SubmissionClient;
use listing_core::draft::{FieldName, PropertyDraft};
use listing_core::error::CoreError;

use crate::controller::FormController;
use crate::navigation::Navigator;

/// Apply each `field=value` argument to the form, in order.
///
/// Stops at the first argument without `=` or naming an unknown field.
pub fn apply_field_args<C, N, I>(form: &mut FormController<C, N>, args: I) -> Result<(), CoreError>
where
    C: SubmissionClient,
    N: Navigator,
    I: IntoIterator<Item = String>,
{
    for arg in args {
        let (name, value) = arg.split_once('=').ok_or_else(|| {
            CoreError::Validation(format!("Arguments must look like field=value, got '{arg}'"))
        })?;
        form.set_field_by_name(name, value)?;
    }
    Ok(())
}

/// Log every field of `draft` under its form label.
pub fn log_draft(draft: &PropertyDraft) {
    for field in FieldName::ALL {
        tracing::info!(field = field.label(), value = %draft.get(field), "Form field");
    }
}
