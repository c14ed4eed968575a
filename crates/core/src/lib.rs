//! Domain types for the add-property listing form.
//!
//! Holds the [`draft::PropertyDraft`] the form edits and the
//! [`state::FormState`] machine that tracks its submission. No I/O lives
//! here; the HTTP client and the form controller build on these types.

pub mod draft;
pub mod error;
pub mod state;
