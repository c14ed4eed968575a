#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid form transition: {event} while {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),
}
