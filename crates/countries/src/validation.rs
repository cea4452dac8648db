//! Required-input check for submitted country values.

/// Message reported when a required attribute has no selection.
pub const INPUT_REQUIRED: &str = "Input required.";

/// Outcome of validating submitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationState {
    Accepted,
    Invalid { message: String },
}

impl ValidationState {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationState::Accepted)
    }
}

/// Validate submitted tokens for an attribute that may be required.
///
/// Optional attributes always pass. A required attribute passes when input
/// was submitted and its first token is not empty; the tokens themselves are
/// not resolved here.
pub fn validate_required<S: AsRef<str>>(required: bool, submitted: Option<&[S]>) -> ValidationState {
    if !required {
        return ValidationState::Accepted;
    }
    match submitted.and_then(|tokens| tokens.first()) {
        Some(first) if !first.as_ref().is_empty() => ValidationState::Accepted,
        _ => ValidationState::Invalid {
            message: INPUT_REQUIRED.to_string(),
        },
    }
}
