//! Constraint violation raised by the smart constructors

use thiserror::Error;

/// A raw value was refused by a smart constructor
///
/// `message` is the complete, user-facing sentence (it already names the
/// field); `field_name` is kept separately so callers can route the error
/// without parsing the text.
///
/// # Examples
///
/// ```
/// use order_taking::simple_types::ConstraintError;
///
/// let error = ConstraintError::new("OrderId", "OrderId must not be empty or undefined");
/// assert_eq!(error.field_name(), "OrderId");
/// assert_eq!(error.to_string(), "OrderId must not be empty or undefined");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintError {
    field_name: String,
    message: String,
}

impl ConstraintError {
    /// Creates a new `ConstraintError` for `field_name`
    #[must_use]
    pub fn new(field_name: &str, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.to_string(),
            message: message.into(),
        }
    }

    /// Name of the field whose value was refused
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The full error sentence
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error and returns its message
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
