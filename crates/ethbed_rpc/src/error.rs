use core::fmt;

/// An inbound value did not match any format accepted for its field.
///
/// Normalization is all-or-nothing: the first field that fails aborts the
/// whole call, and nothing partially normalized is ever produced. The
/// request dispatcher is expected to translate this into an invalid-params
/// response; there is no point in retrying.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field} is not in a recognized format: {value}")]
pub struct UnrecognizedFormatError {
    /// The field or parameter that was being normalized.
    pub field: &'static str,
    /// A rendering of the rejected value.
    pub value: String,
}

impl UnrecognizedFormatError {
    /// Constructs an error for `field` from the offending value.
    pub fn new(field: &'static str, value: &impl fmt::Debug) -> Self {
        Self {
            field,
            value: format!("{value:?}"),
        }
    }

    /// Constructs an error for a required field that was absent.
    pub(crate) fn missing(field: &'static str) -> Self {
        Self {
            field,
            value: "null".to_string(),
        }
    }

    /// Retags the error with the name of the field that was being
    /// normalized, keeping the offending value.
    pub(crate) fn for_field(mut self, field: &'static str) -> Self {
        self.field = field;
        self
    }
}
