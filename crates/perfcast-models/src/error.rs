//! Error types for the perfcast-models crate.

use std::backtrace::Backtrace;
use std::fmt;

use perfcast_schemas::MissingField;

/// Error type for performance model operations.
///
/// Captures failures from hardware-description field extraction, registry
/// lookup, and the `run` I/O boundary. Uses the canonical struct pattern
/// with backtrace capture and `is_xxx()` helper methods.
#[derive(Debug)]
pub struct ModelError {
    kind: ModelErrorKind,
    backtrace: Backtrace,
}

/// Internal error variants. Not exposed publicly; use `is_xxx()` methods.
#[derive(Debug)]
pub(crate) enum ModelErrorKind {
    /// A required field or path was absent from the hardware description.
    MissingField(MissingField),
    /// No registered model matches the requested name.
    UnknownModel(String),
    /// Failed to deserialize the hardware description JSON.
    Deserialization(serde_json::Error),
    /// Failed to serialize a prediction to JSON.
    Serialization(serde_json::Error),
    /// I/O error when reading input or writing output.
    Io(std::io::Error),
}

impl ModelError {
    /// Creates an error from an error kind, capturing a backtrace.
    pub(crate) fn new(kind: ModelErrorKind) -> Self {
        Self {
            kind,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an unknown-model error for a failed registry lookup.
    pub(crate) fn unknown_model(name: impl Into<String>) -> Self {
        Self::new(ModelErrorKind::UnknownModel(name.into()))
    }

    /// Returns true if this error is due to a missing hardware field.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.kind, ModelErrorKind::MissingField(_))
    }

    /// Returns true if this error is due to an unknown model name.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind, ModelErrorKind::UnknownModel(_))
    }

    /// Returns true if this error is due to deserialization failure.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ModelErrorKind::Deserialization(_))
    }

    /// Returns true if this error is due to serialization failure.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ModelErrorKind::Serialization(_))
    }

    /// Returns true if this error is due to I/O failure.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ModelErrorKind::Io(_))
    }

    /// Returns the dotted path of the missing field, if that is the cause.
    pub fn missing_field_path(&self) -> Option<&str> {
        match &self.kind {
            ModelErrorKind::MissingField(field) => Some(field.path()),
            _ => None,
        }
    }

    /// Returns the backtrace captured when this error was created.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl fmt::Display for ModelErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelErrorKind::MissingField(field) => write!(f, "{field}"),
            ModelErrorKind::UnknownModel(name) => {
                write!(f, "unknown model `{name}`")
            }
            ModelErrorKind::Deserialization(err) => {
                write!(f, "failed to deserialize hardware description: {err}")
            }
            ModelErrorKind::Serialization(err) => {
                write!(f, "failed to serialize prediction: {err}")
            }
            ModelErrorKind::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Summary of what happened.
        writeln!(f, "{}", self.kind)?;

        // Backtrace (will be empty unless RUST_BACKTRACE is set).
        write!(f, "{}", self.backtrace)
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ModelErrorKind::MissingField(field) => Some(field),
            ModelErrorKind::UnknownModel(_) => None,
            ModelErrorKind::Deserialization(err)
            | ModelErrorKind::Serialization(err) => Some(err),
            ModelErrorKind::Io(err) => Some(err),
        }
    }
}

impl From<MissingField> for ModelError {
    fn from(field: MissingField) -> Self {
        Self::new(ModelErrorKind::MissingField(field))
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ModelErrorKind::Io(err))
    }
}
