//! Error types for sqltemplate

use thiserror::Error;

use crate::template::PlaceholderKind;

/// Result type alias for template compilation
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Error types for template compilation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The number of placeholders in the template does not match the argument count
    #[error("Template mismatch: {placeholders} placeholder(s) but {args} argument(s)")]
    Mismatch { placeholders: usize, args: usize },

    /// An argument has no rendering rule under its placeholder tag
    #[error("Unsupported type at placeholder #{placeholder} ({tag}): {found}")]
    UnsupportedType {
        /// 1-based placeholder position.
        placeholder: usize,
        tag: PlaceholderKind,
        found: String,
    },

    /// An argument could not be converted from its serialized form
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TemplateError {
    /// Create an unsupported type error
    pub fn unsupported(placeholder: usize, tag: PlaceholderKind, found: impl Into<String>) -> Self {
        Self::UnsupportedType {
            placeholder,
            tag,
            found: found.into(),
        }
    }

    /// Check if this is a placeholder/argument count mismatch
    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatch { .. })
    }

    /// Check if this is an unsupported type error
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}
