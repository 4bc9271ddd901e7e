//! Error taxonomy for the advisory core and the session orchestrator.
//!
//! Unrecognised symptom tokens are not an error: they degrade to the generic
//! advice category inside the resolver.

use thiserror::Error;

/// Failures of the Localization Table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown label key: {0}")]
    UnknownLabel(String),
}

/// Failures of the Report Builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("PDF error: {0}")]
    Pdf(String),

    /// The built-in Helvetica fonts cannot encode this character.
    #[error("Helvetica cannot draw {0:?}: configure a Unicode TrueType font")]
    MissingFont(char),
}

impl RenderError {
    /// Name of the offending demographic field, if this is a validation failure.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { field, .. } => Some(field),
            Self::Pdf(_) | Self::MissingFont(_) => None,
        }
    }
}

/// Failures surfaced by the session orchestrator.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Nothing was selected. Carries the localized warning to show instead.
    #[error("{warning}")]
    NoSymptoms { warning: String },

    #[error(transparent)]
    Locale(#[from] LocaleError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_names_field() {
        let err = RenderError::InvalidField {
            field: "age",
            reason: "200 is outside 0..=120".into(),
        };
        assert_eq!(err.field(), Some("age"));
        assert_eq!(err.to_string(), "Invalid age: 200 is outside 0..=120");
        assert_eq!(RenderError::Pdf("x".into()).field(), None);
    }

    #[test]
    fn session_error_wraps_core_errors() {
        let err: SessionError = LocaleError::UnsupportedLanguage("fr".into()).into();
        assert_eq!(err.to_string(), "Unsupported language: fr");
        assert!(matches!(err, SessionError::Locale(_)));
    }

    #[test]
    fn no_symptoms_displays_warning_alone() {
        let err = SessionError::NoSymptoms {
            warning: "Please select at least one symptom!".into(),
        };
        assert_eq!(err.to_string(), "Please select at least one symptom!");
    }

    #[test]
    fn missing_font_names_character() {
        let err = RenderError::MissingFont('त');
        assert_eq!(
            err.to_string(),
            "Helvetica cannot draw 'त': configure a Unicode TrueType font"
        );
    }
}
