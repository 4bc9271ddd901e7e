use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::{Gender, Language};
use crate::error::{RenderError, SessionError};

/// Localized advice strings, one per selected symptom, in selection order.
pub type SuggestionList = Vec<String>;

/// Raw form values as submitted by the presentation layer. Untrusted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionForm {
    pub age: i64,
    pub gender: String,
    pub language: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
}

/// One session's immutable input snapshot.
///
/// `symptoms` keeps the selection order and any duplicates. `age` is signed so
/// that out-of-range values survive until the report builder rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInput {
    pub age: i32,
    pub gender: Gender,
    pub language: Language,
    pub symptoms: Vec<String>,
}

impl TryFrom<SessionForm> for SessionInput {
    type Error = SessionError;

    fn try_from(form: SessionForm) -> Result<Self, Self::Error> {
        let language = Language::from_str(&form.language)?;
        let gender = Gender::from_str(&form.gender)?;
        let age = i32::try_from(form.age).map_err(|_| RenderError::InvalidField {
            field: "age",
            reason: format!("{} is not a valid age", form.age),
        })?;

        Ok(Self {
            age,
            gender,
            language,
            symptoms: form.symptoms,
        })
    }
}

/// A generated report ready for download.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportArtifact {
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
    pub download_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocaleError;

    fn form(age: i64, gender: &str, language: &str) -> SessionForm {
        SessionForm {
            age,
            gender: gender.into(),
            language: language.into(),
            symptoms: vec!["Fever".into(), "Fever".into()],
        }
    }

    #[test]
    fn form_converts_to_input() {
        let input = SessionInput::try_from(form(30, "Female", "Hindi")).unwrap();
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.language, Language::Hi);
        assert_eq!(input.symptoms, vec!["Fever", "Fever"]);
    }

    #[test]
    fn form_with_unknown_language_fails() {
        let err = SessionInput::try_from(form(30, "Male", "Klingon")).unwrap_err();
        assert!(matches!(
            err,
            SessionError::Locale(LocaleError::UnsupportedLanguage(_))
        ));
    }

    #[test]
    fn form_with_unknown_gender_names_field() {
        let err = SessionInput::try_from(form(30, "unknown", "English")).unwrap_err();
        match err {
            SessionError::Render(e) => assert_eq!(e.field(), Some("gender")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn form_with_overflowing_age_names_field() {
        let err = SessionInput::try_from(form(i64::MAX, "Male", "English")).unwrap_err();
        match err {
            SessionError::Render(e) => assert_eq!(e.field(), Some("age")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn form_deserializes_without_symptoms() {
        let form: SessionForm =
            serde_json::from_str(r#"{"age": 25, "gender": "Male", "language": "en"}"#).unwrap();
        assert!(form.symptoms.is_empty());
    }
}
