use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LocaleError, RenderError};

/// Macro to generate a closed enum with `as_str`, `ALL` and an exact-match lookup.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Exact match against `as_str`.
            pub fn from_exact(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant)),+,
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Language {
    En => "English",
    Hi => "Hindi",
    Te => "Telugu",
});

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(AdviceCategory {
    Fever => "fever",
    Cough => "cough",
    Headache => "headache",
    Generic => "generic",
});

str_enum!(LabelKey {
    Header => "header",
    ChooseSymptoms => "choose_symptoms",
    Button => "button",
    Warning => "warning",
    Success => "success",
    DownloadLabel => "download_label",
    Footer => "footer",
});

impl Language {
    /// ISO 639-1 tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
        }
    }
}

/// Accepts the display name ("Hindi") or the ISO tag ("hi"), case-insensitive.
impl FromStr for Language {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|l| {
                l.as_str().eq_ignore_ascii_case(needle) || l.tag().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| LocaleError::UnsupportedLanguage(s.into()))
    }
}

/// Gender arrives from the form as free text, so a bad value is a render-time
/// validation failure naming the `gender` field.
impl FromStr for Gender {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_exact(s.trim()).ok_or_else(|| RenderError::InvalidField {
            field: "gender",
            reason: format!("'{s}' is not one of Male, Female, Other"),
        })
    }
}

impl FromStr for LabelKey {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::from_exact(&normalized).ok_or_else(|| LocaleError::UnknownLabel(s.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_accepts_names_and_tags() {
        for (input, expected) in [
            ("English", Language::En),
            ("hindi", Language::Hi),
            ("TELUGU", Language::Te),
            ("en", Language::En),
            ("HI", Language::Hi),
            (" te ", Language::Te),
        ] {
            assert_eq!(Language::from_str(input).unwrap(), expected);
        }
    }

    #[test]
    fn unsupported_language_is_rejected() {
        let err = Language::from_str("French").unwrap_err();
        assert_eq!(err, LocaleError::UnsupportedLanguage("French".into()));
        assert!(Language::from_str("").is_err());
    }

    #[test]
    fn gender_round_trip() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_str(g.as_str()).unwrap(), *g);
        }
    }

    #[test]
    fn invalid_gender_names_field() {
        let err = Gender::from_str("Robot").unwrap_err();
        assert_eq!(err.field(), Some("gender"));
    }

    #[test]
    fn label_key_accepts_dash_form() {
        assert_eq!(LabelKey::from_str("download-label").unwrap(), LabelKey::DownloadLabel);
        assert_eq!(LabelKey::from_str("Header").unwrap(), LabelKey::Header);
        assert!(matches!(
            LabelKey::from_str("title"),
            Err(LocaleError::UnknownLabel(_))
        ));
    }

    #[test]
    fn closed_sets_have_expected_sizes() {
        assert_eq!(Language::ALL.len(), 3);
        assert_eq!(Gender::ALL.len(), 3);
        assert_eq!(AdviceCategory::ALL.len(), 4);
    }
}
