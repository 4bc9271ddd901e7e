//! Localization Table: static per-language symptom vocabulary and UI strings.
//!
//! Three languages, fixed at compile time. Lookups never fall back to another
//! language: an unsupported tag fails with `LocaleError::UnsupportedLanguage`.

use std::str::FromStr;

use crate::error::LocaleError;
use crate::models::enums::{Gender, LabelKey, Language};

// ═══════════════════════════════════════════
// Constants: selector captions and vocabularies
// ═══════════════════════════════════════════

/// Number of selectable symptoms per language.
pub const VOCABULARY_SIZE: usize = 6;

/// Caption of the language selector, shown in all three scripts.
pub const LANGUAGE_SELECTOR_CAPTION: &str = "Language / भाषा / భాష";

const VOCABULARY_EN: [&str; VOCABULARY_SIZE] =
    ["Fever", "Cough", "Headache", "Cold", "Fatigue", "Nausea"];

const VOCABULARY_HI: [&str; VOCABULARY_SIZE] =
    ["बुखार", "खांसी", "सिरदर्द", "सर्दी", "थकान", "मतली"];

// The leading space on the fatigue entry is part of the shipped vocabulary.
const VOCABULARY_TE: [&str; VOCABULARY_SIZE] =
    ["కుండు", "కఫం", "తలనొప్పి", "చలి", " అలసట", "వాంతులు"];

// ═══════════════════════════════════════════
// Lookups
// ═══════════════════════════════════════════

/// Selectable symptom tokens for `lang`, in display order.
pub fn vocabulary(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => &VOCABULARY_EN,
        Language::Hi => &VOCABULARY_HI,
        Language::Te => &VOCABULARY_TE,
    }
}

/// Vocabulary for a language given as a free-form tag or display name.
pub fn vocabulary_for(tag: &str) -> Result<&'static [&'static str], LocaleError> {
    Ok(vocabulary(Language::from_str(tag)?))
}

/// UI / report label `key` in `lang`.
pub fn label(key: LabelKey, lang: Language) -> &'static str {
    use Language::{En, Hi, Te};

    match (key, lang) {
        (LabelKey::Header, En) => "Select your symptoms",
        (LabelKey::Header, Hi) => "अपने लक्षण चुनें",
        (LabelKey::Header, Te) => "మీ లక్షణాలను ఎంచుకోండి",

        // The multiselect caption is English in every language.
        (LabelKey::ChooseSymptoms, _) => "Choose symptoms",

        (LabelKey::Button, En) => "Get Suggestions",
        (LabelKey::Button, Hi) => "सुझाव प्राप्त करें",
        (LabelKey::Button, Te) => "సలహాలు పొందండి",

        (LabelKey::Warning, En) => "Please select at least one symptom!",
        (LabelKey::Warning, Hi) => "कृपया कम से कम एक लक्षण चुनें!",
        (LabelKey::Warning, Te) => "దయచేసి కనీసం ఒక లక్షణం ఎంచుకోండి!",

        (LabelKey::Success, En) => "Here are some basic suggestions based on your symptoms:",
        (LabelKey::Success, Hi) => "आपके लक्षणों के आधार पर कुछ बुनियादी सुझाव:",
        (LabelKey::Success, Te) => "మీ లక్షణాల ఆధారంగా కొన్ని ప్రాథమిక సలహాలు:",

        (LabelKey::DownloadLabel, En) => "Download PDF Report",
        (LabelKey::DownloadLabel, Hi) => "पीडीएफ रिपोर्ट डाउनलोड करें",
        (LabelKey::DownloadLabel, Te) => "PDF రిపోర్ట్ డౌన్లోడ్ చేయండి",

        (LabelKey::Footer, En) => "This app is for educational purposes only.",
        (LabelKey::Footer, Hi) => "यह ऐप केवल शैक्षिक उद्देश्यों के लिए है।",
        (LabelKey::Footer, Te) => "ఈ యాప్ కేవలం విద్యా ఉద్దేశాలకోసం మాత్రమే.",
    }
}

/// Label lookup with both key and language given as strings.
pub fn label_for(key: &str, tag: &str) -> Result<&'static str, LocaleError> {
    let lang = Language::from_str(tag)?;
    Ok(label(LabelKey::from_str(key)?, lang))
}

/// Display names offered by the language selector, in selector order.
pub fn language_options() -> Vec<&'static str> {
    Language::ALL.iter().map(|l| l.as_str()).collect()
}

/// Options offered by the gender selector.
pub fn gender_options() -> Vec<&'static str> {
    Gender::ALL.iter().map(|g| g.as_str()).collect()
}
