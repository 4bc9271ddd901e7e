//! Advisory Resolver: symptom token → advice category → localized advice.
//!
//! Each category lists its accepted surface forms in every supported language,
//! so a token from a different language than the session's still resolves.
//! Matching is exact equality after normalization; anything else is `Generic`.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::enums::{AdviceCategory, Language};
use crate::models::session::SuggestionList;

/// Recognised surface forms per category, across all languages.
///
/// Kept exactly as shipped (including the Telugu fever term), so adding a
/// symptom is an edit to this table only.
const SURFACE_FORMS: &[(AdviceCategory, &[&str])] = &[
    (AdviceCategory::Fever, &["fever", "बुखार", "కుండు"]),
    (AdviceCategory::Cough, &["cough", "खांसी", "కఫం"]),
    (AdviceCategory::Headache, &["headache", "सिरदर्द", "తలనొప్పి"]),
];

/// Normalized surface form → category.
static CATEGORY_INDEX: LazyLock<HashMap<String, AdviceCategory>> = LazyLock::new(|| {
    SURFACE_FORMS
        .iter()
        .flat_map(|(category, forms)| forms.iter().map(move |f| (normalize(f), *category)))
        .collect()
});

/// Trim surrounding whitespace and lower-case.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// Canonical category for one symptom token. Unknown tokens map to `Generic`.
pub fn classify(token: &str) -> AdviceCategory {
    CATEGORY_INDEX
        .get(&normalize(token))
        .copied()
        .unwrap_or(AdviceCategory::Generic)
}

/// Advice text for `category` in `lang`.
pub fn render(category: AdviceCategory, lang: Language) -> &'static str {
    use Language::{En, Hi, Te};

    match (category, lang) {
        (AdviceCategory::Fever, En) => {
            "- Stay hydrated and rest. Consult a doctor if fever persists."
        }
        (AdviceCategory::Fever, Hi) => {
            "- पर्याप्त पानी पीएं और आराम करें। यदि बुखार बना रहे, तो डॉक्टर से संपर्क करें।"
        }
        (AdviceCategory::Fever, Te) => {
            "- ఎక్కువ నీరు తాగి విశ్రాంతి తీసుకోండి. జ్వరం కొనసాగితే డాక్టర్‌ను సంప్రదించండి."
        }

        (AdviceCategory::Cough, En) => {
            "- Drink warm fluids. Consider consulting a doctor if persistent."
        }
        (AdviceCategory::Cough, Hi) => {
            "- गर्म तरल पदार्थ पिएं। लगातार होने पर डॉक्टर से संपर्क करें।"
        }
        (AdviceCategory::Cough, Te) => {
            "- వేడి ద్రావణాలు తాగండి. దీర్ఘకాలం కొనసాగితే డాక్టర్‌ను సంప్రదించండి."
        }

        (AdviceCategory::Headache, En) => {
            "- Rest in a dark room, stay hydrated. Seek medical advice if severe."
        }
        (AdviceCategory::Headache, Hi) => {
            "- अंधेरे कमरे में आराम करें, पर्याप्त पानी पिएं। गंभीर होने पर डॉक्टर से संपर्क करें।"
        }
        (AdviceCategory::Headache, Te) => {
            "- చీకటి గదిలో విశ్రాంతి తీసుకోండి, తగినంత నీరు తాగండి. తీవ్రమైనట్లయితే వైద్య సలహా తీసుకోండి."
        }

        (AdviceCategory::Generic, En) => {
            "- General health advice: Eat well, sleep well, exercise regularly."
        }
        (AdviceCategory::Generic, Hi) => {
            "- सामान्य स्वास्थ्य सुझाव: अच्छा भोजन करें, पर्याप्त नींद लें, नियमित व्यायाम करें।"
        }
        (AdviceCategory::Generic, Te) => {
            "- సాధారణ ఆరోగ్య సలహా: బాగా తినండి, బాగా నిద్రపోండి, సాధారణ వ్యాయామం చేయండి."
        }
    }
}

/// One suggestion per input token, same order, duplicates kept. Never fails.
pub fn resolve<S: AsRef<str>>(symptoms: &[S], lang: Language) -> SuggestionList {
    symptoms
        .iter()
        .map(|s| render(classify(s.as_ref()), lang).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_english_scenario() {
        let out = resolve(&["Fever", "Cough"], Language::En);
        assert_eq!(
            out,
            vec![
                "- Stay hydrated and rest. Consult a doctor if fever persists.",
                "- Drink warm fluids. Consider consulting a doctor if persistent.",
            ]
        );
    }

    #[test]
    fn english_token_renders_in_hindi() {
        let out = resolve(&["Headache"], Language::Hi);
        assert_eq!(out, vec![render(AdviceCategory::Headache, Language::Hi)]);
    }

    #[test]
    fn cross_language_tokens_resolve() {
        assert_eq!(classify("बुखार"), AdviceCategory::Fever);
        assert_eq!(classify("కఫం"), AdviceCategory::Cough);
        assert_eq!(classify("తలనొప్పి"), AdviceCategory::Headache);
        let out = resolve(&["खांसी"], Language::En);
        assert_eq!(out[0], render(AdviceCategory::Cough, Language::En));
    }

    #[test]
    fn normalization_is_case_and_whitespace_insensitive() {
        assert_eq!(classify("FEVER"), AdviceCategory::Fever);
        assert_eq!(classify("  cough "), AdviceCategory::Cough);
    }

    #[test]
    fn no_partial_matches() {
        assert_eq!(classify("fevers"), AdviceCategory::Generic);
        assert_eq!(classify("head"), AdviceCategory::Generic);
        assert_eq!(classify(""), AdviceCategory::Generic);
    }

    #[test]
    fn unknown_tokens_fall_back_to_generic() {
        for lang in Language::ALL {
            let out = resolve(&["Nausea"], *lang);
            assert_eq!(out, vec![render(AdviceCategory::Generic, *lang)]);
        }
        // Remaining vocabulary entries have no dedicated advice.
        assert_eq!(classify("Cold"), AdviceCategory::Generic);
        assert_eq!(classify("थकान"), AdviceCategory::Generic);
        assert_eq!(classify(" అలసట"), AdviceCategory::Generic);
    }

    #[test]
    fn empty_input_yields_empty_list() {
        let empty: [&str; 0] = [];
        assert!(resolve(&empty, Language::En).is_empty());
    }

    #[test]
    fn order_and_duplicates_preserved() {
        let symptoms = vec![
            "Cough".to_string(),
            "Fever".to_string(),
            "Cough".to_string(),
            "Mystery".to_string(),
        ];
        let out = resolve(&symptoms, Language::Te);
        assert_eq!(out.len(), symptoms.len());
        assert_eq!(out[0], out[2]);
        assert_eq!(out[0], render(AdviceCategory::Cough, Language::Te));
        assert_eq!(out[1], render(AdviceCategory::Fever, Language::Te));
        assert_eq!(out[3], render(AdviceCategory::Generic, Language::Te));
    }

    #[test]
    fn resolve_is_idempotent() {
        let symptoms = ["Headache", "Cold", "बुखार"];
        for lang in Language::ALL {
            assert_eq!(resolve(&symptoms, *lang), resolve(&symptoms, *lang));
        }
    }

    #[test]
    fn every_category_has_text_in_every_language() {
        for category in AdviceCategory::ALL {
            for lang in Language::ALL {
                assert!(render(*category, *lang).starts_with("- "));
            }
        }
    }

    #[test]
    fn surface_forms_are_unique() {
        let total: usize = SURFACE_FORMS.iter().map(|(_, forms)| forms.len()).sum();
        assert_eq!(CATEGORY_INDEX.len(), total);
    }
}
