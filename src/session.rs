//! Session Orchestrator: one form submission, start to finish.
//!
//! Guards the empty selection, runs the resolver then the report builder, and
//! packages the PDF for download. Persisting the file is done here, never in
//! the core.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::advisory;
use crate::config::{ReportConfig, REPORT_FILE_NAME, REPORT_MIME_TYPE};
use crate::error::SessionError;
use crate::localization::label;
use crate::models::enums::{AdviceCategory, LabelKey, Language};
use crate::models::session::{ReportArtifact, SessionForm, SessionInput, SuggestionList};
use crate::report;

/// Everything the presentation layer shows after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub language: Language,
    pub success_message: String,
    pub suggestions: SuggestionList,
    pub report: ReportArtifact,
}

#[derive(Debug, Clone, Default)]
pub struct SessionOrchestrator {
    config: ReportConfig,
}

impl SessionOrchestrator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Parses raw form values, then runs the session.
    pub fn submit(
        &self,
        form: SessionForm,
        generated_at: NaiveDateTime,
    ) -> Result<SessionOutcome, SessionError> {
        let input = SessionInput::try_from(form)?;
        self.run(&input, generated_at)
    }

    /// Resolves suggestions and builds the report for one session.
    ///
    /// An empty selection never reaches the core; the localized warning is
    /// returned instead.
    pub fn run(
        &self,
        input: &SessionInput,
        generated_at: NaiveDateTime,
    ) -> Result<SessionOutcome, SessionError> {
        let lang = input.language;
        if input.symptoms.is_empty() {
            tracing::warn!(language = lang.tag(), "Session submitted without symptoms");
            return Err(SessionError::NoSymptoms {
                warning: label(LabelKey::Warning, lang).to_string(),
            });
        }

        tracing::info!(
            language = lang.tag(),
            symptoms = input.symptoms.len(),
            "Resolving suggestions"
        );

        let fallbacks = input
            .symptoms
            .iter()
            .filter(|s| advisory::classify(s) == AdviceCategory::Generic)
            .count();
        if fallbacks > 0 {
            tracing::debug!(fallbacks, "Unrecognised symptoms resolved to generic advice");
        }

        let suggestions = advisory::resolve(&input.symptoms, lang);

        let bytes = report::build_with_config(input, &suggestions, generated_at, &self.config)
            .inspect_err(|e| tracing::warn!("Report rejected: {e}"))?;

        tracing::info!(bytes = bytes.len(), "Report generated");

        Ok(SessionOutcome {
            language: lang,
            success_message: label(LabelKey::Success, lang).to_string(),
            suggestions,
            report: ReportArtifact {
                bytes,
                file_name: REPORT_FILE_NAME.to_string(),
                mime_type: REPORT_MIME_TYPE.to_string(),
                download_label: label(LabelKey::DownloadLabel, lang).to_string(),
            },
        })
    }
}

/// Writes the report under `dir`, creating it if needed. Returns the file path.
pub fn export_report(artifact: &ReportArtifact, dir: &Path) -> Result<PathBuf, SessionError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(&artifact.file_name);
    std::fs::write(&path, &artifact.bytes)?;
    tracing::info!(path = %path.display(), "Report exported");
    Ok(path)
}
