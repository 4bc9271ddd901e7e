use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "Health Assistant";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title shown at the top of the form.
pub const APP_TITLE: &str = "Health Assistant App";

/// Report constants. The title is the same in every language.
pub const REPORT_TITLE: &str = "Health Assistant Report";
pub const REPORT_FILE_NAME: &str = "health_report.pdf";
pub const REPORT_MIME_TYPE: &str = "application/pdf";
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Age bounds accepted on the form and in the report.
pub const MIN_AGE: i32 = 0;
pub const MAX_AGE: i32 = 120;
pub const DEFAULT_AGE: i32 = 25;

/// Default `tracing` filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "info,health_assistant_lib=debug"
}

/// Get the application data directory
/// ~/HealthAssistant/ on all platforms, falling back to the working directory.
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("HealthAssistant")
}

/// Directory where downloaded reports are written.
pub fn exports_dir() -> PathBuf {
    app_data_dir().join("exports")
}

/// Page geometry and typography for the PDF report.
///
/// Only section order and content are contractual; these values reproduce the
/// classic A4 layout (16pt bold centred title, 12pt body, 10mm line pitch).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub line_height_mm: f32,
    /// Vertical gap between sections.
    pub section_gap_mm: f32,
    /// Maximum characters per wrapped suggestion line.
    pub wrap_chars: usize,
    /// TrueType font used instead of the built-in Helvetica. Needed to render
    /// Devanagari or Telugu text; the built-in fonts only cover Latin-1.
    #[serde(skip)]
    pub unicode_font: Option<Vec<u8>>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 10.0,
            title_size: 16.0,
            body_size: 12.0,
            line_height_mm: 10.0,
            section_gap_mm: 5.0,
            wrap_chars: 85,
            unicode_font: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_dir_under_app_data() {
        let exports = exports_dir();
        assert!(exports.starts_with(app_data_dir()));
        assert!(exports.ends_with("exports"));
    }

    #[test]
    fn report_delivery_constants() {
        assert_eq!(REPORT_FILE_NAME, "health_report.pdf");
        assert_eq!(REPORT_MIME_TYPE, "application/pdf");
        assert_eq!(REPORT_TITLE, "Health Assistant Report");
    }

    #[test]
    fn default_age_within_bounds() {
        assert!((MIN_AGE..=MAX_AGE).contains(&DEFAULT_AGE));
    }

    #[test]
    fn report_config_defaults_to_a4() {
        let config = ReportConfig::default();
        assert!((config.page_width_mm - 210.0).abs() < f32::EPSILON);
        assert!((config.page_height_mm - 297.0).abs() < f32::EPSILON);
        assert!(config.unicode_font.is_none());
    }

    #[test]
    fn report_config_partial_json_uses_defaults() {
        let config: ReportConfig = serde_json::from_str(r#"{"body_size": 10.0}"#).unwrap();
        assert!((config.body_size - 10.0).abs() < f32::EPSILON);
        assert_eq!(config.wrap_chars, 85);
    }
}
