//! Command-line front end: collects the form values, prints the suggestions
//! and saves the PDF report.

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use chrono::Local;
use clap::Parser;

use health_assistant_lib::config::{self, ReportConfig};
use health_assistant_lib::localization::{self, LANGUAGE_SELECTOR_CAPTION};
use health_assistant_lib::models::enums::{LabelKey, Language};
use health_assistant_lib::session::export_report;
use health_assistant_lib::{SessionError, SessionForm, SessionOrchestrator};

/// Health Assistant - basic guidance for common symptoms (educational use only)
#[derive(Parser, Debug)]
#[command(name = "health-assistant")]
#[command(version)]
#[command(about = "Select symptoms, get basic health guidance and a PDF report", long_about = None)]
struct Args {
    /// Age in years (0-120)
    #[arg(long, default_value_t = config::DEFAULT_AGE as i64, allow_hyphen_values = true)]
    age: i64,

    /// Male, Female or Other
    #[arg(long, default_value = "Male")]
    gender: String,

    /// English, Hindi or Telugu (or en / hi / te)
    #[arg(short, long, default_value = "English")]
    language: String,

    /// Selected symptom; repeat for several, order is kept
    #[arg(short, long = "symptom", value_name = "SYMPTOM")]
    symptoms: Vec<String>,

    /// Print the selectable symptoms for the language and exit
    #[arg(long)]
    list_symptoms: bool,

    /// Directory for the PDF report (defaults to ~/HealthAssistant/exports)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// TrueType font for non-Latin report text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    health_assistant_lib::init_tracing();
    tracing::debug!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SessionError> {
    if args.list_symptoms {
        let lang = Language::from_str(&args.language)?;
        println!("{LANGUAGE_SELECTOR_CAPTION}: {lang}");
        println!("{}", localization::label(LabelKey::Header, lang));
        for symptom in localization::vocabulary(lang) {
            println!("  {symptom}");
        }
        return Ok(());
    }

    let mut report_config = ReportConfig::default();
    if let Some(path) = &args.font {
        report_config.unicode_font = Some(std::fs::read(path)?);
    }

    let form = SessionForm {
        age: args.age,
        gender: args.gender,
        language: args.language,
        symptoms: args.symptoms,
    };

    let orchestrator = SessionOrchestrator::new(report_config);
    let outcome = orchestrator.submit(form, Local::now().naive_local())?;

    let dir = args.out.unwrap_or_else(config::exports_dir);
    let path = export_report(&outcome.report, &dir)?;

    if args.json {
        let value = serde_json::json!({
            "outcome": outcome,
            "path": path,
        });
        println!("{value:#}");
    } else {
        println!("{}", outcome.success_message);
        for suggestion in &outcome.suggestions {
            println!("{suggestion}");
        }
        println!();
        println!("{}: {}", outcome.report.download_label, path.display());
        println!("{}", localization::label(LabelKey::Footer, outcome.language));
    }

    Ok(())
}
