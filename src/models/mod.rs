pub mod enums;
pub mod session;

pub use enums::{AdviceCategory, Gender, LabelKey, Language};
pub use session::{ReportArtifact, SessionForm, SessionInput, SuggestionList};
