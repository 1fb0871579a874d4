// Resume feedback pipeline: grammar issues, section presence, keywords, scores, suggestions.
// The grammar checker is the only collaborator; everything after it is a pure function of the text.

pub mod engine;
pub mod grammar;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod scoring;
pub mod sections;
pub mod suggestions;

pub use engine::{build_report, FeedbackEngine, FeedbackError};
pub use models::{FeedbackReport, GrammarOutcome, ScoreBand};
