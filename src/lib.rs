//! Questionnaire-driven model recommendations.
//!
//! Answers to a small multiple-choice questionnaire are scored against a
//! declarative rule table; the highest-scoring candidate wins, the next one is
//! the runner-up, and the score gap decides the confidence label. The scoring
//! and recommendation paths are pure: catalog data is loaded once and passed in.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod report;
pub mod scoring;
pub mod session;
pub mod types;

pub use catalog::Catalog;
pub use engine::{Engine, RecommendError, DEFAULT_REASON_ORDER};
pub use error::{PickerError, Result};
pub use scoring::RuleTable;
pub use session::Questionnaire;
pub use types::{AnswerSet, Candidate, Confidence, Question, Recommendation};
