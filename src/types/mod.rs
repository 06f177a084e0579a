pub mod answers;
pub mod catalog;
pub mod config;
pub mod recommendation;
pub mod scoring;

pub use answers::AnswerSet;
pub use catalog::{Candidate, Question, QuestionOption};
pub use recommendation::{Confidence, RankedCandidate, Recommendation};
pub use scoring::{BaseRule, Condition, InteractionRule, Score, MAX_RULE_WEIGHT};
