use crate::engine::RecommendError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error("unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("unknown option '{option}' for dimension '{dimension}'")]
    UnknownOption { dimension: String, option: String },

    #[error("unknown candidate: {0}")]
    UnknownCandidate(String),

    #[error("invalid answer '{0}': expected dimension=option")]
    InvalidAnswer(String),

    #[error("questionnaire is already complete")]
    QuestionnaireComplete,

    #[error("questionnaire ended after {answered} of {total} questions")]
    QuestionnaireIncomplete { answered: usize, total: usize },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("scenario parse error: {0}")]
    ScenarioParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PickerError {
    /// Errors caused by the answers or candidate list a caller supplied,
    /// as opposed to failures reading config or scenario files.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PickerError::Recommend(_)
                | PickerError::UnknownDimension(_)
                | PickerError::UnknownOption { .. }
                | PickerError::UnknownCandidate(_)
                | PickerError::InvalidAnswer(_)
                | PickerError::QuestionnaireComplete
                | PickerError::QuestionnaireIncomplete { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
