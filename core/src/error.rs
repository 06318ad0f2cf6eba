use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("row {row}: date '{value}' cannot be parsed")]
    MalformedDate { value: String, row: usize },

    #[error("row {row}: missing required column '{column}'")]
    MissingColumn { column: &'static str, row: usize },

    #[error("row {row}: complaint count '{value}' is not a non-negative integer")]
    MalformedCount { value: String, row: usize },

    #[error("filter selection '{selected}' is not in the enumerated state set")]
    InvalidFilter { selected: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashResult<T> = Result<T, DashboardError>;
