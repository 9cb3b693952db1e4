use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

/// Reference errors found while cross-checking a flow definition against the
/// task registry. All of these are caller mistakes.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("start task `{0}` does not exist")]
    UnknownStartTask(String),
    #[error("task name `{0}` does not exist")]
    UnknownTask(String),
    #[error("condition source task `{0}` does not exist")]
    UnknownConditionSource(String),
    #[error("condition target task `{0}` does not exist")]
    UnknownConditionTarget(String),
    #[error("duplicate condition for source task `{0}`")]
    DuplicateConditionSource(String),
}

/// Faults a single flow execution can end with. Callers branch on the
/// variant, never on the message text.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("cycle detected: task `{0}` visited multiple times")]
    CycleDetected(String),
    #[error("task `{task}` failed: {source}")]
    TaskFailed { task: String, source: anyhow::Error },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
