use thiserror::Error;

/// Main error type for the Strata application
#[derive(Error, Debug)]
pub enum StrataError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not in a git repository - please run this command from within a git repository")]
    RepositoryNotFound,

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Type alias for Result using `StrataError`
pub type Result<T> = std::result::Result<T, StrataError>;
