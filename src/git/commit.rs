//! Commit Operations
//!
//! Conventional commit messages and the commit call itself.

use std::fmt;

use super::runner::{CommandRunner, GitCommand, run_logged};

/// Conventional commit type used as the message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Chore,
    Feat,
    Docs,
}

impl CommitType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chore => "chore",
            Self::Feat => "feat",
            Self::Docs => "docs",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commit message of the form `{type}: {description}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    pub commit_type: CommitType,
    pub description: String,
}

impl CommitMessage {
    pub fn new(commit_type: CommitType, description: impl Into<String>) -> Self {
        Self {
            commit_type,
            description: description.into(),
        }
    }

    pub fn chore(description: impl Into<String>) -> Self {
        Self::new(CommitType::Chore, description)
    }

    pub fn feat(description: impl Into<String>) -> Self {
        Self::new(CommitType::Feat, description)
    }

    pub fn docs(description: impl Into<String>) -> Self {
        Self::new(CommitType::Docs, description)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.commit_type, self.description)
    }
}

/// Commits whatever is staged with `message`.
///
/// Failure is logged, not returned as an error.
///
/// # Returns
/// * `true` if `git commit` succeeded
pub fn git_commit<R: CommandRunner + ?Sized>(runner: &R, message: &CommitMessage) -> bool {
    run_logged(runner, &GitCommand::commit(message.to_string()))
}
