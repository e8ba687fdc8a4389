//! Repository Operations
//!
//! Resolves the working-tree root that every other git call runs in.

use std::path::PathBuf;

use crate::errors::{GitError, Result, StrataError};

use super::runner::{CommandRunner, GitCommand};

/// Retrieves the top-level path of the git repository the runner points into.
///
/// Porcelain status paths are relative to this directory, so staging and
/// committing must run from here as well.
///
/// # Errors
///
/// Returns `GitError::RepositoryNotFound` if:
/// - The runner's directory is not inside a git working tree
/// - The git command fails to execute
///
/// # Examples
///
/// ```no_run
/// use strata::git::{SystemRunner, get_top_level_path};
///
/// let repo_root = get_top_level_path(&SystemRunner::new("."))?;
/// println!("Repository root: {}", repo_root.display());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn get_top_level_path<R: CommandRunner + ?Sized>(runner: &R) -> Result<PathBuf> {
    let outcome = runner.run(&GitCommand::show_toplevel());
    let top_level = outcome.stdout.trim();

    if outcome.success && !top_level.is_empty() {
        Ok(PathBuf::from(top_level))
    } else {
        Err(StrataError::Git(GitError::RepositoryNotFound))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::{CommandOutcome, MockCommandRunner};

    #[test]
    fn test_top_level_path_is_trimmed() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| *command == GitCommand::show_toplevel())
            .returning(|_| CommandOutcome::ok("/home/me/project\n"));

        assert_eq!(
            get_top_level_path(&runner).unwrap(),
            PathBuf::from("/home/me/project")
        );
    }

    #[test]
    fn test_outside_repository() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().returning(|_| {
            CommandOutcome::failed(Some(128), "fatal: not a git repository")
        });

        assert!(matches!(
            get_top_level_path(&runner),
            Err(StrataError::Git(GitError::RepositoryNotFound))
        ));
    }
}
