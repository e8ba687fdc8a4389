//! Git Staging Operations

use super::runner::{CommandRunner, GitCommand, run_logged};

/// Stages a single path by its exact name.
///
/// Failure is logged, not returned as an error.
///
/// # Returns
/// * `true` if `git add` succeeded
pub fn stage_file<R: CommandRunner + ?Sized>(runner: &R, path: &str) -> bool {
    run_logged(runner, &GitCommand::add(&[path]))
}

/// Stages several paths in one `git add` call.
///
/// Does nothing and reports success when `paths` is empty.
pub fn stage_files<R: CommandRunner + ?Sized, S: AsRef<str>>(runner: &R, paths: &[S]) -> bool {
    if paths.is_empty() {
        return true;
    }

    run_logged(runner, &GitCommand::add(paths))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::{CommandOutcome, MockCommandRunner};

    #[test]
    fn test_stage_file_passes_path_verbatim() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| {
                command.args() == ["--literal-pathspecs", "add", "--", "public/my logo.png"]
            })
            .times(1)
            .returning(|_| CommandOutcome::ok(""));

        assert!(stage_file(&runner, "public/my logo.png"));
    }

    #[test]
    fn test_stage_files_single_call() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| {
                command.args()
                    == [
                        "--literal-pathspecs",
                        "add",
                        "--",
                        "components/ui/button.tsx",
                        "components/ui/input.tsx",
                    ]
            })
            .times(1)
            .returning(|_| CommandOutcome::ok(""));

        assert!(stage_files(
            &runner,
            &["components/ui/button.tsx", "components/ui/input.tsx"]
        ));
    }

    #[test]
    fn test_stage_file_disables_pathspec_magic() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| {
                command.args().first().map(String::as_str) == Some("--literal-pathspecs")
                    && command.args().last().map(String::as_str) == Some(":notes.txt")
            })
            .times(1)
            .returning(|_| CommandOutcome::ok(""));

        assert!(stage_file(&runner, ":notes.txt"));
    }

    #[test]
    fn test_stage_files_empty_is_a_no_op() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);

        assert!(stage_files::<_, String>(&runner, &[]));
    }
}
