//! Commit Orchestrator
//!
//! The whole run in one place: read the status once, classify once, then walk
//! the plan committing unit by unit. Staging and commit failures are logged
//! by the runner and never stop the loop.

use crate::{
    classify::Classification,
    errors::Result,
    git::{CommandRunner, get_untracked_files, git_commit, stage_file, stage_files},
    plan::{CommitUnit, build_plan},
    utils::{format_list, print_info, print_success, print_warning},
};

/// Options resolved from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Print the plan instead of staging and committing.
    pub dry_run: bool,
    pub verbose: bool,
}

/// What happened during [`execute_plan`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Commit units walked (in dry-run mode: units printed).
    pub commits_attempted: usize,
    pub commits_created: usize,
    /// Staging or commit calls that exited non-zero.
    pub failed_calls: usize,
}

/// Executes `plan` in order.
///
/// Each single-file unit prints `Committing {path}...`, stages the path and
/// commits it; the commit is attempted even when staging failed. A group
/// unit stages all its paths in one call, then commits once. The run ends
/// with `Done committing.` whatever happened before, or with a dry-run
/// notice when nothing was executed.
pub fn execute_plan<R: CommandRunner + ?Sized>(
    runner: &R,
    plan: &[CommitUnit],
    options: RunOptions,
) -> RunReport {
    let mut report = RunReport::default();

    for unit in plan {
        report.commits_attempted += 1;

        if options.dry_run {
            print_dry_run_unit(unit);
            continue;
        }

        let staged = match unit {
            CommitUnit::Single { path, .. } => {
                println!("Committing {path}...");
                stage_file(runner, path)
            }
            CommitUnit::Group {
                category, paths, ..
            } => {
                if options.verbose {
                    print_info(
                        &format!("Committing {} {category} files together", paths.len()),
                        &format_list(paths),
                    );
                }
                stage_files(runner, paths)
            }
        };

        if !staged {
            report.failed_calls += 1;
        }

        if git_commit(runner, unit.message()) {
            report.commits_created += 1;
        } else {
            report.failed_calls += 1;
        }
    }

    if options.dry_run {
        println!("Dry run complete, nothing was committed.");
    } else {
        println!("Done committing.");
    }

    report
}

/// Prints what a unit would do without running anything.
fn print_dry_run_unit(unit: &CommitUnit) {
    match unit {
        CommitUnit::Single { path, message, .. } => {
            println!("Would commit {path}: {message}");
        }
        CommitUnit::Group { paths, message, .. } => {
            println!("Would commit {} files: {message}", paths.len());
            println!("{}", format_list(paths));
        }
    }
}

/// Runs the full pipeline against the repository behind `runner`.
///
/// # Errors
/// * If the status query fails; nothing is staged or committed in that case
pub fn run<R: CommandRunner + ?Sized>(runner: &R, options: RunOptions) -> Result<RunReport> {
    let files = get_untracked_files(runner)?;
    let classification = Classification::from_paths(files);

    if options.verbose {
        if classification.is_empty() {
            print_warning("Nothing to commit", "No untracked files were found.");
        } else {
            let counts: Vec<String> = classification
                .iter()
                .filter(|(_, bucket)| !bucket.is_empty())
                .map(|(category, bucket)| format!("{category}: {}", bucket.len()))
                .collect();

            print_info(
                &format!("Found {} untracked files", classification.len()),
                &format_list(&counts),
            );
        }
    }

    let plan = build_plan(&classification);
    let report = execute_plan(runner, &plan, options);

    if options.verbose && !options.dry_run {
        let details = format!(
            "{} of {} commits created, {} failed git calls",
            report.commits_created, report.commits_attempted, report.failed_calls
        );

        if report.failed_calls == 0 {
            print_success("Run finished", &details);
        } else {
            print_warning("Run finished with failures", &details);
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::{GitError, StrataError},
        git::{CommandOutcome, GitCommand, runner::MockCommandRunner},
    };
    use mockall::Sequence;

    fn expect_call(
        runner: &mut MockCommandRunner,
        seq: &mut Sequence,
        args: &[&str],
        outcome: CommandOutcome,
    ) {
        let expected: Vec<String> = args.iter().map(|arg| (*arg).to_string()).collect();

        runner
            .expect_run()
            .withf(move |command| command.args() == expected.as_slice())
            .times(1)
            .in_sequence(seq)
            .return_const(outcome);
    }

    fn add_args<'a>(paths: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["--literal-pathspecs", "add", "--"];
        args.extend_from_slice(paths);
        args
    }

    #[test]
    fn test_commits_follow_category_order() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();

        let status = "?? app/dashboard/page.tsx\n\
                      ?? components/navbar.tsx\n\
                      ?? components/ui/button.tsx\n\
                      ?? lib/utils.ts\n\
                      ?? components/ui/input.tsx\n\
                      ?? prisma/schema.prisma\n\
                      ?? public/logo.svg\n\
                      ?? .gitignore\n";

        expect_call(
            &mut runner,
            &mut seq,
            &["status", "--porcelain", "--untracked-files=all"],
            CommandOutcome::ok(status),
        );
        for (path, message) in [
            (".gitignore", "chore: add gitignore"),
            ("prisma/schema.prisma", "feat: setup database schema and seeds"),
            ("lib/utils.ts", "feat: add utils.ts utility"),
        ] {
            expect_call(&mut runner, &mut seq, &add_args(&[path]), CommandOutcome::ok(""));
            expect_call(&mut runner, &mut seq, &["commit", "-m", message], CommandOutcome::ok(""));
        }
        expect_call(
            &mut runner,
            &mut seq,
            &add_args(&["components/ui/button.tsx", "components/ui/input.tsx"]),
            CommandOutcome::ok(""),
        );
        expect_call(
            &mut runner,
            &mut seq,
            &["commit", "-m", "feat: add shadcn ui design system"],
            CommandOutcome::ok(""),
        );
        for (path, message) in [
            ("components/navbar.tsx", "feat: add navbar component"),
            ("app/dashboard/page.tsx", "feat: implement app/dashboard/page.tsx route"),
            ("public/logo.svg", "chore: add public/logo.svg"),
        ] {
            expect_call(&mut runner, &mut seq, &add_args(&[path]), CommandOutcome::ok(""));
            expect_call(&mut runner, &mut seq, &["commit", "-m", message], CommandOutcome::ok(""));
        }

        let report = run(&runner, RunOptions::default()).unwrap();

        assert_eq!(
            report,
            RunReport {
                commits_attempted: 7,
                commits_created: 7,
                failed_calls: 0,
            }
        );
    }

    #[test]
    fn test_status_failure_aborts_before_any_commit() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| *command == GitCommand::status())
            .times(1)
            .return_const(CommandOutcome::failed(Some(128), "fatal: not a git repository"));

        let result = run(&runner, RunOptions::default());

        assert!(matches!(
            result,
            Err(StrataError::Git(GitError::CommandFailed { .. }))
        ));
    }

    #[test]
    fn test_staging_failure_still_commits_and_continues() {
        let mut runner = MockCommandRunner::new();
        let mut seq = Sequence::new();

        expect_call(
            &mut runner,
            &mut seq,
            &["status", "--porcelain", "--untracked-files=all"],
            CommandOutcome::ok("?? lib/a.ts\n?? lib/b.ts\n"),
        );
        expect_call(
            &mut runner,
            &mut seq,
            &add_args(&["lib/a.ts"]),
            CommandOutcome::failed(Some(128), "fatal: pathspec 'lib/a.ts' did not match any files"),
        );
        expect_call(
            &mut runner,
            &mut seq,
            &["commit", "-m", "feat: add a.ts utility"],
            CommandOutcome::failed(Some(1), "nothing added to commit"),
        );
        expect_call(&mut runner, &mut seq, &add_args(&["lib/b.ts"]), CommandOutcome::ok(""));
        expect_call(
            &mut runner,
            &mut seq,
            &["commit", "-m", "feat: add b.ts utility"],
            CommandOutcome::ok(""),
        );

        let report = run(&runner, RunOptions::default()).unwrap();

        assert_eq!(report.commits_attempted, 2);
        assert_eq!(report.commits_created, 1);
        assert_eq!(report.failed_calls, 2);
    }

    #[test]
    fn test_no_untracked_files_runs_only_status() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .return_const(CommandOutcome::ok(" M src/lib.rs\n"));

        let report = run(&runner, RunOptions::default()).unwrap();

        assert_eq!(report, RunReport::default());
    }

    #[test]
    fn test_dry_run_touches_nothing() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|command| *command == GitCommand::status())
            .times(1)
            .return_const(CommandOutcome::ok(
                "?? package.json\n?? components/ui/button.tsx\n?? app/page.tsx\n",
            ));

        let options = RunOptions {
            dry_run: true,
            verbose: false,
        };
        let report = run(&runner, options).unwrap();

        assert_eq!(report.commits_attempted, 3);
        assert_eq!(report.commits_created, 0);
    }

    #[test]
    fn test_execute_plan_skips_empty_plan() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(0);

        assert_eq!(
            execute_plan(&runner, &[], RunOptions::default()),
            RunReport::default()
        );
    }
}
