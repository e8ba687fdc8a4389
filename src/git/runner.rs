//! Git Command Runner
//!
//! Every interaction with the repository goes through one typed operation:
//! a [`GitCommand`] is handed to a [`CommandRunner`], which returns a
//! [`CommandOutcome`]. The orchestrator only ever sees this seam, so tests can
//! swap the real `git` binary for a mock.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::Command,
};

/// A `git` invocation, stored as its argument vector.
///
/// Arguments are passed to the process as-is (no shell), so paths containing
/// spaces or quotes need no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
}

impl GitCommand {
    /// Builds a command from raw arguments (without the leading `git`).
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `git status --porcelain --untracked-files=all`
    #[must_use]
    pub fn status() -> Self {
        Self::new(["status", "--porcelain", "--untracked-files=all"])
    }

    /// `git rev-parse --show-toplevel`
    #[must_use]
    pub fn show_toplevel() -> Self {
        Self::new(["rev-parse", "--show-toplevel"])
    }

    /// `git --literal-pathspecs add -- <paths...>`
    ///
    /// Paths are matched literally, so names such as `:notes.txt` or
    /// `app/[id]/page.tsx` stage exactly that file.
    pub fn add<S: AsRef<str>>(paths: &[S]) -> Self {
        let mut args = vec![
            "--literal-pathspecs".to_string(),
            "add".to_string(),
            "--".to_string(),
        ];
        args.extend(paths.iter().map(|path| path.as_ref().to_string()));

        Self { args }
    }

    /// `git commit -m <message>`
    pub fn commit(message: impl Into<String>) -> Self {
        Self::new(["commit".to_string(), "-m".to_string(), message.into()])
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("git")?;

        for arg in &self.args {
            let needs_quotes =
                arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"');

            if needs_quotes {
                let escaped = arg.replace('\\', "\\\\").replace('"', "\\\"");
                write!(f, " \"{escaped}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }

        Ok(())
    }
}

/// Result of running a [`GitCommand`] to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    /// Exit code, `None` when the process could not be spawned or was killed by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutcome {
    /// A zero-exit outcome carrying `stdout`.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// A failed outcome carrying `stderr`.
    pub fn failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Executes git commands synchronously.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `command` and waits for it, capturing its output.
    fn run(&self, command: &GitCommand) -> CommandOutcome;
}

/// Runs the system `git` binary inside a fixed working-tree root.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    root: PathBuf,
}

impl SystemRunner {
    /// Creates a runner whose commands execute in `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &GitCommand) -> CommandOutcome {
        match Command::new("git")
            .args(command.args())
            .current_dir(&self.root)
            .output()
        {
            Ok(output) => CommandOutcome {
                success: output.status.success(),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(error) => CommandOutcome::failed(None, error.to_string()),
        }
    }
}

/// Runs a command whose failure must not stop the run.
///
/// On a non-zero exit this prints `Error running {cmd}: {stderr}` and returns
/// `false`; the caller decides whether to keep going.
pub fn run_logged<R: CommandRunner + ?Sized>(runner: &R, command: &GitCommand) -> bool {
    let outcome = runner.run(command);

    if !outcome.success {
        println!("Error running {command}: {}", outcome.stderr);
    }

    outcome.success
}
