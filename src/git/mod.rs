//! Git Operations Module
//!
//! Everything that touches the repository, split into focused submodules.
//! All of them go through the [`CommandRunner`] seam in [`runner`].

pub mod commit;
pub mod repository;
pub mod runner;
pub mod staging;
pub mod status;

pub use commit::{CommitMessage, CommitType, git_commit};
pub use repository::get_top_level_path;
pub use runner::{CommandOutcome, CommandRunner, GitCommand, SystemRunner, run_logged};
pub use staging::{stage_file, stage_files};
pub use status::{get_untracked_files, parse_untracked, read_git_status};
