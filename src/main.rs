use strata::{
    cli::run,
    errors::{GitError, StrataError},
    utils::print_error,
};

fn main() {
    if let Err(error) = run() {
        match error {
            StrataError::Git(GitError::RepositoryNotFound) => print_error(
                "Git repository not found",
                "Could not find a git repository in this directory or any parent directories.",
                "Please ensure you're in a Git repository, or pass its path.",
            ),
            other => print_error(
                "Run aborted",
                &other.to_string(),
                "No files were staged or committed.",
            ),
        }

        std::process::exit(1);
    }
}
