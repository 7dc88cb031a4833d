pub mod git_exec;
pub mod remote;

#[cfg(test)]
pub mod fake;

use git2::Repository;
use miette::Diagnostic;
use thiserror::Error;

pub use remote::RemoteInfo;

#[derive(Error, Debug, Diagnostic)]
pub enum GitError {
    #[error("Git executable not found.")]
    #[diagnostic(
        code(fetch_project::git::not_found),
        help("Ensure that 'git' is installed and available in your PATH.")
    )]
    NotFound(#[source] std::io::Error),

    #[error("Failed to execute git command.")]
    #[diagnostic(code(fetch_project::git::execution_failed))]
    IoError(#[from] std::io::Error),

    #[error("Not in git repository")]
    #[diagnostic(
        code(fetch_project::git::not_in_repo),
        help("Run this from inside a clone of the project repo.")
    )]
    NotInRepo,

    #[error("Remote repository not found: {0}")]
    #[diagnostic(code(fetch_project::git::repository_not_found))]
    RepositoryNotFound(String),

    #[error("Remote '{name}' already points at {existing}")]
    #[diagnostic(
        code(fetch_project::git::remote_conflict),
        help("Remove it with 'git remote remove {name}' and run again.")
    )]
    RemoteConflict { name: String, existing: String },

    #[error("Git command failed: {0}")]
    #[diagnostic(code(fetch_project::git::command_failed))]
    CommandFailed(String),

    #[error("{0}")]
    #[diagnostic(code(fetch_project::git::git2_error))]
    Git2Error(#[from] git2::Error),
}

/// The version-control operations the rest of the program relies on.
pub trait GitClient {
    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, GitError>;
    fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError>;
    fn fetch(&self, name: &str) -> Result<(), GitError>;
    fn remove_remote(&self, name: &str) -> Result<(), GitError>;
}

/// Talks to the repository in the current directory.
pub struct SystemGit;

impl GitClient for SystemGit {
    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, GitError> {
        remote::list_remotes()
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError> {
        remote::add_remote(name, url)
    }

    fn fetch(&self, name: &str) -> Result<(), GitError> {
        remote::fetch_remote(name)
    }

    fn remove_remote(&self, name: &str) -> Result<(), GitError> {
        remote::remove_remote(name)
    }
}

fn get_repo() -> Result<git2::Repository, GitError> {
    Repository::discover(".").map_err(|e| {
        if e.code() == git2::ErrorCode::NotFound {
            GitError::NotInRepo
        } else {
            GitError::Git2Error(e)
        }
    })
}
