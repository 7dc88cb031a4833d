use super::{GitClient, GitError, RemoteInfo};
use std::cell::RefCell;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListRemotes,
    AddRemote(String, String),
    Fetch(String),
    RemoveRemote(String),
}

/// Records every call and fails the ones it is told to.
#[derive(Default)]
pub struct FakeGit {
    pub remotes: Vec<RemoteInfo>,
    pub failing_adds: HashSet<String>,
    pub failing_fetches: HashSet<String>,
    pub calls: RefCell<Vec<Call>>,
}

impl FakeGit {
    pub fn with_remotes(remotes: &[(&str, &str)]) -> Self {
        FakeGit {
            remotes: remotes
                .iter()
                .map(|(name, url)| RemoteInfo {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| *c != Call::ListRemotes)
            .collect()
    }
}

impl GitClient for FakeGit {
    fn list_remotes(&self) -> Result<Vec<RemoteInfo>, GitError> {
        self.calls.borrow_mut().push(Call::ListRemotes);
        Ok(self.remotes.clone())
    }

    fn add_remote(&self, name: &str, url: &str) -> Result<(), GitError> {
        self.calls
            .borrow_mut()
            .push(Call::AddRemote(name.to_string(), url.to_string()));
        if self.failing_adds.contains(name) {
            return Err(GitError::CommandFailed(format!(
                "error: remote {} already exists.",
                name
            )));
        }
        Ok(())
    }

    fn fetch(&self, name: &str) -> Result<(), GitError> {
        self.calls.borrow_mut().push(Call::Fetch(name.to_string()));
        if self.failing_fetches.contains(name) {
            return Err(GitError::RepositoryNotFound(name.to_string()));
        }
        Ok(())
    }

    fn remove_remote(&self, name: &str) -> Result<(), GitError> {
        self.calls
            .borrow_mut()
            .push(Call::RemoveRemote(name.to_string()));
        Ok(())
    }
}
