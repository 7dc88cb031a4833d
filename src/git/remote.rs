use super::git_exec::{ExecOptions, exec};
use super::{GitError, get_repo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteInfo {
    pub name: String,
    pub url: String,
}

pub fn list_remotes() -> Result<Vec<RemoteInfo>, GitError> {
    let repo = get_repo()?;
    let names = repo.remotes()?;

    let remotes = names
        .iter()
        .flatten()
        .filter_map(|name| {
            let remote = repo.find_remote(name).ok()?;
            let url = remote.url()?.to_string();
            Some(RemoteInfo {
                name: name.to_string(),
                url,
            })
        })
        .collect();

    Ok(remotes)
}

pub fn add_remote(name: &str, url: &str) -> Result<(), GitError> {
    exec(&["remote", "add", name, url], ExecOptions::default())?;
    Ok(())
}

pub fn fetch_remote(name: &str) -> Result<(), GitError> {
    exec(&["fetch", name], ExecOptions::default())?;
    Ok(())
}

pub fn remove_remote(name: &str) -> Result<(), GitError> {
    exec(&["remote", "remove", name], ExecOptions { silent: true })?;
    Ok(())
}
