use crate::git::{GitClient, GitError};
use miette::Diagnostic;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

// HTTPS: https://github.com/Ada-C10/calculator.git
// SSH:   git@github.com:Ada-C10/calculator.git
static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/][^/]+/([^/]+)\.git").expect("valid github url pattern")
});

#[derive(Error, Debug, Diagnostic)]
pub enum ProjectNameError {
    #[error("Could not list git remotes")]
    #[diagnostic(code(fetch_project::project::git_error))]
    GitError(#[from] GitError),

    #[error("Could not detect project name: no 'origin' remote")]
    #[diagnostic(
        code(fetch_project::project::no_origin),
        help("Are you in the project repo? You can also pass the project name explicitly.")
    )]
    NoOrigin,

    #[error("Could not detect project name from origin {url}")]
    #[diagnostic(
        code(fetch_project::project::unrecognized_url),
        help("Only GitHub remotes are recognized. Pass the project name explicitly.")
    )]
    UnrecognizedUrl { url: String },
}

/// Returns the explicit name untouched, or derives it from the origin remote.
pub fn resolve(git: &impl GitClient, explicit: Option<&str>) -> Result<String, ProjectNameError> {
    if let Some(name) = explicit {
        return Ok(name.to_string());
    }

    let origin = git
        .list_remotes()?
        .into_iter()
        .find(|r| r.name == "origin")
        .ok_or(ProjectNameError::NoOrigin)?;

    tracing::debug!(url = %origin.url, "found origin remote");

    parse_project_name(&origin.url).ok_or(ProjectNameError::UnrecognizedUrl { url: origin.url })
}

pub fn parse_project_name(url: &str) -> Option<String> {
    GITHUB_URL
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::fake::{Call, FakeGit};

    #[test]
    fn test_parse_https_url() {
        assert_eq!(
            parse_project_name("https://github.com/Ada-C10/calculator.git").as_deref(),
            Some("calculator")
        );
    }

    #[test]
    fn test_parse_ssh_url() {
        assert_eq!(
            parse_project_name("git@github.com:Ada-C10/calculator.git").as_deref(),
            Some("calculator")
        );
    }

    #[test]
    fn test_parse_url_with_trailing_text() {
        assert_eq!(
            parse_project_name("https://github.com/Ada-C10/video-store.git/").as_deref(),
            Some("video-store")
        );
    }

    #[test]
    fn test_parse_keeps_dots_in_name() {
        assert_eq!(
            parse_project_name("https://github.com/Ada-C10/ada.github.io.git").as_deref(),
            Some("ada.github.io")
        );
    }

    #[test]
    fn test_parse_non_github_url() {
        assert_eq!(parse_project_name("https://gitlab.com/Ada-C10/calculator.git"), None);
        assert_eq!(parse_project_name("git@bitbucket.org:ada/calculator.git"), None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(parse_project_name("https://GitHub.com/Ada-C10/calculator.git"), None);
    }

    #[test]
    fn test_parse_url_without_git_suffix() {
        assert_eq!(parse_project_name("https://github.com/Ada-C10/calculator"), None);
    }

    #[test]
    fn test_resolve_explicit_name_skips_git() {
        let git = FakeGit::default();
        let name = resolve(&git, Some("Not A Repo!")).unwrap();
        assert_eq!(name, "Not A Repo!");
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_resolve_uses_origin_only() {
        let git = FakeGit::with_remotes(&[
            ("upstream", "https://github.com/AdaGold/other.git"),
            ("origin-old", "https://github.com/Ada-C9/old.git"),
            ("origin", "git@github.com:Ada-C10/calculator.git"),
        ]);
        assert_eq!(resolve(&git, None).unwrap(), "calculator");
        assert_eq!(git.calls(), vec![Call::ListRemotes]);
    }

    #[test]
    fn test_resolve_without_origin() {
        let git = FakeGit::with_remotes(&[("upstream", "https://github.com/AdaGold/x.git")]);
        assert!(matches!(resolve(&git, None), Err(ProjectNameError::NoOrigin)));
    }

    #[test]
    fn test_resolve_non_github_origin() {
        let git = FakeGit::with_remotes(&[("origin", "https://gitlab.com/Ada-C10/calculator.git")]);
        assert!(matches!(
            resolve(&git, None),
            Err(ProjectNameError::UnrecognizedUrl { .. })
        ));
    }
}
