use super::GitError;
use std::io::Write;
use std::process::{Command, Stdio};

pub struct ExecOptions {
    pub silent: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self { silent: false }
    }
}

pub fn exec(args: &[&str], options: ExecOptions) -> Result<String, GitError> {
    tracing::debug!(?args, "running git");

    let mut cmd = Command::new("git");
    cmd.args(args);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let output = cmd.output().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GitError::NotFound(e),
        _ => GitError::IoError(e),
    })?;

    if !options.silent {
        print!("{}", String::from_utf8_lossy(&output.stdout));
        let _ = std::io::stdout().flush();
    }

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        tracing::debug!(status = ?output.status.code(), %stderr, "git exited with failure");
        return Err(map_git_error(stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

fn map_git_error(stderr: String) -> GitError {
    match stderr.as_str() {
        s if s.contains("fatal: not a git repository") => GitError::NotInRepo,
        s if s.contains("Repository not found") || s.contains("not found") => {
            GitError::RepositoryNotFound(stderr)
        }
        _ => GitError::CommandFailed(stderr),
    }
}
