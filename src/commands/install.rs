use crate::config::{APP_NAME, RunOptions};
use miette::{Diagnostic, Result};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InstallationError {
    #[error("Install target {} already exists!", path.display())]
    #[diagnostic(
        code(fetch_project::install::target_exists),
        help("Remove the existing file or pass a different location to --install.")
    )]
    TargetExists { path: PathBuf },

    #[error("Could not resolve the location of the running program")]
    #[diagnostic(code(fetch_project::install::current_exe))]
    CurrentExe(#[source] io::Error),

    #[error("Could not create symlink at {}", path.display())]
    #[diagnostic(
        code(fetch_project::install::link_failed),
        help("You may need more permissions to write there.")
    )]
    LinkFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Improper setup")]
    #[diagnostic(
        code(fetch_project::install::improper_setup),
        help("Create {path:?} or point --usernames at your roster.")
    )]
    ImproperSetup { path: PathBuf },
}

pub fn run(options: &RunOptions) -> Result<()> {
    let exe = std::env::current_exe().map_err(InstallationError::CurrentExe)?;
    let link = install(&options.install_location, &exe)?;
    println!("Installed {}", link.display());
    Ok(())
}

/// A directory target gets the program name appended; anything else is the exact link path.
pub fn install_path(location: &Path) -> PathBuf {
    if location.is_dir() {
        location.join(APP_NAME)
    } else {
        location.to_path_buf()
    }
}

/// Links `install_path(location)` to the resolved `program`. Never overwrites.
pub fn install(location: &Path, program: &Path) -> Result<PathBuf, InstallationError> {
    let target = install_path(location);

    // symlink_metadata also catches dangling links
    if target.symlink_metadata().is_ok() {
        return Err(InstallationError::TargetExists { path: target });
    }

    println!("Installing to {}", target.display());

    let resolved = program.canonicalize().map_err(InstallationError::CurrentExe)?;
    println!("Creating symlink pointing at {}", resolved.display());

    symlink(&resolved, &target).map_err(|source| InstallationError::LinkFailed {
        path: target.clone(),
        source,
    })?;

    tracing::info!(link = %target.display(), program = %resolved.display(), "installed");
    Ok(target)
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}
