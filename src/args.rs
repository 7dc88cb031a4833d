use crate::commands;
use crate::config::{self, Config, RunOptions};
use clap::Parser;
use miette::Result;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fetch-project",
    about = "Add every student's fork of a project as a git remote and fetch it",
    version
)]
pub struct Cli {
    /// Install a link to this program into LOCATION (a directory or exact path)
    #[arg(long, value_name = "LOCATION", num_args = 0..=1)]
    pub install: Option<Option<PathBuf>>,

    /// Roster file of `<name>,<github username>` rows
    #[arg(long, value_name = "LOCATION")]
    pub usernames: Option<PathBuf>,

    /// Print what would be fetched without touching any remotes
    #[arg(long)]
    pub dryrun: bool,

    /// Project repo name (detected from the origin remote if omitted)
    pub project_name: Option<String>,
}

impl Cli {
    pub fn into_options(self, config: Config) -> RunOptions {
        let (install, install_location) = match self.install {
            Some(location) => (true, location.unwrap_or(config.install_location)),
            None => (false, config.install_location),
        };

        RunOptions {
            install,
            install_location,
            username_file_path: self.usernames.unwrap_or(config.usernames_file),
            dry_run: self.dryrun,
            explicit_project_name: self.project_name,
        }
    }

    pub fn run(self) -> Result<()> {
        let options = self.into_options(config::load()?);
        tracing::debug!(?options, "resolved run options");

        if options.install {
            commands::install::run(&options)
        } else {
            commands::fetch::run(&options)
        }
    }
}
