use crate::commands::setup;
use crate::config::RunOptions;
use crate::git::{GitClient, GitError, SystemGit};
use crate::project;
use crate::roster::{self, StudentRecord};
use miette::Result;
use std::collections::{HashMap, HashSet};

/// One student's fork and the remote it will be fetched into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission<'a> {
    pub student: &'a StudentRecord,
    pub remote: String,
    pub url: String,
}

#[derive(Debug)]
pub enum Outcome {
    Fetched,
    Planned,
    Failed(GitError),
}

#[derive(Debug, Default)]
pub struct FetchReport {
    pub results: Vec<(String, Outcome)>,
}

impl FetchReport {
    pub fn fetched(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Fetched))
            .count()
    }

    pub fn failures(&self) -> Vec<(&str, &GitError)> {
        self.results
            .iter()
            .filter_map(|(name, o)| match o {
                Outcome::Failed(e) => Some((name.as_str(), e)),
                _ => None,
            })
            .collect()
    }
}

pub fn run(options: &RunOptions) -> Result<()> {
    run_with(&SystemGit, options)
}

/// Setup check, roster, project name, then the fetch loop. Stops at the first fatal error.
pub fn run_with(git: &impl GitClient, options: &RunOptions) -> Result<()> {
    setup::run(options)?;
    let students = roster::read(&options.username_file_path)?;
    let project = project::resolve(git, options.explicit_project_name.as_deref())?;

    let report = fetch_submissions(git, &project, &students, options.dry_run);

    if options.dry_run {
        println!("Dry run: nothing was fetched");
        return Ok(());
    }

    println!(
        "Fetched {} of {} submission(s)",
        report.fetched(),
        report.results.len()
    );
    for (remote, error) in report.failures() {
        println!("Could not fetch: {} ({})", remote, error);
    }

    Ok(())
}

pub fn fork_url(account_id: &str, project: &str) -> String {
    format!("https://github.com/{}/{}.git", account_id, project)
}

/// Git remote names can't hold whitespace, so it becomes `-`. Leading dashes are
/// dropped so the name is never read as an option.
pub fn remote_name(display_name: &str) -> String {
    let joined = display_name.split_whitespace().collect::<Vec<_>>().join("-");
    joined.trim_start_matches('-').to_string()
}

/// Pairs each student with a unique remote. A taken name gets `-{account_id}`,
/// then `-{account_id}-2`, `-{account_id}-3`, ... until it is free.
pub fn plan<'a>(project: &str, students: &'a [StudentRecord]) -> Vec<Submission<'a>> {
    let mut taken = HashSet::new();

    students
        .iter()
        .map(|student| {
            let base = match remote_name(&student.display_name) {
                name if name.is_empty() => remote_name(&student.account_id),
                name => name,
            };

            let mut remote = base.clone();
            let mut attempt = 1;
            while !taken.insert(remote.clone()) {
                remote = match attempt {
                    1 => format!("{}-{}", base, student.account_id),
                    n => format!("{}-{}-{}", base, student.account_id, n),
                };
                attempt += 1;
            }

            Submission {
                student,
                remote,
                url: fork_url(&student.account_id, project),
            }
        })
        .collect()
}

/// Adds and fetches every student's fork in roster order. A failure only skips that student.
pub fn fetch_submissions(
    git: &impl GitClient,
    project: &str,
    students: &[StudentRecord],
    dry_run: bool,
) -> FetchReport {
    println!("Fetching submissions for {}", project);

    let existing: HashMap<String, String> = match git.list_remotes() {
        Ok(remotes) => remotes.into_iter().map(|r| (r.name, r.url)).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "could not list existing remotes");
            HashMap::new()
        }
    };

    let mut report = FetchReport::default();

    for submission in plan(project, students) {
        let student = submission.student;
        println!(
            "Fetching project for {}, account {}",
            student.display_name, student.account_id
        );

        let outcome = if dry_run {
            println!(
                "  would add remote '{}' -> {} and fetch it",
                submission.remote, submission.url
            );
            Outcome::Planned
        } else {
            match fetch_one(git, &submission, existing.get(&submission.remote)) {
                Ok(()) => Outcome::Fetched,
                Err(e) => {
                    println!(
                        "Warning: skipping {} ({}): {}",
                        student.display_name, student.account_id, e
                    );
                    tracing::debug!(remote = %submission.remote, error = ?e, "fetch failed");
                    Outcome::Failed(e)
                }
            }
        };

        report.results.push((submission.remote, outcome));
    }

    report
}

fn fetch_one(
    git: &impl GitClient,
    submission: &Submission,
    existing_url: Option<&String>,
) -> Result<(), GitError> {
    match existing_url {
        Some(url) if *url == submission.url => {
            println!("  remote '{}' already configured", submission.remote);
            git.fetch(&submission.remote)
        }
        Some(url) => Err(GitError::RemoteConflict {
            name: submission.remote.clone(),
            existing: url.clone(),
        }),
        None => {
            git.add_remote(&submission.remote, &submission.url)?;
            git.fetch(&submission.remote).inspect_err(|_| {
                // no fork to fetch, so don't leave the remote behind
                if let Err(e) = git.remove_remote(&submission.remote) {
                    tracing::warn!(remote = %submission.remote, error = %e, "could not remove remote");
                }
            })
        }
    }
}
