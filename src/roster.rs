use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum RosterReadError {
    #[error("Could not find list of usernames at {}", path.display())]
    #[diagnostic(code(fetch_project::roster::missing))]
    Missing { path: PathBuf },

    #[error("Could not read {}", path.display())]
    #[diagnostic(code(fetch_project::roster::unreadable))]
    Unreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Line {line} of {} needs a name and a username", path.display())]
    #[diagnostic(
        code(fetch_project::roster::malformed),
        help("Each line should look like: <name>,<github username>")
    )]
    Malformed { path: PathBuf, line: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub display_name: String,
    pub account_id: String,
}

/// Reads `<name>,<account>` rows in file order. Extra columns are ignored.
pub fn read(path: &Path) -> Result<Vec<StudentRecord>, RosterReadError> {
    if !path.is_file() {
        return Err(RosterReadError::Missing {
            path: path.to_path_buf(),
        });
    }

    let unreadable = |source: csv::Error| RosterReadError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(unreadable)?;

    let mut students = Vec::new();
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match (record.get(0), record.get(1)) {
            (Some(name), Some(account)) if !name.is_empty() && !account.is_empty() => {
                students.push(StudentRecord {
                    display_name: name.to_string(),
                    account_id: account.to_string(),
                });
            }
            _ => {
                return Err(RosterReadError::Malformed {
                    path: path.to_path_buf(),
                    line,
                });
            }
        }
    }

    println!("Read {} student(s) from {}", students.len(), path.display());
    Ok(students)
}
