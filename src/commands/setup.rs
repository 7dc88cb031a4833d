use crate::commands::install::InstallationError;
use crate::config::RunOptions;
use miette::Result;
use std::path::Path;

const SETUP_INSTRUCTIONS: &str = r"1. Copy the table from the repo view in the classroom app
2. Paste it into the usernames file shown above
3. Use your editor's regex search/replace to transform the data
    Search:  ^(.*) .*\t(.*)\t.*\t.*Feedback\t?$
    Replace: $1,$2";

pub fn run(options: &RunOptions) -> Result<()> {
    if let Ok(exe) = std::env::current_exe() {
        if looks_like_source_build(&exe) {
            println!(
                "NOTE: it looks like you're running a development build. You might want to install it: {} --install",
                exe.display()
            );
        }
    }

    check_usernames_file(&options.username_file_path)?;
    Ok(())
}

pub fn check_usernames_file(path: &Path) -> Result<(), InstallationError> {
    if path.is_file() {
        return Ok(());
    }

    println!("Could not find list of usernames at {}", path.display());
    println!("In order to use this program, please follow these steps:");
    println!("{}", SETUP_INSTRUCTIONS);
    Err(InstallationError::ImproperSetup {
        path: path.to_path_buf(),
    })
}

/// True when the executable sits in a cargo `target/debug` or `target/release` dir.
pub fn looks_like_source_build(exe: &Path) -> bool {
    let mut parts = exe.components().rev().skip(1).map(|c| c.as_os_str());
    matches!(
        (parts.next(), parts.next()),
        (Some(profile), Some(target)) if target == "target" && (profile == "debug" || profile == "release")
    )
}
