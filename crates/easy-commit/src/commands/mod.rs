//! CLI command implementations

pub mod commit;
pub mod init;
pub mod last;
pub mod types;

use std::path::Path;

use easy_commit_core::{CommitService, Config, EasyCommitError, GitCli, Validator};

use crate::output::{JsonIssue, JsonResponse};

pub use commit::run_commit;
pub use init::run_init;
pub use last::run_last;
pub use types::run_types;

/// Load the explicit config file, or search the working and home directories
pub fn load_config(path: Option<&Path>) -> Result<Config, EasyCommitError> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(Config::load_or_default(&cwd))
        }
    }
}

/// Commit service for the repository containing the working directory
fn commit_service(config: &Config) -> Result<CommitService<GitCli>, String> {
    let cwd = std::env::current_dir()
        .map_err(|e| format!("failed to read current directory: {}", e))?;
    let validator = Validator::with_defaults(&config.commit, config.validator.effective_workers());
    Ok(CommitService::new(GitCli::new(cwd), validator))
}

/// Report `err` on stderr (or as a JSON envelope) and return its exit code
fn report_error(command: &str, err: &EasyCommitError, json_output: bool) -> Result<i32, String> {
    log::debug!("{} failed with {}", command, err.code());
    if json_output {
        JsonResponse::error(command, (), JsonIssue::from_error(err)).print()?;
    } else {
        eprintln!("error: {}", err);
    }
    Ok(err.exit_code())
}
