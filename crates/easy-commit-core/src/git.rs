//! Version control backend
//!
//! [`VcsBackend`] is the seam between the commit service and git. [`GitCli`]
//! implements it by shelling out to the `git` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::error::EasyCommitError;

/// Repository operations needed to create a commit
pub trait VcsBackend {
    /// Whether the working directory is inside a repository
    fn is_repository(&self) -> bool;

    /// Whether anything is staged in the index
    fn has_staged_changes(&self) -> Result<bool, EasyCommitError>;

    /// Commit the staged changes with `message`
    fn commit(&self, message: &str) -> Result<(), EasyCommitError>;

    /// Full message of the most recent commit
    fn last_message(&self) -> Result<String, EasyCommitError>;
}

/// Git CLI wrapper rooted at a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn git(&self, args: &[&str]) -> Result<Output, EasyCommitError> {
        log::debug!("git -C {} {}", self.repo_root.display(), args.join(" "));
        Command::new("git")
            .arg("-C")
            .arg(&self.repo_root)
            .args(args)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    EasyCommitError::GitNotInstalled
                } else {
                    EasyCommitError::GitCommand {
                        reason: format!("failed to run git: {}", e),
                    }
                }
            })
    }
}

impl VcsBackend for GitCli {
    fn is_repository(&self) -> bool {
        self.git(&["rev-parse", "--git-dir"])
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn has_staged_changes(&self) -> Result<bool, EasyCommitError> {
        let output = self.git(&["diff", "--cached", "--quiet"])?;

        // --quiet exits 1 when there are differences
        match output.status.code() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(EasyCommitError::GitCommand {
                    reason: format!("git diff --cached failed: {}", stderr.trim()),
                })
            }
        }
    }

    fn commit(&self, message: &str) -> Result<(), EasyCommitError> {
        let output = self.git(&["commit", "-m", message])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EasyCommitError::GitCommand {
                reason: format!("git commit failed: {}", stderr.trim()),
            });
        }

        Ok(())
    }

    fn last_message(&self) -> Result<String, EasyCommitError> {
        let output = self.git(&["log", "-1", "--pretty=%B"])?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EasyCommitError::GitCommand {
                reason: format!("git log failed: {}", stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}
