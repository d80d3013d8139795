//! Error types for easy-commit operations

use thiserror::Error;

/// Core error type for easy-commit operations
#[derive(Error, Debug)]
pub enum EasyCommitError {
    // === Repository errors (E001-E004) ===
    /// E001: Working directory is not inside a git repository
    #[error("E001: Not a git repository. Please run this command from within a git repository.")]
    NotAGitRepository,

    /// E002: Nothing staged for commit
    #[error("E002: No staged changes to commit. Use \"git add\" to stage changes first.")]
    NoStagedChanges,

    /// E003: A git command exited unsuccessfully
    #[error("E003: git command failed: {reason}")]
    GitCommand { reason: String },

    /// E004: git binary could not be spawned
    #[error("E004: git is not installed or not found on PATH")]
    GitNotInstalled,

    // === Commit content errors (E005) ===
    /// E005: Candidate commit failed one or more validation rules
    #[error("E005: Validation failed:\n{}", format_errors(.errors))]
    ValidationFailed { errors: Vec<String> },

    // === Wizard errors (E006-E007) ===
    /// E006: Wizard reached Exit without a finalized commit message
    #[error("E006: Wizard exited without creating a commit")]
    WizardAbandoned,

    /// E007: Result requested before the wizard reached Exit
    #[error("E007: Wizard has not finished")]
    WizardIncomplete,

    // === Environment errors (E008-E010) ===
    /// E008: Interactive mode requested without a terminal
    #[error("E008: Interactive mode requires a terminal")]
    NonTty,

    /// E009: Terminal driver failure
    #[error("E009: terminal error: {0}")]
    Terminal(String),

    /// E010: Configuration error
    #[error("E010: configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl EasyCommitError {
    /// Get the error code (e.g., "E001", "E002")
    pub fn code(&self) -> &'static str {
        match self {
            EasyCommitError::NotAGitRepository => "E001",
            EasyCommitError::NoStagedChanges => "E002",
            EasyCommitError::GitCommand { .. } => "E003",
            EasyCommitError::GitNotInstalled => "E004",
            EasyCommitError::ValidationFailed { .. } => "E005",
            EasyCommitError::WizardAbandoned => "E006",
            EasyCommitError::WizardIncomplete => "E007",
            EasyCommitError::NonTty => "E008",
            EasyCommitError::Terminal(_) => "E009",
            EasyCommitError::Config(_) => "E010",
            EasyCommitError::Io(_) => "E009", // Surfaces through the terminal driver
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            EasyCommitError::ValidationFailed { .. } => 1, // Validation errors

            EasyCommitError::NotAGitRepository | EasyCommitError::NoStagedChanges => 2, // Repository state

            EasyCommitError::GitCommand { .. } | EasyCommitError::GitNotInstalled => 3, // git failures

            EasyCommitError::Config(_) => 4, // Configuration error

            EasyCommitError::WizardAbandoned | EasyCommitError::WizardIncomplete => 5,

            EasyCommitError::NonTty | EasyCommitError::Terminal(_) | EasyCommitError::Io(_) => 6,
        }
    }
}
