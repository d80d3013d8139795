//! JSON output formatting

use serde::Serialize;

use easy_commit_core::{CommitFields, EasyCommitError};

const SCHEMA_VERSION: &str = "1";

/// JSON response envelope shared by every command
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T> {
    /// Schema version for forward compatibility
    pub schema_version: String,
    /// Command that generated this response
    pub command: String,
    /// Status: "ok" or "error"
    pub status: String,
    /// Command-specific payload
    pub data: T,
    pub issues: Vec<JsonIssue>,
}

impl<T> JsonResponse<T> {
    pub fn ok(command: &str, data: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "ok".to_string(),
            data,
            issues: vec![],
        }
    }

    pub fn error(command: &str, data: T, issues: Vec<JsonIssue>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            command: command.to_string(),
            status: "error".to_string(),
            data,
            issues,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Print the response as pretty JSON on stdout
    pub fn print(&self) -> Result<(), String> {
        let text = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize JSON output: {}", e))?;
        println!("{}", text);
        Ok(())
    }
}

/// A reported problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonIssue {
    /// Error code (e.g., "E005")
    pub code: String,
    pub severity: String,
    pub message: String,
}

impl JsonIssue {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            severity: "error".to_string(),
            message: message.into(),
        }
    }

    /// One issue per validation failure, otherwise one for the error itself
    pub fn from_error(err: &EasyCommitError) -> Vec<JsonIssue> {
        match err {
            EasyCommitError::ValidationFailed { errors } => errors
                .iter()
                .map(|message| JsonIssue::error(err.code(), message.clone()))
                .collect(),
            other => vec![JsonIssue::error(other.code(), other.to_string())],
        }
    }
}

/// How a commit invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitOutcome {
    Created,
    DryRun,
    Cancelled,
}

/// Data payload for the commit command
#[derive(Debug, Clone, Serialize)]
pub struct CommitData {
    pub outcome: CommitOutcome,
    /// Formatted message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<CommitFields>,
}

impl CommitData {
    pub fn cancelled() -> Self {
        Self {
            outcome: CommitOutcome::Cancelled,
            message: None,
            fields: None,
        }
    }
}

/// Data payload for init command
#[derive(Debug, Clone, Serialize)]
pub struct InitData {
    /// Path to the written config file
    pub path: String,
    pub files_created: Vec<String>,
}

/// Data payload for types command
#[derive(Debug, Clone, Serialize)]
pub struct TypesData {
    pub types: Vec<TypeEntry>,
}

/// A commit type entry
#[derive(Debug, Clone, Serialize)]
pub struct TypeEntry {
    pub name: String,
    pub description: String,
}

/// Data payload for last command
#[derive(Debug, Clone, Serialize)]
pub struct LastData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let response = JsonResponse::ok(
            "commit",
            CommitData {
                outcome: CommitOutcome::DryRun,
                message: Some("feat: add login".to_string()),
                fields: Some(CommitFields::new("feat", "add login", None, None, false)),
            },
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["schema_version"], "1");
        assert_eq!(json["status"], "ok");
        assert_eq!(json["data"]["outcome"], "dry_run");
        assert_eq!(json["data"]["fields"]["type"], "feat");
        assert!(json["data"]["fields"].get("scope").is_none());
        assert_eq!(json["issues"], serde_json::json!([]));
    }

    #[test]
    fn test_validation_issues_are_split() {
        let err = EasyCommitError::ValidationFailed {
            errors: vec!["a".to_string(), "b".to_string()],
        };
        let issues = JsonIssue::from_error(&err);
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.code == "E005"));
        assert_eq!(issues[1].message, "b");

        let issues = JsonIssue::from_error(&EasyCommitError::NoStagedChanges);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, "E002");
    }
}
