//! Commit candidates and finalized commit messages

use std::fmt;

use serde::Serialize;

use crate::format::format_message;
use crate::validator::{ValidationResult, Validator};

/// Candidate commit fields, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitFields {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub breaking: bool,
}

impl CommitFields {
    /// Build fields, mapping empty scope and body to `None`
    pub fn new(
        commit_type: impl Into<String>,
        description: impl Into<String>,
        scope: Option<String>,
        body: Option<String>,
        breaking: bool,
    ) -> Self {
        Self {
            commit_type: commit_type.into(),
            description: description.into(),
            scope: scope.filter(|s| !s.is_empty()),
            body: body.filter(|b| !b.is_empty()),
            breaking,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into()).filter(|b| !b.is_empty());
        self
    }

    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Formatted message text for these fields, valid or not
    pub fn format(&self) -> String {
        format_message(self)
    }
}

/// A commit message that passed validation; immutable once built
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitMessage {
    #[serde(flatten)]
    fields: CommitFields,
}

impl CommitMessage {
    /// Validate `fields` and finalize them, or return the failed result
    pub fn validated(
        fields: CommitFields,
        validator: &Validator,
    ) -> Result<Self, ValidationResult> {
        let result = validator.validate(&fields);
        if result.valid {
            Ok(Self { fields })
        } else {
            Err(result)
        }
    }

    pub fn commit_type(&self) -> &str {
        &self.fields.commit_type
    }

    pub fn description(&self) -> &str {
        &self.fields.description
    }

    pub fn scope(&self) -> Option<&str> {
        self.fields.scope.as_deref()
    }

    pub fn body(&self) -> Option<&str> {
        self.fields.body.as_deref()
    }

    pub fn is_breaking(&self) -> bool {
        self.fields.breaking
    }

    pub fn fields(&self) -> &CommitFields {
        &self.fields
    }

    /// Final message text handed to the version-control backend
    pub fn format(&self) -> String {
        format_message(&self.fields)
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
