//! Validation pipeline and the default commit rules
//!
//! Rules are independent, side-effect-free predicates over [`CommitFields`].
//! [`Validator::validate`] evaluates all of them, spread over scoped worker
//! threads, and waits for every rule before building the result. Errors are
//! reported in registration order regardless of which worker finished first.

use std::fmt;
use std::thread;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::commit::CommitFields;
use crate::config::{CommitConfig, MAX_WORKERS};

/// Result of validating a commit candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether every rule passed
    pub valid: bool,
    /// Failure messages, in rule registration order
    pub errors: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Commit field a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Type,
    Description,
    Scope,
    Body,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Type => write!(f, "type"),
            Field::Description => write!(f, "description"),
            Field::Scope => write!(f, "scope"),
            Field::Body => write!(f, "body"),
        }
    }
}

/// A validation rule: `None` on pass, an error message on failure
pub type RuleFn = dyn Fn(&CommitFields) -> Option<String> + Send + Sync;

struct Rule {
    field: Field,
    check: Box<RuleFn>,
}

/// Concurrent validation pipeline
pub struct Validator {
    rules: Vec<Rule>,
    workers: usize,
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .field("workers", &self.workers)
            .finish()
    }
}

impl Validator {
    /// Create an empty pipeline evaluating rules on up to `workers` threads
    pub fn new(workers: usize) -> Self {
        Self {
            rules: Vec::new(),
            workers: workers.clamp(1, MAX_WORKERS),
        }
    }

    /// Register a rule; registration order is the error order
    pub fn add_rule<F>(&mut self, field: Field, check: F)
    where
        F: Fn(&CommitFields) -> Option<String> + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            field,
            check: Box::new(check),
        });
    }

    /// Builder form of [`Validator::add_rule`]
    pub fn with_rule<F>(mut self, field: Field, check: F) -> Self
    where
        F: Fn(&CommitFields) -> Option<String> + Send + Sync + 'static,
    {
        self.add_rule(field, check);
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run every registered rule and collect all failures
    pub fn validate(&self, fields: &CommitFields) -> ValidationResult {
        let selected: Vec<&Rule> = self.rules.iter().collect();
        self.run(&selected, fields)
    }

    /// Run only the rules registered for `field`
    pub fn validate_field(&self, fields: &CommitFields, field: Field) -> ValidationResult {
        let selected: Vec<&Rule> = self.rules.iter().filter(|r| r.field == field).collect();
        self.run(&selected, fields)
    }

    fn run(&self, rules: &[&Rule], fields: &CommitFields) -> ValidationResult {
        let workers = self.workers.min(rules.len());
        log::debug!("validating {} rules on {} workers", rules.len(), workers.max(1));

        let outcomes: Vec<Option<String>> = if workers <= 1 {
            rules.iter().map(|rule| (rule.check)(fields)).collect()
        } else {
            let chunk_size = rules.len().div_ceil(workers);
            thread::scope(|scope| {
                let handles: Vec<_> = rules
                    .chunks(chunk_size)
                    .map(|chunk| {
                        scope.spawn(move || {
                            chunk.iter().map(|rule| (rule.check)(fields)).collect::<Vec<_>>()
                        })
                    })
                    .collect();

                // Joining in spawn order keeps results aligned with registration order.
                handles
                    .into_iter()
                    .flat_map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                    })
                    .collect()
            })
        };

        ValidationResult::from_errors(outcomes.into_iter().flatten().collect())
    }

    /// Pipeline with the default commit rules, configured from `config`
    pub fn with_defaults(config: &CommitConfig, workers: usize) -> Self {
        let mut validator = Validator::new(workers);

        validator.add_rule(Field::Description, |c| {
            if c.description.trim().is_empty() {
                Some("Description cannot be empty".to_string())
            } else {
                None
            }
        });

        let max_description = config.max_description_length;
        validator.add_rule(Field::Description, move |c| {
            let len = c.description.chars().count();
            if len > max_description {
                Some(format!("Description too long ({}/{})", len, max_description))
            } else {
                None
            }
        });

        let max_body = config.max_body_length;
        validator.add_rule(Field::Body, move |c| {
            let len = c.body.as_deref().map_or(0, |b| b.chars().count());
            if len > max_body {
                Some(format!("Body too long ({}/{})", len, max_body))
            } else {
                None
            }
        });

        let allowed_types = config.allowed_types.clone();
        validator.add_rule(Field::Type, move |c| {
            if allowed_types.iter().any(|t| *t == c.commit_type) {
                None
            } else {
                Some(format!("Invalid commit type: {}", c.commit_type))
            }
        });

        let scope_pattern = scope_regex();
        validator.add_rule(Field::Scope, move |c| match c.scope.as_deref() {
            Some(scope) if !scope.is_empty() && !scope_pattern.is_match(scope) => Some(format!(
                "Invalid scope format: {}. Must be lowercase letters, numbers, and hyphens only",
                scope
            )),
            _ => None,
        });

        let max_scope = config.max_scope_length;
        validator.add_rule(Field::Scope, move |c| {
            let len = c.scope.as_deref().map_or(0, |s| s.chars().count());
            if len > max_scope {
                Some(format!("Scope too long ({}/{})", len, max_scope))
            } else {
                None
            }
        });

        let invalid_chars = config.invalid_chars.clone();
        validator.add_rule(Field::Description, move |c| {
            invalid_chars
                .iter()
                .filter(|ch| !ch.is_empty())
                .find(|ch| c.description.contains(ch.as_str()))
                .map(|ch| format!("Description contains invalid character: '{}'", ch))
        });

        validator.add_rule(Field::Description, |c| match c.description.trim_start().chars().next() {
            Some(first) if !is_own_lowercase(first) => {
                Some("Description should start with lowercase letter".to_string())
            }
            _ => None,
        });

        validator
    }
}

/// True when lowercasing `c` leaves it unchanged; titlecase letters such as `ǅ` fail
fn is_own_lowercase(c: char) -> bool {
    c.to_lowercase().eq(std::iter::once(c))
}

/// Scope pattern: lowercase letters, digits, and hyphens
pub fn scope_regex() -> Regex {
    Regex::new(r"^[a-z0-9-]+$").expect("scope pattern is a valid regex")
}
