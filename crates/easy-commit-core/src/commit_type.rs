//! Conventional commit types

/// A commit type offered on the type selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitType {
    pub name: &'static str,
    pub description: &'static str,
}

/// Built-in commit types, in display order
pub const COMMIT_TYPES: &[CommitType] = &[
    CommitType { name: "feat", description: "A new feature" },
    CommitType { name: "fix", description: "A bug fix" },
    CommitType { name: "docs", description: "Documentation only changes" },
    CommitType {
        name: "style",
        description: "Code style changes (formatting, semicolons, etc.)",
    },
    CommitType {
        name: "refactor",
        description: "Code refactoring (no behavior change)",
    },
    CommitType { name: "test", description: "Adding or updating tests" },
    CommitType { name: "chore", description: "Maintenance tasks" },
    CommitType { name: "build", description: "Build system changes" },
    CommitType { name: "ci", description: "CI configuration changes" },
    CommitType { name: "perf", description: "Performance improvements" },
];

/// Look up a built-in commit type by name
pub fn find_commit_type(name: &str) -> Option<&'static CommitType> {
    COMMIT_TYPES.iter().find(|t| t.name == name)
}

/// A selectable entry on the type selection screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOption {
    pub name: String,
    pub description: &'static str,
}

/// Types to offer for an allowed-name list, keeping the configured order.
///
/// Names without a built-in description are offered with an empty description.
pub fn offered_types(allowed: &[String]) -> Vec<TypeOption> {
    allowed
        .iter()
        .map(|name| TypeOption {
            name: name.clone(),
            description: find_commit_type(name).map_or("", |t| t.description),
        })
        .collect()
}
