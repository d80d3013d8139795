//! Commit workflow on top of a [`VcsBackend`]

use crate::commit::{CommitFields, CommitMessage};
use crate::error::EasyCommitError;
use crate::git::VcsBackend;
use crate::validator::{ValidationResult, Validator};

/// Validates, formats, and commits messages through a backend
#[derive(Debug)]
pub struct CommitService<B> {
    backend: B,
    validator: Validator,
}

impl<B: VcsBackend> CommitService<B> {
    pub fn new(backend: B, validator: Validator) -> Self {
        Self { backend, validator }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fail early when a commit could not be created right now
    pub fn preflight(&self) -> Result<(), EasyCommitError> {
        if !self.backend.is_repository() {
            return Err(EasyCommitError::NotAGitRepository);
        }
        if !self.backend.has_staged_changes()? {
            return Err(EasyCommitError::NoStagedChanges);
        }
        Ok(())
    }

    pub fn validate(&self, fields: &CommitFields) -> ValidationResult {
        self.validator.validate(fields)
    }

    /// Validate `fields` into a commit message or a `ValidationFailed` error
    pub fn finalize(&self, fields: CommitFields) -> Result<CommitMessage, EasyCommitError> {
        CommitMessage::validated(fields, &self.validator)
            .map_err(|result| EasyCommitError::ValidationFailed { errors: result.errors })
    }

    /// Formatted message text, valid or not
    pub fn preview(&self, fields: &CommitFields) -> String {
        fields.format()
    }

    /// Create the commit and return the message text that was committed
    pub fn create_commit(&self, message: &CommitMessage) -> Result<String, EasyCommitError> {
        self.preflight()?;

        let result = self.validator.validate(message.fields());
        if !result.valid {
            return Err(EasyCommitError::ValidationFailed { errors: result.errors });
        }

        let text = message.format();
        self.backend.commit(&text)?;
        log::info!("created commit: {}", text.lines().next().unwrap_or_default());
        Ok(text)
    }

    pub fn last_message(&self) -> Result<String, EasyCommitError> {
        if !self.backend.is_repository() {
            return Err(EasyCommitError::NotAGitRepository);
        }
        self.backend.last_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CommitConfig;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeBackend {
        repository: bool,
        staged: bool,
        commits: RefCell<Vec<String>>,
    }

    impl FakeBackend {
        fn ready() -> Self {
            Self {
                repository: true,
                staged: true,
                ..Self::default()
            }
        }
    }

    impl VcsBackend for FakeBackend {
        fn is_repository(&self) -> bool {
            self.repository
        }

        fn has_staged_changes(&self) -> Result<bool, EasyCommitError> {
            Ok(self.staged)
        }

        fn commit(&self, message: &str) -> Result<(), EasyCommitError> {
            self.commits.borrow_mut().push(message.to_string());
            Ok(())
        }

        fn last_message(&self) -> Result<String, EasyCommitError> {
            self.commits
                .borrow()
                .last()
                .cloned()
                .ok_or_else(|| EasyCommitError::GitCommand {
                    reason: "no commits yet".to_string(),
                })
        }
    }

    fn service(backend: FakeBackend) -> CommitService<FakeBackend> {
        CommitService::new(backend, Validator::with_defaults(&CommitConfig::default(), 2))
    }

    fn message(service: &CommitService<FakeBackend>) -> CommitMessage {
        service
            .finalize(CommitFields::new("feat", "add login", Some("auth".into()), None, false))
            .unwrap()
    }

    #[test]
    fn test_create_commit_formats_and_commits() {
        let service = service(FakeBackend::ready());
        let text = service.create_commit(&message(&service)).unwrap();
        assert_eq!(text, "feat(auth): add login");
        assert_eq!(service.backend().commits.borrow().as_slice(), ["feat(auth): add login"]);
        assert_eq!(service.last_message().unwrap(), "feat(auth): add login");
    }

    #[test]
    fn test_preflight_errors() {
        let service = service(FakeBackend::default());
        assert!(matches!(service.preflight(), Err(EasyCommitError::NotAGitRepository)));

        let service = super::CommitService::new(
            FakeBackend {
                repository: true,
                ..FakeBackend::default()
            },
            Validator::new(1),
        );
        assert!(matches!(service.preflight(), Err(EasyCommitError::NoStagedChanges)));
    }

    #[test]
    fn test_no_commit_without_staged_changes() {
        let ready = service(FakeBackend::ready());
        let msg = message(&ready);

        let service = service(FakeBackend {
            repository: true,
            ..FakeBackend::default()
        });
        assert!(matches!(service.create_commit(&msg), Err(EasyCommitError::NoStagedChanges)));
        assert!(service.backend().commits.borrow().is_empty());
    }

    #[test]
    fn test_finalize_reports_every_error() {
        let service = service(FakeBackend::ready());
        let err = service
            .finalize(CommitFields::new("nope", "", None, None, false))
            .unwrap_err();
        match err {
            EasyCommitError::ValidationFailed { errors } => {
                assert_eq!(
                    errors,
                    vec![
                        "Description cannot be empty".to_string(),
                        "Invalid commit type: nope".to_string(),
                    ]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_stricter_service_rejects_message() {
        let lenient = service(FakeBackend::ready());
        let msg = message(&lenient);

        let strict_config = CommitConfig {
            max_description_length: 3,
            ..CommitConfig::default()
        };
        let strict = CommitService::new(FakeBackend::ready(), Validator::with_defaults(&strict_config, 1));
        assert!(matches!(
            strict.create_commit(&msg),
            Err(EasyCommitError::ValidationFailed { .. })
        ));
        assert!(strict.backend().commits.borrow().is_empty());
    }

    #[test]
    fn test_preview_ignores_validity() {
        let service = service(FakeBackend::ready());
        let fields = CommitFields::new("feat", "Bad Desc", None, None, true);
        assert_eq!(
            service.preview(&fields),
            "feat!: Bad Desc\n\nBREAKING CHANGE: This commit introduces breaking changes"
        );
        assert!(!service.validate(&fields).valid);
    }
}
