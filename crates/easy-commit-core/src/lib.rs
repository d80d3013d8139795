//! easy-commit-core: Core library for the easy-commit wizard
//!
//! This crate provides the editors, navigation state machine, validation
//! pipeline, and message formatting behind the easy-commit CLI. It has no
//! terminal dependency; input and output go through the traits in
//! [`interaction`].

/// Core error types for easy-commit operations
pub mod error;

/// Configuration handling
pub mod config;

/// Conventional commit types
pub mod commit_type;

/// Commit candidates and finalized messages
pub mod commit;

/// Message formatting
pub mod format;

/// Concurrent validation pipeline
pub mod validator;

/// Single-line text editor
pub mod line_editor;

/// Hard-wrapping multi-line editor
pub mod block_editor;

/// Wizard screen state machine
pub mod navigator;

/// Key input and screen rendering seam
pub mod interaction;

/// Interactive wizard session
pub mod wizard;

/// Git backend
pub mod git;

/// Commit workflow
pub mod service;

// Re-exports for convenience
pub use block_editor::{BufferAction, BufferState, Cursor, Direction, hard_wrap, reduce, replay};
pub use commit::{CommitFields, CommitMessage};
pub use commit_type::{COMMIT_TYPES, CommitType, TypeOption, find_commit_type, offered_types};
pub use config::{CommitConfig, Config, LoggerConfig, ValidatorConfig};
pub use error::EasyCommitError;
pub use format::{format_header, format_message};
pub use git::{GitCli, VcsBackend};
pub use interaction::{Key, KeySource, NullRenderer, Renderer, ScreenView, ScriptedKeys, ViewContent};
pub use line_editor::LineEditor;
pub use navigator::{Screen, StateUpdate, WizardState};
pub use service::CommitService;
pub use validator::{Field, ValidationResult, Validator};
pub use wizard::{Wizard, WizardOutcome, WizardStep, run_wizard};
