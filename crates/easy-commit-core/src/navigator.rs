//! Wizard navigation state machine
//!
//! Screens form a fixed linear sequence ending in the terminal `Exit` state.
//! Every transition returns a new [`WizardState`] built from the previous one
//! plus a [`StateUpdate`]; fields the update does not mention are carried
//! over unchanged.
//!
//! Flow: TypeSelection -> DescriptionInput -> ScopeInput -> BodyInput ->
//! BreakingChange -> Preview -> Confirmation -> Exit

use std::fmt;

use crate::commit::{CommitFields, CommitMessage};
use crate::error::EasyCommitError;

/// Wizard screens, in flow order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    TypeSelection,
    DescriptionInput,
    ScopeInput,
    BodyInput,
    BreakingChange,
    Preview,
    Confirmation,
    /// Terminal state
    Exit,
}

impl Screen {
    /// Every screen in flow order, `Exit` last
    pub const SEQUENCE: [Screen; 8] = [
        Screen::TypeSelection,
        Screen::DescriptionInput,
        Screen::ScopeInput,
        Screen::BodyInput,
        Screen::BreakingChange,
        Screen::Preview,
        Screen::Confirmation,
        Screen::Exit,
    ];

    /// Number of interactive steps (everything but `Exit`)
    pub const STEP_COUNT: usize = 7;

    pub fn index(self) -> usize {
        match self {
            Screen::TypeSelection => 0,
            Screen::DescriptionInput => 1,
            Screen::ScopeInput => 2,
            Screen::BodyInput => 3,
            Screen::BreakingChange => 4,
            Screen::Preview => 5,
            Screen::Confirmation => 6,
            Screen::Exit => 7,
        }
    }

    /// Following screen; `Exit` maps to itself
    pub fn next(self) -> Screen {
        Screen::SEQUENCE
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Screen::Exit)
    }

    /// Preceding screen, or `None` on the first screen.
    ///
    /// `Exit` is terminal and has no predecessor.
    pub fn previous(self) -> Option<Screen> {
        match self {
            Screen::TypeSelection | Screen::Exit => None,
            other => Some(Screen::SEQUENCE[other.index() - 1]),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Screen::Exit
    }

    /// One-based step number shown in the progress indicator
    pub fn step(self) -> usize {
        (self.index() + 1).min(Self::STEP_COUNT)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::TypeSelection => "Commit Type",
            Screen::DescriptionInput => "Description",
            Screen::ScopeInput => "Scope",
            Screen::BodyInput => "Body",
            Screen::BreakingChange => "Breaking Change",
            Screen::Preview => "Preview",
            Screen::Confirmation => "Confirmation",
            Screen::Exit => "Done",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Partial update merged into the wizard state on `go_next`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub commit_type: Option<String>,
    pub description: Option<String>,
    pub scope: Option<String>,
    pub body: Option<String>,
    pub breaking: Option<bool>,
    pub commit: Option<CommitMessage>,
}

impl StateUpdate {
    pub fn commit_type(value: impl Into<String>) -> Self {
        Self {
            commit_type: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn scope(value: impl Into<String>) -> Self {
        Self {
            scope: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn body(value: impl Into<String>) -> Self {
        Self {
            body: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn breaking(value: bool) -> Self {
        Self {
            breaking: Some(value),
            ..Self::default()
        }
    }

    pub fn commit(message: CommitMessage) -> Self {
        Self {
            commit: Some(message),
            ..Self::default()
        }
    }
}

/// Accumulated wizard answers plus the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_screen: Screen,
    pub commit_type: String,
    pub description: String,
    pub scope: String,
    pub body: String,
    pub breaking: bool,
    /// Set once the Preview screen has validated the fields
    pub commit: Option<CommitMessage>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_screen: Screen::TypeSelection,
            commit_type: String::new(),
            description: String::new(),
            scope: String::new(),
            body: String::new(),
            breaking: false,
            commit: None,
        }
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Candidate fields for validation and preview
    pub fn fields(&self) -> CommitFields {
        CommitFields::new(
            self.commit_type.clone(),
            self.description.clone(),
            Some(self.scope.clone()),
            Some(self.body.clone()),
            self.breaking,
        )
    }

    /// Merge `update` into a copy of this state.
    ///
    /// Changing any commit field drops a previously finalized message, so the
    /// stored message always matches the fields it was built from.
    pub fn merged(&self, update: StateUpdate) -> WizardState {
        let mut next = self.clone();
        let mut changed = false;

        if let Some(value) = update.commit_type {
            changed |= value != next.commit_type;
            next.commit_type = value;
        }
        if let Some(value) = update.description {
            changed |= value != next.description;
            next.description = value;
        }
        if let Some(value) = update.scope {
            changed |= value != next.scope;
            next.scope = value;
        }
        if let Some(value) = update.body {
            changed |= value != next.body;
            next.body = value;
        }
        if let Some(value) = update.breaking {
            changed |= value != next.breaking;
            next.breaking = value;
        }

        if changed {
            next.commit = None;
        }
        if let Some(commit) = update.commit {
            next.commit = Some(commit);
        }
        next
    }

    /// Merge `update` and advance one screen.
    ///
    /// Leaving Confirmation for Exit needs a finalized commit message, either
    /// already stored or carried by `update`; without one the state stays on
    /// Confirmation.
    pub fn go_next(&self, update: StateUpdate) -> WizardState {
        let mut next = self.merged(update);
        let target = self.current_screen.next();

        if target == Screen::Exit && self.current_screen == Screen::Confirmation && next.commit.is_none() {
            log::debug!("confirmation without a finalized commit, staying put");
            return next;
        }

        log::debug!("wizard: {} -> {}", self.current_screen, target);
        next.current_screen = target;
        next
    }

    /// Step back one screen; a no-op on the first screen
    pub fn go_back(&self) -> WizardState {
        match self.current_screen.previous() {
            Some(previous) => WizardState {
                current_screen: previous,
                ..self.clone()
            },
            None => self.clone(),
        }
    }

    /// Jump directly to `screen`
    pub fn go_to_screen(&self, screen: Screen) -> WizardState {
        WizardState {
            current_screen: screen,
            ..self.clone()
        }
    }

    /// The finalized message once the wizard has reached `Exit`
    pub fn finish(&self) -> Result<CommitMessage, EasyCommitError> {
        if !self.current_screen.is_terminal() {
            return Err(EasyCommitError::WizardIncomplete);
        }
        self.commit.clone().ok_or(EasyCommitError::WizardAbandoned)
    }
}
