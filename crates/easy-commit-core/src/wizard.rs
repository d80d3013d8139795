//! Interactive commit wizard
//!
//! [`Wizard`] couples the navigator with the per-screen editors. Each key is
//! routed to the editor of the current screen or turned into a navigator
//! transition. Entering a screen builds a fresh editor seeded from the wizard
//! state; leaving it (submit, back, or cancel) drops the editor.
//!
//! Keys common to every screen: Escape or Ctrl+C cancels, Ctrl+B goes back.

use crate::block_editor::{self, BufferAction, BufferState, Direction};
use crate::commit::CommitMessage;
use crate::commit_type::{TypeOption, offered_types};
use crate::config::{CommitConfig, Config};
use crate::error::EasyCommitError;
use crate::interaction::{
    CharCounter, Key, KeySource, Renderer, ScreenView, SelectOption, ViewContent,
};
use crate::line_editor::LineEditor;
use crate::navigator::{Screen, StateUpdate, WizardState};
use crate::validator::{Field, Validator};

/// Visible rows of the body editor
pub const BODY_HEIGHT: usize = 5;

/// Characters of the body shown in the preview summary
const BODY_SUMMARY_CHARS: usize = 50;

const BREAKING_OPTIONS: [&str; 2] = ["Yes", "No"];
const CONFIRM_OPTIONS: [&str; 3] = ["Create commit", "Go back and edit", "Cancel"];

/// Result of feeding one key to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    Continue,
    Completed(CommitMessage),
    Cancelled,
}

/// Final outcome of [`run_wizard`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(CommitMessage),
    Cancelled,
}

/// Input owned by the current screen
#[derive(Debug, Clone)]
enum ScreenInput {
    Select(usize),
    Line(LineEditor),
    Block(BufferState),
    None,
}

/// Wizard session: navigator state plus the active screen's editor
#[derive(Debug)]
pub struct Wizard {
    state: WizardState,
    input: ScreenInput,
    errors: Vec<String>,
    validator: Validator,
    limits: CommitConfig,
    types: Vec<TypeOption>,
}

impl Wizard {
    pub fn new(config: &Config) -> Self {
        let validator = Validator::with_defaults(&config.commit, config.validator.effective_workers());
        Self::with_validator(config.commit.clone(), validator)
    }

    /// Wizard using a caller-built validation pipeline
    pub fn with_validator(limits: CommitConfig, validator: Validator) -> Self {
        let types = offered_types(&limits.allowed_types);
        let state = WizardState::new();
        let mut wizard = Self {
            input: ScreenInput::None,
            state,
            errors: Vec::new(),
            validator,
            limits,
            types,
        };
        wizard.input = wizard.input_for(wizard.state.current_screen);
        wizard
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.current_screen
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Body buffer, when the body screen is active
    pub fn body_buffer(&self) -> Option<&BufferState> {
        match &self.input {
            ScreenInput::Block(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Line editor, when a single-line screen is active
    pub fn line_editor(&self) -> Option<&LineEditor> {
        match &self.input {
            ScreenInput::Line(editor) => Some(editor),
            _ => None,
        }
    }

    fn input_for(&self, screen: Screen) -> ScreenInput {
        let state = &self.state;
        match screen {
            Screen::TypeSelection => ScreenInput::Select(
                self.types
                    .iter()
                    .position(|t| t.name == state.commit_type)
                    .unwrap_or(0),
            ),
            Screen::DescriptionInput => ScreenInput::Line(LineEditor::with_value(
                &state.description,
                Some(self.limits.max_description_length),
            )),
            Screen::ScopeInput => ScreenInput::Line(LineEditor::with_value(
                &state.scope,
                Some(self.limits.max_scope_length),
            )),
            Screen::BodyInput => ScreenInput::Block(BufferState::from_text_at_end(&state.body)),
            Screen::BreakingChange => ScreenInput::Select(if state.breaking { 0 } else { 1 }),
            Screen::Confirmation => ScreenInput::Select(0),
            Screen::Preview | Screen::Exit => ScreenInput::None,
        }
    }

    fn transition(&mut self, next: WizardState) {
        let screen_changed = next.current_screen != self.state.current_screen;
        self.state = next;
        if screen_changed {
            self.errors.clear();
            self.input = self.input_for(self.state.current_screen);
        }
    }

    /// Feed one key event
    pub fn handle_key(&mut self, key: Key) -> Result<WizardStep, EasyCommitError> {
        match key {
            Key::Escape | Key::Ctrl('c') => {
                log::debug!("wizard cancelled on {}", self.screen());
                self.input = ScreenInput::None;
                return Ok(WizardStep::Cancelled);
            }
            Key::Ctrl('b') => {
                let previous = self.state.go_back();
                self.transition(previous);
                return Ok(WizardStep::Continue);
            }
            Key::Char('q') if self.screen() == Screen::TypeSelection => {
                self.input = ScreenInput::None;
                return Ok(WizardStep::Cancelled);
            }
            _ => {}
        }

        match self.screen() {
            Screen::TypeSelection => self.on_type_selection(key),
            Screen::DescriptionInput => self.on_description(key),
            Screen::ScopeInput => self.on_scope(key),
            Screen::BodyInput => self.on_body(key),
            Screen::BreakingChange => self.on_breaking(key),
            Screen::Preview => self.on_preview(key),
            Screen::Confirmation => return self.on_confirmation(key),
            Screen::Exit => return self.state.finish().map(WizardStep::Completed),
        }

        Ok(WizardStep::Continue)
    }

    fn on_type_selection(&mut self, key: Key) {
        let ScreenInput::Select(selected) = self.input else {
            return;
        };
        let count = self.types.len();
        if count == 0 {
            return;
        }

        match key {
            Key::Up | Key::Char('k') => {
                self.input = ScreenInput::Select((selected + count - 1) % count);
            }
            Key::Down | Key::Char('j') => {
                self.input = ScreenInput::Select((selected + 1) % count);
            }
            Key::Return => {
                let name = self.types[selected.min(count - 1)].name.clone();
                let next = self.state.go_next(StateUpdate::commit_type(name));
                self.transition(next);
            }
            _ => {}
        }
    }

    fn on_description(&mut self, key: Key) {
        if key == Key::Return {
            let value = self.line_value().trim().to_string();
            let mut candidate = self.state.fields();
            candidate.description = value.clone();

            let result = self.validator.validate_field(&candidate, Field::Description);
            if result.valid {
                let next = self.state.go_next(StateUpdate::description(value));
                self.transition(next);
            } else {
                self.errors = result.errors;
            }
            return;
        }
        self.edit_line(key);
    }

    fn on_scope(&mut self, key: Key) {
        match key {
            Key::Ctrl('s') => {
                let next = self.state.go_next(StateUpdate::scope(""));
                self.transition(next);
            }
            Key::Return => {
                let value = self.line_value().trim().to_string();
                let candidate = self.state.fields().with_scope(value.clone());

                let result = self.validator.validate_field(&candidate, Field::Scope);
                if result.valid {
                    let next = self.state.go_next(StateUpdate::scope(value));
                    self.transition(next);
                } else {
                    self.errors = result.errors;
                }
            }
            _ => self.edit_line(key),
        }
    }

    fn on_body(&mut self, key: Key) {
        let ScreenInput::Block(buffer) = &self.input else {
            return;
        };
        let limit = Some(self.limits.max_body_length);

        let action = match key {
            Key::Ctrl('d') => {
                let value = buffer.text().trim().to_string();
                let candidate = self.state.fields().with_body(value.clone());

                let result = self.validator.validate_field(&candidate, Field::Body);
                if result.valid {
                    let next = self.state.go_next(StateUpdate::body(value));
                    self.transition(next);
                } else {
                    self.errors = result.errors;
                }
                return;
            }
            Key::Char(ch) => BufferAction::Insert {
                ch,
                width: self.limits.body_line_width,
                limit,
            },
            Key::Return => BufferAction::NewLine { limit },
            Key::Backspace => BufferAction::DeleteBefore,
            Key::Delete => BufferAction::DeleteAfter,
            Key::Left => BufferAction::Navigate(Direction::Left),
            Key::Right => BufferAction::Navigate(Direction::Right),
            Key::Up => BufferAction::Navigate(Direction::Up),
            Key::Down => BufferAction::Navigate(Direction::Down),
            Key::Home => BufferAction::Navigate(Direction::Home),
            Key::End => BufferAction::Navigate(Direction::End),
            _ => return,
        };

        self.input = ScreenInput::Block(block_editor::reduce(buffer, &action));
    }

    fn on_breaking(&mut self, key: Key) {
        let ScreenInput::Select(selected) = self.input else {
            return;
        };

        let choice = match key {
            Key::Up | Key::Down | Key::Char('k') | Key::Char('j') => {
                self.input = ScreenInput::Select(1 - selected.min(1));
                return;
            }
            Key::Char('y') => true,
            Key::Char('n') => false,
            Key::Return => selected == 0,
            _ => return,
        };

        let next = self.state.go_next(StateUpdate::breaking(choice));
        self.transition(next);
    }

    fn on_preview(&mut self, key: Key) {
        if key != Key::Return {
            return;
        }

        match CommitMessage::validated(self.state.fields(), &self.validator) {
            Ok(message) => {
                let next = self.state.go_next(StateUpdate::commit(message));
                self.transition(next);
            }
            Err(result) => {
                log::debug!("preview validation failed: {:?}", result.errors);
                self.errors = result.errors;
            }
        }
    }

    fn on_confirmation(&mut self, key: Key) -> Result<WizardStep, EasyCommitError> {
        let ScreenInput::Select(selected) = self.input else {
            return Ok(WizardStep::Continue);
        };
        let count = CONFIRM_OPTIONS.len();

        match key {
            Key::Up => self.input = ScreenInput::Select((selected + count - 1) % count),
            Key::Down => self.input = ScreenInput::Select((selected + 1) % count),
            Key::Return => match selected {
                0 => {
                    let next = self.state.go_next(StateUpdate::default());
                    self.transition(next);
                    if self.screen() == Screen::Exit {
                        return self.state.finish().map(WizardStep::Completed);
                    }
                }
                1 => {
                    let previous = self.state.go_back();
                    self.transition(previous);
                }
                _ => {
                    self.input = ScreenInput::None;
                    return Ok(WizardStep::Cancelled);
                }
            },
            _ => {}
        }

        Ok(WizardStep::Continue)
    }

    fn line_value(&self) -> String {
        match &self.input {
            ScreenInput::Line(editor) => editor.submit(),
            _ => String::new(),
        }
    }

    fn edit_line(&mut self, key: Key) {
        let ScreenInput::Line(editor) = &mut self.input else {
            return;
        };

        match key {
            Key::Char(ch) => {
                let mut buf = [0u8; 4];
                editor.insert(ch.encode_utf8(&mut buf));
            }
            Key::Backspace | Key::Delete => editor.delete_before(),
            Key::Left => editor.move_left(),
            Key::Right => editor.move_right(),
            Key::Home => editor.move_home(),
            Key::End => editor.move_end(),
            _ => {}
        }
    }

    /// Renderable snapshot of the current screen
    pub fn view(&self) -> ScreenView {
        let screen = self.screen();
        let (prompt, hint, footer) = screen_text(screen);

        let content = match (&self.input, screen) {
            (ScreenInput::Select(selected), Screen::TypeSelection) => ViewContent::Select {
                options: self
                    .types
                    .iter()
                    .map(|t| SelectOption::new(t.name.clone(), t.description))
                    .collect(),
                selected: *selected,
            },
            (ScreenInput::Select(selected), Screen::BreakingChange) => ViewContent::Select {
                options: BREAKING_OPTIONS.iter().map(|o| SelectOption::new(*o, "")).collect(),
                selected: *selected,
            },
            (ScreenInput::Select(selected), _) => ViewContent::Select {
                options: CONFIRM_OPTIONS.iter().map(|o| SelectOption::new(*o, "")).collect(),
                selected: *selected,
            },
            (ScreenInput::Line(editor), _) => ViewContent::Line {
                value: editor.value().to_string(),
                cursor: editor.cursor(),
                placeholder: if screen == Screen::ScopeInput {
                    "auth, api, ui, etc. (press Enter to skip)"
                } else {
                    "add user authentication"
                },
                counter: editor.limit().map(|limit| CharCounter {
                    current: editor.len(),
                    limit,
                }),
            },
            (ScreenInput::Block(buffer), _) => {
                let viewport = buffer.viewport(BODY_HEIGHT);
                ViewContent::Block {
                    cursor_row: viewport.cursor_row(buffer.cursor()),
                    cursor_column: buffer.cursor().column,
                    lines: viewport.lines,
                    placeholder: "Detailed explanation... (optional)",
                    counter: Some(CharCounter {
                        current: buffer.total_len(),
                        limit: self.limits.max_body_length,
                    }),
                }
            }
            (ScreenInput::None, Screen::Preview) => ViewContent::Preview {
                message: self.state.fields().format(),
                summary: self.summary(),
            },
            (ScreenInput::None, _) => ViewContent::Empty,
        };

        ScreenView {
            screen,
            step: screen.step(),
            total_steps: Screen::STEP_COUNT,
            prompt,
            hint,
            content,
            errors: self.errors.clone(),
            footer,
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        let state = &self.state;
        let mut summary = vec![("Type", state.commit_type.clone())];
        if !state.scope.is_empty() {
            summary.push(("Scope", state.scope.clone()));
        }
        summary.push(("Description", state.description.clone()));
        if !state.body.is_empty() {
            let mut body: String = state.body.chars().take(BODY_SUMMARY_CHARS).collect();
            if state.body.chars().count() > BODY_SUMMARY_CHARS {
                body.push_str("...");
            }
            summary.push(("Body", body));
        }
        if state.breaking {
            summary.push(("Breaking", "yes".to_string()));
        }
        summary
    }
}

const TYPE_FOOTER: &[&str] = &["↑/↓ to select", "Enter to confirm", "q or Esc to cancel"];
const SELECT_FOOTER: &[&str] = &["↑/↓ to select", "Enter to confirm", "Ctrl+B to go back", "Esc to cancel"];
const LINE_FOOTER: &[&str] = &["Enter to confirm", "Ctrl+B to go back", "Esc to cancel"];
const SCOPE_FOOTER: &[&str] = &[
    "Enter to submit (or skip)",
    "Ctrl+S to skip",
    "Ctrl+B to go back",
    "Esc to cancel",
];
const BODY_FOOTER: &[&str] = &["Ctrl+D to finish", "Ctrl+B to go back", "Esc to cancel"];
const PREVIEW_FOOTER: &[&str] = &["Enter to continue", "Ctrl+B to go back", "Esc to cancel"];

/// Prompt, hint, and footer key hints for a screen
fn screen_text(screen: Screen) -> (&'static str, &'static str, &'static [&'static str]) {
    match screen {
        Screen::TypeSelection => (
            "Select a commit type:",
            "Select the type of change you're committing",
            TYPE_FOOTER,
        ),
        Screen::DescriptionInput => (
            "Enter a concise description:",
            "Use present tense and lowercase (e.g., 'add feature' not 'Added feature')",
            LINE_FOOTER,
        ),
        Screen::ScopeInput => ("Scope (optional):", "Examples: auth, api, ui, core, cli", SCOPE_FOOTER),
        Screen::BodyInput => (
            "Enter detailed description (optional):",
            "Use arrows to move, Enter for a new line",
            BODY_FOOTER,
        ),
        Screen::BreakingChange => (
            "Is this a breaking change?",
            "Breaking changes require a major version bump according to semantic versioning",
            SELECT_FOOTER,
        ),
        Screen::Preview => (
            "Commit Message Preview:",
            "Review your commit message before creating",
            PREVIEW_FOOTER,
        ),
        Screen::Confirmation => ("What would you like to do?", "Ready to create the commit?", SELECT_FOOTER),
        Screen::Exit => ("", "", &[]),
    }
}

/// Run the wizard until the user confirms or cancels
pub fn run_wizard<K, R>(
    config: &Config,
    keys: &mut K,
    renderer: &mut R,
) -> Result<WizardOutcome, EasyCommitError>
where
    K: KeySource + ?Sized,
    R: Renderer + ?Sized,
{
    config.validate()?;
    let mut wizard = Wizard::new(config);

    loop {
        renderer.render(&wizard.view())?;
        let key = keys.next_key()?;

        match wizard.handle_key(key)? {
            WizardStep::Continue => {}
            WizardStep::Completed(message) => {
                log::info!("wizard completed: {}", message.commit_type());
                return Ok(WizardOutcome::Completed(message));
            }
            WizardStep::Cancelled => return Ok(WizardOutcome::Cancelled),
        }
    }
}
