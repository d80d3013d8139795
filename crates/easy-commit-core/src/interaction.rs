//! Terminal seam: decoded key events in, renderable views out
//!
//! The core never talks to a terminal directly. A [`KeySource`] yields one
//! decoded [`Key`] at a time and a [`Renderer`] draws each [`ScreenView`].
//! The CLI implements both with crossterm; tests use [`ScriptedKeys`].

use std::collections::VecDeque;

use crate::error::EasyCommitError;
use crate::navigator::Screen;

/// A decoded key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character
    Char(char),
    Return,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Escape,
    /// Ctrl + lowercase letter
    Ctrl(char),
}

impl Key {
    /// One `Key::Char` per character of `text`
    pub fn chars(text: &str) -> Vec<Key> {
        text.chars().map(Key::Char).collect()
    }
}

/// Source of key events
pub trait KeySource {
    /// Block until the next key is available
    fn next_key(&mut self) -> Result<Key, EasyCommitError>;
}

/// Sink for rendered wizard screens
pub trait Renderer {
    fn render(&mut self, view: &ScreenView) -> Result<(), EasyCommitError>;
}

/// Replays a fixed list of keys; errors once the list is exhausted
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key, EasyCommitError> {
        self.keys
            .pop_front()
            .ok_or_else(|| EasyCommitError::Terminal("input exhausted".to_string()))
    }
}

/// Renderer that discards every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _view: &ScreenView) -> Result<(), EasyCommitError> {
        Ok(())
    }
}

/// Everything a renderer needs to draw one screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub screen: Screen,
    /// One-based progress step
    pub step: usize,
    pub total_steps: usize,
    /// Prompt shown above the input
    pub prompt: &'static str,
    /// Guidance shown under the prompt
    pub hint: &'static str,
    pub content: ViewContent,
    /// Validation errors from the last submit attempt, in rule order
    pub errors: Vec<String>,
    /// Key hints for the footer
    pub footer: &'static [&'static str],
}

/// Screen-specific body of a [`ScreenView`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    /// A list with one highlighted entry
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
    /// Single-line input
    Line {
        value: String,
        /// Character offset of the cursor
        cursor: usize,
        placeholder: &'static str,
        counter: Option<CharCounter>,
    },
    /// Multi-line input, already cut to the visible window
    Block {
        lines: Vec<String>,
        /// Row of the cursor within `lines`
        cursor_row: Option<usize>,
        cursor_column: usize,
        placeholder: &'static str,
        counter: Option<CharCounter>,
    },
    /// Formatted message and a field summary
    Preview {
        message: String,
        summary: Vec<(&'static str, String)>,
    },
    Empty,
}

/// An entry of a [`ViewContent::Select`] list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub description: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }
}

/// `current/limit` character counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub current: usize,
    pub limit: usize,
}

impl CharCounter {
    /// Counter turns to a warning this many characters before the limit
    pub const ALERT_MARGIN: usize = 15;

    pub fn is_near_limit(&self) -> bool {
        self.current + Self::ALERT_MARGIN > self.limit
    }
}
