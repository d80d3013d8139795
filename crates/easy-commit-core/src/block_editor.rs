//! Multi-line text buffer with hard wrap
//!
//! The buffer is edited through a pure reducer: [`reduce`] takes the current
//! [`BufferState`] and a [`BufferAction`] and returns the next state without
//! touching the input. Replaying a list of actions from a known state is
//! therefore deterministic, which the replay tests rely on.
//!
//! Lengths, widths, and cursor columns are counted in characters.

use crate::line_editor::byte_offset;

/// Cursor position within a buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Edits accepted by [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferAction {
    /// Insert a character and hard-wrap the line at `width` (0 disables wrapping)
    Insert {
        ch: char,
        width: usize,
        limit: Option<usize>,
    },
    /// Backspace
    DeleteBefore,
    /// Delete
    DeleteAfter,
    /// Split the line at the cursor
    NewLine { limit: Option<usize> },
    Navigate(Direction),
}

/// Lines plus cursor. There is always at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferState {
    lines: Vec<String>,
    cursor: Cursor,
}

impl Default for BufferState {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::default(),
        }
    }
}

impl BufferState {
    /// Build a state, clamping the cursor into the buffer
    pub fn new(lines: Vec<String>, cursor: Cursor) -> Self {
        let lines = if lines.is_empty() { vec![String::new()] } else { lines };
        let line = cursor.line.min(lines.len() - 1);
        let column = cursor.column.min(char_len(&lines[line]));
        Self {
            lines,
            cursor: Cursor { line, column },
        }
    }

    /// Buffer holding `text` split on newlines, cursor at the start
    pub fn from_text(text: &str) -> Self {
        Self::new(text.split('\n').map(str::to_string).collect(), Cursor::default())
    }

    /// Buffer holding `text`, cursor at the end of the last line
    pub fn from_text_at_end(text: &str) -> Self {
        let state = Self::from_text(text);
        let line = state.lines.len() - 1;
        let column = char_len(&state.lines[line]);
        Self::new(state.lines, Cursor { line, column })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Lines joined with newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Total characters, counting one per implicit newline between lines
    pub fn total_len(&self) -> usize {
        self.lines.iter().map(|l| char_len(l)).sum::<usize>() + self.lines.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    fn current_line(&self) -> &str {
        &self.lines[self.cursor.line]
    }

    /// Visible window of `height` lines that keeps the cursor line in view
    pub fn viewport(&self, height: usize) -> Viewport {
        if height == 0 {
            return Viewport {
                start: self.cursor.line,
                lines: Vec::new(),
            };
        }

        let start = (self.cursor.line + 1).saturating_sub(height);
        let mut lines: Vec<String> = self.lines.iter().skip(start).take(height).cloned().collect();
        lines.resize(height, String::new());
        Viewport { start, lines }
    }
}

/// A window onto the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    /// Buffer index of the first visible line
    pub start: usize,
    /// Exactly `height` lines, padded with empty lines past the end of the buffer
    pub lines: Vec<String>,
}

impl Viewport {
    /// Row of the cursor within the window, if visible
    pub fn cursor_row(&self, cursor: Cursor) -> Option<usize> {
        cursor
            .line
            .checked_sub(self.start)
            .filter(|row| *row < self.lines.len())
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `line` into segments no longer than `width`.
///
/// Breaks at the last space at or before `width` when there is one past the
/// first character, otherwise mid-word at exactly `width`. Leading spaces of
/// each continuation segment are dropped. A `width` of 0 disables wrapping.
pub fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![line.to_string()];
    }

    let mut segments = Vec::new();
    let mut remaining: &[char] = &chars;

    while remaining.len() > width {
        let break_point = (1..=width)
            .rev()
            .find(|&i| remaining[i] == ' ')
            .unwrap_or(width);

        segments.push(remaining[..break_point].iter().collect());

        let rest = &remaining[break_point..];
        let skip = rest.iter().take_while(|c| c.is_whitespace()).count();
        remaining = &rest[skip..];
    }

    if !remaining.is_empty() {
        segments.push(remaining.iter().collect());
    }

    segments
}

/// Apply `action` to `state`, returning the next state
pub fn reduce(state: &BufferState, action: &BufferAction) -> BufferState {
    match action {
        BufferAction::Insert { ch, width, limit } => insert(state, *ch, *width, *limit),
        BufferAction::DeleteBefore => delete_before(state),
        BufferAction::DeleteAfter => delete_after(state),
        BufferAction::NewLine { limit } => new_line(state, *limit),
        BufferAction::Navigate(direction) => navigate(state, *direction),
    }
}

/// Apply a sequence of actions in order
pub fn replay<'a>(state: &BufferState, actions: impl IntoIterator<Item = &'a BufferAction>) -> BufferState {
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}

fn insert(state: &BufferState, ch: char, width: usize, limit: Option<usize>) -> BufferState {
    if limit.is_some_and(|limit| state.total_len() >= limit) {
        return state.clone();
    }

    let Cursor { line, column } = state.cursor;
    let mut new_line = state.current_line().to_string();
    new_line.insert(byte_offset(&new_line, column), ch);

    let mut wrapped = hard_wrap(&new_line, width);
    let mut lines = state.lines.clone();
    let mut cursor = Cursor::new(line, column + 1);

    let first_len = char_len(&wrapped[0]);
    if cursor.column > first_len {
        if wrapped.len() == 1 {
            // The wrap swallowed trailing whitespace; continue on a fresh line.
            wrapped.push(String::new());
        }
        let next_len = char_len(&wrapped[1]);
        cursor = Cursor::new(line + 1, (cursor.column - first_len).min(next_len));
    }

    lines.splice(line..=line, wrapped);
    BufferState { lines, cursor }
}

fn delete_before(state: &BufferState) -> BufferState {
    let Cursor { line, column } = state.cursor;
    let mut lines = state.lines.clone();

    if column > 0 {
        let current = &mut lines[line];
        let start = byte_offset(current, column - 1);
        let end = byte_offset(current, column);
        current.replace_range(start..end, "");
        BufferState {
            lines,
            cursor: Cursor::new(line, column - 1),
        }
    } else if line > 0 {
        let current = lines.remove(line);
        let previous = &mut lines[line - 1];
        let join_column = char_len(previous);
        previous.push_str(&current);
        BufferState {
            lines,
            cursor: Cursor::new(line - 1, join_column),
        }
    } else {
        state.clone()
    }
}

fn delete_after(state: &BufferState) -> BufferState {
    let Cursor { line, column } = state.cursor;
    let mut lines = state.lines.clone();

    if column < char_len(&lines[line]) {
        let current = &mut lines[line];
        let start = byte_offset(current, column);
        let end = byte_offset(current, column + 1);
        current.replace_range(start..end, "");
    } else if line + 1 < lines.len() {
        let next = lines.remove(line + 1);
        lines[line].push_str(&next);
    } else {
        return state.clone();
    }

    BufferState {
        lines,
        cursor: state.cursor,
    }
}

fn new_line(state: &BufferState, limit: Option<usize>) -> BufferState {
    if limit.is_some_and(|limit| state.total_len() + 1 > limit) {
        return state.clone();
    }

    let Cursor { line, column } = state.cursor;
    let mut lines = state.lines.clone();
    let split_at = byte_offset(&lines[line], column);
    let tail = lines[line].split_off(split_at);
    lines.insert(line + 1, tail);

    BufferState {
        lines,
        cursor: Cursor::new(line + 1, 0),
    }
}

fn navigate(state: &BufferState, direction: Direction) -> BufferState {
    let lines = &state.lines;
    let Cursor { mut line, mut column } = state.cursor;

    match direction {
        Direction::Left => {
            if column > 0 {
                column -= 1;
            } else if line > 0 {
                line -= 1;
                column = char_len(&lines[line]);
            }
        }
        Direction::Right => {
            if column < char_len(&lines[line]) {
                column += 1;
            } else if line + 1 < lines.len() {
                line += 1;
                column = 0;
            }
        }
        Direction::Up => {
            if line > 0 {
                line -= 1;
                column = column.min(char_len(&lines[line]));
            }
        }
        Direction::Down => {
            if line + 1 < lines.len() {
                line += 1;
                column = column.min(char_len(&lines[line]));
            }
        }
        Direction::Home => column = 0,
        Direction::End => column = char_len(&lines[line]),
    }

    BufferState {
        lines: state.lines.clone(),
        cursor: Cursor { line, column },
    }
}
