//! crossterm implementations of the wizard's key source and renderer

use std::io::{Stdout, Write, stdout};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use owo_colors::OwoColorize;

use easy_commit_core::interaction::{CharCounter, ScreenView, ViewContent};
use easy_commit_core::{EasyCommitError, Key, KeySource, Renderer};

use crate::colors::COLORS;

/// Width of the label column in option lists
const LABEL_WIDTH: usize = 10;

fn terminal_error(err: anyhow::Error) -> EasyCommitError {
    EasyCommitError::Terminal(format!("{:#}", err))
}

/// Raw mode plus alternate screen for the lifetime of the value
pub struct TerminalSession;

impl TerminalSession {
    pub fn start() -> Result<Self, EasyCommitError> {
        Self::enter().map_err(terminal_error)?;
        Ok(Self)
    }

    fn enter() -> Result<()> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, Hide).context("failed to enter alternate screen")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = execute!(stdout(), Show, LeaveAlternateScreen) {
            log::warn!("failed to leave alternate screen: {}", e);
        }
        if let Err(e) = disable_raw_mode() {
            log::warn!("failed to disable raw mode: {}", e);
        }
    }
}

/// Blocking key reader over crossterm events
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_key(&mut self) -> Result<Key, EasyCommitError> {
        loop {
            let event = event::read()
                .context("failed to read terminal event")
                .map_err(terminal_error)?;

            if let Event::Key(key_event) = event {
                if let Some(key) = translate(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}

/// Map a crossterm key event to a wizard key; `None` for keys the wizard ignores
pub fn translate(event: KeyEvent) -> Option<Key> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char(c) if ctrl => Some(Key::Ctrl(c.to_ascii_lowercase())),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Return),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// A laid-out screen: styled rows plus the terminal cursor position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
    /// (column, row) of the text cursor, when the screen edits text
    pub cursor: Option<(usize, usize)>,
}

/// Lay out `view` as terminal rows
pub fn layout(view: &ScreenView) -> Frame {
    let mut rows = Vec::new();
    let mut cursor = None;

    let progress: String = (1..=view.total_steps)
        .map(|step| if step <= view.step { '●' } else { '○' })
        .collect();
    rows.push(format!(
        "{}  {}  {}",
        "easy-commit".style(COLORS.active),
        progress.style(COLORS.active),
        format!("Step {}/{} · {}", view.step, view.total_steps, view.screen).style(COLORS.muted),
    ));
    rows.push(String::new());
    rows.push(view.prompt.style(COLORS.prompt).to_string());
    if !view.hint.is_empty() {
        rows.push(view.hint.style(COLORS.muted).to_string());
    }
    rows.push(String::new());

    match &view.content {
        ViewContent::Select { options, selected } => {
            for (i, option) in options.iter().enumerate() {
                let label = format!("{:<width$}", option.label, width = LABEL_WIDTH);
                let line = if i == *selected {
                    format!("{} {}", "❯".style(COLORS.active), label.style(COLORS.active))
                } else {
                    format!("  {}", label)
                };
                if option.description.is_empty() {
                    rows.push(line.trim_end().to_string());
                } else {
                    rows.push(format!("{} {}", line, option.description.style(COLORS.muted)));
                }
            }
        }
        ViewContent::Line {
            value,
            cursor: column,
            placeholder,
            counter,
        } => {
            cursor = Some((2 + column, rows.len()));
            if value.is_empty() {
                rows.push(format!("{} {}", ">".style(COLORS.active), placeholder.style(COLORS.muted)));
            } else {
                rows.push(format!("{} {}", ">".style(COLORS.active), value));
            }
            if let Some(counter) = counter {
                rows.push(counter_row(counter));
            }
        }
        ViewContent::Block {
            lines,
            cursor_row,
            cursor_column,
            placeholder,
            counter,
        } => {
            let top = rows.len();
            let empty = lines.iter().all(|l| l.is_empty());
            for (i, line) in lines.iter().enumerate() {
                let text = if empty && i == 0 {
                    placeholder.style(COLORS.muted).to_string()
                } else {
                    line.clone()
                };
                rows.push(format!("{} {}", "│".style(COLORS.muted), text));
            }
            cursor = cursor_row.map(|row| (2 + cursor_column, top + row));
            if let Some(counter) = counter {
                rows.push(counter_row(counter));
            }
        }
        ViewContent::Preview { message, summary } => {
            for (label, value) in summary {
                rows.push(format!("{} {}", format!("{}:", label).style(COLORS.muted), value));
            }
            rows.push(String::new());
            for line in message.lines() {
                rows.push(format!("  {}", line.style(COLORS.success)));
            }
        }
        ViewContent::Empty => {}
    }

    if !view.errors.is_empty() {
        rows.push(String::new());
        for error in &view.errors {
            rows.push(format!("{} {}", "✗".style(COLORS.fail), error.style(COLORS.fail)));
        }
    }

    rows.push(String::new());
    rows.push(view.footer.join(" · ").style(COLORS.muted).to_string());

    Frame { rows, cursor }
}

fn counter_row(counter: &CharCounter) -> String {
    let text = format!("{}/{}", counter.current, counter.limit);
    if counter.is_near_limit() {
        text.style(COLORS.warning).to_string()
    } else {
        text.style(COLORS.muted).to_string()
    }
}

/// Redraws the whole screen for every view
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn draw(&mut self, frame: &Frame) -> Result<()> {
        queue!(self.out, Hide, Clear(ClearType::All))?;
        for (row, text) in frame.rows.iter().enumerate() {
            queue!(self.out, MoveTo(0, to_u16(row)), Print(text))?;
        }
        if let Some((column, row)) = frame.cursor {
            queue!(self.out, MoveTo(to_u16(column), to_u16(row)), Show)?;
        }
        self.out.flush().context("failed to flush terminal")?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &ScreenView) -> Result<(), EasyCommitError> {
        self.draw(&layout(view)).map_err(terminal_error)
    }
}

fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easy_commit_core::interaction::SelectOption;
    use easy_commit_core::{Config, Screen, Wizard};

    #[test]
    fn test_translate_keys() {
        let key = |code, modifiers| translate(KeyEvent::new(code, modifiers));

        assert_eq!(key(KeyCode::Char('a'), KeyModifiers::NONE), Some(Key::Char('a')));
        assert_eq!(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Some(Key::Char('A')));
        assert_eq!(key(KeyCode::Char('d'), KeyModifiers::CONTROL), Some(Key::Ctrl('d')));
        assert_eq!(key(KeyCode::Char('B'), KeyModifiers::CONTROL), Some(Key::Ctrl('b')));
        assert_eq!(key(KeyCode::Enter, KeyModifiers::NONE), Some(Key::Return));
        assert_eq!(key(KeyCode::Esc, KeyModifiers::NONE), Some(Key::Escape));
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), None);
        assert_eq!(key(KeyCode::F(1), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut event = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate(event), None);
    }

    #[test]
    fn test_layout_line_cursor() {
        let mut wizard = Wizard::new(&Config::default());
        wizard.handle_key(Key::Return).unwrap();
        for key in Key::chars("add") {
            wizard.handle_key(key).unwrap();
        }

        let frame = layout(&wizard.view());
        let (column, row) = frame.cursor.expect("description screen shows a cursor");
        assert_eq!(column, 5);
        assert!(frame.rows[row].contains("add"));
        assert!(frame.rows.iter().any(|r| r.contains("3/72")));
    }

    #[test]
    fn test_layout_select_marks_selection() {
        let view = ScreenView {
            screen: Screen::BreakingChange,
            step: 5,
            total_steps: 7,
            prompt: "Is this a breaking change?",
            hint: "",
            content: ViewContent::Select {
                options: vec![SelectOption::new("Yes", ""), SelectOption::new("No", "")],
                selected: 1,
            },
            errors: vec!["boom".to_string()],
            footer: &["Enter to confirm"],
        };

        let frame = layout(&view);
        assert!(frame.cursor.is_none());
        let yes = frame.rows.iter().find(|r| r.contains("Yes")).unwrap();
        let no = frame.rows.iter().find(|r| r.contains("No")).unwrap();
        assert!(!yes.contains('❯'));
        assert!(no.contains('❯'));
        assert!(frame.rows.iter().any(|r| r.contains("boom")));
        assert!(frame.rows.last().unwrap().contains("Enter to confirm"));
    }
}
