//! Single-line text field with a cursor and an optional length limit

/// Characters stripped from inserted text
const CONTROL_CHARS: [char; 3] = ['\r', '\n', '\t'];

/// Single-line editor state.
///
/// The cursor is a character offset into `value`, always in `[0, len]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    value: String,
    cursor: usize,
    limit: Option<usize>,
}

impl LineEditor {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            limit,
        }
    }

    /// Editor seeded with `initial`, cursor placed at its end.
    ///
    /// The seed is taken as-is even when it exceeds the limit; only new input is limited.
    pub fn with_value(initial: &str, limit: Option<usize>) -> Self {
        let value: String = initial.chars().filter(|c| !CONTROL_CHARS.contains(c)).collect();
        let cursor = value.chars().count();
        Self {
            value,
            cursor,
            limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Insert `text` at the cursor.
    ///
    /// Control characters are dropped, and text beyond the remaining capacity is
    /// cut off. Returns the number of characters actually inserted.
    pub fn insert(&mut self, text: &str) -> usize {
        let sanitized: Vec<char> = text.chars().filter(|c| !CONTROL_CHARS.contains(c)).collect();
        if sanitized.is_empty() {
            return 0;
        }

        let len = self.len();
        let take = match self.limit {
            Some(limit) => sanitized.len().min(limit.saturating_sub(len)),
            None => sanitized.len(),
        };
        if take == 0 {
            return 0;
        }

        let at = byte_offset(&self.value, self.cursor);
        let inserted: String = sanitized[..take].iter().collect();
        self.value.insert_str(at, &inserted);
        self.cursor = (self.cursor + take).min(len + take);
        take
    }

    /// Remove the character before the cursor (Backspace)
    pub fn delete_before(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let start = byte_offset(&self.value, self.cursor - 1);
        let end = byte_offset(&self.value, self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// The value exactly as typed; trimming is left to the caller
    pub fn submit(&self) -> String {
        self.value.clone()
    }
}

/// Byte index of the `char_idx`-th character, or the end of `s`
pub(crate) fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map_or(s.len(), |(offset, _)| offset)
}
