//! Growable text buffer for diagnostics and reports.
//!
//! The buffer tracks a logical capacity alongside its contents and grows by a
//! fixed increment whenever an append or insert would exhaust it. One slot of
//! capacity is always held back for a terminator, so `len() < capacity()`
//! holds at all times.

use std::fmt;

/// Starting capacity of a fresh buffer.
pub const DEFAULT_CAPACITY: usize = 256;

/// Extra slack added on top of the required size when the buffer grows.
pub const GROWTH_INCREMENT: usize = 256;

/// A mutable, dynamically resized text buffer.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    text: String,
    capacity: usize,
}

impl TextBuffer {
    /// Create an empty buffer with the default starting capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Current content as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of meaningful bytes currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when no content has been stored yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Logical capacity, always strictly greater than [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grow so that `additional` more bytes plus the terminator slot fit.
    fn reserve_for(&mut self, additional: usize) {
        if self.text.len() + additional + 1 >= self.capacity {
            let new_capacity = self.text.len() + additional + 1 + GROWTH_INCREMENT;
            self.text.reserve(new_capacity - self.text.len());
            self.capacity = new_capacity;
        }
    }

    /// Append `text`, growing first if needed. Never truncates.
    pub fn append(&mut self, text: &str) {
        self.reserve_for(text.len());
        self.text.push_str(text);
    }

    /// Append an optional string; an absent value appends the literal `NULL`.
    pub fn append_opt(&mut self, text: Option<&str>) {
        self.append(text.unwrap_or("NULL"));
    }

    /// Append a single character.
    pub fn append_char(&mut self, c: char) {
        self.reserve_for(c.len_utf8());
        self.text.push(c);
    }

    /// Append formatted text. The rendering path is dynamically sized, so
    /// there is no upper bound on the rendered length.
    pub fn append_format(&mut self, args: fmt::Arguments<'_>) {
        // write_str below never errors.
        fmt::Write::write_fmt(self, args).ok();
    }

    /// Insert `text` at byte position `pos`, shifting the tail right.
    ///
    /// `pos` is clamped to `[0, len]`, and rounded down to the nearest
    /// character boundary so the content stays valid UTF-8.
    pub fn insert(&mut self, text: &str, pos: usize) {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        self.reserve_for(text.len());
        self.text.insert_str(pos, text);
    }
}

impl fmt::Write for TextBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
