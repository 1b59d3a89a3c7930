//! Command history with ring buffer
//!
//! Bounded to `HISTORY_SIZE` lines, oldest dropped first.

use std::collections::VecDeque;

/// Maximum line length
pub const LINE_SIZE: usize = 128;

/// Number of history entries
pub const HISTORY_SIZE: usize = 32;

/// Command history ring buffer
pub struct History {
    /// Oldest at the front, newest at the back
    entries: VecDeque<String>,
    capacity: usize,
    /// Current navigation position (0 = newest, len-1 = oldest)
    nav_pos: Option<usize>,
}

impl History {
    /// Create empty history
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            nav_pos: None,
        }
    }

    /// Push a new command into history
    ///
    /// Repeating the newest entry does not add a duplicate.
    pub fn push(&mut self, line: &str) {
        self.nav_pos = None;

        if self.entries.back().map(String::as_str) == Some(line) {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let mut end = line.len().min(LINE_SIZE);
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        self.entries.push_back(line[..end].to_string());
    }

    /// Get previous (older) command
    pub fn get_prev(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let pos = match self.nav_pos {
            None => 0,
            Some(p) if p + 1 < self.entries.len() => p + 1,
            Some(p) => p, // Already at oldest
        };

        self.nav_pos = Some(pos);
        self.get_at(pos)
    }

    /// Get next (newer) command
    pub fn get_next(&mut self) -> Option<&str> {
        match self.nav_pos {
            None => None,
            Some(0) => {
                self.nav_pos = None;
                None // Back to current input
            }
            Some(p) => {
                self.nav_pos = Some(p - 1);
                self.get_at(p - 1)
            }
        }
    }

    /// Reset navigation (call when user types)
    pub fn reset_nav(&mut self) {
        self.nav_pos = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get entry at navigation position (0 = newest)
    fn get_at(&self, nav_pos: usize) -> Option<&str> {
        let idx = self.entries.len().checked_sub(nav_pos + 1)?;
        self.entries.get(idx).map(String::as_str)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
