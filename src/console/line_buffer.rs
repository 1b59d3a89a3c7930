//! Line buffer for console input

use super::history::LINE_SIZE;

/// Line input buffer, printable ASCII only
pub struct LineBuffer {
    buf: String,
}

impl LineBuffer {
    /// Create empty buffer
    pub fn new() -> Self {
        Self {
            buf: String::with_capacity(LINE_SIZE),
        }
    }

    /// Push a character
    ///
    /// Returns `false` if the byte was dropped (full or not printable).
    pub fn push(&mut self, c: u8) -> bool {
        if self.buf.len() >= LINE_SIZE || !(0x20..=0x7E).contains(&c) {
            return false;
        }
        self.buf.push(c as char);
        true
    }

    /// Remove last character
    pub fn backspace(&mut self) -> bool {
        self.buf.pop().is_some()
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Set buffer contents from string
    pub fn set(&mut self, s: &str) {
        self.buf.clear();
        for b in s.bytes() {
            if !self.push(b) {
                break;
            }
        }
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Take the line, leaving the buffer empty
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
