//! Tab completion with cycling

/// Tab completion state
#[derive(Default)]
pub struct Completer {
    /// Prefix being completed (stored for cycle detection)
    prefix: String,
    /// Last completion handed out; the line now ends with it
    last: String,
    /// Current match index for cycling
    match_idx: usize,
    /// Whether we're actively cycling
    cycling: bool,
}

impl Completer {
    /// Create new completer
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete prefix, cycling through matches on repeated calls
    ///
    /// Calling again with either the original prefix or the previous
    /// completion advances to the next match. Returns None if no match.
    pub fn complete<'a, I>(&mut self, prefix: &str, candidates: I) -> Option<&'a str>
    where
        I: Iterator<Item = &'a str>,
    {
        let same_prefix = prefix == self.prefix || (self.cycling && prefix == self.last);

        if !same_prefix {
            self.prefix.clear();
            self.prefix.push_str(prefix);
            self.match_idx = 0;
            self.cycling = false;
        } else if self.cycling {
            self.match_idx += 1;
        }

        let matches: Vec<&'a str> = candidates
            .filter(|c| c.starts_with(self.prefix.as_str()))
            .collect();

        if matches.is_empty() {
            self.cycling = false;
            return None;
        }

        // Wrap around
        if self.match_idx >= matches.len() {
            self.match_idx = 0;
        }

        self.cycling = true;
        let completed = matches[self.match_idx];
        self.last.clear();
        self.last.push_str(completed);
        Some(completed)
    }

    /// Reset completion state (call when user types non-tab)
    pub fn reset(&mut self) {
        self.cycling = false;
        self.match_idx = 0;
    }
}
