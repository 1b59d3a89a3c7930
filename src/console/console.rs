//! Main console struct integrating all components

use core::fmt::Write;

use super::{command_names, Completer, ConsoleError, Flow, History, LineBuffer, Terminal};
use crate::hal::{BusScanner, BusTransport};

/// Version string (set by build.rs, includes git hash)
pub const VERSION: &str = env!("VERSION_STRING");

/// Console state machine
pub struct Console<B, S> {
    terminal: Terminal<B, S>,
    line: LineBuffer,
    history: History,
    completer: Completer,
    /// Escape sequence state
    escape_state: EscapeState,
}

#[derive(Clone, Copy, PartialEq)]
enum EscapeState {
    Normal,
    Escape,  // Got ESC
    Bracket, // Got ESC [, until the final byte
}

impl<B: BusTransport, S: BusScanner> Console<B, S> {
    /// Create new console
    pub fn new(terminal: Terminal<B, S>) -> Self {
        Self {
            terminal,
            line: LineBuffer::new(),
            history: History::new(),
            completer: Completer::new(),
            escape_state: EscapeState::Normal,
        }
    }

    pub fn terminal(&self) -> &Terminal<B, S> {
        &self.terminal
    }

    /// Text typed so far on the current line
    pub fn pending(&self) -> &str {
        self.line.as_str()
    }

    /// Process a single input byte
    ///
    /// Returns Some(result) if a line completed, None if more input needed.
    pub fn process_byte(&mut self, byte: u8, out: &mut dyn Write) -> Option<Result<Flow, ConsoleError>> {
        match self.escape_state {
            EscapeState::Normal => self.process_normal(byte, out),
            EscapeState::Escape => {
                if byte == b'[' {
                    self.escape_state = EscapeState::Bracket;
                } else {
                    self.escape_state = EscapeState::Normal;
                }
                None
            }
            EscapeState::Bracket => {
                match byte {
                    // Parameter and intermediate bytes, e.g. the `3` of `ESC [ 3 ~`
                    0x20..=0x3F => return None,
                    b'A' => self.handle_up(out),   // Up arrow
                    b'B' => self.handle_down(out), // Down arrow
                    _ => {}
                }
                self.escape_state = EscapeState::Normal;
                None
            }
        }
    }

    fn process_normal(&mut self, byte: u8, out: &mut dyn Write) -> Option<Result<Flow, ConsoleError>> {
        match byte {
            // Enter
            b'\r' | b'\n' => {
                let _ = writeln!(out);
                let line = self.line.take();
                if !line.trim().is_empty() {
                    self.history.push(&line);
                }
                self.completer.reset();

                let result = self.run_line(&line, out);
                if result != Ok(Flow::Exit) {
                    self.print_prompt(out);
                }
                Some(result)
            }

            // Backspace
            0x7F | 0x08 => {
                if self.line.backspace() {
                    // Echo: backspace, space, backspace
                    let _ = write!(out, "\x08 \x08");
                }
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            // Tab
            b'\t' => {
                self.handle_tab(out);
                None
            }

            // Escape
            0x1B => {
                self.escape_state = EscapeState::Escape;
                None
            }

            // Ctrl+C
            0x03 => {
                let _ = writeln!(out, "^C");
                self.line.clear();
                self.completer.reset();
                self.history.reset_nav();
                self.print_prompt(out);
                None
            }

            // Ctrl+D on an empty line is end of input
            0x04 => {
                if self.line.is_empty() {
                    let _ = writeln!(out);
                    return Some(Ok(Flow::Exit));
                }
                None
            }

            // Ctrl+U (clear line)
            0x15 => {
                self.erase_line(out);
                self.line.clear();
                None
            }

            // Printable character
            0x20..=0x7E => {
                if self.line.push(byte) {
                    let _ = write!(out, "{}", byte as char);
                }
                self.completer.reset();
                self.history.reset_nav();
                None
            }

            _ => None,
        }
    }

    /// Execute a complete line and report any error
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow, ConsoleError> {
        let result = self.terminal.run_line(line, out);
        if let Err(e) = &result {
            log::debug!("'{}' failed: {:?}", line, e);
            let _ = writeln!(out, "error {}: {}", e.code(), e);
        }
        result
    }

    fn handle_tab(&mut self, out: &mut dyn Write) {
        let input = self.line.as_str();

        // Only the command verb is completed
        if input.contains(' ') {
            return;
        }

        if let Some(completed) = self.completer.complete(input, command_names()) {
            let prefix_len = input.len();
            for _ in 0..prefix_len {
                let _ = write!(out, "\x08 \x08");
            }
            self.line.set(completed);
            let _ = write!(out, "{}", completed);
        }
    }

    fn handle_up(&mut self, out: &mut dyn Write) {
        if let Some(prev) = self.history.get_prev() {
            let prev = prev.to_string();
            self.replace_line(&prev, out);
        }
    }

    fn handle_down(&mut self, out: &mut dyn Write) {
        let next = self.history.get_next().map(str::to_string);
        // Past the newest entry the line is cleared
        self.replace_line(next.as_deref().unwrap_or(""), out);
    }

    fn replace_line(&mut self, new_line: &str, out: &mut dyn Write) {
        self.erase_line(out);
        self.line.set(new_line);
        let _ = write!(out, "{}", self.line.as_str());
    }

    fn erase_line(&self, out: &mut dyn Write) {
        for _ in 0..self.line.len() {
            let _ = write!(out, "\x08 \x08");
        }
    }

    /// Print the prompt
    pub fn print_prompt(&self, out: &mut dyn Write) {
        let session = self.terminal.session();
        let _ = write!(
            out,
            "i2c-{} {}: ",
            session.bus_id(),
            session.target_address().unwrap_or("--")
        );
    }

    /// Print welcome banner
    pub fn print_banner(&self, out: &mut dyn Write) {
        let _ = writeln!(out, "{}", VERSION);
        let _ = writeln!(out, "Type 'help' for commands.");
        self.print_prompt(out);
    }
}
