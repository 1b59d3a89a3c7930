//! Terminal front end
//!
//! A TTY is put in raw mode and fed to the console byte by byte; piped
//! input is executed line by line without echo or prompt. In both, end of
//! input ends the session like `exit`.

use core::fmt;
use std::io::{self, BufRead, Read};

use crate::console::{Console, Flow};
use crate::hal::{BusScanner, BusTransport};

/// `fmt::Write` adapter over an `io::Write` sink.
///
/// In raw mode the terminal does not map `\n` to `\r\n`, so `crlf` does.
pub struct OutputWriter<W> {
    inner: W,
    crlf: bool,
}

impl<W: io::Write> OutputWriter<W> {
    pub fn new(inner: W, crlf: bool) -> Self {
        Self { inner, crlf }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> fmt::Write for OutputWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.crlf {
            return self.inner.write_all(s.as_bytes()).map_err(|_| fmt::Error);
        }
        for (i, part) in s.split('\n').enumerate() {
            if i > 0 {
                self.inner.write_all(b"\r\n").map_err(|_| fmt::Error)?;
            }
            self.inner.write_all(part.as_bytes()).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}

/// Raw mode for as long as the guard lives
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Interactive session on the controlling terminal
pub fn run_interactive<B: BusTransport, S: BusScanner>(console: &mut Console<B, S>) -> io::Result<()> {
    let _raw = RawModeGuard::enable()?;
    let mut out = OutputWriter::new(io::stdout(), true);
    let mut stdin = io::stdin().lock();

    console.print_banner(&mut out);
    out.flush()?;

    let mut byte = [0u8; 1];
    loop {
        match stdin.read(&mut byte) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }

        let done = matches!(console.process_byte(byte[0], &mut out), Some(Ok(Flow::Exit)));
        out.flush()?;
        if done {
            break;
        }
    }
    Ok(())
}

/// Execute newline-separated commands from `input`
pub fn run_lines<B, S, R, W>(console: &mut Console<B, S>, input: R, output: W) -> io::Result<W>
where
    B: BusTransport,
    S: BusScanner,
    R: BufRead,
    W: io::Write,
{
    let mut input = input;
    let mut out = OutputWriter::new(output, false);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        // Undecodable bytes become U+FFFD and fail as an unknown command
        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        let flow = console.run_line(line, &mut out);
        out.flush()?;
        if flow == Ok(Flow::Exit) {
            break;
        }
    }
    Ok(out.into_inner())
}
