//! Command line classification
//!
//! Split on whitespace, first matching rule wins. Tokens borrow from the line.

use super::ConsoleError;

/// One classified input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    /// Empty or whitespace-only line
    Blank,
    SetDisplayMode { mode_token: &'a str },
    SetTargetAddress { address_token: &'a str },
    ReadRegister { register_token: &'a str },
    WriteRegister { register_token: &'a str, data_token: &'a str },
    ScanBus,
    Unrecognized { raw_text: &'a str },
}

/// Classify a raw input line.
///
/// `out` and `to` without a value are the only malformed lines reported
/// here; a read or write with the wrong token count is `Unrecognized`.
pub fn classify(line: &str) -> Result<Command<'_>, ConsoleError> {
    if line == "exit" {
        return Ok(Command::Exit);
    }
    if line == "help" {
        return Ok(Command::Help);
    }
    if line.trim().is_empty() {
        return Ok(Command::Blank);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();

    if tokens[0] == "out" {
        let mode_token = tokens.get(1).copied().ok_or(ConsoleError::MissingArg)?;
        return Ok(Command::SetDisplayMode { mode_token });
    }
    if line.starts_with("to") {
        let address_token = tokens.get(1).copied().ok_or(ConsoleError::MissingArg)?;
        return Ok(Command::SetTargetAddress { address_token });
    }
    if line.starts_with('r') && tokens.len() == 2 {
        return Ok(Command::ReadRegister { register_token: tokens[1] });
    }
    if line.starts_with('w') && tokens.len() == 3 {
        return Ok(Command::WriteRegister {
            register_token: tokens[1],
            data_token: tokens[2],
        });
    }
    if line == "scan" {
        return Ok(Command::ScanBus);
    }

    Ok(Command::Unrecognized { raw_text: line })
}

/// Explain why a line was not recognized.
///
/// A bare `r`/`w` verb with the wrong token count is an argument error
/// rather than an unknown command.
pub fn diagnose(raw_text: &str) -> ConsoleError {
    let mut tokens = raw_text.split_whitespace();
    let expected = match tokens.next() {
        Some("r") => 1,
        Some("w") => 2,
        _ => return ConsoleError::UnknownCommand,
    };

    match tokens.count() {
        n if n < expected => ConsoleError::MissingArg,
        n if n > expected => ConsoleError::TooManyArgs,
        _ => ConsoleError::UnknownCommand,
    }
}
