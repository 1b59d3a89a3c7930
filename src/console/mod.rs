//! Register console for the I2C terminal
//!
//! Byte-level line editing feeds complete lines to the interpreter.
//! One line is fully executed before the next byte is read.

pub mod commands;
pub mod completion;
pub mod console;
pub mod error;
pub mod history;
pub mod line_buffer;
pub mod parser;

pub use commands::{command_names, CommandDescriptor, Flow, Terminal, COMMANDS};
pub use completion::Completer;
pub use console::{Console, VERSION};
pub use error::ConsoleError;
pub use history::History;
pub use line_buffer::LineBuffer;
pub use parser::{classify, diagnose, Command};
