//! Line classification tests

use i2c_term::console::parser::{classify, diagnose, Command};
use i2c_term::console::ConsoleError;

#[test]
fn test_classify_simple_commands() {
    assert_eq!(classify("exit"), Ok(Command::Exit));
    assert_eq!(classify("help"), Ok(Command::Help));
    assert_eq!(classify("scan"), Ok(Command::ScanBus));
}

#[test]
fn test_classify_blank() {
    assert_eq!(classify(""), Ok(Command::Blank));
    assert_eq!(classify("  "), Ok(Command::Blank));
    assert_eq!(classify("\t \t"), Ok(Command::Blank));
}

#[test]
fn test_classify_read() {
    assert_eq!(
        classify("r 0x10"),
        Ok(Command::ReadRegister { register_token: "0x10" })
    );
    assert_eq!(
        classify("r   0x10  "),
        Ok(Command::ReadRegister { register_token: "0x10" })
    );
}

#[test]
fn test_classify_write() {
    assert_eq!(
        classify("w 0x12 0b10011011"),
        Ok(Command::WriteRegister {
            register_token: "0x12",
            data_token: "0b10011011",
        })
    );
}

#[test]
fn test_wrong_token_count_is_unrecognized() {
    assert_eq!(
        classify("r 0x10 extra"),
        Ok(Command::Unrecognized { raw_text: "r 0x10 extra" })
    );
    assert_eq!(classify("r"), Ok(Command::Unrecognized { raw_text: "r" }));
    assert_eq!(
        classify("w 0x12"),
        Ok(Command::Unrecognized { raw_text: "w 0x12" })
    );
}

#[test]
fn test_classify_out() {
    assert_eq!(classify("out b"), Ok(Command::SetDisplayMode { mode_token: "b" }));
    assert_eq!(classify("out z"), Ok(Command::SetDisplayMode { mode_token: "z" }));
    assert_eq!(classify("out"), Err(ConsoleError::MissingArg));
}

#[test]
fn test_classify_to_keeps_token_verbatim() {
    assert_eq!(
        classify("to 0x4e"),
        Ok(Command::SetTargetAddress { address_token: "0x4e" })
    );
    assert_eq!(
        classify("to bogus"),
        Ok(Command::SetTargetAddress { address_token: "bogus" })
    );
    assert_eq!(classify("to"), Err(ConsoleError::MissingArg));
}

#[test]
fn test_exact_text_rules() {
    // "exit" and "help" must match the whole line
    assert_eq!(classify("exit "), Ok(Command::Unrecognized { raw_text: "exit " }));
    assert_eq!(classify("help me"), Ok(Command::Unrecognized { raw_text: "help me" }));
    assert_eq!(classify("scan 1"), Ok(Command::Unrecognized { raw_text: "scan 1" }));
}

#[test]
fn test_out_wins_over_prefix_rules() {
    assert_eq!(classify("out o"), Ok(Command::SetDisplayMode { mode_token: "o" }));
}

#[test]
fn test_unknown_command() {
    assert_eq!(classify("foobar"), Ok(Command::Unrecognized { raw_text: "foobar" }));
}

#[test]
fn test_diagnose() {
    assert_eq!(diagnose("r"), ConsoleError::MissingArg);
    assert_eq!(diagnose("r 0x10 extra"), ConsoleError::TooManyArgs);
    assert_eq!(diagnose("w 0x12"), ConsoleError::MissingArg);
    assert_eq!(diagnose("w 1 2 3"), ConsoleError::TooManyArgs);
    assert_eq!(diagnose("foobar"), ConsoleError::UnknownCommand);
    assert_eq!(diagnose("read 1 2"), ConsoleError::UnknownCommand);
}
