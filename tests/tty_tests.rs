//! Front end tests: batch input and CRLF output

mod common;

use core::fmt::Write;

use common::{console, FakeBus};
use i2c_term::tty::{run_lines, OutputWriter};

#[test]
fn test_crlf_translation() {
    let mut out = OutputWriter::new(Vec::new(), true);
    write!(out, "a\nb\n").unwrap();
    assert_eq!(out.into_inner(), b"a\r\nb\r\n");
}

#[test]
fn test_plain_output_untouched() {
    let mut out = OutputWriter::new(Vec::new(), false);
    write!(out, "a\nb").unwrap();
    assert_eq!(out.into_inner(), b"a\nb");
}

#[test]
fn test_run_lines_until_exit() {
    let bus = FakeBus::with_device(0x4e).set(0x4e, 0x10, 0x80);
    let mut con = console(bus);
    let input = "to 0x4e\nout t\nr 0x10\nbogus\nexit\nr 0x10\n";

    let output = run_lines(&mut con, input.as_bytes(), Vec::new()).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(
        text,
        "device set to 0x4e\nout: two's complement\n-128\nerror E01: unknown command\n"
    );
    assert_eq!(con.terminal().bus().reads.len(), 1);
}

#[test]
fn test_run_lines_end_of_input_is_exit() {
    let mut con = console(FakeBus::with_device(0x4e));

    let output = run_lines(&mut con, "to 0x4e\r\nw 1 2\n".as_bytes(), Vec::new()).unwrap();

    assert_eq!(output, b"device set to 0x4e\n");
    assert_eq!(con.terminal().bus().writes, vec![(0x4e, 1, 2)]);
}

#[test]
fn test_run_lines_survives_invalid_utf8() {
    let mut con = console(FakeBus::with_device(0x4e));
    let input: &[u8] = b"to 0x4e\n\xff\xfe\nw 1 2\n";

    let output = run_lines(&mut con, input, Vec::new()).unwrap();
    let text = String::from_utf8(output).unwrap();

    assert_eq!(
        text,
        "device set to 0x4e\nerror E01: unknown command\n"
    );
    assert_eq!(con.terminal().bus().writes, vec![(0x4e, 1, 2)]);
}

#[test]
fn test_run_lines_last_line_without_newline() {
    let mut con = console(FakeBus::with_device(0x4e));

    run_lines(&mut con, "to 0x4e\nw 3 4".as_bytes(), Vec::new()).unwrap();
    assert_eq!(con.terminal().bus().writes, vec![(0x4e, 3, 4)]);
}
