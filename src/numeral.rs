//! Numeral conversion
//!
//! Operator input carries its base in a two-character prefix:
//! `0x` hex, `0b` binary, `0o` octal, none for decimal.
//! Output is rendered in one of five display modes.

use crate::console::ConsoleError;

/// Base of a textual numeral, decided once from its prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Hex,
    Bin,
    Oct,
    Dec,
}

impl Radix {
    /// Split `text` into its radix and the digits that follow the prefix.
    pub fn split(text: &str) -> (Radix, &str) {
        match text.get(..2) {
            Some("0x") => (Radix::Hex, &text[2..]),
            Some("0b") => (Radix::Bin, &text[2..]),
            Some("0o") => (Radix::Oct, &text[2..]),
            _ => (Radix::Dec, text),
        }
    }

    /// Numeric base for `from_str_radix`.
    pub const fn base(self) -> u32 {
        match self {
            Radix::Hex => 16,
            Radix::Bin => 2,
            Radix::Oct => 8,
            Radix::Dec => 10,
        }
    }
}

/// Parse a numeral without range-checking it against a byte.
pub fn parse_numeral(text: &str) -> Result<u32, ConsoleError> {
    let (radix, digits) = Radix::split(text);
    let base = radix.base();

    // from_str_radix tolerates a leading '+', the terminal does not
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(ConsoleError::not_a_number(text));
    }

    u32::from_str_radix(digits, base).map_err(|_| ConsoleError::out_of_range(text))
}

/// Parse a numeral that must fit in one bus byte.
pub fn parse_byte(text: &str) -> Result<u8, ConsoleError> {
    let value = parse_numeral(text)?;
    u8::try_from(value).map_err(|_| ConsoleError::out_of_range(text))
}

/// How bytes returned from a read are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Hex,
    Binary,
    Decimal,
    TwosComplement,
    Octal,
}

impl DisplayMode {
    pub const ALL: [DisplayMode; 5] = [
        DisplayMode::Hex,
        DisplayMode::Binary,
        DisplayMode::Decimal,
        DisplayMode::TwosComplement,
        DisplayMode::Octal,
    ];

    /// Look up a mode by its single-character tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h" => Some(DisplayMode::Hex),
            "b" => Some(DisplayMode::Binary),
            "d" => Some(DisplayMode::Decimal),
            "t" => Some(DisplayMode::TwosComplement),
            "o" => Some(DisplayMode::Octal),
            _ => None,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            DisplayMode::Hex => "h",
            DisplayMode::Binary => "b",
            DisplayMode::Decimal => "d",
            DisplayMode::TwosComplement => "t",
            DisplayMode::Octal => "o",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DisplayMode::Hex => "hex",
            DisplayMode::Binary => "binary",
            DisplayMode::Decimal => "decimal",
            DisplayMode::TwosComplement => "two's complement",
            DisplayMode::Octal => "octal",
        }
    }
}

/// Render a byte in the given display mode.
pub fn render(value: u8, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Hex => format!("{:#x}", value),
        DisplayMode::Binary => format!("{:#b}", value),
        DisplayMode::Decimal => value.to_string(),
        DisplayMode::TwosComplement => (value as i8).to_string(),
        DisplayMode::Octal => format!("{:#o}", value),
    }
}
