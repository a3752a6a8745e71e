//! Character to Morse code table

use crate::types::Pulse::{self, Dash, Dot};

/// Ordered pulse sequence for one character
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct SymbolCode(&'static [Pulse]);

impl SymbolCode {
    const fn new(pulses: &'static [Pulse]) -> Self {
        Self(pulses)
    }

    pub const fn pulses(&self) -> &'static [Pulse] {
        self.0
    }

    pub const fn len(&self) -> usize {
        self.0.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Units taken by all pulses, trailing gaps included
    pub fn duration_units(&self) -> u32 {
        self.0.iter().map(Pulse::duration_units).sum()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SymbolCode {
    fn format(&self, f: defmt::Formatter<'_>) {
        defmt::write!(f, "{}", self.0)
    }
}

/// Letters A to Z
const LETTERS: [SymbolCode; 26] = [
    SymbolCode::new(&[Dot, Dash]),
    SymbolCode::new(&[Dash, Dot, Dot, Dot]),
    SymbolCode::new(&[Dash, Dot, Dash, Dot]),
    SymbolCode::new(&[Dash, Dot, Dot]),
    SymbolCode::new(&[Dot]),
    SymbolCode::new(&[Dot, Dot, Dash, Dot]),
    SymbolCode::new(&[Dash, Dash, Dot]),
    SymbolCode::new(&[Dot, Dot, Dot, Dot]),
    SymbolCode::new(&[Dot, Dot]),
    SymbolCode::new(&[Dot, Dash, Dash, Dash]),
    SymbolCode::new(&[Dash, Dot, Dash]),
    SymbolCode::new(&[Dot, Dash, Dot, Dot]),
    SymbolCode::new(&[Dash, Dash]),
    SymbolCode::new(&[Dash, Dot]),
    SymbolCode::new(&[Dash, Dash, Dash]),
    SymbolCode::new(&[Dot, Dash, Dash, Dot]),
    SymbolCode::new(&[Dash, Dash, Dot, Dash]),
    SymbolCode::new(&[Dot, Dash, Dot]),
    SymbolCode::new(&[Dot, Dot, Dot]),
    SymbolCode::new(&[Dash]),
    SymbolCode::new(&[Dot, Dot, Dash]),
    SymbolCode::new(&[Dot, Dot, Dot, Dash]),
    SymbolCode::new(&[Dot, Dash, Dash]),
    SymbolCode::new(&[Dash, Dot, Dot, Dash]),
    SymbolCode::new(&[Dash, Dot, Dash, Dash]),
    SymbolCode::new(&[Dash, Dash, Dot, Dot]),
];

/// Digits 0 to 9
const DIGITS: [SymbolCode; 10] = [
    SymbolCode::new(&[Dash, Dash, Dash, Dash, Dash]),
    SymbolCode::new(&[Dot, Dash, Dash, Dash, Dash]),
    SymbolCode::new(&[Dot, Dot, Dash, Dash, Dash]),
    SymbolCode::new(&[Dot, Dot, Dot, Dash, Dash]),
    SymbolCode::new(&[Dot, Dot, Dot, Dot, Dash]),
    SymbolCode::new(&[Dot, Dot, Dot, Dot, Dot]),
    SymbolCode::new(&[Dash, Dot, Dot, Dot, Dot]),
    SymbolCode::new(&[Dash, Dash, Dot, Dot, Dot]),
    SymbolCode::new(&[Dash, Dash, Dash, Dot, Dot]),
    SymbolCode::new(&[Dash, Dash, Dash, Dash, Dot]),
];

/// What a message character turns into
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Letter or digit
    Code(SymbolCode),
    /// Space between words
    WordBreak,
    /// Anything else, sent as nothing
    Unknown,
}

/// Classify one character of a message
pub fn classify(c: char) -> Glyph {
    match c {
        'A'..='Z' => Glyph::Code(LETTERS[c as usize - 'A' as usize]),
        'a'..='z' => Glyph::Code(LETTERS[c as usize - 'a' as usize]),
        '0'..='9' => Glyph::Code(DIGITS[c as usize - '0' as usize]),
        ' ' => Glyph::WordBreak,
        _ => Glyph::Unknown,
    }
}

/// Morse code for a letter or digit
pub fn symbol_code(c: char) -> Option<SymbolCode> {
    match classify(c) {
        Glyph::Code(code) => Some(code),
        Glyph::WordBreak | Glyph::Unknown => None,
    }
}

/// Every character with a code, upper-case letters then digits
pub fn supported_chars() -> impl Iterator<Item = char> {
    ('A'..='Z').chain('0'..='9')
}
