//! Full character table checked against the international Morse alphabet

use crate::spell;
use morse_core::{classify, supported_chars, symbol_code, Glyph};
use rstest::rstest;

#[rstest]
#[case('A', ".-")]
#[case('B', "-...")]
#[case('C', "-.-.")]
#[case('D', "-..")]
#[case('E', ".")]
#[case('F', "..-.")]
#[case('G', "--.")]
#[case('H', "....")]
#[case('I', "..")]
#[case('J', ".---")]
#[case('K', "-.-")]
#[case('L', ".-..")]
#[case('M', "--")]
#[case('N', "-.")]
#[case('O', "---")]
#[case('P', ".--.")]
#[case('Q', "--.-")]
#[case('R', ".-.")]
#[case('S', "...")]
#[case('T', "-")]
#[case('U', "..-")]
#[case('V', "...-")]
#[case('W', ".--")]
#[case('X', "-..-")]
#[case('Y', "-.--")]
#[case('Z', "--..")]
#[case('0', "-----")]
#[case('1', ".----")]
#[case('2', "..---")]
#[case('3', "...--")]
#[case('4', "....-")]
#[case('5', ".....")]
#[case('6', "-....")]
#[case('7', "--...")]
#[case('8', "---..")]
#[case('9', "----.")]
fn test_international_alphabet(#[case] c: char, #[case] expected: &str) {
    assert_eq!(spell(c).unwrap().as_str(), expected);
    if c.is_ascii_alphabetic() {
        assert_eq!(spell(c.to_ascii_lowercase()).unwrap().as_str(), expected);
    }
}

#[test]
fn test_supported_chars_cover_table() {
    assert_eq!(supported_chars().count(), 36);
    for c in supported_chars() {
        assert!(matches!(classify(c), Glyph::Code(_)), "{c:?} has no code");
    }
}

#[test]
fn test_every_ascii_char_classified() {
    for byte in 0u8..=127 {
        let c = byte as char;
        let expected_code = c.is_ascii_alphanumeric();
        match classify(c) {
            Glyph::Code(code) => {
                assert!(expected_code, "{c:?} should not have a code");
                assert!(!code.is_empty());
                assert!(code.len() <= 5);
            }
            Glyph::WordBreak => assert_eq!(c, ' '),
            Glyph::Unknown => assert!(!expected_code && c != ' '),
        }
        assert_eq!(symbol_code(c).is_some(), expected_code);
    }
}
