//! Transliteration into the report charset
//!
//! The report uses the standard Helvetica font with WinAnsi encoding, so every
//! character must fit in a single byte. Accented letters lose their
//! diacritics; anything else outside Latin-1 becomes a placeholder.

use crate::constants::report::REPLACEMENT_CHAR;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Degrade `text` to characters representable in Latin-1
pub fn transliterate(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if is_latin1(c) { c } else { REPLACEMENT_CHAR })
        .collect()
}

/// Encode already transliterated text as single bytes
///
/// Characters outside Latin-1 are replaced, so this never fails either.
pub fn to_latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if is_latin1(c) { c as u8 } else { REPLACEMENT_CHAR as u8 })
        .collect()
}

/// Latin-1 without the C1 controls, which WinAnsi maps to other glyphs
fn is_latin1(c: char) -> bool {
    matches!(c as u32, 0x00..=0x7F | 0xA0..=0xFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_unchanged() {
        assert_eq!(transliterate("Jan Novak"), "Jan Novak");
        assert_eq!(
            transliterate("jan.novak@example.com"),
            "jan.novak@example.com"
        );
    }

    #[test]
    fn test_strips_diacritics() {
        assert_eq!(transliterate("Jiří Dvořák"), "Jiri Dvorak");
        assert_eq!(transliterate("Body na kružnici"), "Body na kruznici");
        assert_eq!(transliterate("Ångström café"), "Angstrom cafe");
    }

    #[test]
    fn test_replaces_unrepresentable() {
        assert_eq!(transliterate("π r²"), "? r2");
        assert_eq!(transliterate("日本"), "??");
        assert_eq!(transliterate("Łukasz"), "?ukasz");
    }

    #[test]
    fn test_output_fits_latin1() {
        let text = transliterate("Zoë Ωmega ‰ “quoted” ß");
        assert!(text.chars().all(|c| (c as u32) <= 0xFF));
        assert!(text.contains('ß'));
    }

    #[test]
    fn test_latin1_bytes() {
        assert_eq!(to_latin1_bytes("ab"), b"ab".to_vec());
        assert_eq!(to_latin1_bytes("ß"), vec![0xDF]);
        assert_eq!(to_latin1_bytes("€"), vec![b'?']);
    }

    #[test]
    fn test_c1_controls_replaced() {
        assert_eq!(transliterate("a\u{80}b\u{9f}c"), "a?b?c");
        assert_eq!(to_latin1_bytes("\u{85}"), vec![b'?']);
        assert_eq!(to_latin1_bytes("\u{a0}\u{ff}"), vec![0xA0, 0xFF]);
    }
}
