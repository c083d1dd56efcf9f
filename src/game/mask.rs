pub const DEFAULT_LETTER_MASK: char = '■';
pub const DEFAULT_DIGIT_MASK: char = '□';

/// Placeholder glyphs drawn instead of hidden letters and digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskGlyphs {
    pub letter: char,
    pub digit: char,
}

impl Default for MaskGlyphs {
    fn default() -> Self {
        Self {
            letter: DEFAULT_LETTER_MASK,
            digit: DEFAULT_DIGIT_MASK,
        }
    }
}

impl MaskGlyphs {
    /// The glyph hiding `c`, or `None` when `c` always stays visible.
    pub fn glyph_for(&self, c: char) -> Option<char> {
        if is_letter(c) {
            Some(self.letter)
        } else if is_digit(c) {
            Some(self.digit)
        } else {
            None
        }
    }
}

/// Anything with the Unicode `Alphabetic` property.
///
/// This is wider than the letter categories (`L*`): letter-numbers such as
/// `Ⅻ` and combining vowel signs such as Devanagari matras are masked too.
pub fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

// decimal digits only, superscripts and other numerics stay visible
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_maskable(c: char) -> bool {
    is_letter(c) || is_digit(c)
}

/// Replace every letter run and every digit run with the same number of
/// mask glyphs. Everything else passes through untouched, so the output has
/// exactly as many chars as the input.
pub fn mask(text: &str, glyphs: MaskGlyphs) -> String {
    text.chars()
        .map(|c| glyphs.glyph_for(c).unwrap_or(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_length_and_punctuation() {
        let text = "L'an 1789, « la Révolution » !";
        let masked = mask(text, MaskGlyphs::default());

        assert_eq!(masked.chars().count(), text.chars().count());
        for (src, out) in text.chars().zip(masked.chars()) {
            if !is_maskable(src) {
                assert_eq!(src, out);
            }
        }
    }

    #[test]
    fn letter_runs_become_letter_glyphs() {
        let masked = mask("Révolution française", MaskGlyphs::default());
        assert_eq!(masked, "■■■■■■■■■■ ■■■■■■■■■");
    }

    #[test]
    fn digit_runs_become_digit_glyphs() {
        let masked = mask("en 1789.", MaskGlyphs::default());
        assert_eq!(masked, "■■ □□□□.");
    }

    #[test]
    fn custom_glyphs() {
        let glyphs = MaskGlyphs { letter: '_', digit: '#' };
        assert_eq!(mask("Ab-12", glyphs), "__-##");
    }

    #[test]
    fn masking_twice_from_source_is_stable() {
        let text = "Paris est la capitale de la France.";
        let glyphs = MaskGlyphs::default();
        assert_eq!(mask(text, glyphs), mask(text, glyphs));
    }

    #[test]
    fn alphabetic_marks_and_letter_numbers_are_masked() {
        let glyphs = MaskGlyphs::default();
        assert_eq!(mask("Louis Ⅻ", glyphs), "■■■■■ ■");
        // क + ि (vowel sign i)
        assert_eq!(mask("कि", glyphs), "■■");
    }

    #[test]
    fn empty_text() {
        assert_eq!(mask("", MaskGlyphs::default()), "");
    }
}
