/// Lowercase and trim a raw guess before it is matched or recorded.
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Collapse typographic variants (curly quotes, dashes, non-breaking spaces)
/// onto their plain ASCII form so a guess typed on a regular keyboard can
/// match punctuation inside a multi-word guess.
pub fn fold_typography(text: &str) -> String {
    let mut output = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '“' | '”' | '„' => output.push('"'),
            '’' | '‘' | '᾽' | 'ʼ' => output.push('\''),

            '—' | '–' | '‐' => output.push('-'),

            '\u{00A0}' | '\u{2007}' | '\u{202F}' => output.push(' '),

            '…' => output.push_str("..."),

            _ => output.push(c),
        }
    }
    output
}

/// Characters that must never reach the terminal verbatim.
pub fn sanitize_for_display(c: char) -> char {
    if c.is_control() {
        ' '
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_guess("  PaRiS \t"), "paris");
        assert_eq!(normalize_guess("ÉTAT"), "état");
    }

    #[test]
    fn typography_folds_to_ascii() {
        assert_eq!(fold_typography("l’art"), "l'art");
        assert_eq!(fold_typography("a\u{00A0}:"), "a :");
        assert_eq!(fold_typography("1914–1918"), "1914-1918");
    }

    #[test]
    fn control_characters_are_blanked() {
        assert_eq!(sanitize_for_display('\u{1b}'), ' ');
        assert_eq!(sanitize_for_display('\t'), ' ');
        assert_eq!(sanitize_for_display('é'), 'é');
    }
}
