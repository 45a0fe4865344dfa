//! Orthographic rule predicates.
//!
//! Each predicate decides whether a capital letter at `position` is expected
//! by a simple orthographic convention. A capital that satisfies none of them
//! is a rule violation and gets flagged by `corpus::flags`.
//!
//! The predicates operate on a `&[char]` view of the corpus so positions are
//! character positions, not byte offsets.

/// Sentence-ending punctuation that licenses a following capital.
const SENTENCE_TERMINATORS: [char; 4] = ['!', '.', '?', '\u{201d}'];

/// A capital at the start of a line: directly after a newline, or one
/// non-alphabetic character (e.g. a quote mark) after a newline.
pub fn line_initial(text: &[char], position: usize) -> bool {
    (position > 0 && text[position - 1] == '\n')
        || (position >= 2 && !text[position - 1].is_alphabetic() && text[position - 2] == '\n')
}

/// A capital starting a new sentence: preceded by whitespace which is itself
/// preceded by sentence-ending punctuation.
pub fn sentence_initial(text: &[char], position: usize) -> bool {
    position >= 2
        && text[position - 1].is_whitespace()
        && SENTENCE_TERMINATORS.contains(&text[position - 2])
}

/// A standalone capital letter (pronoun "I", initials): both neighbors are
/// non-alphabetic, and the position is at neither end of the text.
pub fn standalone_letter(text: &[char], position: usize) -> bool {
    position != 0
        && position + 1 < text.len()
        && !text[position - 1].is_alphabetic()
        && !text[position + 1].is_alphabetic()
}

/// True when any rule licenses a capital at `position`.
pub fn expected_capital(text: &[char], position: usize) -> bool {
    line_initial(text, position)
        || sentence_initial(text, position)
        || standalone_letter(text, position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_line_initial_capital() {
        let text = chars("end.\nNext");
        assert!(line_initial(&text, 5));
        // One non-alphabetic character after the newline also counts.
        let quoted = chars("end.\n\"Next");
        assert!(line_initial(&quoted, 6));
        // Not at the start of the text itself.
        let start = chars("Next");
        assert!(!line_initial(&start, 0));
    }

    #[test]
    fn test_sentence_initial_capital() {
        assert!(sentence_initial(&chars("Stop. Go"), 6));
        assert!(sentence_initial(&chars("Why? Yes"), 5));
        assert!(sentence_initial(&chars("Now! Run"), 5));
        assert!(sentence_initial(&chars("said.\u{201d} He"), 7));
        // A comma does not end a sentence.
        assert!(!sentence_initial(&chars("one, Two"), 5));
        // No whitespace between terminator and capital.
        assert!(!sentence_initial(&chars("a.B"), 2));
    }

    #[test]
    fn test_standalone_letter() {
        let text = chars("so I went");
        assert!(standalone_letter(&text, 3));
        // Not standalone when embedded in a word.
        let word = chars("mID");
        assert!(!standalone_letter(&word, 1));
        // Never at the first or last position.
        assert!(!standalone_letter(&chars("I am"), 0));
        assert!(!standalone_letter(&chars("am I"), 3));
    }

    #[test]
    fn test_expected_capital_is_the_disjunction() {
        let text = chars("ok. I\nWent eLsewhere");
        assert!(expected_capital(&text, 4)); // standalone "I"
        assert!(expected_capital(&text, 6)); // line-initial "W"
        assert!(!expected_capital(&text, 12)); // mid-word "L"
    }
}
