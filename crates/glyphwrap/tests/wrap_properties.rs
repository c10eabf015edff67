//! Property tests for the line wrapper
//!
//! Inputs never contain `-`, so every `-` in the output is an inserted marker.

use glyphwrap::{wrap_text_to_lines, LineWrapper, HYPHEN};
use proptest::prelude::*;

/// Rejoin wrapped lines: forced breaks glue, everything else gets a space
fn rebuild(lines: &[String]) -> String {
    let mut rebuilt = String::new();
    let mut glued = false;

    for (i, line) in lines.iter().enumerate() {
        if i > 0 && !glued {
            rebuilt.push(' ');
        }
        match line.strip_suffix(HYPHEN) {
            Some(fragment) => {
                rebuilt.push_str(fragment);
                glued = true;
            }
            None => {
                rebuilt.push_str(line);
                glued = false;
            }
        }
    }
    rebuilt
}

/// Space-separated tokens with empty ones dropped
fn tokens(text: &str) -> Vec<&str> {
    text.split(' ').filter(|token| !token.is_empty()).collect()
}

proptest! {
    #[test]
    fn lines_never_exceed_width(
        words in prop::collection::vec("[a-z]{1,24}", 1..20),
        width in 2usize..16,
    ) {
        let text = words.join(" ");
        let lines = wrap_text_to_lines(&text, width).unwrap();
        for line in &lines {
            prop_assert!(line.chars().count() <= width, "{:?} wider than {}", line, width);
            prop_assert!(!line.is_empty());
        }
    }

    #[test]
    fn short_words_are_never_hyphenated(
        words in prop::collection::vec("[a-z]{1,8}", 1..20),
        width in 8usize..24,
    ) {
        let text = words.join(" ");
        let lines = wrap_text_to_lines(&text, width).unwrap();
        prop_assert!(lines.iter().all(|line| !line.contains(HYPHEN)));
        prop_assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn rebuilding_lines_restores_text(
        words in prop::collection::vec("[a-z]{1,24}", 1..20),
        width in 2usize..16,
    ) {
        let text = words.join(" ");
        let lines = wrap_text_to_lines(&text, width).unwrap();
        prop_assert_eq!(rebuild(&lines), text);
    }

    #[test]
    fn newlines_are_deleted_not_breaks(
        words in prop::collection::vec("[a-z]{1,10}", 1..10),
        width in 2usize..16,
    ) {
        let joined = words.join(" ");
        let with_newlines = words.join("\r\n ").replace(' ', " \n");
        let expected = wrap_text_to_lines(&joined, width).unwrap();
        prop_assert_eq!(wrap_text_to_lines(&with_newlines, width).unwrap(), expected);
    }

    #[test]
    fn repeated_spaces_and_line_breaks(
        text in "[ab \n\r]{0,30}",
        width in 2usize..10,
    ) {
        let lines = wrap_text_to_lines(&text, width).unwrap();
        for line in &lines {
            prop_assert!(line.chars().count() <= width, "{:?} wider than {}", line, width);
            prop_assert!(!line.is_empty());
        }

        let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let rebuilt = rebuild(&lines);
        prop_assert_eq!(tokens(&rebuilt), tokens(&cleaned));
    }

    #[test]
    fn width_boundary(width in 2usize..40) {
        let wrapper = LineWrapper::new(width).unwrap();

        let exact = "x".repeat(width);
        prop_assert_eq!(wrapper.wrap(&exact), vec![exact.clone()]);

        let over = "x".repeat(width + 1);
        let lines = wrapper.wrap(&over);
        prop_assert!(lines[0].ends_with(HYPHEN));
        prop_assert_eq!(lines[0].chars().count(), width);
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(
        wrap_text_to_lines("hello world", 80).unwrap(),
        vec!["hello world"]
    );
    assert_eq!(
        wrap_text_to_lines("abcdefgh", 4).unwrap(),
        vec!["abc-", "def-", "gh"]
    );
    assert_eq!(wrap_text_to_lines("foo\nbar", 80).unwrap(), vec!["foobar"]);
}

#[test]
fn test_long_word_mid_sentence() {
    let lines = wrap_text_to_lines("a very long single", 6).unwrap();
    assert_eq!(lines, vec!["a", "very", "long", "single"]);

    let lines = wrap_text_to_lines("see supercalifragilistic now", 8).unwrap();
    assert_eq!(lines, vec!["see", "superca-", "lifragi-", "listic", "now"]);
    assert_eq!(rebuild(&lines), "see supercalifragilistic now");
}
