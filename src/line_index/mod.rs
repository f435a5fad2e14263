//! Line-level marker lookup
//!
//! Pure helpers that locate a literal marker substring inside a text blob and
//! report the 1-based line numbers containing it. No regex semantics, no I/O,
//! no failure modes: an absent marker is an empty result.

/// Return the 1-based index of every line of `text` that contains `marker`
/// as a literal substring, in order of appearance.
#[must_use]
pub fn find_all_line_numbers(text: &str, marker: &str) -> Vec<usize> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| line.contains(marker))
        .map(|(idx, _)| idx + 1)
        .collect()
}

/// Same scan as [`find_all_line_numbers`], but stops once `max_matches`
/// matching lines have been collected and also returns the line content
/// with surrounding whitespace trimmed.
///
/// Used for evidence sampling in scan reports, where a handful of matched
/// lines is more useful than thousands of bare line numbers.
#[must_use]
pub fn find_sample_matches(text: &str, marker: &str, max_matches: usize) -> Vec<(usize, String)> {
    let mut matches = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.contains(marker) {
            matches.push((idx + 1, line.trim().to_string()));
            if matches.len() >= max_matches {
                break;
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_every_matching_line() {
        let text = "one GTM-X\ntwo\nthree GTM-X\nGTM-X";
        assert_eq!(find_all_line_numbers(text, "GTM-X"), vec![1, 3, 4]);
    }

    #[test]
    fn empty_text_and_absent_marker_yield_empty() {
        assert!(find_all_line_numbers("", "GTM-X").is_empty());
        assert!(find_all_line_numbers("nothing here", "GTM-X").is_empty());
        assert!(find_sample_matches("nothing here", "GTM-X", 5).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive_and_literal() {
        assert!(find_all_line_numbers("gtm-x", "GTM-X").is_empty());
        // No regex semantics: '.' matches only itself
        assert!(find_all_line_numbers("GTMAX", "GTM.X").is_empty());
        assert_eq!(find_all_line_numbers("GTM.X", "GTM.X"), vec![1]);
    }

    #[test]
    fn sample_matches_trim_and_cap() {
        let text = "  a GTM-X  \nb\n\tGTM-X c\nGTM-X\nGTM-X\nGTM-X\nGTM-X";
        let matches = find_sample_matches(text, "GTM-X", 3);
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0], (1, "a GTM-X".to_string()));
        assert_eq!(matches[1], (3, "GTM-X c".to_string()));
    }
}
