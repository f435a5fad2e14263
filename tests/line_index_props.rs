//! Property tests for the line-number indexer

use proptest::prelude::*;

use tagcheck::line_index::{find_all_line_numbers, find_sample_matches};

proptest! {
    #[test]
    fn line_numbers_are_one_based_strictly_increasing_and_in_range(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..40),
        hit_lines in prop::collection::vec(0usize..40, 0..10),
    ) {
        let marker = "NEEDLE";
        let mut doc_lines = lines.clone();
        for &i in &hit_lines {
            if i < doc_lines.len() {
                doc_lines[i].push_str(marker);
            }
        }
        let text = doc_lines.join("\n");

        let found = find_all_line_numbers(&text, marker);

        for window in found.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for &n in &found {
            prop_assert!(n >= 1 && n <= doc_lines.len());
            prop_assert!(doc_lines[n - 1].contains(marker));
        }
        // Every injected hit is reported.
        for &i in &hit_lines {
            if i < doc_lines.len() {
                prop_assert!(found.contains(&(i + 1)));
            }
        }
    }

    #[test]
    fn samples_are_a_capped_prefix_of_all_matches(
        lines in prop::collection::vec("[a-zN ]{0,20}", 0..40),
        cap in 1usize..8,
    ) {
        let marker = "N";
        let text = lines.join("\n");

        let all = find_all_line_numbers(&text, marker);
        let samples = find_sample_matches(&text, marker, cap);

        prop_assert!(samples.len() <= cap);
        prop_assert_eq!(samples.len(), all.len().min(cap));
        for (sample, expected) in samples.iter().zip(all.iter()) {
            prop_assert_eq!(sample.0, *expected);
            prop_assert!(sample.1.contains(marker));
        }
    }

    #[test]
    fn marker_absent_means_no_matches(text in "[a-m \n]{0,200}") {
        prop_assert!(find_all_line_numbers(&text, "NEEDLE").is_empty());
        prop_assert!(find_sample_matches(&text, "NEEDLE", 5).is_empty());
    }
}
