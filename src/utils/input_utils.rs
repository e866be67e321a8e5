/// Turns the textbox contents into the list of identifiers to analyze.
///
/// One identifier per line, surrounding whitespace trimmed, blank lines
/// dropped. Order is kept and duplicates are not removed. An empty result
/// means no analysis should be requested.
pub fn collect(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn splits_trims_and_drops_blank_lines() {
        let urls = collect("  a.com \n\n\tb.com\r\n   \nc.com");
        assert_eq!(urls, vec!["a.com", "b.com", "c.com"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        assert_eq!(collect("b.com\na.com\nb.com"), vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(collect("").is_empty());
        assert!(collect(" \n \r\n\t").is_empty());
    }

    proptest! {
        #[test]
        fn never_grows_and_never_yields_blank_entries(lines in prop::collection::vec("[ \\ta-z.]{0,12}", 0..20)) {
            let raw = lines.join("\n");
            let collected = collect(&raw);

            prop_assert!(collected.len() <= lines.len().max(1));
            prop_assert!(collected.iter().all(|entry| !entry.trim().is_empty()));
            prop_assert!(collected.iter().all(|entry| entry.trim() == entry));

            let expected: Vec<String> = lines
                .iter()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            prop_assert_eq!(collected, expected);
        }
    }
}
