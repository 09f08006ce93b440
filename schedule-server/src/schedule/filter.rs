//! Line filtering of raw timetable entries.

use crate::domain::RawTimetableEntry;

/// Keep the entries of one line, in provider order, bounded to `max_entries`.
///
/// The bound is applied after the prefix match. The provider lists every
/// station of the line, so with upstream ordering the first `max_entries`
/// line entries are the boarding station's timetable; a change in that
/// ordering would silently shift which trains are kept.
pub fn filter_line<'a>(
    entries: &'a [RawTimetableEntry],
    line_prefix: &str,
    max_entries: usize,
) -> Vec<&'a RawTimetableEntry> {
    entries
        .iter()
        .filter(|entry| entry.train.starts_with(line_prefix))
        .take(max_entries)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Departure;
    use proptest::prelude::*;

    fn train_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[A-Z0-9]{1,6}".prop_map(|s| format!("odpt.Train:TokyoMetro.Tozai.{s}")),
            "[A-Z0-9]{1,6}".prop_map(|s| format!("odpt.Train:TokyoMetro.Hibiya.{s}")),
            "[a-z.]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn output_is_prefixed_ordered_and_bounded(
            trains in prop::collection::vec(train_strategy(), 0..60),
            max_entries in 0usize..40,
        ) {
            let entries: Vec<_> = trains
                .iter()
                .map(|t| RawTimetableEntry::new(t.clone(), Departure::Unknown, vec![]))
                .collect();
            let prefix = "odpt.Train:TokyoMetro.Tozai.";

            let filtered = filter_line(&entries, prefix, max_entries);

            prop_assert!(filtered.len() <= max_entries);
            for e in &filtered {
                prop_assert!(e.train.starts_with(prefix));
            }

            // Reference: the leading prefixed entries of the input, in order
            let expected: Vec<&str> = trains
                .iter()
                .filter(|t| t.starts_with(prefix))
                .take(max_entries)
                .map(String::as_str)
                .collect();
            let actual: Vec<&str> = filtered.iter().map(|e| e.train.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
