use crate::labels::LabelCounts;

pub const OTHER_LABEL: &str = "Other";

pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub value: u64,
}

/// Sort descending by count (stable, so equal counts keep input order), keep
/// the first `top` entries, and sum the rest into an "Other" entry that is
/// only appended when that sum is positive.
pub fn build_chart_dataset(labels: &LabelCounts, top: usize) -> Vec<Entry> {
    let mut entries: Vec<Entry> = labels
        .iter()
        .map(|(name, value)| Entry {
            name: name.clone(),
            value: *value,
        })
        .collect();

    entries.sort_by(|a, b| b.value.cmp(&a.value));

    if entries.len() > top {
        let tail_sum: u64 = entries[top..].iter().map(|entry| entry.value).sum();
        entries.truncate(top);
        if tail_sum > 0 {
            entries.push(Entry {
                name: OTHER_LABEL.to_string(),
                value: tail_sum,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> LabelCounts {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn sorts_descending_without_other() {
        let labels = counts(&[("a", 5), ("b", 10), ("c", 3)]);
        let dataset = build_chart_dataset(&labels, DEFAULT_TOP);

        let expected = vec![
            Entry {
                name: "b".to_string(),
                value: 10,
            },
            Entry {
                name: "a".to_string(),
                value: 5,
            },
            Entry {
                name: "c".to_string(),
                value: 3,
            },
        ];
        assert_eq!(dataset, expected);
    }

    #[test]
    fn empty_mapping_yields_empty_dataset() {
        let dataset = build_chart_dataset(&LabelCounts::default(), DEFAULT_TOP);
        assert!(dataset.is_empty());
    }

    #[test]
    fn at_most_top_entries_keeps_everything() {
        let labels = counts(&[
            ("law", 40),
            ("health", 30),
            ("trade", 20),
            ("energy", 10),
        ]);
        let dataset = build_chart_dataset(&labels, DEFAULT_TOP);

        assert_eq!(dataset.len(), 4);
        assert!(dataset.iter().all(|entry| entry.name != OTHER_LABEL));
        assert!(dataset.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn tail_collapses_into_other() {
        let labels = counts(&[
            ("l01", 100),
            ("l02", 90),
            ("l03", 80),
            ("l04", 70),
            ("l05", 60),
            ("l06", 50),
            ("l07", 40),
            ("l08", 30),
            ("l09", 20),
            ("l10", 10),
            ("l11", 2),
            ("l12", 1),
        ]);
        let dataset = build_chart_dataset(&labels, DEFAULT_TOP);

        assert_eq!(dataset.len(), 11);
        assert_eq!(dataset[0].name, "l01");
        assert_eq!(dataset[9].name, "l10");
        assert_eq!(
            dataset[10],
            Entry {
                name: OTHER_LABEL.to_string(),
                value: 3,
            }
        );
    }

    #[test]
    fn zero_valued_tail_is_dropped_entirely() {
        let labels = counts(&[
            ("l01", 100),
            ("l02", 90),
            ("l03", 80),
            ("l04", 70),
            ("l05", 60),
            ("l06", 50),
            ("l07", 40),
            ("l08", 30),
            ("l09", 20),
            ("l10", 10),
            ("l11", 0),
            ("l12", 0),
        ]);
        let dataset = build_chart_dataset(&labels, DEFAULT_TOP);

        assert_eq!(dataset.len(), 10);
        assert!(dataset.iter().all(|entry| entry.name != OTHER_LABEL));
    }

    #[test]
    fn equal_counts_keep_input_order() {
        let labels = counts(&[("first", 7), ("second", 7), ("third", 9), ("fourth", 7)]);
        let dataset = build_chart_dataset(&labels, DEFAULT_TOP);

        let names: Vec<&str> = dataset.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn custom_top_cut_is_respected() {
        let labels = counts(&[("a", 4), ("b", 3), ("c", 2), ("d", 1)]);
        let dataset = build_chart_dataset(&labels, 2);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset[0].name, "a");
        assert_eq!(dataset[1].name, "b");
        assert_eq!(
            dataset[2],
            Entry {
                name: OTHER_LABEL.to_string(),
                value: 3,
            }
        );
    }
}
