use anyhow::{Context, Result};
use regex::Regex;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Label-to-count mapping that remembers document order; the stable sort over
/// equal counts depends on it, so this cannot live in a `HashMap`. Inserting a
/// name a second time updates the existing entry in place.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelCounts(Vec<(String, u64)>);

impl LabelCounts {
    pub fn insert(&mut self, name: String, value: u64) {
        if let Some(slot) = self.0.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, u64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn retain_matching(&mut self, pattern: &Regex) {
        self.0.retain(|(name, _)| pattern.is_match(name));
    }
}

impl FromIterator<(String, u64)> for LabelCounts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = LabelCounts::default();
        for (name, value) in iter {
            counts.insert(name, value);
        }
        counts
    }
}

impl<'de> Deserialize<'de> for LabelCounts {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = LabelCounts;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of label names to non-negative counts")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut counts = LabelCounts::default();
                while let Some((name, value)) = map.next_entry::<String, u64>()? {
                    counts.insert(name, value);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

/// Parse the `dlcounts` line format: count first, label second, anything
/// after the label ignored. Blank lines are skipped.
pub fn parse_count_lines(content: &str) -> Result<LabelCounts> {
    let mut counts = LabelCounts::default();

    for (line_num, line) in content.lines().enumerate() {
        let mut fields = line.split_whitespace();
        let Some(count_field) = fields.next() else {
            continue;
        };
        let Some(label) = fields.next() else {
            anyhow::bail!("Missing label at line {}", line_num + 1);
        };
        let count: u64 = count_field
            .parse()
            .with_context(|| format!("Invalid count '{}' at line {}", count_field, line_num + 1))?;
        counts.insert(label.to_string(), count);
    }

    Ok(counts)
}

/// First non-whitespace character `{` means a JSON object, anything else the
/// count-line format.
pub fn parse_labels(content: &str) -> Result<LabelCounts> {
    if content.trim_start().starts_with('{') {
        serde_json::from_str(content).context("Failed to parse JSON label counts")
    } else {
        parse_count_lines(content)
    }
}

pub fn load_labels(path: Option<&Path>) -> Result<LabelCounts> {
    let content = match path {
        Some(path) => {
            info!(action = "load", component = "label_input", file_path = ?path, "Reading label counts from file");
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read label counts from {:?}", path))?
        }
        None => {
            info!(
                action = "load",
                component = "label_input",
                "Reading label counts from stdin"
            );
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read label counts from stdin")?;
            buffer
        }
    };

    let counts = parse_labels(&content)?;
    info!(
        action = "loaded",
        component = "label_input",
        label_count = counts.len(),
        "Parsed label counts"
    );
    Ok(counts)
}
