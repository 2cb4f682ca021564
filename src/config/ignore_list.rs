//! Lenient parsing of `ignore` lists.
//!
//! A single string becomes a one-entry list, a list keeps its string entries,
//! and every other shape (numbers, tables, booleans) yields an empty list
//! instead of a parse error. Empty strings are dropped since they would
//! exempt every line.

use serde::{Deserialize, Deserializer, de::IgnoredAny};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawIgnore {
    One(String),
    Many(Vec<RawEntry>),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Text(String),
    Other(IgnoredAny),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match RawIgnore::deserialize(deserializer)? {
        RawIgnore::One(entry) => vec![entry],
        RawIgnore::Many(entries) => entries
            .into_iter()
            .filter_map(|e| match e {
                RawEntry::Text(s) => Some(s),
                RawEntry::Other(_) => None,
            })
            .collect(),
        RawIgnore::Other(_) => Vec::new(),
    };

    Ok(entries.into_iter().filter(|e| !e.is_empty()).collect())
}
