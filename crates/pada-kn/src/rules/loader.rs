// CSV parsing for the external rule tables.
//
// Columns are named header fields, order-independent. The repository
// treats any parse failure as "table not present", so the fallible surface
// stays inside this module.

use serde::{Deserialize, Deserializer};

use crate::rules::{CompoundEntry, SandhiRule, VibhaktiRule};
use crate::vibhakti::Vibhakti;

/// Error raised while parsing a tabular rule source.
#[derive(Debug, thiserror::Error)]
pub enum RuleLoadError {
    /// A record could not be read or deserialized.
    #[error("malformed tabular source: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct SandhiRow {
    #[serde(default)]
    rule_number: String,
    #[serde(default)]
    sound1: String,
    #[serde(default)]
    sound2: String,
    #[serde(default)]
    result: String,
    #[serde(default)]
    combined_result: String,
    #[serde(default)]
    example_word1: String,
    #[serde(default)]
    example_word2: String,
    #[serde(default)]
    notes: String,
    #[serde(default, deserialize_with = "de_yes_no")]
    delete_first_of_w2: bool,
}

pub(crate) fn sandhi_rows(bytes: &[u8]) -> Result<Vec<SandhiRule>, RuleLoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize::<SandhiRow>() {
        let row = record?;
        let number = clean(&row.rule_number);
        rows.push(SandhiRule {
            rule_number: (!number.is_empty()).then_some(number),
            sound1: clean(&row.sound1),
            sound2: clean(&row.sound2),
            result: clean(&row.result),
            combined_result: clean(&row.combined_result),
            example_word1: clean(&row.example_word1),
            example_word2: clean(&row.example_word2),
            notes: clean(&row.notes),
            delete_first_of_w2: row.delete_first_of_w2,
        });
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct VibhaktiRow {
    #[serde(default)]
    vibhakti_id: String,
    #[serde(default)]
    base: String,
    #[serde(default)]
    ending: String,
    #[serde(default)]
    output: String,
}

pub(crate) fn vibhakti_rows(bytes: &[u8]) -> Result<Vec<VibhaktiRule>, RuleLoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize::<VibhaktiRow>() {
        let row = record?;
        let id = clean(&row.vibhakti_id);
        let Some(vibhakti) = id.parse::<u8>().ok().and_then(Vibhakti::from_id) else {
            log::warn!("skipping vibhakti row with unsupported id {id:?}");
            continue;
        };
        rows.push(VibhaktiRule {
            vibhakti,
            base: clean(&row.base),
            ending: clean(&row.ending),
            output: clean(&row.output),
        });
    }
    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CompoundRow {
    #[serde(default)]
    combined: String,
    #[serde(default, alias = "base1", alias = "part1", alias = "example_word1")]
    word1: String,
    #[serde(default, alias = "base2", alias = "part2", alias = "example_word2")]
    word2: String,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    frequency: Option<u32>,
}

pub(crate) fn compound_rows(bytes: &[u8]) -> Result<Vec<CompoundEntry>, RuleLoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.deserialize::<CompoundRow>() {
        let row = record?;
        rows.push(CompoundEntry {
            combined: clean(&row.combined),
            base1: clean(&row.word1),
            base2: clean(&row.word2),
            frequency: row.frequency,
        });
    }
    Ok(rows)
}

/// Root words: the first column is the word; producer-side metadata in the
/// remaining columns is ignored.
pub(crate) fn root_rows(bytes: &[u8]) -> Result<Vec<String>, RuleLoadError> {
    let mut reader = csv::Reader::from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(word) = record.get(0) {
            let word = word.trim();
            if !word.is_empty() {
                rows.push(word.to_string());
            }
        }
    }
    Ok(rows)
}

fn clean(s: &str) -> String {
    s.trim().to_string()
}

fn de_yes_no<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(matches!(
        s.trim().to_ascii_lowercase().as_str(),
        "yes" | "true" | "1"
    ))
}

fn de_lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().parse().ok())
}
