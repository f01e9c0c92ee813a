// Rule repository: typed sandhi/vibhakti/compound/root tables.
//
// Tables are assembled once from the compiled defaults plus optional
// external tabular overlays, then shared read-only by every engine
// component. Nothing here mutates after construction.

mod defaults;
mod loader;

pub use defaults::CASE_SUFFIXES;
pub use loader::RuleLoadError;

use std::path::Path;

use hashbrown::{HashMap, HashSet};

use crate::vibhakti::Vibhakti;

/// A sandhi (phonological joining) rule.
///
/// At most one of `result`/`combined_result` drives the output of a join:
/// a non-empty `combined_result` is a literal whole-join override, and
/// otherwise `result` is spliced in as the junction string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandhiRule {
    /// Stable rule id used as the merge key; may be absent.
    pub rule_number: Option<String>,
    /// Boundary sound at the end of word1.
    pub sound1: String,
    /// Boundary sound at the start of word2.
    pub sound2: String,
    /// Junction string inserted between the words.
    pub result: String,
    /// Literal whole-join override.
    pub combined_result: String,
    /// Illustrative pair, also used as a reverse-split template.
    pub example_word1: String,
    pub example_word2: String,
    pub notes: String,
    /// Whether word2's first character is dropped when splicing `result`.
    pub delete_first_of_w2: bool,
}

impl SandhiRule {
    /// Overlay the non-default fields of `other` onto this rule. A partial
    /// override row patches only the columns it fills in; empty strings
    /// and an unset delete flag leave the existing values alone.
    pub fn merge_from(&mut self, other: &SandhiRule) {
        if other.rule_number.is_some() {
            self.rule_number = other.rule_number.clone();
        }
        overlay(&mut self.sound1, &other.sound1);
        overlay(&mut self.sound2, &other.sound2);
        overlay(&mut self.result, &other.result);
        overlay(&mut self.combined_result, &other.combined_result);
        overlay(&mut self.example_word1, &other.example_word1);
        overlay(&mut self.example_word2, &other.example_word2);
        overlay(&mut self.notes, &other.notes);
        if other.delete_first_of_w2 {
            self.delete_first_of_w2 = true;
        }
    }

    /// Whether this rule matches both boundary sounds exactly.
    pub fn matches(&self, last: char, first: char) -> bool {
        sound_is(&self.sound1, last) && sound_is(&self.sound2, first)
    }

    /// Whether this rule matches the second boundary sound alone.
    pub fn matches_second(&self, first: char) -> bool {
        sound_is(&self.sound2, first)
    }
}

fn overlay(target: &mut String, value: &str) {
    if !value.is_empty() {
        *target = value.to_string();
    }
}

fn sound_is(sound: &str, c: char) -> bool {
    let mut chars = sound.chars();
    chars.next() == Some(c) && chars.next().is_none()
}

/// A vibhakti (case-suffix) rule. The case marker is the identity key for
/// merging, so the table holds one exemplar row per case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VibhaktiRule {
    pub vibhakti: Vibhakti,
    /// Stem the exemplar inflects.
    pub base: String,
    /// Case suffix as canonically written.
    pub ending: String,
    /// Fully inflected surface form.
    pub output: String,
}

impl VibhaktiRule {
    /// Overlay the non-empty fields of `other` onto this rule.
    pub fn merge_from(&mut self, other: &VibhaktiRule) {
        overlay(&mut self.base, &other.base);
        overlay(&mut self.ending, &other.ending);
        overlay(&mut self.output, &other.output);
    }
}

/// A compound-dictionary entry keyed by its surface form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundEntry {
    /// Surface compound; unique key in the compound map.
    pub combined: String,
    /// First constituent.
    pub base1: String,
    /// Second constituent.
    pub base2: String,
    /// Producer-side corpus frequency; parsed leniently.
    pub frequency: Option<u32>,
}

/// The immutable rule repository shared by all engine components.
///
/// Holds both the raw override rows (consulted by the override join tier)
/// and the merged default tables, plus the compound map and root set.
pub struct RuleSet {
    sandhi: Vec<SandhiRule>,
    sandhi_overrides: Vec<SandhiRule>,
    vibhakti: Vec<VibhaktiRule>,
    vibhakti_overrides: Vec<VibhaktiRule>,
    compounds: HashMap<String, CompoundEntry>,
    compound_keys: Vec<String>,
    roots: HashSet<String>,
    root_list: Vec<String>,
}

/// How a sandhi rule was found in the merged table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrength {
    /// Both boundary sounds matched.
    Exact,
    /// Only `sound2` matched (weak partial match).
    Partial,
}

/// A rule found by [`RuleSet::find_sandhi_rule`].
#[derive(Debug, Clone, Copy)]
pub struct SandhiMatch<'a> {
    pub rule: &'a SandhiRule,
    pub strength: MatchStrength,
}

impl RuleSet {
    /// The compiled built-in tables with no external overlays.
    pub fn builtin() -> Self {
        Self::from_csv_sources(None, None, None, None)
    }

    /// Assemble the repository from the built-in defaults plus optional
    /// CSV sources. A malformed source is logged and treated as absent;
    /// this constructor never fails.
    pub fn from_csv_sources(
        sandhi: Option<&[u8]>,
        vibhakti: Option<&[u8]>,
        compounds: Option<&[u8]>,
        roots: Option<&[u8]>,
    ) -> Self {
        let sandhi_overrides = load_or_empty("sandhi", sandhi, loader::sandhi_rows);
        let vibhakti_overrides = load_or_empty("vibhakti", vibhakti, loader::vibhakti_rows);
        let compound_rows = load_or_empty("compound", compounds, loader::compound_rows);
        let root_rows = load_or_empty("root", roots, loader::root_rows);

        let mut sandhi = defaults::sandhi_rules();
        for row in &sandhi_overrides {
            match row.rule_number.as_deref() {
                Some(id) => {
                    match sandhi
                        .iter_mut()
                        .find(|r| r.rule_number.as_deref() == Some(id))
                    {
                        Some(existing) => existing.merge_from(row),
                        None => sandhi.push(row.clone()),
                    }
                }
                None => sandhi.push(row.clone()),
            }
        }

        let mut vibhakti = defaults::vibhakti_rules();
        for row in &vibhakti_overrides {
            match vibhakti.iter_mut().find(|r| r.vibhakti == row.vibhakti) {
                Some(existing) => existing.merge_from(row),
                None => vibhakti.push(row.clone()),
            }
        }

        let mut compounds = HashMap::new();
        let mut compound_keys = Vec::new();
        for entry in compound_rows {
            if entry.combined.is_empty() {
                continue;
            }
            if !compounds.contains_key(&entry.combined) {
                compound_keys.push(entry.combined.clone());
            }
            compounds.insert(entry.combined.clone(), entry);
        }

        let mut roots = HashSet::new();
        for root in root_rows {
            if !root.is_empty() {
                roots.insert(root);
            }
        }
        let mut root_list: Vec<String> = roots.iter().cloned().collect();
        root_list.sort();

        Self {
            sandhi,
            sandhi_overrides,
            vibhakti,
            vibhakti_overrides,
            compounds,
            compound_keys,
            roots,
            root_list,
        }
    }

    /// Assemble the repository from the conventional file names under a
    /// dictionary directory (`sandhi_rules.csv`, `vibhakti_rules.csv`,
    /// `compound_words.csv`, `root_words.csv`). Missing files are simply
    /// absent tables; this never fails.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let read = |name: &str| std::fs::read(dir.join(name)).ok();
        let sandhi = read("sandhi_rules.csv");
        let vibhakti = read("vibhakti_rules.csv");
        let compounds = read("compound_words.csv");
        let roots = read("root_words.csv");
        Self::from_csv_sources(
            sandhi.as_deref(),
            vibhakti.as_deref(),
            compounds.as_deref(),
            roots.as_deref(),
        )
    }

    /// The merged sandhi table (defaults overlaid with overrides).
    pub fn sandhi_rules(&self) -> &[SandhiRule] {
        &self.sandhi
    }

    /// The raw sandhi override rows, as loaded.
    pub fn sandhi_overrides(&self) -> &[SandhiRule] {
        &self.sandhi_overrides
    }

    /// The merged vibhakti table.
    pub fn vibhakti_rules(&self) -> &[VibhaktiRule] {
        &self.vibhakti
    }

    /// The raw vibhakti override rows, as loaded.
    pub fn vibhakti_overrides(&self) -> &[VibhaktiRule] {
        &self.vibhakti_overrides
    }

    /// Look up a compound entry by its surface form.
    pub fn compound(&self, combined: &str) -> Option<&CompoundEntry> {
        self.compounds.get(combined)
    }

    /// Compound surface forms in load order (the fuzzy pool).
    pub fn compound_keys(&self) -> &[String] {
        &self.compound_keys
    }

    /// The root-word set.
    pub fn roots(&self) -> &HashSet<String> {
        &self.roots
    }

    /// Sorted root words (the fuzzy pool).
    pub fn root_list(&self) -> &[String] {
        &self.root_list
    }

    pub fn has_roots(&self) -> bool {
        !self.roots.is_empty()
    }

    /// Find a rule in the merged table for a boundary: an exact
    /// `(sound1, sound2)` match wins, otherwise the first rule whose
    /// `sound2` alone matches (weak partial match).
    pub fn find_sandhi_rule(&self, last: char, first: char) -> Option<SandhiMatch<'_>> {
        if let Some(rule) = self.sandhi.iter().find(|r| r.matches(last, first)) {
            return Some(SandhiMatch {
                rule,
                strength: MatchStrength::Exact,
            });
        }
        self.sandhi
            .iter()
            .find(|r| r.matches_second(first))
            .map(|rule| SandhiMatch {
                rule,
                strength: MatchStrength::Partial,
            })
    }
}

fn load_or_empty<T>(
    table: &str,
    source: Option<&[u8]>,
    parse: fn(&[u8]) -> Result<Vec<T>, RuleLoadError>,
) -> Vec<T> {
    let Some(bytes) = source else {
        return Vec::new();
    };
    match parse(bytes) {
        Ok(rows) => {
            log::debug!("loaded {} {table} override rows", rows.len());
            rows
        }
        Err(err) => {
            log::warn!("{table} overrides unusable, continuing without them: {err}");
            Vec::new()
        }
    }
}
