// Compound (samāsa) resolution: recover the two constituents of a fused
// word through a cascade of validation tiers, plus the fuzzy suggestion
// and hint helpers built on the same tables.

use hashbrown::HashSet;
use pada_core::{fuzzy, script};

use crate::rules::{CompoundEntry, RuleSet};
use crate::sandhi::split::SandhiSplitter;

/// One tier of the resolution cascade. Returns `None` to pass.
pub trait CompoundTier: Send + Sync {
    fn resolve(&self, rules: &RuleSet, word: &str) -> Option<(String, String)>;
}

/// The compound resolver: dictionary, reverse-sandhi, fuzzy dictionary,
/// vowel-split heuristic, in that priority order.
pub struct CompoundResolver {
    tiers: Vec<Box<dyn CompoundTier>>,
}

impl CompoundResolver {
    pub fn new() -> Self {
        Self {
            tiers: vec![
                Box::new(DictionaryTier),
                Box::new(ReverseSandhiTier {
                    splitter: SandhiSplitter::new(),
                }),
                Box::new(FuzzyDictionaryTier),
                Box::new(VowelSplitTier),
            ],
        }
    }

    /// Resolve a compound to its constituent pair, or `None` when every
    /// tier fails. A `None` is a normal outcome, not an error.
    pub fn resolve(&self, rules: &RuleSet, word: &str) -> Option<(String, String)> {
        let w = fuzzy::normalize(word);
        if w.is_empty() {
            return None;
        }
        self.tiers.iter().find_map(|tier| tier.resolve(rules, &w))
    }
}

impl Default for CompoundResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact hit in the compound dictionary.
struct DictionaryTier;

impl CompoundTier for DictionaryTier {
    fn resolve(&self, rules: &RuleSet, word: &str) -> Option<(String, String)> {
        rules.compound(word).and_then(entry_parts)
    }
}

/// Reverse-sandhi candidates: first the strict plausibility check over all
/// candidates, then (when roots exist) a fuzzy root check over all
/// candidates.
struct ReverseSandhiTier {
    splitter: SandhiSplitter,
}

impl CompoundTier for ReverseSandhiTier {
    fn resolve(&self, rules: &RuleSet, word: &str) -> Option<(String, String)> {
        let candidates = self.splitter.split(rules, word);
        for pair in &candidates {
            if is_plausible_word(rules, &pair.word1) && is_plausible_word(rules, &pair.word2) {
                return Some((pair.word1.clone(), pair.word2.clone()));
            }
        }
        if rules.has_roots() {
            let pool: Vec<&str> = rules.root_list().iter().map(String::as_str).collect();
            for pair in &candidates {
                let hit1 = !fuzzy::fuzzy_matches(&pair.word1, pool.iter().copied(), 1, 0.6)
                    .is_empty();
                let hit2 = !fuzzy::fuzzy_matches(&pair.word2, pool.iter().copied(), 1, 0.6)
                    .is_empty();
                if hit1 || hit2 {
                    return Some((pair.word1.clone(), pair.word2.clone()));
                }
            }
        }
        None
    }
}

/// Whole-word fuzzy match against the compound dictionary keys.
struct FuzzyDictionaryTier;

impl CompoundTier for FuzzyDictionaryTier {
    fn resolve(&self, rules: &RuleSet, word: &str) -> Option<(String, String)> {
        let keys = rules.compound_keys();
        let hits = fuzzy::fuzzy_matches(word, keys.iter().map(String::as_str), 1, 0.5);
        let hit = hits.first()?;
        rules.compound(&hit.candidate).and_then(entry_parts)
    }
}

/// Last resort: split at the first independent-vowel position that leaves
/// at least two characters on each side.
struct VowelSplitTier;

impl CompoundTier for VowelSplitTier {
    fn resolve(&self, _rules: &RuleSet, word: &str) -> Option<(String, String)> {
        let chars: Vec<char> = word.chars().collect();
        for i in 1..chars.len() {
            if script::is_independent_vowel(chars[i]) && i >= 2 && chars.len() - i >= 2 {
                let left: String = chars[..i].iter().collect();
                let right: String = chars[i..].iter().collect();
                return Some((left, right));
            }
        }
        None
    }
}

fn entry_parts(entry: &CompoundEntry) -> Option<(String, String)> {
    if entry.base1.is_empty() || entry.base2.is_empty() {
        return None;
    }
    Some((entry.base1.clone(), entry.base2.clone()))
}

/// A part is plausible when it is Kannada script of at least two
/// characters and, if a root set exists, is a root or stands in a
/// prefix/superstring relation with one.
fn is_plausible_word(rules: &RuleSet, word: &str) -> bool {
    let w = fuzzy::normalize(word);
    if w.chars().count() < 2 || !script::is_kannada(&w) {
        return false;
    }
    if !rules.has_roots() {
        return true;
    }
    rules.roots().contains(&w)
        || rules
            .root_list()
            .iter()
            .any(|r| r.starts_with(&w) || w.starts_with(r.as_str()))
}

/// Fuzzy suggestions (cutoff 0.5) over the pooled compound keys and root
/// words, first-seen deduplicated, capped at `n`.
pub fn suggestions(rules: &RuleSet, word: &str, n: usize) -> Vec<String> {
    let w = fuzzy::normalize(word);
    if w.is_empty() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    let mut pool = Vec::new();
    for cand in rules.compound_keys().iter().chain(rules.root_list()) {
        if seen.insert(cand.as_str()) {
            pool.push(cand.as_str());
        }
    }
    if pool.is_empty() {
        return Vec::new();
    }
    fuzzy::fuzzy_matches(&w, pool, n, 0.5)
        .into_iter()
        .map(|m| m.candidate)
        .collect()
}

/// Compound entries whose first constituent equals `word1`, falling back
/// to entries whose first constituent contains it, capped at `limit`.
pub fn hints_for<'a>(rules: &'a RuleSet, word1: &str, limit: usize) -> Vec<&'a CompoundEntry> {
    let w = fuzzy::normalize(word1);
    if w.is_empty() {
        return Vec::new();
    }
    let entries = || {
        rules
            .compound_keys()
            .iter()
            .filter_map(|key| rules.compound(key))
    };
    let exact: Vec<&CompoundEntry> = entries().filter(|e| e.base1 == w).take(limit).collect();
    if !exact.is_empty() {
        return exact;
    }
    entries().filter(|e| e.base1.contains(&w)).take(limit).collect()
}
