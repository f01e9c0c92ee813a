// Reverse sandhi: generate plausible (word1, word2) splits of a combined
// word.
//
// Four generator passes run in a fixed order into a shared collector that
// deduplicates by exact pair equality while preserving first-seen order.
// The order itself conveys priority: downstream consumers rely on
// template-pass results appearing before the heuristic ones, so no
// confidence re-sorting happens here.

use hashbrown::HashSet;
use pada_core::{fuzzy, script};

use crate::rules::RuleSet;

/// A candidate decomposition of a combined word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SplitPair {
    pub word1: String,
    pub word2: String,
}

impl SplitPair {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
        }
    }
}

/// Accumulates split candidates across passes with first-seen dedup.
pub struct SplitCollector {
    seen: HashSet<(String, String)>,
    pairs: Vec<SplitPair>,
}

impl SplitCollector {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
            pairs: Vec::new(),
        }
    }

    /// Record a candidate pair. Empty parts and already-seen pairs are
    /// silently ignored.
    pub fn push(&mut self, word1: &str, word2: &str) {
        if word1.is_empty() || word2.is_empty() {
            return;
        }
        if self.seen.insert((word1.to_string(), word2.to_string())) {
            self.pairs.push(SplitPair::new(word1, word2));
        }
    }

    fn into_pairs(self) -> Vec<SplitPair> {
        self.pairs
    }
}

/// One generation pass of the reverse engine.
pub trait SplitGenerator: Send + Sync {
    fn generate(&self, rules: &RuleSet, word: &str, out: &mut SplitCollector);
}

/// The reverse sandhi engine: ordered passes over the normalized input.
pub struct SandhiSplitter {
    generators: Vec<Box<dyn SplitGenerator>>,
}

impl SandhiSplitter {
    pub fn new() -> Self {
        Self {
            generators: vec![
                Box::new(TemplatePass),
                Box::new(GlidePass),
                Box::new(RuleBoundaryPass),
                Box::new(VowelBoundaryPass),
            ],
        }
    }

    /// Produce the ordered, deduplicated candidate list. Empty input gives
    /// an empty list; this never fails.
    pub fn split(&self, rules: &RuleSet, combined: &str) -> Vec<SplitPair> {
        let w = fuzzy::normalize(combined);
        if w.is_empty() {
            return Vec::new();
        }
        let mut out = SplitCollector::new();
        for generator in &self.generators {
            generator.generate(rules, &w, &mut out);
        }
        out.into_pairs()
    }
}

impl Default for SandhiSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules whose whole-join override prefixes the input donate their curated
/// example pair as a candidate.
struct TemplatePass;

impl SplitGenerator for TemplatePass {
    fn generate(&self, rules: &RuleSet, word: &str, out: &mut SplitCollector) {
        for rule in rules.sandhi_rules() {
            if !rule.combined_result.is_empty() && word.starts_with(&rule.combined_result) {
                out.push(&rule.example_word1, &rule.example_word2);
            }
        }
    }
}

/// Split around the first occurrence of each glide the forward engine
/// inserts (ಯ, then ವ), when it is not the leading character.
struct GlidePass;

impl SplitGenerator for GlidePass {
    fn generate(&self, _rules: &RuleSet, word: &str, out: &mut SplitCollector) {
        let chars: Vec<char> = word.chars().collect();
        for glide in ['ಯ', 'ವ'] {
            if let Some(pos) = chars.iter().position(|&c| c == glide) {
                if pos > 0 {
                    let left: String = chars[..pos].iter().collect();
                    let right: String = chars[pos + 1..].iter().collect();
                    out.push(&left, &right);
                }
            }
        }
    }
}

/// Every split position whose boundary sounds match a rule. When the rule
/// deletes word2's first character in the forward direction, the dropped
/// sound (the rule's sound2) is re-prepended to the right side.
struct RuleBoundaryPass;

impl SplitGenerator for RuleBoundaryPass {
    fn generate(&self, rules: &RuleSet, word: &str, out: &mut SplitCollector) {
        let chars: Vec<char> = word.chars().collect();
        for i in 1..chars.len() {
            let left: String = chars[..i].iter().collect();
            let right: String = chars[i..].iter().collect();
            let Some(last) = script::last_sound(&left) else {
                continue;
            };
            let Some(first) = script::first_sound(&right) else {
                continue;
            };
            let Some(found) = rules.find_sandhi_rule(last, first) else {
                continue;
            };
            if found.rule.delete_first_of_w2 {
                let restored = format!("{}{right}", found.rule.sound2);
                out.push(&left, &restored);
            } else {
                out.push(&left, &right);
            }
        }
    }
}

/// Fallback: split at every independent-vowel position that leaves at
/// least two characters on each side.
struct VowelBoundaryPass;

impl SplitGenerator for VowelBoundaryPass {
    fn generate(&self, _rules: &RuleSet, word: &str, out: &mut SplitCollector) {
        let chars: Vec<char> = word.chars().collect();
        for i in 1..chars.len() {
            if script::is_independent_vowel(chars[i]) && i >= 2 && chars.len() - i >= 2 {
                let left: String = chars[..i].iter().collect();
                let right: String = chars[i..].iter().collect();
                out.push(&left, &right);
            }
        }
    }
}
