// PadaHandle: top-level integration point for Kannada word processing.
//
// Owns the rule repository and the strategy chains and provides a unified
// API for sandhi joining, reverse-sandhi splitting, vibhakti analysis,
// compound resolution, suggestions and hints.
//
// Design notes:
// - The repository is injected at construction and read-only afterwards,
//   so separate handles can run side by side with different table
//   fixtures and `&PadaHandle` is safely shareable across threads.
// - The tier/generator chains are created once at construction time.
// - Rule resolution performs no I/O; only `from_dir` touches the disk,
//   and only at construction.

use std::path::Path;

use crate::compound::{self, CompoundResolver};
use crate::rules::{CompoundEntry, RuleSet};
use crate::sandhi::split::{SandhiSplitter, SplitPair};
use crate::sandhi::{JoinOutcome, SandhiJoiner};
use crate::vibhakti::{self, Vibhakti};

/// Top-level handle that owns the rule tables and engine components.
pub struct PadaHandle {
    rules: RuleSet,
    joiner: SandhiJoiner,
    splitter: SandhiSplitter,
    compounds: CompoundResolver,
}

impl PadaHandle {
    /// A handle over the built-in tables only.
    pub fn new() -> Self {
        Self::with_rules(RuleSet::builtin())
    }

    /// A handle over an explicitly assembled repository.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            joiner: SandhiJoiner::new(),
            splitter: SandhiSplitter::new(),
            compounds: CompoundResolver::new(),
        }
    }

    /// A handle over the conventional CSV files in a dictionary
    /// directory. Missing or malformed files degrade to the built-in
    /// tables; this never fails.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_rules(RuleSet::from_dir(dir))
    }

    /// Join two words, reporting which tier and rule produced the result.
    pub fn join(&self, word1: &str, word2: &str) -> JoinOutcome {
        self.joiner.join(&self.rules, word1, word2)
    }

    /// Join two words into their combined surface form.
    pub fn apply_sandhi(&self, word1: &str, word2: &str) -> String {
        self.join(word1, word2).word
    }

    /// Ordered, deduplicated candidate splits of a combined word.
    pub fn reverse_sandhi(&self, combined: &str) -> Vec<SplitPair> {
        self.splitter.split(&self.rules, combined)
    }

    /// Inflect a base word with a case ending.
    pub fn apply_vibhakti(&self, base: &str, ending: &str) -> (String, Option<Vibhakti>) {
        vibhakti::apply_vibhakti(&self.rules, base, ending)
    }

    /// Inflect a single word, resolving the stem by exact, fuzzy or
    /// transliterated lookup. `default_ending` is used when the stem has
    /// no better row; [`crate::vibhakti::DEFAULT_ENDING`] is the
    /// conventional choice.
    pub fn apply_vibhakti_single(
        &self,
        word: &str,
        default_ending: &str,
    ) -> (String, Option<Vibhakti>) {
        vibhakti::apply_vibhakti_single(&self.rules, word, default_ending)
    }

    /// Detect the case marker and suffix of an inflected word.
    pub fn detect_vibhakti(&self, word: &str) -> (Option<Vibhakti>, Option<String>) {
        vibhakti::detect_vibhakti(&self.rules, word)
    }

    /// Resolve a compound word to its two constituents.
    pub fn validate_compound(&self, word: &str) -> Option<(String, String)> {
        self.compounds.resolve(&self.rules, word)
    }

    /// Fuzzy suggestions from the pooled compound keys and root words.
    pub fn suggestions(&self, word: &str, n: usize) -> Vec<String> {
        compound::suggestions(&self.rules, word, n)
    }

    /// Compound entries whose first constituent matches `word1`.
    pub fn hints_for(&self, word1: &str, limit: usize) -> Vec<&CompoundEntry> {
        compound::hints_for(&self.rules, word1, limit)
    }

    /// The underlying repository.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

impl Default for PadaHandle {
    fn default() -> Self {
        Self::new()
    }
}
