// Vibhakti (case-suffix) analysis: forward inflection and reverse detection

use pada_core::{fuzzy, script};

use crate::rules::{CASE_SUFFIXES, RuleSet, VibhaktiRule};
use crate::translit;

/// The conventional default ending used by single-argument application.
pub const DEFAULT_ENDING: &str = "ಗೆ";

/// The seven Kannada case markers. `Option<Vibhakti>` models the unmarked
/// (direct) form, which the tabular sources write as id 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vibhakti {
    /// Nominative (unmarked subject form).
    Prathama,
    /// Accusative: ಅನ್ನು and its variants.
    Dvitiya,
    /// Instrumental/ablative: ಇಂದ and its variants.
    Tritiya,
    /// Dative: ಗೆ / ಕ್ಕೆ.
    Chaturthi,
    /// Ablative proper (rare as a distinct surface form).
    Panchami,
    /// Genitive: ನ / ಅದ.
    Shashthi,
    /// Locative: ಅಲ್ಲಿ and its variants.
    Saptami,
}

impl Vibhakti {
    /// Map a tabular case id (1-7) to the marker. Id 0 (direct case) and
    /// anything out of range map to `None`.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Prathama),
            2 => Some(Self::Dvitiya),
            3 => Some(Self::Tritiya),
            4 => Some(Self::Chaturthi),
            5 => Some(Self::Panchami),
            6 => Some(Self::Shashthi),
            7 => Some(Self::Saptami),
            _ => None,
        }
    }

    /// The tabular case id.
    pub fn id(self) -> u8 {
        match self {
            Self::Prathama => 1,
            Self::Dvitiya => 2,
            Self::Tritiya => 3,
            Self::Chaturthi => 4,
            Self::Panchami => 5,
            Self::Shashthi => 6,
            Self::Saptami => 7,
        }
    }
}

/// Inflect `base` with `ending`.
///
/// Resolution order: override rows, merged table, phonetic suffix rules,
/// plain concatenation (with no case id).
pub fn apply_vibhakti(rules: &RuleSet, base: &str, ending: &str) -> (String, Option<Vibhakti>) {
    let w = fuzzy::normalize(base);
    let e = fuzzy::normalize(ending);
    if w.is_empty() || e.is_empty() {
        return (format!("{w}{e}"), None);
    }

    for r in rules.vibhakti_overrides() {
        if r.base == w && r.ending == e {
            return inflected(r, &w, &e);
        }
    }
    for r in rules.vibhakti_rules() {
        if r.base == w && r.ending == e {
            return inflected(r, &w, &e);
        }
    }

    let last = script::last_sound(&w);
    let kannada_final = last.is_some_and(script::is_kannada_char);
    match e.as_str() {
        "ಅನ್ನು" => {
            if kannada_final {
                (format!("{w}ರನ್ನು"), Some(Vibhakti::Dvitiya))
            } else {
                (format!("{w}ನ್ನು"), Some(Vibhakti::Dvitiya))
            }
        }
        "ಇಂದ" => {
            if kannada_final {
                (format!("{w}ಯಿಂದ"), Some(Vibhakti::Tritiya))
            } else {
                (format!("{w}ಇಂದ"), Some(Vibhakti::Tritiya))
            }
        }
        "ಗೆ" | "ಕ್ಕೆ" => (format!("{w}{e}"), Some(Vibhakti::Chaturthi)),
        "ಅಲ್ಲಿ" => {
            // Stem-final e rewrites to ೆಯಲ್ಲಿ; both the letter and the
            // sign form count as a final e-sound.
            if last == Some('ಎ') || last == Some('ೆ') {
                let stem: String = {
                    let mut chars = w.chars();
                    chars.next_back();
                    chars.collect()
                };
                (format!("{stem}ೆಯಲ್ಲಿ"), Some(Vibhakti::Saptami))
            } else {
                (format!("{w}ಲ್ಲಿ"), Some(Vibhakti::Saptami))
            }
        }
        _ => (format!("{w}{e}"), None),
    }
}

fn inflected(r: &VibhaktiRule, w: &str, e: &str) -> (String, Option<Vibhakti>) {
    let out = if r.output.is_empty() {
        format!("{w}{e}")
    } else {
        r.output.clone()
    };
    (out, Some(r.vibhakti))
}

/// Inflect a single word with a default ending, resolving the stem first.
///
/// The word is normalized and transliterated when it is Latin input. An
/// exact stem hit prefers the row for the requested ending; otherwise the
/// stem is fuzzy-matched (cutoff 0.55) against the pooled known stems and
/// root words. The final fallback applies the ending to the literal word.
pub fn apply_vibhakti_single(
    rules: &RuleSet,
    word: &str,
    default_ending: &str,
) -> (String, Option<Vibhakti>) {
    let mut w = fuzzy::normalize(word);
    if w.is_empty() {
        return (String::new(), None);
    }

    if script::has_latin(&w) && !script::is_kannada(&w) {
        let t = translit::transliterate(&w);
        if script::is_kannada(&t) {
            w = t;
        }
    }

    // Exact stem: prefer the default-ending row, else any row for the stem.
    if let Some(any) = rules.vibhakti_rules().iter().find(|r| r.base == w) {
        if let Some(pref) = rules
            .vibhakti_rules()
            .iter()
            .find(|r| r.base == w && r.ending == default_ending)
        {
            return inflected(pref, &w, default_ending);
        }
        return inflected(any, &w, default_ending);
    }

    // Fuzzy pool: known stems plus root words.
    let pool: Vec<&str> = rules
        .vibhakti_rules()
        .iter()
        .map(|r| r.base.as_str())
        .chain(rules.root_list().iter().map(String::as_str))
        .filter(|s| !s.is_empty())
        .collect();
    if !pool.is_empty() {
        let stem = fuzzy::best_match(&w, pool, 0.55);
        if let Some(pref) = rules
            .vibhakti_rules()
            .iter()
            .find(|r| r.base == stem && r.ending == default_ending)
        {
            return inflected(pref, &stem, default_ending);
        }
        return apply_vibhakti(rules, &stem, default_ending);
    }

    // Transliteration retry on the original input, then the literal word.
    if script::has_latin(word) {
        let t = translit::transliterate(word);
        return apply_vibhakti(rules, &t, default_ending);
    }
    apply_vibhakti(rules, &w, default_ending)
}

/// Detect the case marker of an inflected word.
///
/// Tiers: known inflected outputs, the fixed suffix table with longest
/// match winning, then a fuzzy match of the word's tail against the pooled
/// suffixes (cutoff 0.6). `(None, None)` when nothing clears any tier.
pub fn detect_vibhakti(rules: &RuleSet, word: &str) -> (Option<Vibhakti>, Option<String>) {
    let w = fuzzy::normalize(word);
    if w.is_empty() {
        return (None, None);
    }

    // Known fully-inflected outputs.
    for r in rules.vibhakti_rules() {
        if r.output.is_empty() {
            continue;
        }
        if w.ends_with(char_tail(&r.output, 6)) && (w == r.output || w.contains(&r.output)) {
            let suffix = if !r.base.is_empty() && r.output.starts_with(&r.base) {
                Some(r.output[r.base.len()..].to_string())
            } else {
                None
            };
            return (Some(r.vibhakti), suffix);
        }
    }

    // Fixed suffix table, longest suffix wins. A longer suffix must beat
    // any shorter suffix it happens to contain.
    let mut best: Option<(usize, Vibhakti, &str)> = None;
    for &(v, s) in CASE_SUFFIXES {
        if w.ends_with(s) {
            let len = s.chars().count();
            if best.is_none_or(|(blen, _, _)| len > blen) {
                best = Some((len, v, s));
            }
        }
    }
    if let Some((_, v, s)) = best {
        return (Some(v), Some(s.to_string()));
    }

    // Fuzzy tail match against the pooled suffixes.
    let tail = char_tail(&w, 4);
    let hit = fuzzy::best_match(tail, CASE_SUFFIXES.iter().map(|&(_, s)| s), 0.6);
    for &(v, s) in CASE_SUFFIXES {
        if s == hit {
            return (Some(v), Some(s.to_string()));
        }
    }
    (None, None)
}

/// Last `n` characters of a string (the whole string when shorter).
fn char_tail(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    match s.char_indices().nth(count - n) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}
