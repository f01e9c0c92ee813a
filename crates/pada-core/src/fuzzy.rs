// Approximate string matching shared by the sandhi, vibhakti and
// compound engines.
//
// Similarity is a symmetric alignment ratio in [0, 1]: the longest common
// contiguous block is found, the same search is applied recursively to the
// flanking remainders, and the matched character count is divided by the
// total length of both strings.

/// A candidate that cleared the cutoff, with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    /// The original (unnormalized) candidate string.
    pub candidate: String,
    /// Similarity ratio in [0, 1].
    pub score: f64,
}

/// Normalize a string for comparison: trim surrounding whitespace and
/// case-fold. Idempotent; Kannada text passes through unchanged.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Similarity ratio between two strings: `2·M / (|a| + |b|)` where `M` is
/// the number of characters covered by common contiguous blocks.
///
/// Symmetric. Identical strings score 1.0; two empty strings score 1.0;
/// strings with no character in common score 0.0. Inputs are compared as
/// given; callers normalize beforehand when case/whitespace should not
/// matter.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Count matched characters: longest common block plus recursion on the
/// slices before and after it on both sides.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let (ai, bi, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len + matching_chars(&a[..ai], &b[..bi]) + matching_chars(&a[ai + len..], &b[bi + len..])
}

/// Find the longest common contiguous block of `a` and `b`, returning
/// `(start_in_a, start_in_b, length)`. Earliest block wins on ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        let mut cur = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                cur[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = cur;
    }
    best
}

/// Return candidates whose normalized similarity to the normalized query
/// is at least `cutoff`, ranked by descending score (candidate order is
/// preserved on ties) and capped at `n`.
pub fn fuzzy_matches<'a, I>(query: &str, candidates: I, n: usize, cutoff: f64) -> Vec<FuzzyMatch>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = normalize(query);
    let mut matches: Vec<FuzzyMatch> = candidates
        .into_iter()
        .filter_map(|cand| {
            let score = similarity(&query, &normalize(cand));
            (score >= cutoff).then(|| FuzzyMatch {
                candidate: cand.to_string(),
                score,
            })
        })
        .collect();
    matches.sort_by(|x, y| y.score.total_cmp(&x.score));
    matches.truncate(n);
    matches
}

/// Return the single best candidate above `cutoff`, or the original query
/// unchanged when nothing clears it. Never fails.
pub fn best_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    fuzzy_matches(query, candidates, 1, cutoff)
        .into_iter()
        .next()
        .map(|m| m.candidate)
        .unwrap_or_else(|| query.to_string())
}
