// Best-effort Latin to Kannada transliteration.
//
// A normalization pre-pass only: it keeps downstream components working on
// script-consistent input and makes no attempt at linguistically correct
// transliteration.

/// Multi-character patterns, tried before the single-character table so
/// that e.g. "sh" maps as one unit instead of "s" then "h".
const DIGRAPHS: &[(&str, &str)] = &[
    ("sh", "ಶ"),
    ("ch", "ಚ"),
    ("kh", "ಖ"),
    ("gh", "ಘ"),
    ("th", "ಥ"),
    ("dh", "ಧ"),
    ("ph", "ಫ"),
    ("bh", "ಭ"),
    ("aa", "ಾ"),
    ("ii", "ೀ"),
    ("ee", "ೀ"),
    ("oo", "ೋ"),
    ("au", "ೌ"),
    ("ai", "ೈ"),
];

fn single(c: char) -> Option<&'static str> {
    Some(match c {
        'a' => "ಅ",
        'i' => "ಇ",
        'u' => "ಉ",
        'e' => "ಎ",
        'o' => "ಒ",
        'k' => "ಕ",
        'g' => "ಗ",
        'j' => "ಜ",
        't' => "ಟ",
        'd' => "ಡ",
        'n' => "ನ",
        'p' => "ಪ",
        'b' => "ಬ",
        'm' => "ಮ",
        'y' => "ಯ",
        'r' => "ರ",
        'l' => "ಲ",
        'v' | 'w' => "ವ",
        's' => "ಸ",
        'h' => "ಹ",
        _ => return None,
    })
}

/// Remap Latin input into Kannada script, character-wise.
///
/// Scans left to right: longest digraph first, then the single-character
/// table, then pass-through for anything unmapped. A post-pass collapses
/// each run of two or more ಅ into one ಆ, compensating for the naive
/// vowel-doubling romanization convention.
pub fn transliterate(latin: &str) -> String {
    let s = latin.trim().to_lowercase();
    if s.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s.as_str();
    'scan: while !rest.is_empty() {
        for &(pattern, replacement) in DIGRAPHS {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(replacement);
                rest = tail;
                continue 'scan;
            }
        }
        let Some(c) = rest.chars().next() else { break };
        match single(c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
        rest = &rest[c.len_utf8()..];
    }
    collapse_doubled_a(&out)
}

/// Collapse runs of two or more ಅ into a single ಆ.
fn collapse_doubled_a(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = 0usize;
    for c in s.chars() {
        if c == 'ಅ' {
            run += 1;
            continue;
        }
        flush_a_run(&mut out, run);
        run = 0;
        out.push(c);
    }
    flush_a_run(&mut out, run);
    out
}

fn flush_a_run(out: &mut String, run: usize) {
    match run {
        0 => {}
        1 => out.push('ಅ'),
        _ => out.push('ಆ'),
    }
}
