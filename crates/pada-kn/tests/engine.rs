//! Integration tests: drive the full engine through `PadaHandle` with
//! in-memory CSV fixtures.
//!
//! Every fixture is assembled per test, so handles with different tables
//! run side by side. The `from_dir` tests write their fixtures under the
//! system temp directory and clean up afterwards.

use std::path::PathBuf;

use pada_kn::{JoinOrigin, PadaHandle, RuleSet, SplitPair, Vibhakti};

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

fn handle_with(
    sandhi: Option<&str>,
    vibhakti: Option<&str>,
    compounds: Option<&str>,
    roots: Option<&str>,
) -> PadaHandle {
    PadaHandle::with_rules(RuleSet::from_csv_sources(
        sandhi.map(str::as_bytes),
        vibhakti.map(str::as_bytes),
        compounds.map(str::as_bytes),
        roots.map(str::as_bytes),
    ))
}

/// Create a scratch dictionary directory under the system temp dir.
fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pada-engine-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ---------------------------------------------------------------------------
// Sandhi: forward and reverse
// ---------------------------------------------------------------------------

#[test]
fn builtin_example_pairs_round_trip() {
    let handle = PadaHandle::new();
    for rule in handle.rules().sandhi_rules().to_vec() {
        let combined = handle.apply_sandhi(&rule.example_word1, &rule.example_word2);
        if !rule.combined_result.is_empty() {
            assert_eq!(combined, rule.combined_result, "rule {:?}", rule.rule_number);
        }
        let pairs = handle.reverse_sandhi(&combined);
        let expected = SplitPair::new(rule.example_word1.clone(), rule.example_word2.clone());
        assert!(
            pairs.contains(&expected),
            "rule {:?}: {combined} lost its example pair",
            rule.rule_number
        );
    }
}

#[test]
fn override_table_drives_the_join() {
    let sandhi = "rule_number,sound1,sound2,result,combined_result,example_word1,example_word2,notes\n\
                  40,ಸ,ತ,,ಮನಸ್ತಾಪ,ಮನಸ್,ತಾಪ,virama boundary\n";
    let handle = handle_with(Some(sandhi), None, None, None);
    let outcome = handle.join("ಮನಸ್", "ತಾಪ");
    assert_eq!(outcome.word, "ಮನಸ್ತಾಪ");
    assert_eq!(
        outcome.origin,
        JoinOrigin::Override {
            rule_number: Some("40".to_string())
        }
    );
    // The override row also feeds the reverse template pass.
    let pairs = handle.reverse_sandhi("ಮನಸ್ತಾಪ");
    assert_eq!(pairs[0], SplitPair::new("ಮನಸ್", "ತಾಪ"));
}

#[test]
fn partial_override_row_patches_a_builtin_rule() {
    // Rule 1 keeps its sounds and delete flag; only the example pair and
    // the whole-join literal change.
    let sandhi = "rule_number,sound1,sound2,result,combined_result,example_word1,example_word2,notes\n\
                  1,,,,ಕಲಾತ್ಮ,ಕಲಾ,ಆತ್ಮ,patched\n";
    let handle = handle_with(Some(sandhi), None, None, None);
    assert_eq!(handle.apply_sandhi("ಕಲಾ", "ಆತ್ಮ"), "ಕಲಾತ್ಮ");
    assert_eq!(
        handle.reverse_sandhi("ಕಲಾತ್ಮ")[0],
        SplitPair::new("ಕಲಾ", "ಆತ್ಮ")
    );
}

#[test]
fn degenerate_inputs_never_fail() {
    let handle = PadaHandle::new();
    assert_eq!(handle.apply_sandhi("", "x"), "x");
    assert_eq!(handle.apply_sandhi("x", ""), "x");
    assert!(handle.reverse_sandhi("").is_empty());
    assert_eq!(handle.validate_compound(""), None);
    assert_eq!(handle.detect_vibhakti(""), (None, None));
    assert!(handle.suggestions("", 5).is_empty());
    assert!(handle.hints_for("", 5).is_empty());
}

// ---------------------------------------------------------------------------
// Vibhakti
// ---------------------------------------------------------------------------

#[test]
fn vibhakti_override_patches_the_builtin_row() {
    let vibhakti = "vibhakti_id,base,ending,output\n4,ಮನೆ,ಗೆ,ಮನೆಗೆ\n";
    let handle = handle_with(None, Some(vibhakti), None, None);
    assert_eq!(
        handle.apply_vibhakti("ಮನೆ", "ಗೆ"),
        ("ಮನೆಗೆ".to_string(), Some(Vibhakti::Chaturthi))
    );
    // The old exemplar stem now misses the table and takes the phonetic
    // dative pass-through instead.
    assert_eq!(
        handle.apply_vibhakti("ರಾಮ", "ಗೆ"),
        ("ರಾಮಗೆ".to_string(), Some(Vibhakti::Chaturthi))
    );
}

#[test]
fn single_argument_application_pools_roots() {
    let roots = "word,meaning\nಮಗು,child\n";
    let handle = handle_with(None, None, None, Some(roots));
    // ಮಗುವ fuzzy-resolves to the root ಮಗು, which then takes the dative.
    let (out, v) = handle.apply_vibhakti_single("ಮಗುವ", pada_kn::DEFAULT_ENDING);
    assert_eq!(out, "ಮಗುಗೆ");
    assert_eq!(v, Some(Vibhakti::Chaturthi));
}

#[test]
fn detection_prefers_the_longest_suffix() {
    let handle = PadaHandle::new();
    let (v, suffix) = handle.detect_vibhakti("ಹೂವನ್ನು");
    assert_eq!(v, Some(Vibhakti::Dvitiya));
    assert_eq!(suffix.as_deref(), Some("ವನ್ನು"));
}

#[test]
fn forward_and_reverse_vibhakti_agree() {
    let handle = PadaHandle::new();
    for (base, ending) in [("ಮರ", "ಇಂದ"), ("ಮಗು", "ಅನ್ನು"), ("ಶಾಲೆ", "ಅಲ್ಲಿ")] {
        let (inflected, expected) = handle.apply_vibhakti(base, ending);
        let (detected, _) = handle.detect_vibhakti(&inflected);
        assert_eq!(detected, expected, "{base} + {ending} = {inflected}");
    }
}

// ---------------------------------------------------------------------------
// Compounds
// ---------------------------------------------------------------------------

#[test]
fn compound_dictionary_beats_reverse_sandhi() {
    // The dictionary row deliberately disagrees with the reverse-sandhi
    // derivation (ಮಹಾ, ಆತ್ಮ) and must win.
    let compounds = "word1,word2,combined,frequency\nಮಹಾ,ಆತ್ಮನ್,ಮಹಾತ್ಮ,1\n";
    let handle = handle_with(None, None, Some(compounds), None);
    assert_eq!(
        handle.validate_compound("ಮಹಾತ್ಮ"),
        Some(("ಮಹಾ".to_string(), "ಆತ್ಮನ್".to_string()))
    );
}

#[test]
fn roots_steer_compound_resolution() {
    let roots = "word\nಮನೆ\nಅಂಗಳ\n";
    let handle = handle_with(None, None, None, Some(roots));
    assert_eq!(
        handle.validate_compound("ಮನೆಅಂಗಳ"),
        Some(("ಮನೆ".to_string(), "ಅಂಗಳ".to_string()))
    );
}

#[test]
fn suggestions_and_hints_over_fixtures() {
    let compounds = "word1,word2,combined,frequency\n\
                     ಮಹಾ,ಆತ್ಮ,ಮಹಾತ್ಮ,1\n\
                     ಮಹಾ,ಋಷಿ,ಮಹರ್ಷಿ,2\n";
    let roots = "word\nಮಹಾತ್ಮರು\n";
    let handle = handle_with(None, None, Some(compounds), Some(roots));

    let got = handle.suggestions("ಮಹಾತ್ಮ", 5);
    assert_eq!(got[0], "ಮಹಾತ್ಮ");
    assert!(got.contains(&"ಮಹಾತ್ಮರು".to_string()));

    let hints = handle.hints_for("ಮಹಾ", 5);
    assert_eq!(hints.len(), 2);
    assert!(hints.iter().all(|e| e.base1 == "ಮಹಾ"));
}

// ---------------------------------------------------------------------------
// Directory loading
// ---------------------------------------------------------------------------

#[test]
fn from_dir_loads_conventional_files() {
    let dir = scratch_dir("load");
    std::fs::write(
        dir.join("sandhi_rules.csv"),
        "rule_number,sound1,sound2,result,combined_result,example_word1,example_word2,notes\n\
         40,ಸ,ತ,,ಮನಸ್ತಾಪ,ಮನಸ್,ತಾಪ,\n",
    )
    .unwrap();
    std::fs::write(dir.join("root_words.csv"), "word,meaning\nಮನೆ,house\n").unwrap();

    let handle = PadaHandle::from_dir(&dir);
    assert_eq!(handle.apply_sandhi("ಮನಸ್", "ತಾಪ"), "ಮನಸ್ತಾಪ");
    assert!(handle.rules().roots().contains("ಮನೆ"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn malformed_files_degrade_to_builtin_tables() {
    let dir = scratch_dir("malformed");
    std::fs::write(dir.join("sandhi_rules.csv"), b"a,b\n\"unclosed,\x00").unwrap();

    let handle = PadaHandle::from_dir(&dir);
    assert!(handle.rules().sandhi_overrides().is_empty());
    assert_eq!(handle.apply_sandhi("ಮಹಾ", "ಆತ್ಮ"), "ಮಹಾತ್ಮ");

    std::fs::remove_dir_all(&dir).unwrap();
}
