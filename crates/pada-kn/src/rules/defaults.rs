// Compiled default rule tables.
//
// A small curated set: each sandhi rule records the boundary sounds, the
// junction it inserts, and a whole-join exemplar reused as a reverse-split
// template. External CSV sources overlay these by rule number / case id.

use crate::rules::{SandhiRule, VibhaktiRule};
use crate::vibhakti::Vibhakti;

#[allow(clippy::too_many_arguments)]
fn rule(
    number: &str,
    sound1: &str,
    sound2: &str,
    result: &str,
    combined_result: &str,
    example_word1: &str,
    example_word2: &str,
    notes: &str,
    delete_first_of_w2: bool,
) -> SandhiRule {
    SandhiRule {
        rule_number: Some(number.to_string()),
        sound1: sound1.to_string(),
        sound2: sound2.to_string(),
        result: result.to_string(),
        combined_result: combined_result.to_string(),
        example_word1: example_word1.to_string(),
        example_word2: example_word2.to_string(),
        notes: notes.to_string(),
        delete_first_of_w2,
    }
}

pub(crate) fn sandhi_rules() -> Vec<SandhiRule> {
    vec![
        rule(
            "1", "ಾ", "ಆ", "", "ಮಹಾತ್ಮ", "ಮಹಾ", "ಆತ್ಮ",
            "savarna dirgha: the initial ಆ merges into the long ಾ",
            true,
        ),
        rule(
            "2", "ಿ", "ಅ", "ಯ", "ಶಕ್ತ್ಯಭಿಮಾನ", "ಶಕ್ತಿ", "ಅಭಿಮಾನ",
            "agama: ಯ bridges ಿ + ಅ",
            true,
        ),
        rule(
            "3", "ೆ", "ಅ", "ಯ", "ಮನೆಯಂಗಳ", "ಮನೆ", "ಅಂಗಳ",
            "agama: ಯ bridges ೆ + ಅ",
            true,
        ),
        rule(
            "4", "ು", "ಅ", "ವ", "ಗುರುವನು", "ಗುರು", "ಅನು",
            "agama: ವ bridges ು + ಅ",
            true,
        ),
        rule(
            "5", "ಾ", "ಋ", "ರ್", "ಮಹರ್ಷಿ", "ಮಹಾ", "ಋಷಿ",
            "guna: ಾ + ಋ contracts to ರ್",
            true,
        ),
        rule(
            "6", "ಂ", "ಗ", "", "ಸಂಗೀತ", "ಸಂ", "ಗೀತ",
            "anusvara carries through",
            false,
        ),
        rule(
            "7", "ರ", "ಇ", "ಯ", "ನರೆಂದ್ರ", "ನರ", "ಇಂದ್ರ",
            "e-bridge before an initial ಇ",
            true,
        ),
        rule(
            "8", "ಾ", "ಇ", "ಯ", "ಮಹೆಂದ್ರ", "ಮಹಾ", "ಇಂದ್ರ",
            "e-bridge before an initial ಇ after a long ಾ",
            true,
        ),
    ]
}

fn vrule(vibhakti: Vibhakti, base: &str, ending: &str, output: &str) -> VibhaktiRule {
    VibhaktiRule {
        vibhakti,
        base: base.to_string(),
        ending: ending.to_string(),
        output: output.to_string(),
    }
}

/// One exemplar inflection per case id.
pub(crate) fn vibhakti_rules() -> Vec<VibhaktiRule> {
    vec![
        vrule(Vibhakti::Dvitiya, "ರಾಮ", "ಅನ್ನು", "ರಾಮನನ್ನು"),
        vrule(Vibhakti::Tritiya, "ರವಿ", "ಇಂದ", "ರವಿಯಿಂದ"),
        vrule(Vibhakti::Chaturthi, "ರಾಮ", "ಗೆ", "ರಾಮನಿಗೆ"),
        vrule(Vibhakti::Shashthi, "ರಾಮ", "ನ", "ರಾಮನ"),
        vrule(Vibhakti::Saptami, "ಮನೆ", "ಅಲ್ಲಿ", "ಮನೆಯಲ್ಲಿ"),
    ]
}

/// Case suffixes for reverse detection, grouped by case marker. Detection
/// picks the longest suffix that matches; table order breaks length ties.
pub const CASE_SUFFIXES: &[(Vibhakti, &str)] = &[
    (Vibhakti::Dvitiya, "ವನ್ನು"),
    (Vibhakti::Dvitiya, "ಅನ್ನು"),
    (Vibhakti::Dvitiya, "ನ್ನು"),
    (Vibhakti::Tritiya, "ಯಿಂದ"),
    (Vibhakti::Tritiya, "ಇಂದ"),
    (Vibhakti::Tritiya, "ರಿಂದ"),
    (Vibhakti::Chaturthi, "ಕ್ಕೆ"),
    (Vibhakti::Chaturthi, "ಗೆ"),
    (Vibhakti::Shashthi, "ನ"),
    (Vibhakti::Shashthi, "ಅದ"),
    (Vibhakti::Shashthi, "ಆದ"),
    (Vibhakti::Saptami, "ನಲ್ಲಿ"),
    (Vibhakti::Saptami, "ಅಲ್ಲಿ"),
    (Vibhakti::Saptami, "ಲ್ಲಿ"),
];
