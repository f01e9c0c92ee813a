// Kannada script classification and boundary-sound helpers

/// Virama (halant): suppresses the inherent vowel of the consonant it
/// follows, so the consonant itself is the word-final sound.
pub const VIRAMA: char = '\u{0CCD}';

/// Anusvara, the nasal carrier sign.
pub const ANUSVARA: char = 'ಂ';

/// Dependent short-e sign, inserted by the vowel-bridge join.
pub const SIGN_E: char = 'ೆ';

/// Independent (standalone letter) vowels.
const INDEPENDENT_VOWELS: &[char] = &[
    'ಅ', 'ಆ', 'ಇ', 'ಈ', 'ಉ', 'ಊ', 'ಋ', 'ಎ', 'ಏ', 'ಐ', 'ಒ', 'ಓ', 'ಔ',
];

/// Dependent (sign) vowels attached to a preceding consonant.
const DEPENDENT_VOWELS: &[char] = &[
    'ಾ', 'ಿ', 'ೀ', 'ು', 'ೂ', 'ೃ', 'ೆ', 'ೇ', 'ೈ', 'ೊ', 'ೋ', 'ೌ',
];

/// Front vowels (i/ī/e/ē/ai class), independent letters and sign forms.
const FRONT_VOWELS: &[char] = &['ಇ', 'ಈ', 'ಎ', 'ಏ', 'ಐ', 'ಿ', 'ೀ', 'ೆ', 'ೇ', 'ೈ'];

/// Back vowels (u/ū/o/ō/au class), independent letters and sign forms.
const BACK_VOWELS: &[char] = &['ಉ', 'ಊ', 'ಒ', 'ಓ', 'ಔ', 'ು', 'ೂ', 'ೊ', 'ೋ', 'ೌ'];

/// Check whether a character belongs to the Kannada Unicode block.
pub fn is_kannada_char(c: char) -> bool {
    ('\u{0C80}'..='\u{0CFF}').contains(&c)
}

/// Check whether a string contains at least one Kannada character.
pub fn is_kannada(s: &str) -> bool {
    s.chars().any(is_kannada_char)
}

/// Check whether a string contains at least one Latin letter.
pub fn has_latin(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

pub fn is_independent_vowel(c: char) -> bool {
    INDEPENDENT_VOWELS.contains(&c)
}

pub fn is_dependent_vowel(c: char) -> bool {
    DEPENDENT_VOWELS.contains(&c)
}

pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&c)
}

pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

/// First boundary sound of a word: its first character after trimming.
pub fn first_sound(word: &str) -> Option<char> {
    word.trim().chars().next()
}

/// Last boundary sound of a word.
///
/// A trailing virama suppresses the inherent vowel, so for a virama-final
/// word the consonant before the virama is the boundary sound.
pub fn last_sound(word: &str) -> Option<char> {
    let mut chars = word.trim().chars();
    let last = chars.next_back()?;
    if last == VIRAMA {
        if let Some(prev) = chars.next_back() {
            return Some(prev);
        }
    }
    Some(last)
}
