// Full pipeline demo: rule tables → joins → splits → case detection.
//
// Pass a dictionary directory as the first argument to overlay external
// CSV tables; without one the built-in tables are used.

use pada_kn::{DEFAULT_ENDING, PadaHandle};

fn main() {
    let handle = match std::env::args().nth(1) {
        Some(dir) => {
            println!("Loading dictionaries from {dir}\n");
            PadaHandle::from_dir(dir)
        }
        None => PadaHandle::new(),
    };

    println!("=== Sandhi joins ===");
    let pairs = [
        ("ಮಹಾ", "ಆತ್ಮ"),
        ("ಮನೆ", "ಅಂಗಳ"),
        ("ಗುರು", "ಅನು"),
        ("ಮಹಾ", "ಋಷಿ"),
        ("ರಾಮ", "ಈಶ್ವರ"),
        ("shakthi", "abhimaana"),
    ];
    for (w1, w2) in &pairs {
        let outcome = handle.join(w1, w2);
        println!("{:12} + {:12} → {:16} [{:?}]", w1, w2, outcome.word, outcome.origin);
    }

    println!("\n=== Reverse sandhi ===");
    for word in ["ಮಹಾತ್ಮ", "ಮನೆಯಂಗಳ", "ಗುರುವನು"] {
        let candidates = handle.reverse_sandhi(word);
        if candidates.is_empty() {
            println!("{:16} → (no candidates)", word);
            continue;
        }
        println!("{:16} → {} candidates", word, candidates.len());
        for pair in candidates.iter().take(4) {
            println!("  {} + {}", pair.word1, pair.word2);
        }
    }

    println!("\n=== Vibhakti ===");
    for word in ["ರಾಮ", "ರವಿ", "raama"] {
        let (inflected, v) = handle.apply_vibhakti_single(word, DEFAULT_ENDING);
        println!("{:12} → {:16} case={:?}", word, inflected, v);
    }
    for word in ["ಮನೆಯಲ್ಲಿ", "ಹೂವನ್ನು", "ಮರಯಿಂದ"] {
        let (v, suffix) = handle.detect_vibhakti(word);
        println!("{:16} → case={:?} suffix={:?}", word, v, suffix);
    }

    println!("\n=== Compounds ===");
    for word in ["ಮಹಾತ್ಮ", "ಸಂಗೀತ", "ಕಟ"] {
        match handle.validate_compound(word) {
            Some((p1, p2)) => println!("{:16} → {} + {}", word, p1, p2),
            None => println!("{:16} → (unresolved)", word),
        }
    }
}
