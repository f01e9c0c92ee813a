// Kannada language engine: sandhi joining, reverse-sandhi splitting,
// vibhakti analysis and compound resolution over an immutable rule set.
//
// Architecture:
//   - `rules`: the rule repository (built-in tables + optional CSV overlays)
//   - `translit`: best-effort Latin to Kannada normalization pre-pass
//   - `sandhi`: forward join tiers and the reverse split generators
//   - `vibhakti`: case-suffix application and detection
//   - `compound`: compound-word resolution tiers, suggestions, hints
//   - `handle`: `PadaHandle`, the top-level integration point

pub mod compound;
pub mod handle;
pub mod rules;
pub mod sandhi;
pub mod translit;
pub mod vibhakti;

// Re-export key types for convenient access.
pub use handle::PadaHandle;
pub use rules::{CompoundEntry, RuleLoadError, RuleSet, SandhiRule, VibhaktiRule};
pub use sandhi::split::SplitPair;
pub use sandhi::{JoinOrigin, JoinOutcome};
pub use vibhakti::{DEFAULT_ENDING, Vibhakti};
