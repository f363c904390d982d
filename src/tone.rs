//! Response tones and the fixed text each tone rewrites a reply into.

use serde::{Deserialize, Serialize};

/// The tone an AI reply is currently written in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Professional,
    Witty,
    Concise,
}

/// Display order of the tone chips.
pub const ALL_TONES: [Tone; 4] = [Tone::Default, Tone::Professional, Tone::Witty, Tone::Concise];

const DEFAULT_TEXT: &str = "Great question! Rust's ownership model means every value has a single \
owner, and the value is dropped when that owner goes out of scope. Borrowing lets you hand out \
references without giving up ownership, and the compiler checks at build time that those \
references never outlive the data they point to. The result is memory safety without a garbage \
collector.";

const PROFESSIONAL_TEXT: &str = "Rust enforces memory safety through a compile-time ownership \
system. Each value is associated with exactly one owner and is released deterministically when \
that owner leaves scope. Access to a value may be granted through borrowing, which the compiler \
validates to guarantee that no reference outlives its referent. This approach eliminates an \
entire class of runtime defects while avoiding the overhead of garbage collection.";

const WITTY_TEXT: &str = "Think of Rust's ownership model as a very strict librarian. Every book \
has exactly one borrower on record, you can look at it with friends as long as nobody scribbles \
in the margins, and the moment you leave the building the book goes back on the shelf. No \
garbage collector roaming the aisles, just a compiler that will absolutely not let you sneak out \
with a dangling reference.";

const CONCISE_TEXT: &str = "One owner per value. Borrow with references. The compiler checks \
lifetimes, so memory is safe without a garbage collector.";

impl Tone {
    /// Chip label shown in the tone selector.
    pub fn label(self) -> &'static str {
        match self {
            Tone::Default => "Standard",
            Tone::Professional => "Professional",
            Tone::Witty => "Witty",
            Tone::Concise => "Concise",
        }
    }

    /// The canned reply text for this tone.
    pub fn variation(self) -> &'static str {
        match self {
            Tone::Default => DEFAULT_TEXT,
            Tone::Professional => PROFESSIONAL_TEXT,
            Tone::Witty => WITTY_TEXT,
            Tone::Concise => CONCISE_TEXT,
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tone_has_distinct_text() {
        let texts: HashSet<&str> = ALL_TONES.iter().map(|t| t.variation()).collect();
        assert_eq!(texts.len(), ALL_TONES.len());
        assert!(texts.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tone::Default.label(), "Standard");
        assert_eq!(Tone::Witty.to_string(), "Witty");
        assert_eq!(Tone::default(), Tone::Default);
    }

    #[test]
    fn test_tone_serializes_lowercase() {
        let json = serde_json::to_string(&Tone::Professional).unwrap();
        assert_eq!(json, "\"professional\"");
    }
}
