//! Built-in literary source texts, cycled one character at a time.
//!
//! Each entry ends with a space so consecutive quotations don't run together.

pub const DEFAULT_TEXTS: &[&str] = &[
    "It was the best of times, it was the worst of times, it was the age of wisdom, it was the age of foolishness. ",
    "Call me Ishmael. ",
    "It is a truth universally acknowledged, that a single man in possession of a good fortune, must be in want of a wife. ",
    "Happy families are all alike; every unhappy family is unhappy in its own way. ",
    "Whether I shall turn out to be the hero of my own life, or whether that station will be held by anybody else, these pages must show. ",
    "Stately, plump Buck Mulligan came from the stairhead, bearing a bowl of lather on which a mirror and a razor lay crossed. ",
];

pub fn default_texts() -> Vec<String> {
    DEFAULT_TEXTS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_non_empty() {
        assert!(!DEFAULT_TEXTS.is_empty());
        assert!(DEFAULT_TEXTS.iter().all(|t| !t.is_empty()));
        assert_eq!(default_texts().len(), DEFAULT_TEXTS.len());
    }
}
