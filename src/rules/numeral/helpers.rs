use tracing::debug;

use super::lexicon::{number_value, unit_multiplier};

/// Value of `word`, or 0 when the lexicon does not know it.
pub fn number_or_zero(word: &str) -> u32 {
    number_value(word).unwrap_or_else(|| {
        debug!(word, "unknown number word, counting as 0");
        0
    })
}

/// Multiplier of `word`, or 1 when the lexicon does not know it.
pub fn multiplier_or_one(word: &str) -> u32 {
    unit_multiplier(word).unwrap_or_else(|| {
        debug!(word, "unknown unit word, ignoring multiplier");
        1
    })
}

/// Return capture group `idx`, or `None` when it is missing or blank.
pub fn group(groups: &[String], idx: usize) -> Option<&str> {
    groups.get(idx).map(String::as_str).filter(|g| !g.trim().is_empty())
}
