//! Trigger scanning (input pre-classification).
//!
//! Before any regex runs, the canonical text is scanned once for coarse
//! signals. Each rule declares the buckets it needs; rules whose buckets are
//! missing are skipped outright.
//!
//! ## Design notes
//!
//! - A bucket is a *necessary* condition for its rules, never a sufficient
//!   one. Skipping a rule must not change the outcome, only the work done.
//! - The scan works on canonical (filtered, lower-cased) text, so plain word
//!   comparisons are enough.

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u32 {
        /// The command verb `adicionar` appears as a word.
        const HAS_VERB        = 1 << 0;
        /// A word looks like a unit (`dúzia`, `duzias`, `dozia`, ...).
        const HAS_UNIT        = 1 << 1;
        /// The conjunction `e` appears as a standalone word.
        const HAS_CONJUNCTION = 1 << 2;
    }
}

/// Input characteristics detected from canonical text.
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `canonical` for coarse buckets.
    pub fn scan(canonical: &str) -> Self {
        let mut buckets = BucketMask::empty();
        for word in canonical.split_whitespace() {
            match word {
                "adicionar" => buckets |= BucketMask::HAS_VERB,
                "e" => buckets |= BucketMask::HAS_CONJUNCTION,
                // Unit words are matched as `d<letter>zia(s)`; anything
                // satisfying the rule also starts with `d` and contains `zia`.
                w if w.starts_with('d') && w.contains("zia") => buckets |= BucketMask::HAS_UNIT,
                _ => {}
            }
        }

        TriggerInfo { buckets }
    }

    /// Whether every bucket in `required` was detected.
    pub fn satisfies(&self, required: BucketMask) -> bool {
        self.buckets.contains(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_all_buckets() {
        let info = TriggerInfo::scan("adicionar vinte e duas dúzias de ovos");
        assert!(info.satisfies(BucketMask::HAS_VERB | BucketMask::HAS_UNIT | BucketMask::HAS_CONJUNCTION));
    }

    #[test]
    fn verb_must_be_a_whole_word() {
        let info = TriggerInfo::scan("readicionar duas maçãs");
        assert!(!info.satisfies(BucketMask::HAS_VERB));
    }

    #[test]
    fn conjunction_must_be_standalone() {
        let info = TriggerInfo::scan("adicionar dez ovos");
        assert!(!info.buckets.contains(BucketMask::HAS_CONJUNCTION));
        assert!(info.buckets.contains(BucketMask::HAS_VERB));
    }

    #[test]
    fn words_split_on_any_whitespace() {
        let info = TriggerInfo::scan("adicionar\tvinte\ne duas\r\ndozias de ovos adicionar");
        assert_eq!(info.buckets, BucketMask::all());

        let info = TriggerInfo::scan("adicionar duas dezenas de ovos");
        assert_eq!(info.buckets, BucketMask::HAS_VERB);
    }

    #[test]
    fn empty_mask_is_always_satisfied() {
        let info = TriggerInfo::scan("");
        assert!(info.buckets.is_empty());
        assert!(info.satisfies(BucketMask::empty()));
    }
}
