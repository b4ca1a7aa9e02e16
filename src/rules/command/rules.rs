use crate::api::MatchShape;
use crate::engine::BucketMask;
use crate::rules::numeral::helpers::group;
use crate::{Rule, Shape};

// Rules (one per command shape)
//
// All patterns run against canonical text: letters and whitespace only,
// lower-cased. `\S+` is therefore a single word and `(\S.*)` a non-empty tail
// that starts on a letter. `(?s)` lets the tail run across line breaks.

/// Rule matching "adicionar <quantidade> <dúzia> de <item>".
///
/// The unit allows any single letter between `d` and `zia` so transcription
/// slips like "dozia" still select this shape; the lexicon decides whether
/// the word actually multiplies.
fn rule_special_unit() -> Rule {
    rule! {
        name: "adicionar <quantidade> <unidade> de <item>",
        shape: Shape::SpecialUnit,
        pattern: r"(?s)\badicionar\s+(\S+)\s+(d\pLzias?)\s+de\s+(\S.*)",
        buckets: BucketMask::HAS_VERB | BucketMask::HAS_UNIT,
        priority: 30,
        prod: |groups: &[String]| -> Option<MatchShape> {
            Some(MatchShape::SpecialUnit {
                quantity_word: group(groups, 1)?.to_string(),
                unit_word: group(groups, 2)?.to_string(),
                item: group(groups, 3)?.to_string(),
            })
        },
    }
}

/// Rule matching "adicionar <dezena> e <unidade> <item>" (e.g. "vinte e um").
fn rule_compound() -> Rule {
    rule! {
        name: "adicionar <número> e <número> <item>",
        shape: Shape::Compound,
        pattern: r"(?s)\badicionar\s+(\S+)\s+e\s+(\S+)\s+(\S.*)",
        buckets: BucketMask::HAS_VERB | BucketMask::HAS_CONJUNCTION,
        priority: 20,
        prod: |groups: &[String]| -> Option<MatchShape> {
            Some(MatchShape::Compound {
                first_word: group(groups, 1)?.to_string(),
                second_word: group(groups, 2)?.to_string(),
                item: group(groups, 3)?.to_string(),
            })
        },
    }
}

/// Rule matching "adicionar <quantidade> <item>"; the item is the rest of the
/// text and may span several words.
fn rule_plain() -> Rule {
    rule! {
        name: "adicionar <quantidade> <item>",
        shape: Shape::Plain,
        pattern: r"(?s)\badicionar\s+(\S+)\s+(\S.*)",
        buckets: BucketMask::HAS_VERB,
        priority: 10,
        prod: |groups: &[String]| -> Option<MatchShape> {
            Some(MatchShape::Plain {
                quantity_word: group(groups, 1)?.to_string(),
                item: group(groups, 2)?.to_string(),
            })
        },
    }
}

pub fn get() -> Vec<Rule> {
    vec![rule_special_unit(), rule_compound(), rule_plain()]
}
