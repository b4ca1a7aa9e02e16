use crate::rules::numeral::helpers::{group, multiplier_or_one, number_or_zero};
use crate::rules::numeral::lexicon::{number_value, unit_multiplier};

#[test]
fn number_word_examples() {
    // Array of (expected_value, word)
    let cases: Vec<(u32, &str)> = vec![
        (0, "zero"),
        (1, "um"),
        (1, "uma"),
        (2, "dois"),
        (2, "duas"),
        (3, "três"),
        (3, "tres"),
        (3, "TRÊS"),
        (9, "nove"),
        (12, "doze"),
        (14, "catorze"),
        (14, "quatorze"),
        (16, "dezesseis"),
        (16, "dezasseis"),
        (19, "dezenove"),
        (20, "vinte"),
        (50, "cinquenta"),
        (90, "noventa"),
        (100, "cem"),
        (100, "cento"),
        (200, "duzentas"),
        (500, "quinhentos"),
        (900, "novecentos"),
    ];

    for (expected, word) in cases {
        assert_eq!(number_value(word), Some(expected), "unexpected value for '{word}'");
    }
}

#[test]
fn number_words_outside_the_lexicon() {
    for word in ["mil", "milhão", "bilhão", "ovos", "", "tr"] {
        assert_eq!(number_value(word), None, "'{word}' should not be a number word");
        assert_eq!(number_or_zero(word), 0);
    }
}

#[test]
fn unit_words_and_plurals() {
    assert_eq!(unit_multiplier("dúzia"), Some(12));
    assert_eq!(unit_multiplier("duzia"), Some(12));
    assert_eq!(unit_multiplier("dúzias"), Some(12));
    assert_eq!(unit_multiplier("Duzias"), Some(12));
    assert_eq!(unit_multiplier("dozia"), None);
    assert_eq!(multiplier_or_one("dozia"), 1);
    assert_eq!(multiplier_or_one("dúzias"), 12);
}

#[test]
fn group_skips_missing_and_blank() {
    let groups = vec!["adicionar duas maçãs".to_string(), "duas".to_string(), "  ".to_string()];
    assert_eq!(group(&groups, 1), Some("duas"));
    assert_eq!(group(&groups, 2), None);
    assert_eq!(group(&groups, 3), None);
}
