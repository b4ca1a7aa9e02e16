use std::collections::HashMap;

use once_cell::sync::Lazy;

// Maps
/// Map of number words to their integer values.
///
/// Accented and unaccented spellings are separate keys ("três" and "tres"),
/// as are masculine and feminine forms ("dois"/"duas"). Powers from "mil" up
/// are not spoken quantities for a cart and are left out.
static NUMBER_WORDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("zero", 0),
        ("um", 1),
        ("uma", 1),
        ("dois", 2),
        ("duas", 2),
        ("três", 3),
        ("tres", 3),
        ("quatro", 4),
        ("cinco", 5),
        ("seis", 6),
        ("sete", 7),
        ("oito", 8),
        ("nove", 9),
        ("dez", 10),
        ("onze", 11),
        ("doze", 12),
        ("treze", 13),
        ("catorze", 14),
        ("quatorze", 14),
        ("quinze", 15),
        ("dezesseis", 16),
        ("dezasseis", 16),
        ("dezessete", 17),
        ("dezassete", 17),
        ("dezoito", 18),
        ("dezenove", 19),
        ("dezanove", 19),
        ("vinte", 20),
        ("trinta", 30),
        ("quarenta", 40),
        ("cinquenta", 50),
        ("sessenta", 60),
        ("setenta", 70),
        ("oitenta", 80),
        ("noventa", 90),
        ("cem", 100),
        ("cento", 100),
        ("duzentos", 200),
        ("duzentas", 200),
        ("trezentos", 300),
        ("trezentas", 300),
        ("quatrocentos", 400),
        ("quatrocentas", 400),
        ("quinhentos", 500),
        ("quinhentas", 500),
        ("seiscentos", 600),
        ("seiscentas", 600),
        ("setecentos", 700),
        ("setecentas", 700),
        ("oitocentos", 800),
        ("oitocentas", 800),
        ("novecentos", 900),
        ("novecentas", 900),
    ])
});

/// Map of unit words to the quantity they multiply by (singular forms).
static UNIT_WORDS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| HashMap::from([("dúzia", 12), ("duzia", 12)]));

/// Value of a spoken number word, if it is in the lexicon.
pub fn number_value(word: &str) -> Option<u32> {
    NUMBER_WORDS.get(word.to_lowercase().as_str()).copied()
}

/// Multiplier of a unit word, if it is in the lexicon.
pub fn unit_multiplier(word: &str) -> Option<u32> {
    let mut w = word.to_lowercase();

    // The rule accepts `s?`, so plurals are folded onto the singular key.
    if w.ends_with('s') {
        w.pop();
    }

    UNIT_WORDS.get(w.as_str()).copied()
}
