//! Transcript normalization.
//!
//! Transcription services emit punctuation, digits and casing that the
//! grammar does not care about. The normalizer keeps only what the command
//! rules can match on: ASCII letters, the accented letters used in Portuguese
//! and whitespace.
//!
//! ```text
//! "Adicionar 3 maçãs, por favor!"
//!   normalize    -> "Adicionar  maçãs por favor"
//!   canonicalize -> "adicionar  maçãs por favor"
//! ```
//!
//! Whitespace runs are kept as they are; rules match them with `\s+`.

use tracing::trace;

/// Returns true for characters that survive normalization.
///
/// The accepted Latin-1 ranges are `À-Ú`, `Â-Û`, `Ã-Õ` (and their lowercase
/// counterparts), which together span U+00C0..=U+00DB and U+00E0..=U+00FB.
/// The multiplication and division signs sit inside those spans and are not
/// letters, so they are excluded.
fn is_transcript_char(c: char) -> bool {
    match c {
        'a'..='z' | 'A'..='Z' => true,
        '\u{D7}' | '\u{F7}' => false,
        '\u{C0}'..='\u{DB}' | '\u{E0}'..='\u{FB}' => true,
        c => c.is_whitespace(),
    }
}

/// Strip every character that is not a letter (ASCII or Portuguese accented)
/// or whitespace. Casing is left untouched.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|&c| is_transcript_char(c)).collect()
}

/// [`normalize`] followed by lower-casing: the form every rule is matched
/// against.
pub fn canonicalize(text: &str) -> String {
    let canonical = normalize(text).to_lowercase();
    trace!(input = text, canonical = canonical.as_str(), "canonicalized transcript");
    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(normalize("Adicionar 3 maçãs, por favor!"), "Adicionar  maçãs por favor");
        assert_eq!(normalize("Olá, como vai você?"), "Olá como vai você");
    }

    #[test]
    fn keeps_portuguese_letters() {
        let text = "àáâãçéêíóôõú ÀÁÂÃÇÉÊÍÓÔÕÚ";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn drops_signs_inside_latin1_ranges() {
        assert_eq!(normalize("dois×três÷um"), "doistrêsum");
    }

    #[test]
    fn drops_letters_outside_the_portuguese_ranges() {
        assert_eq!(normalize("straße œuvre"), "strae uvre");
        assert_eq!(normalize("cinqüenta"), "cinqenta");
    }

    #[test]
    fn preserves_whitespace_runs() {
        assert_eq!(normalize("adicionar\t duas   maçãs\n"), "adicionar\t duas   maçãs\n");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "Adicionar duas dúzias de ovos.",
            "  ADICIONAR vinte e um limões!!! ",
            "Olá, como vai você?",
            "¿adicionar 12 (doze) pães?",
            "×÷ ñ ø € 😀 abc",
            "",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
            let canonical = canonicalize(s);
            assert_eq!(canonicalize(&canonical), canonical, "canonical form not stable for {s:?}");
        }
    }

    #[test]
    fn canonicalize_lowercases_accented_letters() {
        assert_eq!(canonicalize("ADICIONAR TRÊS MAÇÃS"), "adicionar três maçãs");
    }
}
