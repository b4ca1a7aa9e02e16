//! Portuguese numeral vocabulary.

pub(crate) mod helpers;
pub(crate) mod lexicon;

#[cfg(test)]
mod tests;
