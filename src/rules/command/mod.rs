//! The "add to cart" command grammar.

pub(crate) mod rules;
