//! Quantity resolution.
//!
//! The parser hands over a [`MatchShape`] holding raw words; resolution turns
//! it into a [`ParsedCommand`]:
//!
//! ```text
//! SpecialUnit { "duas", "dúzias", item } -> 2 * 12
//! Compound    { "vinte", "um", item }    -> 20 + 1
//! Plain       { "três", item }           -> 3
//! ```
//!
//! Unknown words never fail a parse: an unknown number counts as 0 and an
//! unknown unit multiplies by 1 (see `rules::numeral::helpers`).

use crate::api::{MatchShape, Options, ParsedCommand};
use crate::rules::numeral::helpers::{multiplier_or_one, number_or_zero};

/// Compute the final quantity for a matched shape.
pub(crate) fn resolve_quantity(shape: &MatchShape) -> u32 {
    match shape {
        MatchShape::SpecialUnit { quantity_word, unit_word, .. } => {
            number_or_zero(quantity_word).saturating_mul(multiplier_or_one(unit_word))
        }
        MatchShape::Compound { first_word, second_word, .. } => {
            number_or_zero(first_word).saturating_add(number_or_zero(second_word))
        }
        MatchShape::Plain { quantity_word, .. } => number_or_zero(quantity_word),
    }
}

/// Assemble the command for a matched shape.
///
/// ```text
/// MatchShape ──▶ resolve_quantity ──▶ ParsedCommand { item, quantity }
///            └─▶ item (trimmed unless Options::trim_item is off)
/// ```
pub(crate) fn resolve_command(shape: &MatchShape, options: &Options) -> ParsedCommand {
    let item = if options.trim_item { shape.item().trim() } else { shape.item() };
    ParsedCommand { item: item.to_string(), quantity: resolve_quantity(shape) }
}
