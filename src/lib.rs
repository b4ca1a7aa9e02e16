//! Turns Brazilian Portuguese shopping transcripts into cart instructions.
//!
//! ```
//! use carrinho_voz::parse;
//!
//! let out = parse("Adicionar duas dúzias de ovos");
//! let cmd = out.outcome.command().unwrap();
//! assert_eq!(cmd.item, "ovos");
//! assert_eq!(cmd.quantity, 24);
//! ```

extern crate self as carrinho_voz;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
pub mod transcript;

pub use api::{
    MatchOutcome, MatchShape, Options, ParseDetails, ParseResult, ParseResultVerbose, ParsedCommand, RuleAttempt,
    parse, parse_verbose, parse_verbose_with, parse_with,
};
pub use engine::{canonicalize, normalize};
pub use error::{Error, Result};

// --- Internal types ---------------------------------------------------------

/// The grammatical shape a rule recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `adicionar <quantidade> <unidade> de <item>`
    SpecialUnit,
    /// `adicionar <dezena> e <unidade> <item>`
    Compound,
    /// `adicionar <quantidade> <item>`
    Plain,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::SpecialUnit => "special-unit",
            Shape::Compound => "compound",
            Shape::Plain => "plain",
        }
    }
}

/// Receives the capture groups of a rule's regex (group 0 is the whole match)
/// and builds the matched shape.
pub(crate) type Production = Box<dyn Fn(&[String]) -> Option<MatchShape> + Send + Sync>;

/// A command rule: a name, the shape it yields, the regex that recognizes it
/// in canonical text and a `production` turning the captures into a
/// [`MatchShape`].
pub(crate) struct Rule {
    pub name: &'static str,
    pub shape: Shape,
    pub regex: &'static Regex,
    pub production: Production,
    /// Buckets the input must carry for this rule to be tried.
    pub buckets: engine::BucketMask,
    /// Higher priority is tried first.
    pub priority: u16,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("regex", &self.regex.as_str())
            .field("production", &"<function>")
            .field("buckets", &self.buckets)
            .field("priority", &self.priority)
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}
