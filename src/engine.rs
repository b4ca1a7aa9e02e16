//! Parsing and resolution engine.
//!
//! Turning a transcript into a cart instruction is a short pipeline:
//!
//! ```text
//! transcript ── canonicalize ──┐                 (normalize.rs)
//!                              │
//!               TriggerInfo::scan                (trigger.rs)
//!                 - buckets gate the rule set
//!                              │
//!                              v
//!                     Parser::run                 (parser.rs)
//!                       - rules by descending priority
//!                       - first production that yields a shape wins
//!                              │
//!                              v
//!                     resolve_command             (resolve.rs)
//!                       - lexicon lookups with fallbacks
//!                       - item assembly
//!                              │
//!                              v
//!                  ParsedCommand | no match
//! ```
//!
//! Unlike a saturation engine there is no fixpoint: the shapes are mutually
//! exclusive by priority, so one ordered pass over the active rules decides
//! the outcome.
//!
//! ## Responsibilities by module
//!
//! - `normalize.rs`: character-class filtering and case folding.
//! - `trigger.rs`: cheap scan of the canonical text into a `BucketMask`.
//! - `parser.rs`: ordered first-match over the active rules.
//! - `resolve.rs`: quantity arithmetic and `ParsedCommand` assembly.
//! - `metrics.rs`: timings and per-rule attempts for verbose runs.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`; run the CLI with
//! `CARRINHO_LOG=carrinho_voz=debug` to see gating, attempts and fallbacks.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/parser.rs"]
mod parser;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub use metrics::Attempt;
pub use normalize::{canonicalize, normalize};
pub use parser::Parser;
pub use trigger::BucketMask;
