//! Engine run metrics.
//!
//! `Parser::run` records how long matching and resolution took and, for every
//! active rule, whether its regex matched. The API layer only surfaces these
//! through `parse_verbose_with`; the plain path ignores them.

use crate::api::{MatchShape, ParsedCommand};
use crate::{Range, Shape};
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Time spent trying rules.
    pub matching: Duration,
    /// Time spent resolving the winning shape.
    pub resolve: Duration,
}

/// One rule tried against the input, in the order it was tried.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub rule: &'static str,
    pub shape: Shape,
    /// Span of the regex match in canonical text, if the regex matched.
    pub span: Option<Range>,
    /// Whether the production accepted the match.
    pub produced: bool,
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Winning rule, its shape and the assembled command.
    pub matched: Option<(&'static str, MatchShape, ParsedCommand)>,
    /// Names of rules left after bucket gating, by priority.
    pub active_rules: Vec<&'static str>,
    pub attempts: Vec<Attempt>,
    pub metrics: RunMetrics,
}
