//! Ordered first-match parser.
//!
//! This module is the operational core of the engine:
//!
//! - Select the rules that are plausible for the input (bucket gating; see
//!   `trigger.rs`).
//! - Try them by descending priority against the canonical text.
//! - Stop at the first rule whose production yields a [`MatchShape`] and
//!   resolve it (see `resolve.rs`).
//!
//! ## Why priority matters
//!
//! ```text
//! "adicionar duas dúzias de ovos"
//!   special-unit (30)  -> quantity "duas", unit "dúzias", item "ovos"   ✓ wins
//!   compound     (20)  -> not tried
//!   plain        (10)  -> would read quantity "duas", item "dúzias de ovos"
//! ```
//!
//! The special-unit and compound phrasings are also valid plain phrasings,
//! so the plain rule must only ever see what the others rejected.
//!
//! The output is deterministic given the same input, rules and options.

use super::metrics::{Attempt, RunMetrics, RunResult};
use super::resolve::resolve_command;
use super::trigger::TriggerInfo;
use crate::api::Options;
use crate::{Range, Rule};
use std::time::Instant;
use tracing::debug;

/// Parser orchestrates applying `Rule`s against canonical text.
///
/// Usage: create with `Parser::new(canonical, &rules)` then call `run(options)`.
#[derive(Debug)]
pub struct Parser<'a> {
    /// Canonical text to parse (see [`canonicalize`](super::canonicalize)).
    input: &'a str,
    /// Active rules, highest priority first.
    active: Vec<&'a Rule>,
}

impl<'a> Parser<'a> {
    /// Create a new `Parser` for `input` using `rules`.
    ///
    /// Rules whose buckets are not present in the input are dropped here; the
    /// rest are ordered by descending priority. Rules with equal priority keep
    /// their order in `rules`.
    pub fn new(input: &'a str, rules: &'a [Rule]) -> Self {
        let trigger_info = TriggerInfo::scan(input);
        debug!(buckets = ?trigger_info.buckets, "trigger scan");

        let mut active: Vec<&Rule> = rules.iter().filter(|r| trigger_info.satisfies(r.buckets)).collect();
        active.sort_by(|a, b| b.priority.cmp(&a.priority));

        debug!(active = active.len(), total = rules.len(), "rules active after gating");

        Parser { input, active }
    }

    pub(crate) fn active_rule_names(&self) -> Vec<&'static str> {
        self.active.iter().map(|r| r.name).collect()
    }

    /// Try one rule against the input.
    ///
    /// Returns the span of the regex match (if any) and the capture groups,
    /// with missing optional groups as empty strings so indices stay stable.
    fn captures(&self, rule: &Rule, options: &Options) -> Option<(Range, Vec<String>)> {
        let caps = rule.regex.captures(self.input)?;
        let whole = caps.get(0)?;

        if options.anchored && !self.input[..whole.start()].trim().is_empty() {
            debug!(rule = rule.name, start = whole.start(), "match rejected: text before the verb");
            return None;
        }

        let groups: Vec<String> =
            (0..caps.len()).map(|i| caps.get(i).map(|g| g.as_str().to_string()).unwrap_or_default()).collect();
        Some((Range { start: whole.start(), end: whole.end() }, groups))
    }

    /// Run the active rules in order and resolve the first shape produced.
    pub fn run(self, options: &Options) -> RunResult {
        let mut attempts = Vec::with_capacity(self.active.len());
        let mut winner = None;

        let matching_start = Instant::now();
        for rule in &self.active {
            let captured = self.captures(rule, options);
            let span = captured.as_ref().map(|(range, _)| *range);
            let shape = captured.and_then(|(_, groups)| (rule.production)(groups.as_slice()));
            let produced = shape.is_some();

            debug!(rule = rule.name, matched = span.is_some(), produced, "rule attempt");
            attempts.push(Attempt { rule: rule.name, shape: rule.shape, span, produced });

            if let Some(shape) = shape {
                winner = Some((rule.name, shape));
                break;
            }
        }
        let matching = matching_start.elapsed();

        let resolve_start = Instant::now();
        let matched = winner.map(|(name, shape)| {
            let command = resolve_command(&shape, options);
            (name, shape, command)
        });
        let resolve = resolve_start.elapsed();

        RunResult {
            matched,
            active_rules: self.active_rule_names(),
            attempts,
            metrics: RunMetrics { matching, resolve },
        }
    }
}
