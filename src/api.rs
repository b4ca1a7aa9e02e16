use crate::engine;
use crate::{Rule, Shape};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::command::rules::get);

/// Options that affect matching and result assembly.
#[derive(Debug, Clone)]
pub struct Options {
    /// Only accept commands whose verb opens the transcript. When off, any
    /// text before "adicionar" is ignored.
    pub anchored: bool,
    /// Trim leading and trailing whitespace from the captured item. Inner
    /// whitespace is always kept as transcribed.
    pub trim_item: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { anchored: false, trim_item: true }
    }
}

/// A recognized cart instruction.
///
/// Serializes as `{"item": ..., "quantity": ...}`, the payload handed to the
/// cart service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    /// Free-text item name; not checked against any catalog.
    pub item: String,
    pub quantity: u32,
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.quantity, self.item)
    }
}

/// The words a command rule captured, before any lexicon lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum MatchShape {
    /// "adicionar duas dúzias de ovos"
    SpecialUnit { quantity_word: String, unit_word: String, item: String },
    /// "adicionar vinte e um limões"
    Compound { first_word: String, second_word: String, item: String },
    /// "adicionar três maçãs"
    Plain { quantity_word: String, item: String },
}

impl MatchShape {
    pub fn shape(&self) -> Shape {
        match self {
            MatchShape::SpecialUnit { .. } => Shape::SpecialUnit,
            MatchShape::Compound { .. } => Shape::Compound,
            MatchShape::Plain { .. } => Shape::Plain,
        }
    }

    /// The captured item, untrimmed.
    pub fn item(&self) -> &str {
        match self {
            MatchShape::SpecialUnit { item, .. } | MatchShape::Compound { item, .. } | MatchShape::Plain { item, .. } => {
                item
            }
        }
    }
}

/// Outcome of parsing one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchOutcome {
    Command(ParsedCommand),
    /// No command shape matched. `text` is the normalized transcript, kept so
    /// the caller can tell the user what was heard.
    NoMatch { text: String },
}

impl MatchOutcome {
    pub fn command(&self) -> Option<&ParsedCommand> {
        match self {
            MatchOutcome::Command(cmd) => Some(cmd),
            MatchOutcome::NoMatch { .. } => None,
        }
    }

    pub fn is_command(&self) -> bool {
        matches!(self, MatchOutcome::Command(_))
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchOutcome::Command(cmd) => write!(f, "adicionar {cmd}"),
            MatchOutcome::NoMatch { text } => write!(f, "nenhum comando reconhecido: \"{text}\""),
        }
    }
}

/// Result from [`parse`] and [`parse_with`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The transcript as received.
    pub text: String,
    /// Canonical form the rules were matched against.
    pub normalized: String,
    pub outcome: MatchOutcome,
    /// Total elapsed time spent normalizing, matching and resolving.
    pub elapsed: Duration,
}

/// A rule tried during a verbose run.
#[derive(Debug, Clone)]
pub struct RuleAttempt {
    pub rule: String,
    pub shape: Shape,
    /// Whether the rule's regex matched.
    pub matched: bool,
    /// Whether the match had every part the shape needs.
    pub produced: bool,
    /// Byte span of the match in the normalized text.
    pub span: Option<(usize, usize)>,
}

/// Additional details returned by [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    pub total: Duration,
    pub normalize: Duration,
    pub matching: Duration,
    pub resolve: Duration,
    /// Rules left after bucket gating, in the order they are tried.
    pub active_rules: Vec<String>,
    /// Rules actually tried, up to and including the winner.
    pub attempts: Vec<RuleAttempt>,
    /// Words captured by the winning rule.
    pub shape: Option<MatchShape>,
    /// Name of the winning rule.
    pub rule: Option<String>,
}

/// Result from [`parse_verbose_with`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub text: String,
    pub normalized: String,
    pub outcome: MatchOutcome,
    pub elapsed: Duration,
    pub details: ParseDetails,
}

/// Parse `text` with default [`Options`].
///
/// Text before "adicionar" is ignored, so "ok adicionar três maçãs" is a
/// command. Use [`parse_with`] and [`Options::anchored`] to require the verb
/// at the start.
///
/// # Example
/// ```
/// use carrinho_voz::{MatchOutcome, parse};
///
/// let out = parse("Adicionar três maçãs");
/// assert_eq!(out.outcome.command().map(|c| c.quantity), Some(3));
///
/// let out = parse("Olá, como vai você?");
/// assert_eq!(out.outcome, MatchOutcome::NoMatch { text: "olá como vai você".into() });
///
/// let out = parse("ok adicionar três maçãs");
/// assert!(out.outcome.is_command());
/// ```
pub fn parse(text: &str) -> ParseResult {
    parse_with(text, &Options::default())
}

/// Parse `text` with the provided `options`.
pub fn parse_with(text: &str, options: &Options) -> ParseResult {
    let verbose = parse_verbose_with(text, options);
    ParseResult { text: verbose.text, normalized: verbose.normalized, outcome: verbose.outcome, elapsed: verbose.elapsed }
}

/// Parse `text` with default [`Options`], keeping per-rule details.
pub fn parse_verbose(text: &str) -> ParseResultVerbose {
    parse_verbose_with(text, &Options::default())
}

/// Parse `text` with `options` and return per-rule attempts and timings.
pub fn parse_verbose_with(text: &str, options: &Options) -> ParseResultVerbose {
    let total_start = Instant::now();

    let normalize_start = Instant::now();
    let normalized = engine::canonicalize(text);
    let normalize = normalize_start.elapsed();

    let parser = engine::Parser::new(&normalized, &DEFAULT_RULES);
    let run = parser.run(options);

    let attempts = run.attempts.iter().map(attempt_to_public).collect();
    let active_rules = run.active_rules.iter().map(|s| s.to_string()).collect();

    let (outcome, shape, rule) = match run.matched {
        Some((name, shape, command)) => {
            debug!(rule = name, item = command.item.as_str(), quantity = command.quantity, "command recognized");
            (MatchOutcome::Command(command), Some(shape), Some(name.to_string()))
        }
        None => {
            debug!(text = normalized.as_str(), "no command recognized");
            (MatchOutcome::NoMatch { text: normalized.clone() }, None, None)
        }
    };

    let total = total_start.elapsed();
    let details = ParseDetails {
        total,
        normalize,
        matching: run.metrics.matching,
        resolve: run.metrics.resolve,
        active_rules,
        attempts,
        shape,
        rule,
    };

    ParseResultVerbose { text: text.to_string(), normalized, outcome, elapsed: total, details }
}

fn attempt_to_public(attempt: &engine::Attempt) -> RuleAttempt {
    RuleAttempt {
        rule: attempt.rule.to_string(),
        shape: attempt.shape,
        matched: attempt.span.is_some(),
        produced: attempt.produced,
        span: attempt.span.map(|r| (r.start, r.end)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(item: &str, quantity: u32) -> MatchOutcome {
        MatchOutcome::Command(ParsedCommand { item: item.to_string(), quantity })
    }

    #[test]
    fn parse_with_returns_command() {
        let res = parse_with("Adicionar duas dúzias de ovos", &Options::default());

        assert_eq!(res.text, "Adicionar duas dúzias de ovos");
        assert_eq!(res.normalized, "adicionar duas dúzias de ovos");
        assert!(res.elapsed >= Duration::ZERO);
        assert_eq!(res.outcome, command("ovos", 24));
    }

    #[test]
    fn parse_verbose_includes_attempts_and_rules() {
        let res = parse_verbose_with("Adicionar vinte e um limões", &Options::default());

        assert_eq!(res.outcome, command("limões", 21));
        assert_eq!(res.elapsed, res.details.total);
        assert!(res.details.matching <= res.details.total);
        assert_eq!(res.details.active_rules.len(), 2, "unit rule should be gated off");

        let tried: Vec<Shape> = res.details.attempts.iter().map(|a| a.shape).collect();
        assert_eq!(tried, vec![Shape::Compound]);
        assert_eq!(res.details.attempts[0].span, Some((0, res.normalized.len())));
        assert_eq!(
            res.details.shape,
            Some(MatchShape::Compound {
                first_word: "vinte".into(),
                second_word: "um".into(),
                item: "limões".into()
            })
        );
    }

    #[test]
    fn parse_verbose_records_failed_attempts() {
        let res = parse_verbose_with("adicionar duas dúzias de", &Options::default());

        let attempts: Vec<(Shape, bool)> = res.details.attempts.iter().map(|a| (a.shape, a.matched)).collect();
        assert_eq!(attempts, vec![(Shape::SpecialUnit, false), (Shape::Plain, true)]);
        assert_eq!(res.outcome, command("dúzias de", 2));
    }

    #[test]
    fn no_match_carries_normalized_text() {
        let res = parse("Olá, como vai você?");
        assert_eq!(res.outcome, MatchOutcome::NoMatch { text: "olá como vai você".into() });
        assert!(res.outcome.command().is_none());
        assert_eq!(res.outcome.to_string(), "nenhum comando reconhecido: \"olá como vai você\"");
    }

    #[test]
    fn outcome_serializes_for_the_cart_service() {
        let cmd = ParsedCommand { item: "maçãs".into(), quantity: 3 };
        assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"{"item":"maçãs","quantity":3}"#);

        let outcome = MatchOutcome::NoMatch { text: "olá".into() };
        assert_eq!(serde_json::to_string(&outcome).unwrap(), r#"{"status":"no_match","text":"olá"}"#);
    }
}
