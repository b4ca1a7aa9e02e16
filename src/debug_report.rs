use carrinho_voz::{MatchOutcome, ParseResultVerbose, RuleAttempt};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(res: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Transcript: \"{}\"", res.text), ansi::CYAN)));
    println!("   {} \"{}\"", palette.dim("normalized:"), res.normalized);

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    if details.active_rules.is_empty() {
        println!("{}", palette.dim("  No rule active"));
        println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
        println!("  • The word \"adicionar\" is missing or glued to another word");
        println!("\n{}", palette.dim("  Tip: Set CARRINHO_LOG=carrinho_voz=debug to see gating details"));
    } else {
        for attempt in &details.attempts {
            println!("  {}", fmt_attempt(attempt, &palette));
        }
        let skipped = details.active_rules.len() - details.attempts.len();
        if skipped > 0 {
            println!("  {}", palette.dim(format!("... {} lower-priority rule(s) not tried", skipped)));
        }
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &res.outcome {
        MatchOutcome::Command(cmd) => {
            println!(
                "  {} {} {}",
                palette.bold(palette.paint(cmd.quantity.to_string(), ansi::GREEN)),
                palette.dim("×"),
                palette.bold(palette.paint(&cmd.item, ansi::GREEN)),
            );
            if let (Some(rule), Some(shape)) = (&details.rule, &details.shape) {
                println!(
                    "      {} {}  {} {}",
                    palette.dim("rule:"),
                    palette.paint(rule, ansi::CYAN),
                    palette.dim("│ shape:"),
                    palette.paint(shape.shape().name(), ansi::BLUE)
                );
            }
        }
        MatchOutcome::NoMatch { .. } => println!("  {}", palette.paint(res.outcome.to_string(), ansi::YELLOW)),
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Normalize: {}  │  Matching: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.normalize)),
        palette.paint(format!("{:?}", details.matching), ansi::CYAN),
        palette.dim(format!("{:?}", details.resolve)),
    );
    println!();
}

fn fmt_attempt(attempt: &RuleAttempt, palette: &ansi::Palette) -> String {
    let status = match (attempt.matched, attempt.produced) {
        (true, true) => palette.paint("✓", ansi::GREEN),
        (true, false) => palette.paint("~", ansi::YELLOW),
        (false, _) => palette.dim("✗"),
    };
    let span = match attempt.span {
        Some((start, end)) => palette.paint(format!("{}..{}", start, end), ansi::YELLOW),
        None => palette.dim("-"),
    };
    format!("{} {} {} {}", status, palette.paint(attempt.shape.name(), ansi::BLUE), span, palette.dim(&attempt.rule))
}
