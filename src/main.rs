mod debug_report;

use carrinho_voz::transcript::TranscribeDocument;
use carrinho_voz::{MatchOutcome, Options, parse_verbose_with};
use clap::Parser;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CARRINHO_LOG";

/// Exit codes.
const EXIT_NO_COMMAND: u8 = 3;
const EXIT_USAGE: u8 = 2;
const EXIT_INPUT: u8 = 1;

/// Parse a Portuguese shopping command ("adicionar duas dúzias de ovos") into
/// an item and a quantity.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Transcript text. If omitted, reads --input, --transcribe-json or stdin.
    text: Vec<String>,

    /// Transcript text to parse.
    #[arg(short, long, conflicts_with_all = ["text", "transcribe_json"])]
    input: Option<String>,

    /// Read the transcript from an Amazon Transcribe result file.
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    transcribe_json: Option<PathBuf>,

    /// Print the outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Require "adicionar" to open the transcript.
    #[arg(long)]
    anchored: bool,

    /// Keep leading/trailing whitespace of the item.
    #[arg(long)]
    keep_item_whitespace: bool,

    /// Print a rule-by-rule report.
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output in the report.
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color output in the report.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let transcript = match read_transcript(&args) {
        Ok(Some(text)) => text,
        Ok(None) => {
            eprintln!("error: no input provided (pass text, --input, --transcribe-json or pipe stdin)");
            return ExitCode::from(EXIT_USAGE);
        }
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(EXIT_INPUT);
        }
    };

    let options = Options { anchored: args.anchored, trim_item: !args.keep_item_whitespace };
    let res = parse_verbose_with(&transcript, &options);

    if args.verbose {
        let color = if args.color {
            true
        } else if args.no_color {
            false
        } else {
            io::stdout().is_terminal()
        };
        debug_report::print_run(&res, color);
    } else if args.json {
        match serde_json::to_string(&res.outcome) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(EXIT_INPUT);
            }
        }
    } else {
        match &res.outcome {
            MatchOutcome::Command(cmd) => println!("item: {}\nquantity: {}", cmd.item, cmd.quantity),
            MatchOutcome::NoMatch { .. } => eprintln!("{}", res.outcome),
        }
    }

    if res.outcome.is_command() { ExitCode::SUCCESS } else { ExitCode::from(EXIT_NO_COMMAND) }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

/// Pick the transcript source. `Ok(None)` means nothing usable was given.
fn read_transcript(args: &Args) -> carrinho_voz::Result<Option<String>> {
    let text = if let Some(input) = &args.input {
        input.clone()
    } else if let Some(path) = &args.transcribe_json {
        let doc = TranscribeDocument::from_path(path)?;
        if let Some(confidence) = doc.average_confidence() {
            debug!(confidence, "transcript confidence");
            if confidence < 0.5 {
                warn!(confidence, "low transcription confidence");
            }
        }
        doc.transcript()?
    } else if !args.text.is_empty() {
        args.text.join(" ")
    } else if io::stdin().is_terminal() {
        return Ok(None);
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    if text.trim().is_empty() { Ok(None) } else { Ok(Some(text)) }
}
