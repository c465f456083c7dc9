//! CLI entrypoint for the fmtconv demos and fixture harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use fmtconv_core::{Console, render};
use fmtconv_harness::args::parse_arg;
use fmtconv_harness::demo::{ConvertOptions, run_convert, run_greet};
use fmtconv_harness::structured_log::LogEmitter;
use fmtconv_harness::{TestRunner, VerificationSummary, load_fixture_sets};

/// Formatted console I/O and type conversion tooling.
#[derive(Debug, Parser)]
#[command(name = "fmtconv")]
#[command(about = "Formatted I/O and type conversion demos and fixture harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive greeting: prints, then reads first name, last name and age.
    Greet {
        /// Name used in the welcome line.
        #[arg(long, default_value = "Paul")]
        name: String,
    },
    /// Walk through integer, float and text conversions.
    Convert {
        /// Integer converted across widths and to floats.
        #[arg(long, default_value_t = 32, allow_negative_numbers = true)]
        int: i64,
        /// Signed value reinterpreted as unsigned.
        #[arg(long, default_value_t = -42, allow_negative_numbers = true)]
        signed: i64,
        /// Text parsed as an integer.
        #[arg(long, default_value = "32")]
        int_text: String,
        /// Text parsed as a float64.
        #[arg(long, default_value = "3.14159")]
        float_text: String,
    },
    /// Render a template; args are `kind:text` (e.g. `int32:5`), bare args are strings.
    Render {
        template: String,
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Verify the library against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Output report path (markdown).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Campaign name used in trace ids.
        #[arg(long, default_value = "fixtures")]
        campaign: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Greet { name } => {
            let mut console = Console::stdio();
            run_greet(&mut console, &name)?;
        }
        Command::Convert {
            int,
            signed,
            int_text,
            float_text,
        } => {
            let mut console = Console::stdio();
            let opts = ConvertOptions {
                int,
                signed,
                int_text,
                float_text,
            };
            run_convert(&mut console, &opts)?;
        }
        Command::Render { template, args } => {
            let values = args
                .iter()
                .map(|spec| parse_arg(spec))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", render(&template, &values));
        }
        Command::Verify {
            fixture,
            log,
            report,
            campaign,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = load_fixture_sets(&fixture, |path, err| {
                eprintln!("Skipping {}: {}", path.display(), err);
            })
            .map_err(|err| err.to_string())?;
            let runner = TestRunner::new(&campaign);
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, &campaign, &run_id())?),
                None => None,
            };

            let mut results = Vec::new();
            for set in &fixture_sets {
                let set_results = match emitter.as_mut() {
                    Some(emitter) => runner.run_logged(set, emitter)?,
                    None => runner.run(set),
                };
                results.extend(set_results);
            }

            let summary = VerificationSummary::from_results(results);
            for result in summary.results.iter().filter(|r| !r.passed) {
                eprintln!(
                    "FAIL {}/{} ({}): expected {:?}, got {:?}",
                    result.family, result.case_name, result.operation, result.expected, result.actual
                );
            }
            eprintln!(
                "Total: {}, Passed: {}, Failed: {}",
                summary.total, summary.passed, summary.failed
            );
            if let Some(path) = report {
                std::fs::write(&path, summary.to_markdown())?;
                eprintln!("Report written to {}", path.display());
            }
            if let Some(path) = log {
                eprintln!("Log written to {}", path.display());
            }
            if !summary.all_passed() {
                return Err(format!("{} fixture case(s) failed", summary.failed).into());
            }
        }
    }

    Ok(())
}

fn run_id() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    format!("run-{secs}")
}
