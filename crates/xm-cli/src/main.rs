//! xcodemod - inspect and validate Xcode modification descriptors.
//!
//! Two commands:
//! - `check` loads one or more descriptor files and reports each outcome
//! - `show` prints the parsed, normalized form of one descriptor
//!
//! stdout carries command payloads; logs go to stderr.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, error};
use xm_cli::exit_codes::ExitCode;
use xm_cli::logging;
use xm_cli::report::{CheckReport, FileOutcome};

/// Inspect and validate Xcode modification descriptors.
#[derive(Parser)]
#[command(name = "xcodemod")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands.
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum OutputFormat {
    /// Line-per-file output for terminals
    #[default]
    Human,

    /// Structured JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate descriptor files and report each outcome
    Check(CheckArgs),

    /// Print the parsed, normalized form of a descriptor as pretty JSON
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Descriptor files to validate
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Descriptor file to load
    file: PathBuf,

    /// Record this base path instead of the file's directory
    #[arg(long)]
    base_path: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.global.verbose, cli.global.quiet, cli.global.no_color);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(&cli.global, args),
        Commands::Show(args) => run_show(&cli.global, args),
    };

    std::process::exit(exit_code.as_i32());
}

/// Whether payload output should carry ANSI color.
fn use_color(global: &GlobalOpts) -> bool {
    !global.no_color && std::io::stdout().is_terminal()
}

fn run_check(global: &GlobalOpts, args: &CheckArgs) -> ExitCode {
    let mut report = CheckReport::new();

    for path in &args.files {
        let outcome = match xm_descriptor::load_from_file(path) {
            Ok(descriptor) => {
                debug!(path = %path.display(), entries = descriptor.entry_count(), "Descriptor valid");
                FileOutcome::ok(path, &descriptor)
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Descriptor failed to load");
                FileOutcome::failed(path, &err)
            }
        };
        report.push(outcome);
    }

    match global.format {
        OutputFormat::Human => print!("{}", report.render_human(use_color(global))),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(error = %err, "Failed to encode check report");
                return ExitCode::IoError;
            }
        },
    }

    report.exit_code()
}

fn run_show(global: &GlobalOpts, args: &ShowArgs) -> ExitCode {
    let mut descriptor = match xm_descriptor::load_from_file(&args.file) {
        Ok(descriptor) => descriptor,
        Err(err) => {
            let outcome = FileOutcome::failed(&args.file, &err);
            match global.format {
                OutputFormat::Human => {
                    eprintln!("{}", outcome.render_human(use_color(global)));
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&outcome) {
                    Ok(json) => println!("{json}"),
                    Err(encode_err) => {
                        error!(error = %encode_err, "Failed to encode load failure");
                    }
                },
            }
            return ExitCode::from_error(&err);
        }
    };

    if let Some(base) = &args.base_path {
        descriptor.base_path = base.clone();
    }

    match serde_json::to_string_pretty(&descriptor) {
        Ok(json) => {
            println!("{json}");
            ExitCode::Clean
        }
        Err(err) => {
            error!(error = %err, "Failed to encode descriptor");
            ExitCode::IoError
        }
    }
}
