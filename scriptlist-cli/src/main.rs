//! Scriptlist: regenerate the ISO 15924 script table from upstream registries.
//!
//! # Usage
//!
//! ```text
//! scriptlist init [<path>] [--output <file>] [--force]
//! scriptlist generate [--dry-run] [source flags]
//! scriptlist diff [source flags]
//! scriptlist list [--deprecated] [--json] [source flags]
//!
//! source flags:
//!   --config <file>
//!   --primary-url <url>   | --primary-file <file>
//!   --secondary-url <url> | --secondary-file <file>
//!   --output <file>
//! ```

mod commands;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use commands::{diff::DiffArgs, generate::GenerateArgs, init::InitArgs, list::ListArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "scriptlist",
    version,
    about = "Generate the ISO 15924 script list, reconciled with the IANA subtag registry",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default scriptlist.yaml.
    Init(InitArgs),

    /// Fetch both registries and write the generated source file.
    Generate(GenerateArgs),

    /// Show a unified diff of what generate would write.
    Diff(DiffArgs),

    /// Print the reconciled script list.
    List(ListArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Generate(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
