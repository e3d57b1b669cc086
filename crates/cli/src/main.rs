use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use syscov::commands::{list_exclusions_command, report_command, ReportOptions};
use syscov::init_logging;

/// System-call coverage reporter.
///
/// With no subcommand, lists the kernel's `sys_*` entry points and the
/// available `syscall.*` probes through SystemTap, scans test sources for
/// `/* COVERAGE: name ... */` markers, and prints which entry points are
/// uncovered and which are unhandled.
#[derive(Parser, Debug)]
#[command(
    name = "syscov",
    version,
    about = "System-call coverage reporter",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    report: ReportArgs,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Directory containing the test sources to scan [default: .]
    #[arg(long)]
    dir: Option<String>,

    /// Path to the `stap` executable. Defaults to `STAP_BIN`, then `stap` on PATH.
    #[arg(long)]
    stap: Option<PathBuf>,

    /// Extension of the test sources to scan [default: c]
    #[arg(long)]
    ext: Option<String>,

    /// Emit JSON instead of the text tables.
    #[arg(long, default_value_t = false)]
    json: bool,
}

impl ReportArgs {
    fn is_set(&self) -> bool {
        self.dir.is_some() || self.stap.is_some() || self.ext.is_some() || self.json
    }

    fn into_options(self) -> ReportOptions {
        let defaults = ReportOptions::default();
        ReportOptions {
            dir: self.dir.unwrap_or(defaults.dir),
            stap: self.stap,
            ext: self.ext.unwrap_or(defaults.ext),
            json: self.json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the entry points that are never counted.
    Exclusions {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Exclusions { json }) => {
            if cli.report.is_set() {
                bail!("--dir, --stap, --ext and --json apply to the report, not `exclusions`");
            }
            list_exclusions_command(json)?
        }
        None => report_command(&cli.report.into_options())?,
    }

    Ok(())
}
