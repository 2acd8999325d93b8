//! Binary entry point for the `corecount` command-line tool.
//!
//! Prints the logical and physical core counts of the host. `--logical` and
//! `--physical` print a single bare number for use in scripts, e.g.
//! `make -j"$(corecount --physical)"`.
//!
//! Diagnostics from the probes go to stderr through `log`; their volume is
//! chosen by a display level, 2 by default, lowered to 0 by `-q` and raised
//! by one per `-v`.

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Display level used when neither `-q` nor `-v` is given.
const DEFAULT_DISPLAY_LEVEL: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "corecount", version, about = "Print logical and physical CPU core counts")]
struct Cli {
    /// Print only the logical core count
    #[arg(long, conflicts_with = "physical")]
    logical: bool,

    /// Print only the physical core count
    #[arg(long)]
    physical: bool,

    /// Increase diagnostic verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all diagnostics
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn display_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            DEFAULT_DISPLAY_LEVEL.saturating_add(self.verbose)
        }
    }
}

/// 0 = silent; 1 = errors; 2 = warnings; 3 = info; 4 = debug; 5+ = trace.
fn level_filter(display_level: u8) -> LevelFilter {
    match display_level {
        0 => LevelFilter::Off,
        1 => LevelFilter::Error,
        2 => LevelFilter::Warn,
        3 => LevelFilter::Info,
        4 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logger(display_level: u8) -> anyhow::Result<()> {
    let cfg = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    TermLogger::init(
        level_filter(display_level),
        cfg,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_logger(cli.display_level())?;

    let mut out = io::stdout().lock();
    if cli.logical {
        writeln!(out, "{}", corecount::logical_count())?;
    } else if cli.physical {
        writeln!(out, "{}", corecount::physical_count())?;
    } else {
        let counts = corecount::counts();
        log::info!("smt: {}", counts.has_smt());
        writeln!(out, "logical: {}", counts.logical)?;
        writeln!(out, "physical: {}", counts.physical)?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("corecount: {e:#}");
        std::process::exit(1);
    }
}
