//! confmask - mask secret values in line-oriented configuration files.
//!
//! Reads the input file line by line, partially redacts recognized secret
//! values (registry passwords, database keys, client secrets,
//! storage-account keys, connection-string passwords), and writes the
//! result to the output file. Everything else is preserved verbatim.

use clap::Parser;
use cm_core::config::RunConfig;
use cm_core::exit_codes::ExitCode;
use cm_core::logging::init_logging;
use cm_core::run::obfuscate_file;
use std::path::PathBuf;
use tracing::error;

/// Mask secret values in a configuration file
#[derive(Parser, Debug)]
#[command(name = "confmask")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file to mask
    input: PathBuf,

    /// Output file (default: <input>.masked.<ext>, truncated before writing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON mask policy file overriding the default 5/5 reveal widths
    #[arg(long, env = "CONFMASK_POLICY")]
    policy: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    std::process::exit(run(cli).as_i32());
}

fn run(cli: Cli) -> ExitCode {
    let mut config = RunConfig::new(cli.input);
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }
    if let Some(policy) = cli.policy.as_deref() {
        config = match config.with_policy_file(policy) {
            Ok(config) => config,
            Err(err) => {
                error!("{}", err);
                return err.exit_code();
            }
        };
    }

    match obfuscate_file(&config) {
        Ok(summary) => {
            println!(
                "{}: masked {} of {} lines",
                config.output.display(),
                summary.lines_masked,
                summary.lines_total
            );
            ExitCode::Clean
        }
        Err(err) => {
            error!("{}", err);
            err.exit_code()
        }
    }
}
