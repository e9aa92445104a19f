use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use hr_json_export::convert;
use hr_json_export::{ColumnPolicy, ConvertConfig, Lane, Result, ToolError};
use tracing_subscriber::EnvFilter;

const COMPLETION_MESSAGE: &str = "All JSON files created successfully.";

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let config = cli.into_config();
    convert::convert_all(&config)?;
    println!("{COMPLETION_MESSAGE}");
    Ok(())
}

/// Routes `tracing` output to stderr. `RUST_LOG` overrides the verbosity
/// flag when set.
fn init_logging(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,hr_json_export={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Convert HR CSV exports (roster, PTO balances, PTO requests, contacts) into JSON."
)]
struct Cli {
    /// Directory holding the CSV exports.
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Directory the JSON documents are written to.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Fail when a required column is missing instead of leaving it empty.
    #[arg(long)]
    strict: bool,

    /// Only run the given conversion. Repeat to select several.
    #[arg(long = "only", value_enum)]
    only: Vec<LaneKind>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> ConvertConfig {
        let lanes = if self.only.is_empty() {
            Lane::ALL.to_vec()
        } else {
            self.only.into_iter().map(Lane::from).collect()
        };

        ConvertConfig {
            input_dir: self.input_dir,
            output_dir: self.output_dir,
            policy: if self.strict {
                ColumnPolicy::Strict
            } else {
                ColumnPolicy::Lenient
            },
            lanes,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LaneKind {
    Employees,
    PtoInfo,
    PtoRequests,
    Contacts,
}

impl From<LaneKind> for Lane {
    fn from(kind: LaneKind) -> Self {
        match kind {
            LaneKind::Employees => Lane::Employees,
            LaneKind::PtoInfo => Lane::PtoEmployeeInfo,
            LaneKind::PtoRequests => Lane::PtoRequests,
            LaneKind::Contacts => Lane::Contacts,
        }
    }
}
