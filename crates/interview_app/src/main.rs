mod platform;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use session_logging::LogDestination;

/// Console coding-interview simulator with a sandboxed live preview.
#[derive(Debug, Parser)]
#[command(name = "interview_sim", version)]
struct Cli {
    /// RON configuration file; defaults apply when it is missing.
    #[arg(long, default_value = "interview_sim.ron")]
    config: PathBuf,
    /// Directory receiving preview.html and index.html.
    #[arg(long)]
    output: Option<PathBuf>,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    log: LogTarget,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogTarget {
    File,
    Terminal,
    Both,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    session_logging::initialize(cli.log.into(), level, None);

    let mut config = platform::config::load_config(&cli.config);
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    platform::run_app(config)
}
