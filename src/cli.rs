use clap::Parser;

/// Write the opening of the US Constitution to a file, then append a line
#[derive(Parser, Debug)]
#[command(name = "constitution-writer")]
#[command(version)]
#[command(about = "Write the opening of the US Constitution to a file, then append a line", long_about = None)]
pub struct Args {
    /// Output file path (defaults to MyConstitution.txt in the current directory)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to a config file (defaults to constitution-writer.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level: trace, debug, info, warn or error
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    pub log_level: Option<String>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
