mod cli;

use cli::Args;
use constitution_writer::adapters::outbound::filesystem::FileSystemWriter;
use constitution_writer::application::dto::ConstitutionRequest;
use constitution_writer::application::use_cases::WriteConstitutionUseCase;
use constitution_writer::config::{discover_config, load_config_from_path, resolve_settings};
use constitution_writer::domain::PREAMBLE;
use constitution_writer::logging::{init_logging, resolve_level, LoggingConfig};
use constitution_writer::shared::error::ExitCode;
use constitution_writer::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use tracing::debug;

fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    // Write and append failures are logged, never reported through the exit code
    process::exit(ExitCode::Success.as_i32());
}

fn run(args: Args) -> Result<()> {
    let config = match args.config.as_deref() {
        Some(path) => Some(load_config_from_path(Path::new(path))?),
        None => discover_config(Path::new("."))?,
    };
    let settings = resolve_settings(args.output, config);

    let level = resolve_level(
        args.log_level.as_deref(),
        args.verbose,
        args.quiet,
        settings.config_log_level.as_deref(),
    );
    init_logging(LoggingConfig::with_level(level));
    debug!(?settings, "Resolved settings");

    let use_case = WriteConstitutionUseCase::new(FileSystemWriter::new());
    let request = ConstitutionRequest::new(
        settings.output_path,
        PREAMBLE.to_string(),
        settings.appended_line,
    );
    let response = use_case.execute(request);

    if response.is_complete() && !args.quiet {
        eprintln!(
            "{} {}",
            "✅ Output complete:".green(),
            response.output_path.display()
        );
    }

    Ok(())
}
