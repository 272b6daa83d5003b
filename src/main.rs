use std::path::PathBuf;

use audit_tools::audit::tools::report::{self, DEFAULT_INPUT, DEFAULT_OUTPUT};
use audit_tools::{Result, ToolError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    if !cli.input.exists() {
        return Err(ToolError::MissingInput(cli.input));
    }

    let summary = report::generate(&cli.input, &cli.output)?;
    println!(
        "Wrote {} ({} checks, {} with explicit results)",
        cli.output.display(),
        summary.total,
        summary.covered
    );
    Ok(())
}

/// Logs go to stderr so stdout carries only the summary line.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate the SEO audit results report from the checklist document."
)]
struct Cli {
    /// Checklist markdown document to read.
    #[arg(long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Destination path for the CSV report.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}
