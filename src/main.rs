use anyhow::Result;
use clap::Parser;
use slcsp::config::{Args, Paths};
use slcsp::pipeline;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let paths = Paths::from(&args);

    let summary = pipeline::run(&paths)?;

    info!(
        "Done: {} targets, {} priced, {} ambiguous, {} not found, {} short of Silver rates",
        summary.targets,
        summary.priced,
        summary.ambiguous,
        summary.not_found,
        summary.too_few_rates
    );
    info!("Answers written to {:?}", paths.answer);

    Ok(())
}
