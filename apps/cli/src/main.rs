//! CLI for splitting Kubernetes manifests into one file per resource.

use anyhow::{Context, Result};
use clap::Parser;
use ks_splitter::Splitter;
use tracing::debug;

mod args;

use args::Cli;

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
		)
		.init();

	let cli = Cli::parse();
	let config = cli.to_config()?;
	debug!(?config, input = %cli.input, "starting split");

	let report = Splitter::new(config)
		.run(&cli.input)
		.with_context(|| format!("Failed to split manifests from {}", cli.input))?;

	debug!(shape = %report.shape, written = report.written.len(), "done");

	Ok(())
}
