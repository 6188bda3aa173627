use std::path::PathBuf;

use clap::Parser;
use ks_splitter::{GroupingMode, InputSource, SplitConfig};

#[derive(Parser, Debug)]
#[command(name = "kube-split", version)]
#[command(about = "Split Kubernetes manifests into one file per resource", long_about = None)]
pub struct Cli {
	/// Path to file with Kubernetes manifests, `-` reads standard input
	#[arg(short = 'f', long = "file", value_name = "FILE")]
	pub input: InputSource,

	/// Path to output directory, created if missing
	#[arg(short, long, value_name = "DIR")]
	pub output: PathBuf,

	/// Do not report every found and saved resource
	#[arg(short, long, default_value_t = false)]
	pub quiet: bool,

	/// Group resources into a directory named by the common prefix of their names
	#[arg(long, default_value_t = false)]
	pub prefix: bool,

	/// Group resources into directories named by their `app.kubernetes.io/part-of` label
	#[arg(long, default_value_t = false)]
	pub tag: bool,
}

impl Cli {
	pub fn to_config(&self) -> ks_splitter::Result<SplitConfig> {
		let grouping = GroupingMode::from_flags(self.prefix, self.tag)?;

		Ok(SplitConfig::new(&self.output)
			.quiet(self.quiet)
			.grouping(grouping))
	}
}
