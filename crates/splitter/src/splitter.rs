use std::path::PathBuf;

use tracing::{debug, error, info, instrument};

use crate::{
	config::{InputSource, SplitConfig},
	error::Result,
	extract::{self, SourceShape},
	group::GroupPlan,
	identity::ResourceIdentity,
	source::Source,
	writer,
};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
	pub shape: SourceShape,
	/// Every file written, in input order.
	pub written: Vec<PathBuf>,
}

/// Reads a manifest source and writes every resource in it to its own file.
///
/// The first error stops the run. Files written before it stay on disk.
#[derive(Debug, Clone)]
pub struct Splitter {
	config: SplitConfig,
}

impl Splitter {
	pub fn new(config: SplitConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &SplitConfig {
		&self.config
	}

	#[instrument(skip(self), fields(output_dir = %self.config.output_dir.display()))]
	pub fn run(&self, input: &InputSource) -> Result<SplitReport> {
		let mut source = Source::open(input)?;
		self.run_source(&mut source)
	}

	pub fn run_source(&self, source: &mut Source) -> Result<SplitReport> {
		let extract::Extraction { shape, documents } = extract::extract(source)?;
		debug!(%shape, count = documents.len(), "extracted documents");

		let identities = documents
			.iter()
			.enumerate()
			.map(|(index, document)| {
				ResourceIdentity::try_from_document(document).map_err(|e| {
					error!(index, %e, "invalid resource document");
					e
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let plan = GroupPlan::compute(self.config.grouping, &identities)?;
		plan.prepare(&self.config.output_dir)?;

		let mut written = Vec::with_capacity(documents.len());
		for (index, (document, identity)) in documents.iter().zip(&identities).enumerate() {
			if !self.config.quiet {
				info!("Found {}.{}", identity.name, identity.kind);
			}

			let directory = plan.target_dir(&self.config.output_dir, index);
			let path = writer::write_document(&directory, identity, document)?;

			if !self.config.quiet {
				info!("Saved to {}", path.display());
			}
			written.push(path);
		}

		debug!(count = written.len(), "split finished");

		Ok(SplitReport { shape, written })
	}
}
