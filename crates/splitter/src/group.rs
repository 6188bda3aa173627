//! Output subdirectory assignment.
//!
//! Grouping is decided once for the whole batch: the prefix and the set of
//! label directories depend on every resource, so the plan is computed from
//! all identities before anything is written.

use std::{
	fs,
	path::{Path, PathBuf},
};

use itertools::Itertools;
use tracing::debug;

use crate::{
	config::GroupingMode,
	error::{Error, Result},
	identity::{ensure_path_component, ResourceIdentity},
};

/// Subdirectory assignment for every resource of a batch, by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupPlan {
	directories: Vec<String>,
	/// Index into `directories`, `None` for the output directory itself.
	assignments: Vec<Option<usize>>,
}

impl GroupPlan {
	pub fn compute(mode: GroupingMode, identities: &[ResourceIdentity]) -> Result<Self> {
		let plan = match mode {
			GroupingMode::None => Self::flat(identities.len()),
			GroupingMode::Prefix => Self::by_prefix(identities),
			GroupingMode::Tag => Self::by_label(identities),
		};

		for directory in &plan.directories {
			ensure_path_component("group directory", directory)?;
		}

		debug!(%mode, directories = ?plan.directories, "computed grouping");

		Ok(plan)
	}

	fn flat(len: usize) -> Self {
		Self {
			directories: Vec::new(),
			assignments: vec![None; len],
		}
	}

	fn by_prefix(identities: &[ResourceIdentity]) -> Self {
		let names = identities
			.iter()
			.map(|identity| identity.name.as_str())
			.collect::<Vec<_>>();
		let prefix = longest_common_prefix(&names);

		if prefix.is_empty() {
			return Self::flat(identities.len());
		}

		Self {
			directories: vec![prefix.to_string()],
			assignments: vec![Some(0); identities.len()],
		}
	}

	/// Resources without a label stay in the output directory.
	fn by_label(identities: &[ResourceIdentity]) -> Self {
		let directories = distinct_labels(
			identities
				.iter()
				.map(|identity| identity.group_label.as_str())
				.filter(|label| !label.is_empty()),
		)
		.into_iter()
		.map(str::to_string)
		.collect::<Vec<_>>();

		let assignments = identities
			.iter()
			.map(|identity| {
				directories
					.iter()
					.position(|directory| *directory == identity.group_label)
			})
			.collect();

		Self {
			directories,
			assignments,
		}
	}

	/// Distinct subdirectories, in the order they are first used.
	pub fn directories(&self) -> &[String] {
		&self.directories
	}

	pub fn len(&self) -> usize {
		self.assignments.len()
	}

	pub fn is_empty(&self) -> bool {
		self.assignments.is_empty()
	}

	/// Subdirectory of the resource at `index`, relative to the output directory.
	pub fn directory_of(&self, index: usize) -> Option<&str> {
		self.assignments
			.get(index)
			.copied()
			.flatten()
			.map(|dir| self.directories[dir].as_str())
	}

	pub fn target_dir(&self, output_dir: &Path, index: usize) -> PathBuf {
		match self.directory_of(index) {
			Some(directory) => output_dir.join(directory),
			None => output_dir.to_path_buf(),
		}
	}

	/// Creates the output directory and every group subdirectory up front.
	pub fn prepare(&self, output_dir: &Path) -> Result<()> {
		fs::create_dir_all(output_dir).map_err(|e| Error::directory_create(output_dir, e))?;

		for directory in &self.directories {
			let path = output_dir.join(directory);
			fs::create_dir_all(&path).map_err(|e| Error::directory_create(&path, e))?;
			debug!(path = %path.display(), "created group directory");
		}

		Ok(())
	}
}

/// Longest leading substring shared by every name.
///
/// Empty when there are no names, when any name is empty, or when the names
/// already differ at their first character. Comparison is case sensitive.
pub fn longest_common_prefix<S: AsRef<str>>(names: &[S]) -> &str {
	let Some((first, rest)) = names.split_first() else {
		return "";
	};
	let first = first.as_ref();
	let mut len = first.len();

	for other in rest {
		len = first[..len]
			.char_indices()
			.zip(other.as_ref().chars())
			.take_while(|((_, a), b)| a == b)
			.last()
			.map_or(0, |((idx, c), _)| idx + c.len_utf8());

		if len == 0 {
			break;
		}
	}

	&first[..len]
}

/// Deduplicates labels keeping the order in which each was first seen.
pub fn distinct_labels<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
	labels.into_iter().unique().collect()
}
