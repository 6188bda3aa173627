//! Run configuration, set once before a split starts.

use std::{
	convert::Infallible,
	fmt,
	path::{Path, PathBuf},
	str::FromStr,
};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::{Error, Result};

/// Policy used to assign every resource to an output subdirectory.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GroupingMode {
	/// Everything is written to the output directory itself.
	#[default]
	None,
	/// One subdirectory named by the longest common prefix of all resource names.
	Prefix,
	/// One subdirectory per distinct `app.kubernetes.io/part-of` label value.
	Tag,
}

impl GroupingMode {
	/// Maps the two command line switches onto a single mode.
	///
	/// Asking for both is rejected here, before any input is touched.
	pub fn from_flags(prefix: bool, tag: bool) -> Result<Self> {
		match (prefix, tag) {
			(true, true) => Err(Error::ConfigurationConflict(Self::Prefix, Self::Tag)),
			(true, false) => Ok(Self::Prefix),
			(false, true) => Ok(Self::Tag),
			(false, false) => Ok(Self::None),
		}
	}
}

/// Where the manifests are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
	Stdin,
	Path(PathBuf),
}

impl InputSource {
	pub const STDIN_DESIGNATOR: &'static str = "-";

	pub fn path(path: impl AsRef<Path>) -> Self {
		Self::Path(path.as_ref().to_path_buf())
	}
}

impl FromStr for InputSource {
	type Err = Infallible;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		if s == Self::STDIN_DESIGNATOR {
			Ok(Self::Stdin)
		} else {
			Ok(Self::Path(PathBuf::from(s)))
		}
	}
}

impl fmt::Display for InputSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stdin => write!(f, "<stdin>"),
			Self::Path(path) => write!(f, "{}", path.display()),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
	pub output_dir: PathBuf,
	/// Suppresses the per resource "found" and "saved" notices.
	#[serde(default)]
	pub quiet: bool,
	#[serde(default)]
	pub grouping: GroupingMode,
}

impl SplitConfig {
	pub fn new(output_dir: impl Into<PathBuf>) -> Self {
		Self {
			output_dir: output_dir.into(),
			quiet: false,
			grouping: GroupingMode::None,
		}
	}

	pub fn quiet(mut self, quiet: bool) -> Self {
		self.quiet = quiet;
		self
	}

	pub fn grouping(mut self, grouping: GroupingMode) -> Self {
		self.grouping = grouping;
		self
	}
}
