use std::{io, path::Path};

use thiserror::Error;

use crate::config::GroupingMode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("input source is unavailable <path='{}'>: {source}", .path.display())]
	SourceUnavailable {
		path: Box<Path>,
		#[source]
		source: io::Error,
	},
	#[error("failed to decode manifests: {0}")]
	Decode(#[from] serde_yaml::Error),

	#[error("resource has no kind")]
	MissingKind,
	#[error("resource <kind='{kind}'> has no metadata.name")]
	MissingName { kind: String },
	#[error("refusing to use {field} <value='{value}'> as a path component")]
	UnsafePathComponent { field: &'static str, value: String },

	#[error("failed to create output directory <path='{}'>: {source}", .path.display())]
	DirectoryCreate {
		path: Box<Path>,
		#[source]
		source: io::Error,
	},
	#[error("failed to encode resource <name='{name}', kind='{kind}'>: {source}")]
	Encode {
		name: String,
		kind: String,
		#[source]
		source: serde_yaml::Error,
	},
	#[error("failed to write resource <path='{}'>: {source}", .path.display())]
	Write {
		path: Box<Path>,
		#[source]
		source: io::Error,
	},

	#[error("grouping modes '{0}' and '{1}' are mutually exclusive")]
	ConfigurationConflict(GroupingMode, GroupingMode),
}

impl Error {
	pub(crate) fn source_unavailable(path: impl AsRef<Path>, source: io::Error) -> Self {
		Self::SourceUnavailable {
			path: path.as_ref().into(),
			source,
		}
	}

	pub(crate) fn directory_create(path: impl AsRef<Path>, source: io::Error) -> Self {
		Self::DirectoryCreate {
			path: path.as_ref().into(),
			source,
		}
	}

	pub(crate) fn write(path: impl AsRef<Path>, source: io::Error) -> Self {
		Self::Write {
			path: path.as_ref().into(),
			source,
		}
	}
}
