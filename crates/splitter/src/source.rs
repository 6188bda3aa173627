//! Seekable byte sources for manifest input.

use std::{
	fs::File,
	io::{self, Cursor, Read, Seek},
	path::Path,
};

use tracing::debug;

use crate::{
	config::InputSource,
	error::{Error, Result},
};

pub trait ReadSeek: Read + Seek {}

impl<T: Read + Seek> ReadSeek for T {}

/// Input bytes that can be decoded more than once.
///
/// List detection needs a speculative decode, so every source must be able to
/// rewind to its start. Standard input is buffered into memory for that.
pub struct Source {
	path: Box<Path>,
	inner: Box<dyn ReadSeek>,
}

impl Source {
	pub fn open(input: &InputSource) -> Result<Self> {
		match input {
			InputSource::Stdin => Self::from_reader(io::stdin().lock()),
			InputSource::Path(path) => {
				let file =
					File::open(path).map_err(|e| Error::source_unavailable(path, e))?;
				let metadata = file
					.metadata()
					.map_err(|e| Error::source_unavailable(path, e))?;
				if metadata.is_dir() {
					return Err(Error::source_unavailable(
						path,
						io::Error::other("input path is a directory"),
					));
				}
				debug!(path = %path.display(), "opened input file");

				Ok(Self {
					path: path.as_path().into(),
					inner: Box::new(file),
				})
			}
		}
	}

	/// Buffers a non seekable reader completely.
	pub fn from_reader(mut reader: impl Read) -> Result<Self> {
		let mut buf = Vec::new();
		reader
			.read_to_end(&mut buf)
			.map_err(|e| Error::source_unavailable(InputSource::STDIN_DESIGNATOR, e))?;
		debug!(bytes = buf.len(), "buffered standard input");

		Ok(Self::from_bytes(buf))
	}

	pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
		Self {
			path: Path::new(InputSource::STDIN_DESIGNATOR).into(),
			inner: Box::new(Cursor::new(bytes.into())),
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub(crate) fn reader(&mut self) -> &mut dyn ReadSeek {
		&mut *self.inner
	}

	pub(crate) fn rewind(&mut self) -> Result<()> {
		self.inner
			.rewind()
			.map_err(|e| Error::source_unavailable(&self.path, e))
	}
}
