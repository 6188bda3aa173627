use std::{
	fs,
	path::{Path, PathBuf},
};

use crate::{
	error::{Error, Result},
	extract::RawDocument,
	identity::ResourceIdentity,
};

/// Writes one resource to `<directory>/<name>.<kind>.yaml`, replacing any
/// existing file at that path.
pub fn write_document(
	directory: &Path,
	identity: &ResourceIdentity,
	document: &RawDocument,
) -> Result<PathBuf> {
	let contents = serde_yaml::to_string(document).map_err(|source| Error::Encode {
		name: identity.name.clone(),
		kind: identity.kind.clone(),
		source,
	})?;

	let path = directory.join(identity.file_name());
	fs::write(&path, contents).map_err(|e| Error::write(&path, e))?;

	Ok(path)
}

#[cfg(test)]
mod tests {
	use serde_yaml::Value;

	use super::*;

	#[test]
	fn test_written_document_reads_back_equal() {
		let dir = tempfile::tempdir().unwrap();
		let value: Value = serde_yaml::from_str(
			"kind: Service\nmetadata:\n  name: web\nspec:\n  ports:\n    - port: 80\n",
		)
		.unwrap();
		let document = RawDocument::new(value.clone());
		let identity = ResourceIdentity::try_from_document(&document).unwrap();

		let path = write_document(dir.path(), &identity, &document).unwrap();
		assert_eq!(path, dir.path().join("web.Service.yaml"));

		let written: Value = serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
		assert_eq!(written, value);
	}

	#[test]
	fn test_existing_file_is_overwritten() {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("web.Pod.yaml"), "stale: true\n").unwrap();
		let document = RawDocument::new(
			serde_yaml::from_str("kind: Pod\nmetadata:\n  name: web\n").unwrap(),
		);
		let identity = ResourceIdentity::try_from_document(&document).unwrap();

		let path = write_document(dir.path(), &identity, &document).unwrap();

		let written = fs::read_to_string(path).unwrap();
		assert!(!written.contains("stale"));
		assert!(written.contains("kind: Pod"));
	}

	#[test]
	fn test_unwritable_target_is_write_error() {
		let dir = tempfile::tempdir().unwrap();
		// a directory where the file should go cannot be replaced by a write
		fs::create_dir(dir.path().join("web.Pod.yaml")).unwrap();
		let document = RawDocument::new(
			serde_yaml::from_str("kind: Pod\nmetadata:\n  name: web\n").unwrap(),
		);
		let identity = ResourceIdentity::try_from_document(&document).unwrap();

		let err = write_document(dir.path(), &identity, &document).unwrap_err();
		assert!(matches!(err, Error::Write { .. }));
	}
}
