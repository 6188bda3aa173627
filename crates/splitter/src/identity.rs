//! Resource identity: `kind`, `metadata.name` and the grouping label.
//!
//! Extraction happens in two steps. [`IdentityFields::project`] reads whatever
//! identity fields a document happens to have and never fails, no matter the
//! document's shape. [`IdentityFields::validate`] then applies the rules.

use serde_yaml::Value;

use crate::{
	error::{Error, Result},
	extract::RawDocument,
};

/// Label holding the name of the application a resource belongs to.
pub const PART_OF_LABEL: &str = "app.kubernetes.io/part-of";

/// Identity fields as found in a document, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityFields {
	pub kind: Option<String>,
	pub name: Option<String>,
	pub group_label: Option<String>,
}

impl IdentityFields {
	/// Values of the wrong type count as absent.
	pub fn project(value: &Value) -> Self {
		let metadata = value.get("metadata");

		Self {
			kind: string_at(Some(value), "kind"),
			name: string_at(metadata, "name"),
			group_label: string_at(metadata.and_then(|m| m.get("labels")), PART_OF_LABEL),
		}
	}

	/// `kind` is checked before `name`, so a document missing both reports
	/// [`Error::MissingKind`].
	pub fn validate(self) -> Result<ResourceIdentity> {
		let kind = self
			.kind
			.filter(|kind| !kind.is_empty())
			.ok_or(Error::MissingKind)?;
		let name = self
			.name
			.filter(|name| !name.is_empty())
			.ok_or_else(|| Error::MissingName { kind: kind.clone() })?;

		ensure_path_component("kind", &kind)?;
		ensure_path_component("name", &name)?;

		Ok(ResourceIdentity {
			kind,
			name,
			group_label: self.group_label.unwrap_or_default(),
		})
	}
}

fn string_at(value: Option<&Value>, key: &str) -> Option<String> {
	value?.get(key)?.as_str().map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
	pub kind: String,
	pub name: String,
	/// Empty when the resource carries no `app.kubernetes.io/part-of` label.
	pub group_label: String,
}

impl ResourceIdentity {
	pub fn try_from_document(document: &RawDocument) -> Result<Self> {
		IdentityFields::project(document.value()).validate()
	}

	/// `<name>.<kind>.yaml`
	pub fn file_name(&self) -> String {
		format!("{}.{}.yaml", self.name, self.kind)
	}
}

/// Rejects values that would not stay a single entry inside the output
/// directory once joined to it.
pub(crate) fn ensure_path_component(field: &'static str, value: &str) -> Result<()> {
	let is_unsafe = value.is_empty()
		|| value == "."
		|| value == ".."
		|| value.contains(['/', '\\', '\0']);

	if is_unsafe {
		Err(Error::UnsafePathComponent {
			field,
			value: value.to_string(),
		})
	} else {
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn yaml(input: &str) -> Value {
		serde_yaml::from_str(input).unwrap()
	}

	#[test]
	fn test_project_tolerates_any_shape() {
		for input in ["foobar", "42", "~", "- kind: Pod", "metadata: plain"] {
			assert_eq!(IdentityFields::project(&yaml(input)), IdentityFields::default());
		}
	}

	#[test]
	fn test_project_ignores_non_string_fields() {
		let fields = IdentityFields::project(&yaml("kind: 3\nmetadata:\n  name: [a]\n"));
		assert_eq!(fields.kind, None);
		assert_eq!(fields.name, None);
	}

	#[test]
	fn test_missing_identity_fields() {
		let err = IdentityFields::project(&yaml("foobar")).validate().unwrap_err();
		assert!(matches!(err, Error::MissingKind));

		let err = IdentityFields::project(&yaml("kind: kind")).validate().unwrap_err();
		assert!(matches!(err, Error::MissingName { kind } if kind == "kind"));

		let err = IdentityFields::project(&yaml("metadata:\n  name: name\n"))
			.validate()
			.unwrap_err();
		assert!(matches!(err, Error::MissingKind));
	}

	#[test]
	fn test_kind_is_checked_before_name() {
		let err = IdentityFields::project(&yaml("kind: ''\nmetadata: {}\n"))
			.validate()
			.unwrap_err();
		assert!(matches!(err, Error::MissingKind));
	}

	#[test]
	fn test_full_identity() {
		let value = yaml(
			r#"
kind: kind
metadata:
  name: name
  labels:
    app.kubernetes.io/part-of: bar
"#,
		);

		let identity = ResourceIdentity::try_from_document(&RawDocument::new(value)).unwrap();
		assert_eq!(
			identity,
			ResourceIdentity {
				kind: "kind".to_string(),
				name: "name".to_string(),
				group_label: "bar".to_string(),
			}
		);
		assert_eq!(identity.file_name(), "name.kind.yaml");
	}

	#[test]
	fn test_group_label_defaults_to_empty() {
		let value = yaml("kind: Pod\nmetadata:\n  name: web\n  labels:\n    app: web\n");

		let identity = IdentityFields::project(&value).validate().unwrap();
		assert_eq!(identity.group_label, "");
	}

	#[test]
	fn test_path_unsafe_identity_is_rejected() {
		for input in [
			"kind: Pod\nmetadata:\n  name: ../escape\n",
			"kind: Pod\nmetadata:\n  name: ..\n",
			"kind: a/b\nmetadata:\n  name: web\n",
		] {
			let err = IdentityFields::project(&yaml(input)).validate().unwrap_err();
			assert!(matches!(err, Error::UnsafePathComponent { .. }), "input: {input:?}");
		}
	}
}
