//! Turns an input source into an ordered list of resource documents.
//!
//! Two input shapes are understood:
//!
//! 1. A single document of `kind: List` whose `items` hold the resources.
//! 2. A plain multi-document stream, one resource per document.
//!
//! The `List` shape is tried first with a speculative decode of the first
//! document. When that does not yield a `List`, the source is rewound and read
//! as a stream instead.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use strum::Display;
use tracing::debug;

use crate::{error::Result, source::Source};

const LIST_KIND: &str = "List";

/// One resource as found in the input, kept untyped so it can be written back
/// exactly as it was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Value);

impl RawDocument {
	pub fn new(value: Value) -> Self {
		Self(value)
	}

	pub fn value(&self) -> &Value {
		&self.0
	}

	pub fn into_value(self) -> Value {
		self.0
	}
}

impl From<Value> for RawDocument {
	fn from(value: Value) -> Self {
		Self(value)
	}
}

/// Which decoding path produced the documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SourceShape {
	List,
	Stream,
}

#[derive(Debug)]
pub struct Extraction {
	pub shape: SourceShape,
	pub documents: Vec<RawDocument>,
}

#[derive(Deserialize)]
struct ListWrapper {
	#[serde(default)]
	kind: String,
	#[serde(default)]
	items: Option<Vec<RawDocument>>,
}

pub fn extract(source: &mut Source) -> Result<Extraction> {
	if let Some(documents) = extract_list(source) {
		debug!(count = documents.len(), "expanded List items");
		return Ok(Extraction {
			shape: SourceShape::List,
			documents,
		});
	}

	source.rewind()?;
	let documents = extract_stream(source)?;
	debug!(count = documents.len(), "decoded document stream");

	Ok(Extraction {
		shape: SourceShape::Stream,
		documents,
	})
}

/// Only the first document is looked at: a `List` there wins over whatever
/// follows it. Any decode failure just means the source is not a `List`.
fn extract_list(source: &mut Source) -> Option<Vec<RawDocument>> {
	let first = serde_yaml::Deserializer::from_reader(source.reader()).next()?;

	match ListWrapper::deserialize(first) {
		Ok(wrapper) if wrapper.kind.eq_ignore_ascii_case(LIST_KIND) => {
			Some(wrapper.items.unwrap_or_default())
		}
		Ok(wrapper) => {
			debug!(kind = %wrapper.kind, "first document is not a List");
			None
		}
		Err(e) => {
			debug!(%e, "first document is not a List");
			None
		}
	}
}

/// A stream holding nothing but an implicit null document (empty input,
/// blank lines, comments) has no resources.
fn extract_stream(source: &mut Source) -> Result<Vec<RawDocument>> {
	let documents = serde_yaml::Deserializer::from_reader(source.reader())
		.map(|document| -> Result<RawDocument> {
			Ok(RawDocument(Value::deserialize(document)?))
		})
		.collect::<Result<Vec<_>>>()?;

	match documents.as_slice() {
		[RawDocument(Value::Null)] => Ok(Vec::new()),
		_ => Ok(documents),
	}
}
