//! Kubernetes manifest splitting.
//!
//! Takes a stream holding any number of Kubernetes resources and writes each
//! of them to its own `<name>.<kind>.yaml` file.
//!
//! # Overview
//!
//! A run goes through these stages, stopping at the first error:
//!
//! 1. **Read**: open the input file, or buffer standard input ([`source`])
//! 2. **Extract**: expand a `List` object, or decode a multi-document stream ([`extract`])
//! 3. **Identify**: read and validate `kind` and `metadata.name` of every resource ([`identity`])
//! 4. **Group**: decide the output subdirectory of every resource ([`group`])
//! 5. **Write**: serialize every resource to its file ([`writer`])
//!
//! # Example
//!
//! ```no_run
//! use ks_splitter::{GroupingMode, InputSource, SplitConfig, Splitter};
//!
//! let config = SplitConfig::new("out").grouping(GroupingMode::Tag);
//! let report = Splitter::new(config).run(&InputSource::path("manifests.yaml"))?;
//! println!("wrote {} files", report.written.len());
//! # Ok::<(), ks_splitter::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod group;
pub mod identity;
pub mod source;
pub mod writer;

mod splitter;

pub use config::{GroupingMode, InputSource, SplitConfig};
pub use error::{Error, Result};
pub use extract::{RawDocument, SourceShape};
pub use group::{distinct_labels, longest_common_prefix, GroupPlan};
pub use identity::{IdentityFields, ResourceIdentity, PART_OF_LABEL};
pub use source::Source;
pub use splitter::{SplitReport, Splitter};
