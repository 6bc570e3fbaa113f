//! `envsub_core` is the core library for the [envsub](https://github.com/launch-dso/envsub) manifest rewriter. It resolves `${NAME}` placeholders in XML manifest files against a flat binding table, applies declarative attribute overrides, and rewrites each file in place with a pretty-printed, re-parseable rendering and a `.bak` backup of the original.
//!
//! ## Processing Pipeline
//!
//! ```text
//! XML manifest file
//!   → Parser (quick-xml event stream → owned document tree)
//!   → Substitution engine (resolves placeholders in attributes + leading text)
//!   → Override engine (collapses dso_override_attribute_* directives)
//!   → Serializer (normalized declaration, two-space indent, blank lines elided)
//!   → Backup + overwrite (rename to `<path>.bak`, write the new rendering)
//! ```
//!
//! ## Modules
//!
//! - [`document`] — The owned XML tree: elements, attributes, text, and positionally preserved comments.
//! - [`discover`] — Manifest file discovery under a root directory using a glob pattern.
//! - [`serializer`] — Pretty printing and the backup-then-overwrite write path.
//!
//! ## Key Types
//!
//! - [`Bindings`] — The name→value table placeholders resolve against, conventionally seeded from the process environment.
//! - [`Document`] — A parsed XML document, mutated in place by the engines.
//! - [`ProcessOutcome`] — What happened to one file: backup location and whether the content changed.
//! - [`StaleFile`] — A file whose on-disk content differs from what processing would produce.
//! - [`EnvsubError`] — The error taxonomy. Unresolved placeholders are never errors; they stay verbatim.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use envsub_core::Bindings;
//! use envsub_core::discover::discover_manifests;
//! use envsub_core::discover::DEFAULT_MANIFEST_PATTERN;
//! use envsub_core::process_file;
//!
//! let bindings = Bindings::from_env();
//! let files = discover_manifests(Path::new("."), DEFAULT_MANIFEST_PATTERN).unwrap();
//! for file in files {
//! 	let outcome = process_file(&file, &bindings).unwrap();
//! 	println!("{} (backup: {})", outcome.path.display(), outcome.backup.display());
//! }
//! ```

pub use document::*;
pub use engine::*;
pub use error::*;
pub use resolver::*;

pub mod discover;
pub mod document;
mod engine;
mod error;
mod parser;
mod resolver;
pub mod serializer;

#[cfg(test)]
mod __fixtures;
