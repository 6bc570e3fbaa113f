use std::path::Path;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;
use tracing::trace;

use crate::Bindings;
use crate::Document;
use crate::Element;
use crate::EnvsubError;
use crate::EnvsubResult;
use crate::Node;
use crate::is_placeholder;
use crate::serializer;

/// Attributes named `dso_override_attribute_<target>` declare that, once the
/// value fully resolves, attribute `<target>` on the same element is replaced
/// with that value. The override attribute itself is always removed.
pub const OVERRIDE_ATTRIBUTE_PREFIX: &str = "dso_override_attribute_";

/// Resolve placeholders across the whole document: every attribute value of
/// every element, plus each element's leading text node. Single pass; a
/// resolved value that happens to contain `$` is not expanded again.
pub fn substitute(doc: &mut Document, bindings: &Bindings) {
	for element in doc.children.iter_mut().filter_map(Node::as_element_mut) {
		substitute_element(element, bindings);
	}
}

fn substitute_element(element: &mut Element, bindings: &Bindings) {
	for attr in element.attributes_mut() {
		if is_placeholder(&attr.value) {
			let resolved = bindings.resolve(&attr.value);
			trace!(attribute = %attr.name, from = %attr.value, to = %resolved, "substituted attribute");
			attr.value = resolved;
		}
	}

	if let Some(text) = element.leading_text_mut() {
		if is_placeholder(text) {
			*text = bindings.resolve(text);
		}
	}

	for child in element.child_elements_mut() {
		substitute_element(child, bindings);
	}
}

/// An override directive derived from one prefix-carrying attribute.
struct Directive {
	target: String,
	source: String,
}

/// Collapse every override attribute in the document into its target.
///
/// After this returns, no element carries an attribute with the override
/// prefix. A directive whose value never resolved is still consumed, but the
/// target attribute is left untouched.
pub fn apply_overrides(doc: &mut Document, bindings: &Bindings) {
	for element in doc.children.iter_mut().filter_map(Node::as_element_mut) {
		apply_element_overrides(element, bindings);
	}
}

fn apply_element_overrides(element: &mut Element, bindings: &Bindings) {
	// Snapshot the directives before applying any, so each one is
	// independent and the final state does not depend on discovery order.
	let directives: Vec<Directive> = element
		.attributes()
		.filter_map(|attr| {
			attr.name
				.strip_prefix(OVERRIDE_ATTRIBUTE_PREFIX)
				.map(|target| {
					Directive {
						target: target.to_string(),
						source: attr.name.clone(),
					}
				})
		})
		.collect();

	for directive in directives {
		// Removal of the override attribute is unconditional once a
		// directive is identified.
		let Some(raw) = element.remove_attribute(&directive.source) else {
			continue;
		};

		// Substitution has normally resolved the value already; running the
		// resolver again is a no-op in that case.
		let replacement = bindings.resolve(&raw);
		if is_placeholder(&replacement) {
			debug!(
				element = %element.name,
				attribute = %directive.target,
				value = %raw,
				"override value did not resolve, leaving target untouched"
			);
			continue;
		}
		if directive.target.is_empty() {
			debug!(element = %element.name, "override attribute has an empty target name, dropped");
			continue;
		}

		// Full overwrite: drop any pre-existing target first, then append.
		element.remove_attribute(&directive.target);
		element.set_attribute(directive.target, replacement);
	}

	for child in element.child_elements_mut() {
		apply_element_overrides(child, bindings);
	}
}

/// What happened to one processed file.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
	/// The file that was rewritten.
	pub path: PathBuf,
	/// Where the original bytes were moved.
	pub backup: PathBuf,
	/// Whether the rewritten content differs from the original bytes.
	pub changed: bool,
}

/// A file whose on-disk content differs from what processing would produce.
#[derive(Debug, Clone, Serialize)]
pub struct StaleFile {
	pub path: PathBuf,
	pub current: String,
	pub expected: String,
}

/// Process one manifest file in place: parse, substitute, apply overrides,
/// back up the original to `<path>.bak`, and overwrite `path` with the new
/// rendering. Parsing happens before any mutation or backup, so a file that
/// is not well-formed XML is left exactly as it was.
pub fn process_file(path: &Path, bindings: &Bindings) -> EnvsubResult<ProcessOutcome> {
	let input = std::fs::read_to_string(path).map_err(|error| EnvsubError::for_file(path, error))?;
	let mut doc =
		Document::parse(&input).map_err(|error| EnvsubError::for_file(path, error))?;

	substitute(&mut doc, bindings);
	apply_overrides(&mut doc, bindings);

	let rendered = serializer::to_string(&doc);
	let changed = rendered != input;
	let backup = serializer::write_with_backup(path, &rendered)
		.map_err(|error| EnvsubError::for_file(path, error))?;
	debug!(path = %path.display(), changed, "rewrote manifest");

	Ok(ProcessOutcome {
		path: path.to_path_buf(),
		backup,
		changed,
	})
}

/// Render `path` in memory and report whether a rewrite would change it.
/// Nothing is written and no backup is made.
pub fn check_file(path: &Path, bindings: &Bindings) -> EnvsubResult<Option<StaleFile>> {
	let input = std::fs::read_to_string(path).map_err(|error| EnvsubError::for_file(path, error))?;
	let mut doc =
		Document::parse(&input).map_err(|error| EnvsubError::for_file(path, error))?;

	substitute(&mut doc, bindings);
	apply_overrides(&mut doc, bindings);

	let expected = serializer::to_string(&doc);
	if expected == input {
		return Ok(None);
	}

	Ok(Some(StaleFile {
		path: path.to_path_buf(),
		current: input,
		expected,
	}))
}
