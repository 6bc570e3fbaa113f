//! Pretty printing and the backup-then-overwrite write path.
//!
//! The rendering contract exists so a rewritten manifest stays byte-stable
//! across repeated parse/save cycles: a normalized declaration with no
//! `encoding=` attribute, two-space indentation, whitespace-only lines
//! elided, comments reproduced verbatim in their original position, and
//! self-closing empty elements written as `<tag attr="v"/>`.

use std::path::Path;
use std::path::PathBuf;

use quick_xml::escape::escape;

use crate::Document;
use crate::Element;
use crate::EnvsubResult;
use crate::Node;

/// The declaration every rendered document starts with, regardless of what
/// the input declared. Downstream tooling expects the `encoding` attribute
/// to be absent.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

const INDENT: &str = "  ";

/// Render a document to its canonical pretty-printed form. The result has no
/// trailing newline.
pub fn to_string(doc: &Document) -> String {
	let mut out = String::new();
	out.push_str(XML_DECLARATION);
	out.push('\n');
	for node in &doc.children {
		write_node(&mut out, node, 0);
	}

	// Text nodes carrying the source document's layout can leave
	// whitespace-only lines behind; elide them so a second pass over the
	// output reproduces it byte for byte.
	let lines: Vec<&str> = out.lines().filter(|line| !line.trim().is_empty()).collect();
	lines.join("\n")
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
	match node {
		Node::Element(element) => write_element(out, element, depth),
		Node::Text(text) => {
			if !text.trim().is_empty() {
				out.push_str(&INDENT.repeat(depth));
				out.push_str(&escape(text.trim()));
				out.push('\n');
			}
		}
		Node::Comment(content) => {
			out.push_str(&INDENT.repeat(depth));
			out.push_str("<!--");
			out.push_str(content);
			out.push_str("-->\n");
		}
	}
}

fn write_element(out: &mut String, element: &Element, depth: usize) {
	let indent = INDENT.repeat(depth);
	out.push_str(&indent);
	out.push('<');
	out.push_str(&element.name);
	for attr in element.attributes() {
		out.push(' ');
		out.push_str(&attr.name);
		out.push_str("=\"");
		out.push_str(&escape(&attr.value));
		out.push('"');
	}

	let visible: Vec<&Node> = element
		.children
		.iter()
		.filter(|node| !node.is_blank_text())
		.collect();

	match visible.as_slice() {
		[] => out.push_str("/>\n"),
		// A sole text child renders inline, verbatim.
		[Node::Text(text)] => {
			out.push('>');
			out.push_str(&escape(text));
			out.push_str("</");
			out.push_str(&element.name);
			out.push_str(">\n");
		}
		_ => {
			out.push_str(">\n");
			for child in visible {
				write_node(out, child, depth + 1);
			}
			out.push_str(&indent);
			out.push_str("</");
			out.push_str(&element.name);
			out.push_str(">\n");
		}
	}
}

/// The backup location for `path`: the full file name with `.bak` appended
/// (`manifest.xml` → `manifest.xml.bak`).
pub fn backup_path(path: &Path) -> PathBuf {
	let mut name = path.as_os_str().to_os_string();
	name.push(".bak");
	PathBuf::from(name)
}

/// Write `content` to `path` after preserving the original file at
/// [`backup_path`]. The rename happens before the write, so if the write
/// fails the original content survives only in the backup file; callers must
/// treat that as requiring manual recovery.
pub fn write_with_backup(path: &Path, content: &str) -> EnvsubResult<PathBuf> {
	let backup = backup_path(path);
	std::fs::rename(path, &backup)?;
	std::fs::write(path, content.as_bytes())?;
	Ok(backup)
}

/// Render `doc` and replace the file at `path`, leaving the original bytes
/// at `<path>.bak`.
pub fn save(path: &Path, doc: &Document) -> EnvsubResult<PathBuf> {
	write_with_backup(path, &to_string(doc))
}
