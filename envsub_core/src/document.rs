use std::path::Path;

use crate::EnvsubResult;
use crate::parser;

/// A parsed XML document: an ordered sequence of top-level nodes, exactly one
/// of which is the root element. Comments before or after the root are kept
/// so they survive the rewrite in their original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	pub children: Vec<Node>,
}

impl Document {
	/// Parse a document from XML text.
	pub fn parse(input: &str) -> EnvsubResult<Self> {
		parser::parse_document(input)
	}

	/// Read and parse the file at `path`.
	pub fn parse_file(path: &Path) -> EnvsubResult<Self> {
		let input = std::fs::read_to_string(path)?;
		Self::parse(&input)
	}

	/// The root element. The parser guarantees exactly one exists.
	pub fn root(&self) -> &Element {
		self.children
			.iter()
			.find_map(Node::as_element)
			.unwrap_or_else(|| unreachable!("parser rejects documents without a root element"))
	}

	pub fn root_mut(&mut self) -> &mut Element {
		self.children
			.iter_mut()
			.find_map(Node::as_element_mut)
			.unwrap_or_else(|| unreachable!("parser rejects documents without a root element"))
	}
}

/// One node in the document tree. Comments are opaque: their content is
/// stored verbatim and written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
	Comment(String),
}

impl Node {
	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	pub fn as_element_mut(&mut self) -> Option<&mut Element> {
		match self {
			Self::Element(element) => Some(element),
			_ => None,
		}
	}

	/// True for text nodes that are empty or whitespace-only. These are
	/// formatting artifacts of the source layout and are dropped when
	/// pretty-printing.
	pub fn is_blank_text(&self) -> bool {
		matches!(self, Self::Text(text) if text.trim().is_empty())
	}
}

/// A single attribute. Attribute names are unique per element; the `Vec`
/// storage in [`Element`] preserves document order so serialization is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
	pub name: String,
	pub value: String,
}

/// An element: tag name, ordered attributes, and ordered child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub name: String,
	attributes: Vec<Attribute>,
	pub children: Vec<Node>,
}

impl Element {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			attributes: Vec::new(),
			children: Vec::new(),
		}
	}

	pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
		self.attributes.iter()
	}

	pub fn attributes_mut(&mut self) -> impl Iterator<Item = &mut Attribute> {
		self.attributes.iter_mut()
	}

	pub fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|attr| attr.name == name)
			.map(|attr| attr.value.as_str())
	}

	pub fn has_attribute(&self, name: &str) -> bool {
		self.attributes.iter().any(|attr| attr.name == name)
	}

	/// Set an attribute. An existing attribute of the same name is updated in
	/// place; otherwise the attribute is appended.
	pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
		let name = name.into();
		let value = value.into();
		match self.attributes.iter_mut().find(|attr| attr.name == name) {
			Some(attr) => attr.value = value,
			None => self.attributes.push(Attribute { name, value }),
		}
	}

	/// Remove an attribute, returning its value if it was present.
	pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
		let index = self.attributes.iter().position(|attr| attr.name == name)?;
		Some(self.attributes.remove(index).value)
	}

	pub fn push_child(&mut self, node: Node) {
		self.children.push(node);
	}

	pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
		self.children.iter().filter_map(Node::as_element)
	}

	pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
		self.children.iter_mut().filter_map(Node::as_element_mut)
	}

	/// The element's first child, if it is a text node. Only this text is
	/// subject to substitution; elements with mixed or multiple text children
	/// are deliberately not generalized, since downstream manifests depend on
	/// the narrower behavior.
	pub fn leading_text_mut(&mut self) -> Option<&mut String> {
		match self.children.first_mut() {
			Some(Node::Text(text)) => Some(text),
			_ => None,
		}
	}
}
