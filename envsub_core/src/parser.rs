use quick_xml::Reader;
use quick_xml::events::BytesStart;
use quick_xml::events::Event;

use crate::Document;
use crate::Element;
use crate::EnvsubError;
use crate::EnvsubResult;
use crate::Node;

/// Build an owned document tree from XML text.
///
/// Whitespace between elements is kept as text nodes so the serializer can
/// decide what to elide. The declaration is dropped here because output
/// always carries the normalized one; doctypes and processing instructions
/// do not occur in manifest files and are skipped.
pub(crate) fn parse_document(input: &str) -> EnvsubResult<Document> {
	let mut reader = Reader::from_str(input);

	let mut children: Vec<Node> = Vec::new();
	let mut stack: Vec<Element> = Vec::new();

	loop {
		match reader.read_event()? {
			Event::Start(start) => stack.push(element_from_start(&start)?),
			Event::Empty(start) => {
				let element = element_from_start(&start)?;
				attach(Node::Element(element), &mut stack, &mut children);
			}
			Event::End(end) => {
				let Some(element) = stack.pop() else {
					return Err(EnvsubError::Malformed(format!(
						"unexpected closing tag `</{}>`",
						String::from_utf8_lossy(end.name().as_ref())
					)));
				};
				attach(Node::Element(element), &mut stack, &mut children);
			}
			Event::Text(text) => {
				let text = text.unescape()?.into_owned();
				append_text(text, &mut stack, &mut children);
			}
			Event::CData(cdata) => {
				let text = String::from_utf8_lossy(cdata.as_ref()).into_owned();
				append_text(text, &mut stack, &mut children);
			}
			Event::Comment(comment) => {
				let content = String::from_utf8_lossy(comment.as_ref()).into_owned();
				attach(Node::Comment(content), &mut stack, &mut children);
			}
			Event::Decl(_) | Event::DocType(_) | Event::PI(_) => {}
			Event::Eof => break,
		}
	}

	if let Some(open) = stack.last() {
		return Err(EnvsubError::Malformed(format!(
			"unclosed element `<{}>` at end of input",
			open.name
		)));
	}

	let roots = children
		.iter()
		.filter(|node| matches!(node, Node::Element(_)))
		.count();
	if roots != 1 {
		return Err(EnvsubError::Malformed(format!(
			"expected exactly one root element, found {roots}"
		)));
	}

	Ok(Document { children })
}

fn element_from_start(start: &BytesStart) -> EnvsubResult<Element> {
	let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
	let mut element = Element::new(name);

	for attr in start.attributes() {
		let attr = attr.map_err(quick_xml::Error::from)?;
		let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
		let value = attr
			.unescape_value()
			.map_err(quick_xml::Error::from)?
			.into_owned();
		element.set_attribute(name, value);
	}

	Ok(element)
}

fn attach(node: Node, stack: &mut Vec<Element>, top: &mut Vec<Node>) {
	match stack.last_mut() {
		Some(parent) => parent.children.push(node),
		None => top.push(node),
	}
}

/// Append text to the current insertion point, merging with a preceding text
/// node so adjacent text and CDATA segments form a single node.
fn append_text(text: String, stack: &mut Vec<Element>, top: &mut Vec<Node>) {
	let children = match stack.last_mut() {
		Some(parent) => &mut parent.children,
		None => top,
	};
	if let Some(Node::Text(existing)) = children.last_mut() {
		existing.push_str(&text);
	} else {
		children.push(Node::Text(text));
	}
}
