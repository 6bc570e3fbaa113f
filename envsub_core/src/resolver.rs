use std::collections::HashMap;

/// Check whether a value contains a substitutable token.
///
/// This is a cheap pre-filter, not a syntax check: any `$` counts, matching
/// the behavior manifests in the wild already depend on. Full `${NAME}`
/// validation happens implicitly inside [`Bindings::resolve`].
pub fn is_placeholder(value: &str) -> bool {
	value.contains('$')
}

/// A flat name→value table that placeholders resolve against.
///
/// Conventionally seeded from the process environment with
/// [`Bindings::from_env`], but always passed explicitly so tests and callers
/// can resolve deterministically without mutating real environment state.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
	values: HashMap<String, String>,
}

impl Bindings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot the current process environment.
	pub fn from_env() -> Self {
		std::env::vars().collect()
	}

	/// Add or replace a binding. Later inserts win, so explicit bindings can
	/// be layered over an environment snapshot.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Replace every bound variable reference in `raw` with its value.
	///
	/// Both `${NAME}` and bare `$NAME` (name chars `[A-Za-z0-9_]`) forms are
	/// recognized. References to unbound names are left verbatim, so partial
	/// resolution within a single string is possible and an unresolved
	/// variable is never an error. A `$` that starts no reference (end of
	/// string, non-name character, or `${` with no closing brace) passes
	/// through unchanged.
	pub fn resolve(&self, raw: &str) -> String {
		let mut out = String::with_capacity(raw.len());
		let mut rest = raw;

		while let Some(idx) = rest.find('$') {
			out.push_str(&rest[..idx]);
			let after = &rest[idx + 1..];

			if let Some(braced) = after.strip_prefix('{') {
				let Some(end) = braced.find('}') else {
					// No closing brace: the `$` is not a reference.
					out.push('$');
					rest = after;
					continue;
				};
				let name = &braced[..end];
				match self.get(name) {
					Some(value) => out.push_str(value),
					None => {
						out.push_str("${");
						out.push_str(name);
						out.push('}');
					}
				}
				rest = &braced[end + 1..];
			} else {
				let len = after
					.bytes()
					.take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
					.count();
				if len == 0 {
					out.push('$');
					rest = after;
					continue;
				}
				let name = &after[..len];
				match self.get(name) {
					Some(value) => out.push_str(value),
					None => {
						out.push('$');
						out.push_str(name);
					}
				}
				rest = &after[len..];
			}
		}

		out.push_str(rest);
		out
	}
}

impl FromIterator<(String, String)> for Bindings {
	fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().collect(),
		}
	}
}

impl<const N: usize> From<[(&str, &str); N]> for Bindings {
	fn from(pairs: [(&str, &str); N]) -> Self {
		pairs
			.into_iter()
			.map(|(name, value)| (name.to_string(), value.to_string()))
			.collect()
	}
}
