use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum EnvsubError {
	#[error(transparent)]
	#[diagnostic(code(envsub::io_error))]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	#[diagnostic(code(envsub::xml))]
	Xml(#[from] quick_xml::Error),

	#[error("malformed XML: {0}")]
	#[diagnostic(
		code(envsub::malformed),
		help("the file must contain a single well-formed root element")
	)]
	Malformed(String),

	#[error("failed to process `{path}`: {reason}")]
	#[diagnostic(code(envsub::file))]
	File { path: String, reason: String },

	#[error("invalid binding `{0}`")]
	#[diagnostic(
		code(envsub::invalid_binding),
		help("bindings must be given as NAME=VALUE")
	)]
	InvalidBinding(String),

	#[error(transparent)]
	#[diagnostic(code(envsub::glob))]
	Glob(#[from] globset::Error),
}

impl EnvsubError {
	/// Wrap any error with the path of the file being processed so batch
	/// callers can report per-file failures.
	pub fn for_file(path: &std::path::Path, source: impl std::fmt::Display) -> Self {
		Self::File {
			path: path.display().to_string(),
			reason: source.to_string(),
		}
	}
}

pub type EnvsubResult<T> = Result<T, EnvsubError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
