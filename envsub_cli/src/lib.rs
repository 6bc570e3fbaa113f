use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use envsub_core::discover::DEFAULT_MANIFEST_PATTERN;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Replace environment variables in XML manifest files.",
	long_about = "envsub resolves ${NAME} placeholders in XML manifest files against the process \
	              environment and rewrites each file in place, keeping a `.bak` copy of the \
	              original.\n\nManifests can also declare attribute overrides: an attribute named \
	              dso_override_attribute_<target> replaces attribute <target> on the same element \
	              once its value resolves, and is removed either way.\n\nQuick start:\n  envsub \
	              update  Rewrite all manifest files\n  envsub check   Report files a rewrite \
	              would change"
)]
pub struct EnvsubCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Root directory containing the manifest checkout.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Glob for manifest files, relative to the root directory.
	#[arg(long, global = true, default_value = DEFAULT_MANIFEST_PATTERN)]
	pub pattern: String,

	/// Extra NAME=VALUE bindings layered over the process environment.
	/// Repeatable; later bindings win.
	#[arg(long = "var", value_name = "NAME=VALUE", global = true)]
	pub vars: Vec<String>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Rewrite every discovered manifest file in place.
	///
	/// Each file is parsed, placeholders are resolved, attribute overrides
	/// are collapsed, and the file is overwritten with the pretty-printed
	/// result. The original bytes are kept at `<file>.bak`. Files that fail
	/// to parse are reported and skipped; the rest of the batch still runs.
	Update {
		/// Report which files would change without writing anything.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// Report manifest files whose content differs from what a rewrite
	/// would produce.
	///
	/// Nothing is written and no backups are made. Exits with a non-zero
	/// status when any file is out of date, which makes this suitable for
	/// CI pipelines.
	Check {
		/// Show a unified diff between current and expected content for
		/// each stale file.
		#[arg(long, default_value_t = false)]
		diff: bool,

		/// Output format. Use `text` for human-readable output or `json`
		/// for programmatic consumption.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption. Each stale entry includes
	/// the file path; errors include the failure message.
	Json,
}
