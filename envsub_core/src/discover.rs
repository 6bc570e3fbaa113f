//! Manifest file discovery.
//!
//! Walks a root directory and returns every file matching a glob pattern.
//! The default pattern mirrors the layout this tool grew up with: every XML
//! file under `.repo/manifests/`, recursively. Hidden directories are
//! visited because `.repo` itself is one, and gitignore rules are not
//! consulted — the manifest checkout is often not a work tree of the
//! repository that contains it.

use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use ignore::WalkBuilder;
use tracing::debug;

use crate::EnvsubResult;

/// Where manifest files live relative to the processing root.
pub const DEFAULT_MANIFEST_PATTERN: &str = ".repo/manifests/**/*.xml";

/// Find every file under `root` whose root-relative path matches `pattern`.
///
/// Zero-length files are skipped: there is nothing to substitute and the
/// parser would reject them. Results are sorted so batch processing order is
/// deterministic.
pub fn discover_manifests(root: &Path, pattern: &str) -> EnvsubResult<Vec<PathBuf>> {
	let matcher = Glob::new(pattern)?.compile_matcher();

	let walk = WalkBuilder::new(root)
		.hidden(false)
		.ignore(false)
		.git_ignore(false)
		.git_global(false)
		.git_exclude(false)
		.parents(false)
		.build();

	let mut found = Vec::new();
	for entry in walk {
		let entry = match entry {
			Ok(entry) => entry,
			Err(error) => {
				debug!(%error, "skipping unreadable directory entry");
				continue;
			}
		};
		if !entry.file_type().is_some_and(|kind| kind.is_file()) {
			continue;
		}

		let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
		if !matcher.is_match(relative) {
			continue;
		}

		let size = entry.metadata().map_or(0, |meta| meta.len());
		if size == 0 {
			debug!(path = %entry.path().display(), "skipping empty manifest");
			continue;
		}

		found.push(entry.into_path());
	}

	found.sort();
	Ok(found)
}
