use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;

pub fn envsub_cmd() -> Command {
	let mut cmd = Command::cargo_bin("envsub").expect("binary `envsub` should be built");
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Create `.repo/manifests/<name>` under `root` with the given content and
/// return its path.
pub fn write_manifest(root: &Path, name: &str, content: &str) -> PathBuf {
	let manifests = root.join(".repo").join("manifests");
	std::fs::create_dir_all(&manifests).expect("manifest directory should be creatable");
	let path = manifests.join(name);
	std::fs::write(&path, content).expect("manifest file should be writable");
	path
}

pub const MANIFEST_WITH_PLACEHOLDERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="launch-dso-platform" fetch="${GITBASE}" revision="${GITREV}"/>
</manifest>
"#;

pub const MANIFEST_RESOLVED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <remote name="launch-dso-platform" fetch="fake_gitbase" revision="fake_gitrev"/>
</manifest>"#;
