mod common;

use common::MANIFEST_RESOLVED;
use common::MANIFEST_WITH_PLACEHOLDERS;
use common::envsub_cmd;
use common::write_manifest;
use envsub_core::AnyEmptyResult;

#[test]
fn update_rewrites_manifests_and_keeps_backup() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let manifest = write_manifest(tmp.path(), "default.xml", MANIFEST_WITH_PLACEHOLDERS);

	envsub_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.arg("--var")
		.arg("GITBASE=fake_gitbase")
		.arg("--var")
		.arg("GITREV=fake_gitrev")
		.assert()
		.success()
		.stdout(predicates::str::contains("Updated 1 of 1 manifest file(s)."));

	assert_eq!(std::fs::read_to_string(&manifest)?, MANIFEST_RESOLVED);

	let backup = manifest.with_file_name("default.xml.bak");
	assert_eq!(
		std::fs::read_to_string(&backup)?,
		MANIFEST_WITH_PLACEHOLDERS
	);

	Ok(())
}

#[test]
fn update_resolves_from_process_environment() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let manifest = write_manifest(tmp.path(), "default.xml", MANIFEST_WITH_PLACEHOLDERS);

	envsub_cmd()
		.env("GITBASE", "fake_gitbase")
		.env("GITREV", "fake_gitrev")
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success();

	assert_eq!(std::fs::read_to_string(&manifest)?, MANIFEST_RESOLVED);

	Ok(())
}

#[test]
fn update_with_no_manifests_is_a_noop() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	envsub_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("No manifest files matched"));

	Ok(())
}

#[test]
fn update_dry_run_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let manifest = write_manifest(tmp.path(), "default.xml", MANIFEST_WITH_PLACEHOLDERS);

	envsub_cmd()
		.arg("update")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.arg("--var")
		.arg("GITBASE=fake_gitbase")
		.arg("--var")
		.arg("GITREV=fake_gitrev")
		.assert()
		.success()
		.stdout(predicates::str::contains(
			"Dry run: would update 1 of 1 manifest file(s).",
		));

	assert_eq!(
		std::fs::read_to_string(&manifest)?,
		MANIFEST_WITH_PLACEHOLDERS
	);
	assert!(!manifest.with_file_name("default.xml.bak").exists());

	Ok(())
}

#[test]
fn update_continues_past_unparseable_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	write_manifest(tmp.path(), "broken.xml", "<manifest><unclosed>");
	let good = write_manifest(tmp.path(), "default.xml", MANIFEST_WITH_PLACEHOLDERS);

	envsub_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.arg("--var")
		.arg("GITBASE=fake_gitbase")
		.arg("--var")
		.arg("GITREV=fake_gitrev")
		.assert()
		.failure()
		.stderr(predicates::str::contains("broken.xml"));

	// The good file was still processed.
	assert_eq!(std::fs::read_to_string(&good)?, MANIFEST_RESOLVED);

	Ok(())
}

#[test]
fn update_rejects_malformed_var_flag() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	envsub_cmd()
		.arg("update")
		.arg("--path")
		.arg(tmp.path())
		.arg("--var")
		.arg("NOT_A_BINDING")
		.assert()
		.failure()
		.stderr(predicates::str::contains("NOT_A_BINDING"));

	Ok(())
}
