//! Shared fixtures for the core tests. The manifest bodies mirror real
//! `.repo/manifests` content, and the expected renderings are normative byte
//! for byte.

use crate::Bindings;

pub fn bindings() -> Bindings {
	Bindings::from([
		("GITBASE", "fake_gitbase"),
		("GITREV", "fake_gitrev"),
		("TEST", "test"),
	])
}

pub const TOP_LEVEL_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="launch-dso-platform" fetch="${GITBASE}" revision="${GITREV}"/>
  <!-- <default remote="launch-dso-platform" revision="update" /> -->
</manifest>
"#;

pub const TOP_LEVEL_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <remote name="launch-dso-platform" fetch="fake_gitbase" revision="fake_gitrev"/>
  <!-- <default remote="launch-dso-platform" revision="update" /> -->
</manifest>"#;

pub const UNBOUND_VARIABLE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <remote name="launch-dso-platform" fetch="${GITBASE_NOT_EXISTS}" revision="${GITREV}"/>
  <!-- <default remote="launch-dso-platform" revision="update" /> -->
</manifest>
"#;

pub const UNBOUND_VARIABLE_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <remote name="launch-dso-platform" fetch="${GITBASE_NOT_EXISTS}" revision="fake_gitrev"/>
  <!-- <default remote="launch-dso-platform" revision="update" /> -->
</manifest>"#;

pub const OVERRIDE_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" dso_override_attribute_revision="${GITREV}">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile" />
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>
"#;

pub const OVERRIDE_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" revision="fake_gitrev">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile"/>
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>"#;

pub const OVERRIDE_UNBOUND_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" dso_override_attribute_revision="${GITREV_NOT_SET}">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile" />
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>
"#;

pub const OVERRIDE_UNBOUND_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile"/>
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>"#;

pub const OVERRIDE_EXISTING_ATTR_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" revision="1.2.3" dso_override_attribute_revision="${GITREV}">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile" />
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>
"#;

pub const OVERRIDE_EXISTING_ATTR_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" revision="fake_gitrev">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile"/>
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>"#;

pub const OVERRIDE_MULTI_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" revision="1.2.3" dso_override_attribute_revision="${GITREV}" dso_override_attribute_dest-branch="${TEST}">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile" />
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>
"#;

pub const OVERRIDE_MULTI_MANIFEST_EXPECTED: &str = r#"<?xml version="1.0" ?>
<manifest>
  <project name="caf-components-tf-module" path="components/module" remote="launch-dso-platform" revision="fake_gitrev" dest-branch="test">
    <linkfile src="linkfiles/Makefile" dest="components/Makefile"/>
    <!-- <linkfile src="artifacts/terraform_modules/Makefile" dest="components/terraform_modules/Makefile" /> -->
  </project>
</manifest>"#;
