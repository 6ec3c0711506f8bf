//! Path utilities for locating fixture files.

use std::path::PathBuf;

/// Returns the workspace root directory.
///
/// This is determined by walking up from this crate's manifest directory.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Directory holding the provider payload fixtures.
///
/// `TEST_DATA_DIR` overrides the default `crates/test-utils/testdata/`.
pub fn testdata_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TEST_DATA_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// Path of a named fixture, if it exists.
pub fn find_fixture(name: &str) -> Option<PathBuf> {
    let path = testdata_dir().join(name);
    path.exists().then_some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_testdata_dir_exists() {
        assert!(testdata_dir().is_dir());
        assert!(find_fixture("no_such_fixture.json").is_none());
    }
}
