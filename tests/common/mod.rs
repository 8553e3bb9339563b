// Shared fixtures for the integration tests: fake project trees on disk
// whose layout either follows src/main/python or deliberately breaks it.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MODULE_NAME: &str = "constants.py";

/// A temporary project root holding a single seed module.
pub struct FakeProject {
    pub root: TempDir,
    pub module: PathBuf,
}

impl FakeProject {
    /// Module placed at `<root>/src/main/python/constants.py`.
    pub fn conforming() -> Self {
        Self::with_module_dir(&["src", "main", "python"])
    }

    /// Module placed at `<root>/other/constants.py`.
    pub fn relocated() -> Self {
        Self::with_module_dir(&["other"])
    }

    pub fn with_module_dir(segments: &[&str]) -> Self {
        let root = TempDir::new().expect("create temp project");
        let dir: PathBuf = segments.iter().fold(root.path().to_path_buf(), |p, s| p.join(s));
        fs::create_dir_all(&dir).expect("create module dir");
        let module = dir.join(MODULE_NAME);
        fs::write(&module, "# seed module\n").expect("write module");
        Self { root, module }
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}
