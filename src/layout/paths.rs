use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

use super::check::Invariant;
use super::normalize::{absolutize, parent_or_self};

/// Directory joined onto `main_dir` to form `resources_dir`.
pub const RESOURCES_SEGMENT: &str = "resources";
/// Directory joined onto `src_dir` to form `test_dir`.
pub const TEST_SEGMENT: &str = "test";

/// The five directories of a `src/main/python` project layout.
///
/// Every field is derived from the location of a single module file that
/// is expected to live directly inside `src/main/python`. Nothing here is
/// checked against the filesystem; the directories may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutPaths {
    /// Directory containing the module file.
    pub python_dir: PathBuf,
    /// Parent of `python_dir`.
    pub main_dir: PathBuf,
    /// `main_dir/resources`.
    pub resources_dir: PathBuf,
    /// Parent of `main_dir`.
    pub src_dir: PathBuf,
    /// `src_dir/test`.
    pub test_dir: PathBuf,
}

impl LayoutPaths {
    /// Derive the layout from the path of the module file that seeds it.
    ///
    /// A relative `module_file` is made absolute against the current
    /// directory, which is the only way this can fail. Absolute inputs never
    /// touch the process environment.
    pub fn resolve(module_file: &Path) -> io::Result<Self> {
        if module_file.is_absolute() {
            return Ok(Self::resolve_in(module_file, Path::new("")));
        }
        let cwd = std::env::current_dir()?;
        Ok(Self::resolve_in(module_file, &cwd))
    }

    /// Same as [`resolve`](Self::resolve) with an explicit working directory.
    ///
    /// The seed is joined onto `cwd` when relative, then normalized lexically
    /// so `.` and `..` components do not leak into the results. `cwd` is
    /// expected to be absolute.
    pub fn resolve_in(module_file: &Path, cwd: &Path) -> Self {
        let module_file = absolutize(module_file, cwd);

        let python_dir = parent_or_self(&module_file);
        let main_dir = parent_or_self(&python_dir);
        let resources_dir = main_dir.join(RESOURCES_SEGMENT);
        let src_dir = parent_or_self(&main_dir);
        let test_dir = src_dir.join(TEST_SEGMENT);

        tracing::debug!(
            module = %module_file.display(),
            python_dir = %python_dir.display(),
            main_dir = %main_dir.display(),
            resources_dir = %resources_dir.display(),
            src_dir = %src_dir.display(),
            test_dir = %test_dir.display(),
            "resolved project layout"
        );

        Self {
            python_dir,
            main_dir,
            resources_dir,
            src_dir,
            test_dir,
        }
    }

    /// `(NAME, path)` pairs in derivation order.
    pub fn entries(&self) -> [(&'static str, &Path); 5] {
        Invariant::ALL.map(|invariant| (invariant.name(), invariant.path(self)))
    }
}
