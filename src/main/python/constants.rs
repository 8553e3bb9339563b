//! Process-wide layout directories of this crate.
//!
//! This file has to stay under `src/main/python/`: the directories below
//! are derived from its own location. Each value is computed on first
//! access and is read-only afterwards. Reading them never runs the
//! self-check; call [`self_check`] for that.

use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

use crate::layout::normalize::normalize;
use crate::layout::{check, LayoutError, LayoutPaths};

/// Directory of this file inside the package. Must agree with the `#[path]`
/// attribute that mounts this module in `lib.rs`.
const MODULE_DIR: [&str; 3] = ["src", "main", "python"];

/// Absolute location of this source file.
pub static MODULE_FILE: Lazy<PathBuf> =
    Lazy::new(|| locate_module(Path::new(env!("CARGO_MANIFEST_DIR")), Path::new(file!())));

/// All five directories resolved from [`MODULE_FILE`].
pub static PATHS: Lazy<LayoutPaths> =
    Lazy::new(|| LayoutPaths::resolve_in(&MODULE_FILE, Path::new(env!("CARGO_MANIFEST_DIR"))));

pub static PYTHON_DIR: Lazy<&'static Path> = Lazy::new(|| PATHS.python_dir.as_path());
pub static MAIN_DIR: Lazy<&'static Path> = Lazy::new(|| PATHS.main_dir.as_path());
pub static RESOURCES_DIR: Lazy<&'static Path> = Lazy::new(|| PATHS.resources_dir.as_path());
pub static SRC_DIR: Lazy<&'static Path> = Lazy::new(|| PATHS.src_dir.as_path());
pub static TEST_DIR: Lazy<&'static Path> = Lazy::new(|| PATHS.test_dir.as_path());

/// Absolute path of the module given the package's manifest dir and `file!()`.
///
/// A relative `file!()` is relative to the workspace root rather than the
/// package (`crates/<pkg>/src/...` for a member), so only its file name is
/// kept and placed under [`MODULE_DIR`]. An absolute one, as seen when built
/// from the registry, is used as is.
fn locate_module(manifest_dir: &Path, source_file: &Path) -> PathBuf {
    if source_file.is_absolute() {
        return normalize(source_file);
    }
    let mut module = manifest_dir.to_path_buf();
    module.extend(MODULE_DIR);
    if let Some(name) = source_file.file_name() {
        module.push(name);
    }
    normalize(&module)
}

/// Verify the process-wide directories still match the layout convention.
///
/// Fails with the first violated invariant, typically after this file was
/// moved or the project was restructured.
pub fn self_check() -> Result<(), LayoutError> {
    check::verify(&PATHS)
}
