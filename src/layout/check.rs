use std::fmt;
use std::path::{Path, PathBuf};

use super::error::LayoutError;
use super::paths::LayoutPaths;

/// One directory-suffix invariant of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    PythonDir,
    MainDir,
    ResourcesDir,
    SrcDir,
    TestDir,
}

impl Invariant {
    /// All invariants in the order they are checked.
    pub const ALL: [Invariant; 5] = [
        Invariant::PythonDir,
        Invariant::MainDir,
        Invariant::ResourcesDir,
        Invariant::SrcDir,
        Invariant::TestDir,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Invariant::PythonDir => "PYTHON_DIR",
            Invariant::MainDir => "MAIN_DIR",
            Invariant::ResourcesDir => "RESOURCES_DIR",
            Invariant::SrcDir => "SRC_DIR",
            Invariant::TestDir => "TEST_DIR",
        }
    }

    /// Trailing components the directory must end with.
    pub fn expected_suffix(self) -> &'static [&'static str] {
        match self {
            Invariant::PythonDir => &["src", "main", "python"],
            Invariant::MainDir => &["src", "main"],
            Invariant::ResourcesDir => &["src", "main", "resources"],
            Invariant::SrcDir => &["src"],
            Invariant::TestDir => &["src", "test"],
        }
    }

    /// The directory in `paths` this invariant constrains.
    pub fn path(self, paths: &LayoutPaths) -> &Path {
        match self {
            Invariant::PythonDir => &paths.python_dir,
            Invariant::MainDir => &paths.main_dir,
            Invariant::ResourcesDir => &paths.resources_dir,
            Invariant::SrcDir => &paths.src_dir,
            Invariant::TestDir => &paths.test_dir,
        }
    }

    /// Component-wise suffix match, so `/repo/mysrc` does not end with `src`.
    pub fn holds(self, paths: &LayoutPaths) -> bool {
        let suffix: PathBuf = self.expected_suffix().iter().collect();
        self.path(paths).ends_with(suffix)
    }

    fn violation(self, paths: &LayoutPaths) -> LayoutError {
        LayoutError::InvariantViolation {
            name: self.name(),
            path: self.path(paths).to_path_buf(),
            expected: self.expected_suffix().join("/"),
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ends with {}", self.name(), self.expected_suffix().join("/"))
    }
}

/// Verify every invariant in order and stop at the first one that fails.
pub fn verify(paths: &LayoutPaths) -> Result<(), LayoutError> {
    for invariant in Invariant::ALL {
        if !invariant.holds(paths) {
            return Err(invariant.violation(paths));
        }
        tracing::trace!("invariant holds: {}", invariant);
    }
    Ok(())
}

/// Collect every failing invariant, in check order.
pub fn violations(paths: &LayoutPaths) -> Vec<LayoutError> {
    Invariant::ALL
        .into_iter()
        .filter(|invariant| !invariant.holds(paths))
        .map(|invariant| {
            let err = invariant.violation(paths);
            tracing::warn!("{}", err);
            err
        })
        .collect()
}
