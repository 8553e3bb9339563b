use std::path::{Component, Path, PathBuf};

/// Lexically normalize `path` without touching the filesystem.
///
/// Behaviour:
/// - `.` components are dropped.
/// - `..` removes the preceding normal component. At the root it is
///   swallowed (`/..` is `/`).
/// - A relative path that climbs above its starting point keeps its
///   leading `..` components.
/// - Symlinks are not resolved.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    // Count of normal components currently in `out` that a `..` may pop.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {
                out.push(component.as_os_str());
                depth = 0;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    out.pop();
                    depth -= 1;
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            Component::Normal(name) => {
                out.push(name);
                depth += 1;
            }
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Make `path` absolute against `cwd`, then normalize it.
///
/// Absolute inputs ignore `cwd` entirely.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&cwd.join(path))
    }
}

/// Parent directory of `path`, or `path` itself when it has none (a root).
pub(crate) fn parent_or_self(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) => parent.to_path_buf(),
        None => path.to_path_buf(),
    }
}
