use std::path::PathBuf;
use thiserror::Error;

/// Errors produced when verifying a resolved layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A resolved directory does not end with the components its name promises,
    /// usually because the seed module was moved out of `src/main/python`.
    #[error("layout invariant violated: {name} `{}` does not end with `{expected}`", .path.display())]
    InvariantViolation {
        name: &'static str,
        path: PathBuf,
        expected: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_message_names_directory_and_suffix() {
        let err = LayoutError::InvariantViolation {
            name: "PYTHON_DIR",
            path: PathBuf::from("/repo/other"),
            expected: "src/main/python".to_string(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"layout invariant violated: PYTHON_DIR `/repo/other` does not end with `src/main/python`"
        );
    }
}
