pub mod layout;
#[path = "main/python/constants.rs"]
pub mod constants;
#[path = "runner/mod.rs"]
pub mod runner;

pub use crate::constants::{
    self_check, MAIN_DIR, MODULE_FILE, PATHS, PYTHON_DIR, RESOURCES_DIR, SRC_DIR, TEST_DIR,
};
pub use crate::layout::{Invariant, LayoutError, LayoutPaths};
