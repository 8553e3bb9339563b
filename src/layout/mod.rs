//! Resolution and verification of a `src/main/python` project layout.
//!
//! [`LayoutPaths::resolve`] does pure path algebra on a seed module file.
//! [`check::verify`] is the explicit self-check and is never run implicitly.

pub mod check;
pub mod error;
pub mod normalize;
pub mod paths;

pub use check::{verify, violations, Invariant};
pub use error::LayoutError;
pub use paths::{LayoutPaths, RESOURCES_SEGMENT, TEST_SEGMENT};
