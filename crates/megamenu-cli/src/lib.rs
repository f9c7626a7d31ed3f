//! CLI library components for the `megamenu` binary.

pub mod logging;
pub mod script;
pub mod summary;
