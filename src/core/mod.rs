//! core
//!
//! Types that sit beside the libgit2 handles.
//!
//! # Modules
//!
//! - [`value`] - Typed configuration values and their parsing
//! - [`settings`] - Settings for the `gitbind` binary
//!
//! # Design Principles
//!
//! - Values are parsed once, at the edge, into typed enums
//! - Settings files are strict: unknown fields are errors

pub mod settings;
pub mod value;
