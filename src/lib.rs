//! gitbind - owned handles over libgit2 repositories and their configuration
//!
//! gitbind binds a small part of libgit2: creating and opening repositories,
//! and reading and writing their configuration as booleans, strings and
//! 64-bit integers. Native failures surface as [`git::GitError`] carrying
//! libgit2's own diagnostic.
//!
//! # Architecture
//!
//! - [`git`] - The only doorway to libgit2 (handles, marshaling, errors)
//! - [`core`] - Typed values and the binary's settings
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Terminal output
//!
//! # Correctness Invariants
//!
//! 1. A native handle is released exactly once, and never used afterwards
//! 2. A failing native call is always reported with libgit2's message
//! 3. Nothing that cannot be a C string is passed to libgit2

pub mod cli;
pub mod core;
pub mod git;
pub mod ui;
