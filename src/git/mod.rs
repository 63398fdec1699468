//! git
//!
//! Owned handles over libgit2.
//!
//! # Architecture
//!
//! This module is the **only doorway** to libgit2. Every native call lives
//! in [`Repository`] or [`Config`] and goes through the marshaling helpers
//! in `ffi`. No other module touches `libgit2_sys` or raw pointers.
//!
//! # Responsibilities
//!
//! - Repository creation and opening
//! - Repository configuration access (bool, string, i64)
//! - Translating native failure codes into [`GitError`]
//!
//! # Invariants
//!
//! - A handle is valid from construction until it is released, exactly once,
//!   by `free` or by drop
//! - The native last-error message is captured in the same step that checks
//!   the failing status
//! - Strings that cannot cross the C boundary are rejected before any native
//!   call
//!
//! # Example
//!
//! ```no_run
//! use gitbind::git::Repository;
//!
//! let repo = Repository::open("/path/to/repo")?;
//! let mut config = repo.config()?;
//!
//! config.set_i64("pack.windowmemory", 64 * 1024 * 1024)?;
//! let email = config.get_string("user.email")?;
//!
//! config.free();
//! repo.free();
//! # Ok::<(), gitbind::git::GitError>(())
//! ```

mod config;
mod error;
mod ffi;
mod repository;

pub use config::Config;
pub use error::{GitError, GitResult};
pub use repository::{RepoInfo, Repository};
