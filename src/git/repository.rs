//! git::repository
//!
//! Owned handle over a native `git_repository`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::ptr::{self, NonNull};

use libgit2_sys as raw;
use log::debug;
use serde::Serialize;

use super::config::Config;
use super::error::{GitError, GitResult};
use super::ffi;

/// Snapshot of where a repository lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    /// Path to the git directory (`.git` or the bare repository itself)
    pub path: PathBuf,
    /// Working directory, `None` for bare repositories
    pub workdir: Option<PathBuf>,
    /// Whether the repository is bare
    pub bare: bool,
}

/// A libgit2 repository.
///
/// The native handle is valid for the whole life of the value and is
/// released exactly once, either by [`Repository::free`] or on drop.
///
/// # Example
///
/// ```no_run
/// use gitbind::git::Repository;
///
/// let repo = Repository::init("/tmp/demo", false)?;
/// let mut config = repo.config()?;
/// config.set_bool("core.ignorecase", true)?;
/// assert!(config.get_bool("core.ignorecase")?);
/// # Ok::<(), gitbind::git::GitError>(())
/// ```
pub struct Repository {
    raw: NonNull<raw::git_repository>,
}

// libgit2 objects may move between threads but must not be used from two
// threads at once, hence Send without Sync.
unsafe impl Send for Repository {}

impl Repository {
    /// Create a new repository at `path`.
    ///
    /// `bare` selects a bare layout (no working directory).
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Library`] when libgit2 cannot create the
    /// repository, e.g. because the path is not writable.
    pub fn init(path: impl AsRef<Path>, bare: bool) -> GitResult<Repository> {
        ffi::init();
        let path = path.as_ref();
        debug!("git_repository_init {} (bare: {})", path.display(), bare);
        let cpath = ffi::path_to_cstring(path)?;
        let mut out = ptr::null_mut();
        // SAFETY: `out` is a valid out-pointer, `cpath` outlives the call.
        ffi::check(unsafe {
            raw::git_repository_init(&mut out, cpath.as_ptr(), bare as libc::c_uint)
        })?;
        Self::from_raw(out)
    }

    /// Open an existing repository at `path`.
    ///
    /// `path` may be the working directory or the git directory itself. No
    /// upward discovery is performed.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Library`] when no repository exists there.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Repository> {
        ffi::init();
        let path = path.as_ref();
        debug!("git_repository_open {}", path.display());
        let cpath = ffi::path_to_cstring(path)?;
        let mut out = ptr::null_mut();
        // SAFETY: as in `init`.
        ffi::check(unsafe { raw::git_repository_open(&mut out, cpath.as_ptr()) })?;
        Self::from_raw(out)
    }

    fn from_raw(out: *mut raw::git_repository) -> GitResult<Repository> {
        NonNull::new(out)
            .map(|raw| Repository { raw })
            .ok_or_else(|| GitError::Library {
                message: ffi::last_error(),
            })
    }

    /// The repository's configuration.
    ///
    /// The returned [`Config`] holds its own reference to the native
    /// configuration and stays valid after this repository is released.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Library`] when the configuration cannot be
    /// loaded, e.g. a corrupt config file.
    pub fn config(&self) -> GitResult<Config> {
        debug!("git_repository_config {}", self.path().display());
        let mut out = ptr::null_mut();
        // SAFETY: `self.raw` is a live repository handle.
        ffi::check(unsafe { raw::git_repository_config(&mut out, self.raw.as_ptr()) })?;
        Config::from_raw(out)
    }

    /// Path to the git directory.
    pub fn path(&self) -> PathBuf {
        // SAFETY: the returned string is owned by the repository and lives
        // as long as `self`; it is copied before returning.
        unsafe { ffi::path_from_ptr(raw::git_repository_path(self.raw.as_ptr())) }
            .ok()
            .flatten()
            .unwrap_or_default()
    }

    /// Path to the working directory, `None` for bare repositories.
    pub fn workdir(&self) -> Option<PathBuf> {
        // SAFETY: as in `path`.
        unsafe { ffi::path_from_ptr(raw::git_repository_workdir(self.raw.as_ptr())) }
            .ok()
            .flatten()
    }

    /// Whether the repository has no working directory.
    pub fn is_bare(&self) -> bool {
        // SAFETY: `self.raw` is a live repository handle.
        unsafe { raw::git_repository_is_bare(self.raw.as_ptr()) == 1 }
    }

    /// Where this repository lives, for display.
    pub fn info(&self) -> RepoInfo {
        RepoInfo {
            path: self.path(),
            workdir: self.workdir(),
            bare: self.is_bare(),
        }
    }

    /// Release the native handle now.
    ///
    /// Equivalent to dropping the value; provided so release points can be
    /// written explicitly.
    pub fn free(self) {
        drop(self);
    }
}

impl Drop for Repository {
    fn drop(&mut self) {
        debug!("git_repository_free");
        // SAFETY: the handle is live and owned; drop runs once.
        unsafe { raw::git_repository_free(self.raw.as_ptr()) }
    }
}

impl fmt::Debug for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path())
            .field("bare", &self.is_bare())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_then_open_same_repository() {
        let temp = TempDir::new().unwrap();
        let created = Repository::init(temp.path(), false).unwrap();
        let opened = Repository::open(temp.path()).unwrap();

        assert_eq!(created.path(), opened.path());
        assert!(!opened.is_bare());
        assert!(opened.workdir().is_some());
    }

    #[test]
    fn bare_repository_has_no_workdir() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path().join("bare.git"), true).unwrap();

        let info = repo.info();
        assert!(info.bare);
        assert!(info.workdir.is_none());
    }

    #[test]
    fn open_missing_path_fails() {
        let temp = TempDir::new().unwrap();
        let result = Repository::open(temp.path().join("nope"));
        assert!(matches!(result, Err(GitError::Library { .. })));
    }

    #[test]
    fn path_with_nul_is_rejected_before_native_call() {
        let result = Repository::open("bad\0path");
        assert!(matches!(
            result,
            Err(GitError::InvalidArgument { what: "path", .. })
        ));
    }
}
