//! git::config
//!
//! Owned handle over a native `git_config`, with typed accessors.
//!
//! Each accessor converts the key (and value) to C strings, makes exactly one
//! libgit2 call, and either copies the result back or returns the native
//! error message as [`GitError::Library`].

use std::fmt;
use std::ptr::NonNull;

use libgit2_sys as raw;
use libc::c_int;
use log::debug;

use super::error::{GitError, GitResult};
use super::ffi;
use crate::core::value::{ConfigValue, ValueKind};

/// Configuration view of a repository.
///
/// Reads see every level libgit2 loaded for the repository (system, global,
/// local); writes go to the highest-priority writable level, normally the
/// repository's own `config` file.
///
/// A `Config` is independent of the [`Repository`](super::Repository) it
/// came from: either may be released first.
pub struct Config {
    raw: NonNull<raw::git_config>,
}

// Same threading contract as Repository.
unsafe impl Send for Config {}

impl Config {
    pub(crate) fn from_raw(out: *mut raw::git_config) -> GitResult<Config> {
        NonNull::new(out)
            .map(|raw| Config { raw })
            .ok_or_else(|| GitError::Library {
                message: ffi::last_error(),
            })
    }

    /// Read a boolean value.
    ///
    /// libgit2 accepts `true/yes/on/1` and `false/no/off/0` in the file.
    pub fn get_bool(&self, name: &str) -> GitResult<bool> {
        debug!("git_config_get_bool {}", name);
        let cname = ffi::to_cstring("key", name)?;
        let mut out: c_int = 0;
        // SAFETY: `out` and `cname` outlive the call; the handle is live.
        ffi::check(unsafe {
            raw::git_config_get_bool(&mut out, self.raw.as_ptr(), cname.as_ptr())
        })?;
        Ok(out != 0)
    }

    /// Write a boolean value.
    pub fn set_bool(&mut self, name: &str, value: bool) -> GitResult<()> {
        debug!("git_config_set_bool {} = {}", name, value);
        let cname = ffi::to_cstring("key", name)?;
        // SAFETY: as in `get_bool`.
        ffi::check(unsafe {
            raw::git_config_set_bool(self.raw.as_ptr(), cname.as_ptr(), value as c_int)
        })?;
        Ok(())
    }

    /// Read a string value.
    ///
    /// The value is copied out of a libgit2-owned buffer, so it is valid on
    /// live (non-snapshot) configurations.
    pub fn get_string(&self, name: &str) -> GitResult<String> {
        debug!("git_config_get_string_buf {}", name);
        let cname = ffi::to_cstring("key", name)?;
        let mut buf = ffi::Buf::new();
        // SAFETY: `buf` is initialized and disposed by `Buf`.
        ffi::check(unsafe {
            raw::git_config_get_string_buf(buf.as_mut_ptr(), self.raw.as_ptr(), cname.as_ptr())
        })?;
        buf.to_utf8("config value")
    }

    /// Write a string value.
    pub fn set_string(&mut self, name: &str, value: &str) -> GitResult<()> {
        debug!("git_config_set_string {}", name);
        let cname = ffi::to_cstring("key", name)?;
        let cvalue = ffi::to_cstring("value", value)?;
        // SAFETY: both strings outlive the call; the handle is live.
        ffi::check(unsafe {
            raw::git_config_set_string(self.raw.as_ptr(), cname.as_ptr(), cvalue.as_ptr())
        })?;
        Ok(())
    }

    /// Read a 64-bit integer value.
    ///
    /// libgit2 also accepts `k`, `m` and `g` suffixes in the file.
    pub fn get_i64(&self, name: &str) -> GitResult<i64> {
        debug!("git_config_get_int64 {}", name);
        let cname = ffi::to_cstring("key", name)?;
        let mut out: i64 = 0;
        // SAFETY: as in `get_bool`.
        ffi::check(unsafe {
            raw::git_config_get_int64(&mut out, self.raw.as_ptr(), cname.as_ptr())
        })?;
        Ok(out)
    }

    /// Write a 64-bit integer value.
    pub fn set_i64(&mut self, name: &str, value: i64) -> GitResult<()> {
        debug!("git_config_set_int64 {} = {}", name, value);
        let cname = ffi::to_cstring("key", name)?;
        // SAFETY: as in `get_bool`.
        ffi::check(unsafe {
            raw::git_config_set_int64(self.raw.as_ptr(), cname.as_ptr(), value)
        })?;
        Ok(())
    }

    /// Read a value of the given kind.
    pub fn get(&self, name: &str, kind: ValueKind) -> GitResult<ConfigValue> {
        Ok(match kind {
            ValueKind::Bool => ConfigValue::Bool(self.get_bool(name)?),
            ValueKind::Int => ConfigValue::Int(self.get_i64(name)?),
            ValueKind::String => ConfigValue::String(self.get_string(name)?),
        })
    }

    /// Write a typed value with the matching accessor.
    pub fn set(&mut self, name: &str, value: &ConfigValue) -> GitResult<()> {
        match value {
            ConfigValue::Bool(b) => self.set_bool(name, *b),
            ConfigValue::Int(i) => self.set_i64(name, *i),
            ConfigValue::String(s) => self.set_string(name, s),
        }
    }

    /// Release the native handle now.
    pub fn free(self) {
        drop(self);
    }
}

impl Drop for Config {
    fn drop(&mut self) {
        debug!("git_config_free");
        // SAFETY: the handle is live and owned; drop runs once.
        unsafe { raw::git_config_free(self.raw.as_ptr()) }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}
