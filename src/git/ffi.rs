//! git::ffi
//!
//! Marshaling between Rust values and libgit2's C calling convention.
//!
//! # Invariants
//!
//! - [`init`] has run before any native call.
//! - C strings handed to libgit2 are owned by the caller's stack frame and
//!   are dropped after the call returns, whatever its status.
//! - The last native error is read by [`check`] immediately after the failing
//!   call, on the same thread, before any other libgit2 call can replace it.

use std::ffi::{CStr, CString};
use std::path::{Path, PathBuf};

use libgit2_sys as raw;
use libc::{c_char, c_int};
use log::debug;

use super::error::{GitError, GitResult};

/// Used when libgit2 reports failure without recording an error.
const UNKNOWN_ERROR: &str = "libgit2 reported a failure without a message";

/// Run libgit2's process-wide initialization (once).
pub(crate) fn init() {
    raw::init();
}

/// Convert a return code into a result, capturing the last error on failure.
pub(crate) fn check(rc: c_int) -> GitResult<c_int> {
    if rc < 0 {
        let message = last_error();
        debug!("libgit2 call failed ({}): {}", rc, message);
        return Err(GitError::Library { message });
    }
    Ok(rc)
}

/// The message of the last error libgit2 recorded on this thread.
///
/// Never empty.
pub(crate) fn last_error() -> String {
    // SAFETY: git_error_last returns null or a pointer to thread-local (or
    // static) storage that stays valid until the next libgit2 call on this
    // thread.
    unsafe {
        let err = raw::git_error_last();
        // Newer libgit2 reports "no error" with class NONE instead of null.
        if err.is_null()
            || (*err).klass == raw::GIT_ERROR_NONE as c_int
            || (*err).message.is_null()
        {
            return UNKNOWN_ERROR.to_string();
        }
        let message = CStr::from_ptr((*err).message)
            .to_string_lossy()
            .trim_end()
            .to_string();
        if message.is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

/// Convert a string argument to an owned C string.
pub(crate) fn to_cstring(what: &'static str, s: &str) -> GitResult<CString> {
    CString::new(s).map_err(|e| GitError::InvalidArgument {
        what,
        message: format!("contains a NUL byte at offset {}", e.nul_position()),
    })
}

/// Convert a filesystem path to an owned C string.
#[cfg(unix)]
pub(crate) fn path_to_cstring(path: &Path) -> GitResult<CString> {
    use std::os::unix::ffi::OsStrExt;

    CString::new(path.as_os_str().as_bytes()).map_err(|e| GitError::InvalidArgument {
        what: "path",
        message: format!("contains a NUL byte at offset {}", e.nul_position()),
    })
}

/// Convert a filesystem path to an owned C string.
#[cfg(not(unix))]
pub(crate) fn path_to_cstring(path: &Path) -> GitResult<CString> {
    let s = path.to_str().ok_or_else(|| GitError::InvalidArgument {
        what: "path",
        message: format!("{} is not valid unicode", path.display()),
    })?;
    to_cstring("path", s)
}

/// Copy a borrowed C string into an owned `PathBuf`, or `None` for null.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[cfg(unix)]
pub(crate) unsafe fn path_from_ptr(ptr: *const c_char) -> GitResult<Option<PathBuf>> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    if ptr.is_null() {
        return Ok(None);
    }
    let bytes = CStr::from_ptr(ptr).to_bytes();
    Ok(Some(PathBuf::from(OsStr::from_bytes(bytes))))
}

/// Copy a borrowed C string into an owned `PathBuf`, or `None` for null.
///
/// # Safety
///
/// Same contract as the unix variant.
#[cfg(not(unix))]
pub(crate) unsafe fn path_from_ptr(ptr: *const c_char) -> GitResult<Option<PathBuf>> {
    if ptr.is_null() {
        return Ok(None);
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map(|s| Some(PathBuf::from(s)))
        .map_err(|_| GitError::InvalidUtf8 { what: "path" })
}

/// Owned `git_buf`, disposed on drop.
pub(crate) struct Buf {
    raw: raw::git_buf,
}

impl Buf {
    pub(crate) fn new() -> Self {
        // SAFETY: an all-zero git_buf is GIT_BUF_INIT.
        Self {
            raw: unsafe { std::mem::zeroed() },
        }
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut raw::git_buf {
        &mut self.raw
    }

    /// The buffer's contents as UTF-8.
    pub(crate) fn to_utf8(&self, what: &'static str) -> GitResult<String> {
        if self.raw.ptr.is_null() {
            return Ok(String::new());
        }
        // SAFETY: libgit2 keeps `size` bytes initialized at `ptr`.
        let bytes =
            unsafe { std::slice::from_raw_parts(self.raw.ptr as *const u8, self.raw.size) };
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|_| GitError::InvalidUtf8 { what })
    }
}

impl Drop for Buf {
    fn drop(&mut self) {
        // SAFETY: the buffer is either GIT_BUF_INIT or was filled by libgit2.
        unsafe { raw::git_buf_dispose(&mut self.raw) }
    }
}
