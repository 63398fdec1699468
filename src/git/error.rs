//! git::error
//!
//! Errors raised at the libgit2 boundary.

use thiserror::Error;

/// Errors from repository and configuration handles.
///
/// Every failing native call becomes [`GitError::Library`] carrying the
/// message libgit2 recorded for it. The remaining variants cover values that
/// cannot cross the C boundary at all; they are raised before any native
/// call is made.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GitError {
    /// A libgit2 call returned a failure status.
    #[error("{message}")]
    Library {
        /// The native last-error message, verbatim
        message: String,
    },

    /// An argument cannot be represented as a C string.
    #[error("invalid {what}: {message}")]
    InvalidArgument {
        /// Which argument was rejected (key, value, path)
        what: &'static str,
        /// Why it was rejected
        message: String,
    },

    /// libgit2 returned bytes that are not valid UTF-8.
    #[error("{what} returned by libgit2 is not valid UTF-8")]
    InvalidUtf8 {
        /// What was being read
        what: &'static str,
    },
}

impl GitError {
    /// The native diagnostic, if this error came from libgit2.
    pub fn library_message(&self) -> Option<&str> {
        match self {
            GitError::Library { message } => Some(message),
            _ => None,
        }
    }
}

/// Result alias for handle operations.
pub type GitResult<T> = Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn library_error_displays_message_verbatim() {
        let err = GitError::Library {
            message: "config value 'core.nope' was not found".to_string(),
        };
        assert_eq!(err.to_string(), "config value 'core.nope' was not found");
        assert_eq!(
            err.library_message(),
            Some("config value 'core.nope' was not found")
        );
    }

    #[test]
    fn invalid_argument_names_the_argument() {
        let err = GitError::InvalidArgument {
            what: "key",
            message: "contains a NUL byte".to_string(),
        };
        assert_eq!(err.to_string(), "invalid key: contains a NUL byte");
        assert!(err.library_message().is_none());
    }
}
