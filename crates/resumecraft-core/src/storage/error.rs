//! Storage errors
//!
//! I/O failures are classified by what the medium was doing and why it
//! failed, so the CLI can tell the user what to fix via [`StorageError::hint`].

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// What the medium was doing when an I/O call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Read => f.write_str("read"),
            Access::Write => f.write_str("write"),
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Cannot create data directory {path:?}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No permission to {access} {path:?}")]
    PermissionDenied {
        access: Access,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No space left to write {path:?}")]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot {access} {path:?}: {source}")]
    Io {
        access: Access,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The temp file was written but could not replace the target
    #[error("Cannot replace {to:?} with {from:?}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Stored value is not valid resume state
    #[error("Value under '{key}' is not valid resume state: {details}")]
    InvalidFormat { key: String, details: String },

    /// Invalid state was found and copied aside before being replaced
    #[error("Value under '{key}' was unreadable and has been copied to '{backup_key}': {details}")]
    CorruptState {
        key: String,
        backup_key: String,
        details: String,
    },

    #[error("Invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Cannot serialize resume state: {0}")]
    Serialization(#[from] serde_json::Error),

    /// In-memory medium was poisoned by a panicking writer
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Classify an I/O failure on `path`
    pub fn io(error: io::Error, access: Access, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if error.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied {
                access,
                path,
                source: error,
            }
        } else if access == Access::Write && is_out_of_space(&error) {
            StorageError::DiskFull {
                path,
                source: error,
            }
        } else {
            StorageError::Io {
                access,
                path,
                source: error,
            }
        }
    }

    /// What the user can do about this error, if anything
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => {
                Some("Free up disk space; the next change saves the whole resume again.")
            }
            StorageError::PermissionDenied { .. } | StorageError::CreateDirectory { .. } => {
                Some("Make the data directory writable, or move it with `resumecraft config set data_dir <path>`.")
            }
            StorageError::InvalidKey { .. } => {
                Some("Pick a storage key without '/', '\\' or '..' with `resumecraft config set storage_key <name>`.")
            }
            StorageError::CorruptState { .. } => {
                Some("Recover what you need from the backup by hand, or import a JSON export.")
            }
            _ => None,
        }
    }
}

fn is_out_of_space(error: &io::Error) -> bool {
    // ENOSPC / EDQUOT
    #[cfg(unix)]
    if matches!(error.raw_os_error(), Some(28) | Some(122)) {
        return true;
    }
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left") || msg.contains("not enough space")
}

pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_on_read() {
        let err = StorageError::io(
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            Access::Read,
            "/data/resume-storage.json",
        );

        assert!(matches!(
            err,
            StorageError::PermissionDenied {
                access: Access::Read,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "No permission to read \"/data/resume-storage.json\""
        );
        assert!(err.hint().unwrap().contains("data_dir"));
    }

    #[test]
    fn test_out_of_space_only_counts_for_writes() {
        let full = || io::Error::other("No space left on device");

        let write = StorageError::io(full(), Access::Write, "/full/resume-storage.json");
        assert!(matches!(write, StorageError::DiskFull { .. }));
        assert!(write.hint().is_some());

        let read = StorageError::io(full(), Access::Read, "/full/resume-storage.json");
        assert!(matches!(read, StorageError::Io { .. }));
        assert!(read.hint().is_none());
    }

    #[test]
    fn test_other_io_errors_keep_their_cause() {
        let err = StorageError::io(
            io::Error::new(io::ErrorKind::InvalidInput, "bad handle"),
            Access::Write,
            "/data/x.json",
        );
        let msg = err.to_string();
        assert!(msg.starts_with("Cannot write"));
        assert!(msg.contains("bad handle"));
    }

    #[test]
    fn test_corrupt_state_names_backup() {
        let err = StorageError::CorruptState {
            key: "resume-storage".to_string(),
            backup_key: "resume-storage.corrupt".to_string(),
            details: "expected value at line 1 column 1".to_string(),
        };

        assert!(err.to_string().contains("resume-storage.corrupt"));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_invalid_format_has_no_hint() {
        let err = StorageError::InvalidFormat {
            key: "resume-storage".to_string(),
            details: "trailing characters".to_string(),
        };

        assert!(err.hint().is_none());
        assert!(err.to_string().contains("resume-storage"));
    }
}
