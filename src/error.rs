use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The filesystem step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOperation {
    CreateDirectory,
    OpenFile,
    Write,
    Flush,
    Sync,
}

impl fmt::Display for IoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateDirectory => "create directory",
            Self::OpenFile => "open log file",
            Self::Write => "write to",
            Self::Flush => "flush",
            Self::Sync => "sync",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("missing log directory path in logger config")]
    MissingLogDirectoryPath,

    #[error("missing log name in logger config")]
    MissingLogName,

    #[error("failed to {operation} {}", path.display())]
    Io {
        operation: IoOperation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    pub(crate) fn io(operation: IoOperation, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Kind of the underlying I/O failure, if this is an I/O error.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::MissingLogDirectoryPath | Self::MissingLogName => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_operation_and_path() {
        let err = LoggerError::io(
            IoOperation::OpenFile,
            "/var/log/maokai/app.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "failed to open log file /var/log/maokai/app.log"
        );
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_errors_have_no_io_kind() {
        assert_eq!(LoggerError::MissingLogName.io_kind(), None);
        assert_eq!(LoggerError::MissingLogDirectoryPath.io_kind(), None);
    }
}
