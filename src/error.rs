use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("input is empty")]
    EmptyInput,

    #[error("header doesn't contain field '{field}'")]
    FieldNotFound { field: String },

    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}, column {column}: email '{email}' is not valid")]
    InvalidEmail {
        line: usize,
        column: usize,
        email: String,
    },

    #[error("line {line}, column {column}: email '{email}' already counted")]
    DuplicateEmail {
        line: usize,
        column: usize,
        email: String,
    },

    #[error("no valid emails found")]
    NoValidEmails,

    #[error("file not found: {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
}

impl ImportError {
    /// Classifies a failure to open an input file.
    pub fn open(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => ImportError::FileNotFound { path, source },
            io::ErrorKind::PermissionDenied => ImportError::PermissionDenied { path, source },
            _ => ImportError::Io { path, source },
        }
    }

    /// Line the error refers to, when it is tied to a record.
    pub fn line(&self) -> Option<usize> {
        match self {
            ImportError::MalformedRecord { line, .. }
            | ImportError::InvalidEmail { line, .. }
            | ImportError::DuplicateEmail { line, .. }
            | ImportError::Csv { line, .. } => Some(*line),
            ImportError::FieldNotFound { .. } => Some(1),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_errors_are_classified_by_kind() {
        let path = Path::new("customers.csv");

        let err = ImportError::open(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, ImportError::FileNotFound { .. }));

        let err = ImportError::open(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, ImportError::PermissionDenied { .. }));

        let err = ImportError::open(path, io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, ImportError::Io { .. }));
    }

    #[test]
    fn email_errors_report_line_and_column() {
        let err = ImportError::InvalidEmail {
            line: 2,
            column: 2,
            email: "mhernandezgithub.io".to_string(),
        };
        assert!(err.to_string().contains("line 2, column 2"));
        assert_eq!(err.line(), Some(2));
    }
}
