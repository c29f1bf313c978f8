//! Error handling for sls
//!
//! Every failure while collecting or rendering a listing is one of the
//! variants below. A failure aborts the whole listing.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Error type for listing operations
#[derive(Error, Debug)]
pub enum LsError {
    /// The target path or one of its entries does not exist
    #[error("No such file or directory: '{0}'")]
    PathNotFound(String),

    /// Access to a path was refused by the operating system
    #[error("Permission denied: '{0}'")]
    PermissionDenied(String),

    /// A numeric owner or group ID has no name on this system
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Malformed command-line usage.
    ///
    /// Reserved: clap reports usage errors itself and exits with status 2
    /// before a listing starts, so nothing in the listing path builds this.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Any other filesystem error
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing the listing failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl LsError {
    /// Classify an I/O error raised while touching `path`
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound(path),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::Io { path, source: err },
        }
    }

    /// Process exit code used when strict exit mode is on
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io { .. } | Self::Output(_) => 1,
            Self::PathNotFound(_) => 2,
            Self::PermissionDenied(_) => 3,
            Self::Lookup(_) => 4,
            Self::InvalidArgument(_) => 64,
        }
    }
}

/// Specialized Result type for sls operations
pub type Result<T> = std::result::Result<T, LsError>;

/// Creates an LsError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::LsError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Extension trait attaching the offending path to I/O errors
pub trait IoResultExt<T> {
    /// Convert the error into an [`LsError`] for `path`
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| LsError::from_io(e, path))
    }
}
