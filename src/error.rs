//! Error types returned by engine construction and resource operations.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures the framework reports to callers.
///
/// Loop-time code never returns errors; a missing resource lookup yields a
/// placeholder instead of failing. Everything here surfaces synchronously
/// from the operation that caused it.
#[derive(Error, Debug)]
pub enum Error {
    /// Window geometry is unusable. Fatal to [`Engine::new`].
    ///
    /// [`Engine::new`]: crate::Engine::new
    #[error("bad window size {width}x{height}")]
    InvalidConfig { width: i32, height: i32 },

    /// A filesystem path given to a load or unload operation does not exist.
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is not one of the recognized image or font formats.
    #[error("unsupported file format: {0:?}")]
    UnsupportedFormat(String),

    /// A recognized file failed to decode or upload.
    #[error("could not load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// A configuration file could not be written.
    #[error("could not save {}: {reason}", .path.display())]
    Save { path: PathBuf, reason: String },
}
