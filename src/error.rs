use std::io;
use thiserror::Error;

//===========================================================================//

/// Errors produced while editing, reading or writing an icon set.
#[derive(Debug, Error)]
pub enum IconError {
    /// An icon id or pixel coordinate was outside its valid range.
    #[error(
        "{what} out of range (was {index}, but must be less than {limit})"
    )]
    IndexOutOfRange {
        /// Which kind of index was rejected (e.g. `"icon id"`).
        what: &'static str,
        /// The rejected value.
        index: usize,
        /// The exclusive upper bound.
        limit: usize,
    },

    /// The icon size does not pack evenly into 32-bit words.
    #[error("Invalid icon size ({0}); must be a nonzero multiple of 8")]
    InvalidSize(u32),

    /// The icon count is zero or does not fit the file format.
    #[error("Invalid icon count ({0}); must be between 1 and 65535")]
    InvalidCount(usize),

    /// A word buffer handed to an icon has the wrong length.
    #[error("Invalid icon data length (was {actual}, but must be {expected})")]
    DataLength {
        /// Words per icon for this icon set.
        expected: usize,
        /// Words actually supplied.
        actual: usize,
    },

    /// The file does not start with the iconset signature.
    #[error("Invalid file signature {0:?}")]
    BadMagic([u8; 4]),

    /// The file was written by an unknown version of the format.
    #[error("Unsupported iconset file version ({0})")]
    UnsupportedVersion(u16),

    /// The file ends before all declared names and icon data.
    #[error(
        "Truncated iconset file (needed {needed} bytes, found {available})"
    )]
    Truncated {
        /// Bytes required by the header's declared counts.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// An image could not be interpreted as an icon atlas.
    #[error("Invalid icon image: {0}")]
    InvalidImage(String),

    /// The PNG encoder or decoder reported an error.
    #[error("PNG error: {0}")]
    Png(String),

    /// Reading or writing the underlying storage failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, IconError>;

impl From<IconError> for io::Error {
    fn from(error: IconError) -> io::Error {
        match error {
            IconError::Io(error) => error,
            IconError::IndexOutOfRange { .. }
            | IconError::InvalidSize(_)
            | IconError::InvalidCount(_)
            | IconError::DataLength { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, error)
            }
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl From<png::EncodingError> for IconError {
    fn from(error: png::EncodingError) -> IconError {
        match error {
            png::EncodingError::IoError(error) => IconError::Io(error),
            other => IconError::Png(other.to_string()),
        }
    }
}

impl From<png::DecodingError> for IconError {
    fn from(error: png::DecodingError) -> IconError {
        match error {
            png::DecodingError::IoError(error) => IconError::Io(error),
            other => IconError::Png(other.to_string()),
        }
    }
}

//===========================================================================//


//===========================================================================//
