/*!
 Errors that can happen during the application's runtime.
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use riff_parser::{error::chunk::ChunkError, fourcc::FourCC};

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    OpenError(IoError, PathBuf),
    ParseError(ChunkError),
    UnexpectedFirstTag(FourCC, FourCC),
    DiskError(IoError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::OpenError(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::ParseError(why) => write!(fmt, "Error loading RIFF file: {why}"),
            RuntimeError::UnexpectedFirstTag(expected, found) => {
                write!(
                    fmt,
                    "Invalid file header ID (expected '{expected}' but got '{found}')"
                )
            }
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
        }
    }
}
