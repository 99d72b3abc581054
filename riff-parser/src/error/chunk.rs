/*!
 Errors that can happen when parsing chunks out of RIFF data.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when parsing chunks out of RIFF data
///
/// The truncation variants carry the offset at which the unfinished field
/// began, so the failure can be located in the input.
#[derive(Debug)]
pub enum ChunkError {
    TruncatedHeader(u64),
    TruncatedSubType(u64),
    TruncatedPayload(u64, u32),
    TooDeep(usize),
    Io(std::io::Error),
}

impl Display for ChunkError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            ChunkError::TruncatedHeader(offset) => {
                write!(
                    fmt,
                    "Unexpected end of input in chunk header at offset {offset:x}!"
                )
            }
            ChunkError::TruncatedSubType(offset) => {
                write!(
                    fmt,
                    "Unexpected end of input in container form type at offset {offset:x}!"
                )
            }
            ChunkError::TruncatedPayload(offset, size) => {
                write!(
                    fmt,
                    "Unexpected end of input in chunk payload at offset {offset:x} (expected {size} bytes)!"
                )
            }
            ChunkError::TooDeep(limit) => {
                write!(fmt, "Chunk tree exceeds the maximum nesting depth of {limit}!")
            }
            ChunkError::Io(why) => write!(fmt, "{why}"),
        }
    }
}
