/*!
 Byte sources the chunk parser can read from.

 The parsing algorithm is written once against the [`ByteSource`] trait.
 [`BufferSource`](crate::source::buffer::BufferSource) serves reads out of a
 borrowed in-memory slice, while
 [`StreamSource`](crate::source::stream::StreamSource) pulls them from any
 sequential reader.
*/

use crate::error::source::SourceError;

pub mod buffer;
pub mod stream;

/// The capability set the chunk parser needs from its input
pub trait ByteSource {
    /// Offset of the next unread byte
    fn position(&self) -> u64;

    /// Fill `buf` from the source, advancing past the bytes read
    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;

    /// Read exactly `len` bytes into a new owned buffer
    fn read_owned(&mut self, len: usize) -> Result<Vec<u8>, SourceError>;

    /// Consume one alignment byte, reporting whether one was present
    ///
    /// Running out of input here is not a failure; the padding after the
    /// very last chunk of the input may be absent.
    fn skip_byte(&mut self) -> Result<bool, SourceError>;
}
