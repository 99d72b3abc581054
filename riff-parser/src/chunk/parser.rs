/*!
 Contains logic to parse chunks out of RIFF data.

 Layout referenced from the 1991 IBM/Microsoft Multimedia Programming
 Interface and Data Specification; every multi-byte field is little-endian.
*/

use crate::{
    chunk::models::{Chunk, ChunkBody},
    error::{chunk::ChunkError, source::SourceError},
    fourcc::FourCC,
    source::ByteSource,
};

/// Deepest chunk nesting the parser will follow
///
/// Nesting depth equals input nesting depth, which the file's author
/// controls; real RIFF profiles stay in the single digits.
pub const MAX_DEPTH: usize = 64;

/// Contains logic and state used to parse chunks out of a byte source
#[derive(Debug)]
pub struct ChunkParser<S> {
    /// Where the bytes come from
    source: S,
}

impl<S: ByteSource> ChunkParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Offset of the next unread byte in the underlying source
    pub fn position(&self) -> u64 {
        self.source.position()
    }

    /// Parse one complete chunk, recursing into children if it is a container
    pub fn parse(&mut self) -> Result<Chunk, ChunkError> {
        self.parse_chunk(0)
    }

    fn parse_chunk(&mut self, depth: usize) -> Result<Chunk, ChunkError> {
        if depth >= MAX_DEPTH {
            return Err(ChunkError::TooDeep(MAX_DEPTH));
        }

        let header_start = self.source.position();
        let tag = self
            .read_fourcc()
            .map_err(|why| truncated(why, ChunkError::TruncatedHeader(header_start)))?;
        let size = self
            .read_size()
            .map_err(|why| truncated(why, ChunkError::TruncatedHeader(header_start)))?;

        // An explicitly empty chunk is terminal no matter what its tag says
        if size == 0 {
            return Ok(Chunk {
                tag,
                size,
                body: ChunkBody::Empty,
            });
        }

        if tag.is_container() {
            let body_start = self.source.position();
            let form = self
                .read_fourcc()
                .map_err(|why| truncated(why, ChunkError::TruncatedSubType(body_start)))?;

            // The form type counts toward the declared size, so the children
            // occupy whatever remains of it. The boundary is the declared
            // end, never the end of input: trailing bytes beyond it belong
            // to the next sibling.
            let end = body_start + u64::from(size);
            let mut children = Vec::new();
            while self.source.position() < end {
                children.push(self.parse_chunk(depth + 1)?);
            }
            return Ok(Chunk {
                tag,
                size,
                body: ChunkBody::List { form, children },
            });
        }

        let payload_start = self.source.position();
        let payload = self
            .source
            .read_owned(size as usize)
            .map_err(|why| truncated(why, ChunkError::TruncatedPayload(payload_start, size)))?;

        // Chunks start on even offsets; a missing alignment byte at the end
        // of the input is fine
        if self.source.position() % 2 == 1 {
            match self.source.skip_byte() {
                Ok(_) | Err(SourceError::EndOfInput) => {}
                Err(SourceError::Io(why)) => return Err(ChunkError::Io(why)),
            }
        }

        Ok(Chunk {
            tag,
            size,
            body: ChunkBody::Data(payload),
        })
    }

    /// Read the next 4 bytes as a tag
    fn read_fourcc(&mut self) -> Result<FourCC, SourceError> {
        let mut bytes = [0; 4];
        self.source.read_exact(&mut bytes)?;
        Ok(FourCC(bytes))
    }

    /// Read the next 4 bytes as a little-endian chunk size
    fn read_size(&mut self) -> Result<u32, SourceError> {
        let mut bytes = [0; 4];
        self.source.read_exact(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }
}

/// Keep real I/O failures distinct from the positional truncation kinds
fn truncated(err: SourceError, eof: ChunkError) -> ChunkError {
    match err {
        SourceError::EndOfInput => eof,
        SourceError::Io(why) => ChunkError::Io(why),
    }
}
