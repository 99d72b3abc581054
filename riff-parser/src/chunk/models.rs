/*!
 Data structures representing a parsed RIFF chunk tree.
*/

use std::io::Read;

use crate::{
    chunk::parser::ChunkParser,
    error::chunk::ChunkError,
    fourcc::FourCC,
    source::{buffer::BufferSource, stream::StreamSource},
};

/// A single chunk: a tag, the size its header declared, and what it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The 4-byte tag naming this chunk
    pub tag: FourCC,
    /// The size exactly as declared in the header; counts the form type of a
    /// container but never the header itself or the trailing alignment byte
    pub size: u32,
    /// What the chunk contains
    pub body: ChunkBody,
}

/// What a chunk contains, decided by its tag and declared size
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkBody {
    /// A chunk with declared size 0 ends at its own header, container tag or not
    Empty,
    /// A leaf chunk's raw payload, exactly as many bytes as the header declared
    Data(Vec<u8>),
    /// A container's form type and children, in on-disk order
    List {
        form: FourCC,
        children: Vec<Chunk>,
    },
}

impl Chunk {
    /// Parse one chunk tree out of an in-memory buffer
    ///
    /// `cursor` is the position to start at and is left on the first byte
    /// after the parsed chunk, so chunks laid end to end can be walked by
    /// calling this repeatedly with the same cursor.
    pub fn from_buffer(data: &[u8], cursor: &mut usize) -> Result<Chunk, ChunkError> {
        ChunkParser::new(BufferSource::new(data, cursor)).parse()
    }

    /// Parse one chunk tree from a sequential reader
    ///
    /// The reader is never seeked, so anything implementing [`Read`] works.
    pub fn from_reader<R: Read>(reader: R) -> Result<Chunk, ChunkError> {
        ChunkParser::new(StreamSource::new(reader)).parse()
    }

    /// Whether this chunk was parsed as a container
    ///
    /// A container tag with a declared size of 0 comes back [`ChunkBody::Empty`],
    /// so this can differ from [`FourCC::is_container`] on the tag alone.
    pub fn is_container(&self) -> bool {
        matches!(self.body, ChunkBody::List { .. })
    }

    /// The container's form type, if this chunk was parsed as a container
    pub fn form(&self) -> Option<FourCC> {
        match &self.body {
            ChunkBody::List { form, .. } => Some(*form),
            _ => None,
        }
    }

    /// The leaf payload, if this chunk carries one
    pub fn payload(&self) -> Option<&[u8]> {
        match &self.body {
            ChunkBody::Data(payload) => Some(payload),
            _ => None,
        }
    }

    /// The chunk's children; empty for anything that is not a parsed container
    pub fn children(&self) -> &[Chunk] {
        match &self.body {
            ChunkBody::List { children, .. } => children,
            _ => &[],
        }
    }
}

impl Drop for Chunk {
    fn drop(&mut self) {
        // Nesting depth is author-controlled, so child lists are drained
        // onto an explicit worklist instead of letting drop glue recurse
        // once per level
        if let ChunkBody::List { children, .. } = &mut self.body {
            let mut stack = std::mem::take(children);
            while let Some(mut chunk) = stack.pop() {
                if let ChunkBody::List { children, .. } = &mut chunk.body {
                    stack.append(children);
                }
            }
        }
    }
}
