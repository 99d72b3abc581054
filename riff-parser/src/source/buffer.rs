/*!
 A byte source backed by an in-memory slice with a caller-owned cursor.
*/

use crate::{error::source::SourceError, source::ByteSource};

/// Serves reads out of a borrowed slice, advancing a cursor the caller owns
///
/// Because the cursor is borrowed rather than owned, consecutive parses over
/// the same buffer pick up where the previous one stopped, which is how
/// chunks laid end to end in a single allocation are walked.
#[derive(Debug)]
pub struct BufferSource<'a> {
    /// The bytes to serve reads from
    data: &'a [u8],
    /// Position of the next unread byte, owned by the caller
    cursor: &'a mut usize,
}

impl<'a> BufferSource<'a> {
    pub fn new(data: &'a [u8], cursor: &'a mut usize) -> Self {
        Self { data, cursor }
    }

    /// Borrow the next `len` bytes, advancing the cursor past them
    ///
    /// A read that ends exactly at the last byte of `data` succeeds.
    fn take(&mut self, len: usize) -> Result<&[u8], SourceError> {
        let start = *self.cursor;
        let end = start.checked_add(len).ok_or(SourceError::EndOfInput)?;
        let bytes = self.data.get(start..end).ok_or(SourceError::EndOfInput)?;
        *self.cursor = end;
        Ok(bytes)
    }
}

impl ByteSource for BufferSource<'_> {
    fn position(&self) -> u64 {
        *self.cursor as u64
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        let bytes = self.take(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }

    fn read_owned(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        Ok(self.take(len)?.to_vec())
    }

    fn skip_byte(&mut self) -> Result<bool, SourceError> {
        if *self.cursor < self.data.len() {
            *self.cursor += 1;
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use crate::source::{buffer::BufferSource, ByteSource};

    #[test]
    fn can_read_final_byte() {
        let data = [1, 2, 3, 4];
        let mut cursor = 0;
        let mut source = BufferSource::new(&data, &mut cursor);

        let bytes = source.read_owned(4).unwrap();

        assert_eq!(bytes, vec![1, 2, 3, 4]);
        assert_eq!(source.position(), 4);
    }

    #[test]
    fn cant_read_past_end() {
        let data = [1, 2, 3, 4];
        let mut cursor = 0;
        let mut source = BufferSource::new(&data, &mut cursor);

        assert!(source.read_owned(5).is_err());
        // A failed read consumes nothing
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn can_share_cursor_across_sources() {
        let data = [1, 2, 3, 4, 5, 6];
        let mut cursor = 0;

        let mut first = BufferSource::new(&data, &mut cursor);
        assert_eq!(first.read_owned(2).unwrap(), vec![1, 2]);

        let mut second = BufferSource::new(&data, &mut cursor);
        assert_eq!(second.read_owned(2).unwrap(), vec![3, 4]);
        assert_eq!(cursor, 4);
    }

    #[test]
    fn can_start_from_nonzero_cursor() {
        let data = [1, 2, 3, 4];
        let mut cursor = 2;
        let mut source = BufferSource::new(&data, &mut cursor);

        assert_eq!(source.position(), 2);
        assert_eq!(source.read_owned(2).unwrap(), vec![3, 4]);
    }

    #[test]
    fn can_skip_byte_mid_buffer() {
        let data = [1, 2];
        let mut cursor = 0;
        let mut source = BufferSource::new(&data, &mut cursor);

        assert!(source.skip_byte().unwrap());
        assert_eq!(source.position(), 1);
    }

    #[test]
    fn cant_skip_byte_at_end() {
        let data = [1, 2];
        let mut cursor = 2;
        let mut source = BufferSource::new(&data, &mut cursor);

        assert!(!source.skip_byte().unwrap());
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn can_fill_exact_buffer() {
        let data = [9, 8, 7];
        let mut cursor = 0;
        let mut source = BufferSource::new(&data, &mut cursor);

        let mut buf = [0; 2];
        source.read_exact(&mut buf).unwrap();

        assert_eq!(buf, [9, 8]);
        assert_eq!(cursor, 2);
    }
}
