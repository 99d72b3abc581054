/*!
 A byte source backed by any sequential reader.
*/

use std::io::{ErrorKind, Read};

use crate::{error::source::SourceError, source::ByteSource};

/// Serves reads from a sequential reader, counting consumed bytes
///
/// No seeking is required: the single-byte alignment skip is an ordinary
/// read. Positions are counted from 0 at construction.
#[derive(Debug)]
pub struct StreamSource<R> {
    /// Where the bytes come from
    reader: R,
    /// Count of bytes consumed so far
    position: u64,
}

impl<R: Read> StreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            position: 0,
        }
    }
}

impl<R: Read> ByteSource for StreamSource<R> {
    fn position(&self) -> u64 {
        self.position
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        self.reader.read_exact(buf).map_err(|why| match why.kind() {
            ErrorKind::UnexpectedEof => SourceError::EndOfInput,
            _ => SourceError::Io(why),
        })?;
        self.position += buf.len() as u64;
        Ok(())
    }

    fn read_owned(&mut self, len: usize) -> Result<Vec<u8>, SourceError> {
        // The requested length comes from an untrusted size field, so the
        // buffer grows as bytes actually arrive instead of being reserved
        // up front
        let mut buf = Vec::new();
        (&mut self.reader)
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(SourceError::Io)?;
        if buf.len() < len {
            return Err(SourceError::EndOfInput);
        }
        self.position += len as u64;
        Ok(buf)
    }

    fn skip_byte(&mut self) -> Result<bool, SourceError> {
        let mut pad = [0; 1];
        match self.reader.read_exact(&mut pad) {
            Ok(()) => {
                self.position += 1;
                Ok(true)
            }
            Err(why) if why.kind() == ErrorKind::UnexpectedEof => Ok(false),
            Err(why) => Err(SourceError::Io(why)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Error, ErrorKind, Read};

    use crate::{
        error::source::SourceError,
        source::{stream::StreamSource, ByteSource},
    };

    /// A reader that always fails with a non-EOF error
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(Error::new(ErrorKind::ConnectionReset, "wire fell out"))
        }
    }

    #[test]
    fn can_read_and_track_position() {
        let mut source = StreamSource::new(Cursor::new(vec![1, 2, 3, 4]));

        let mut buf = [0; 2];
        source.read_exact(&mut buf).unwrap();

        assert_eq!(buf, [1, 2]);
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn cant_read_past_end() {
        let mut source = StreamSource::new(Cursor::new(vec![1, 2]));

        let mut buf = [0; 4];
        let result = source.read_exact(&mut buf);

        assert!(matches!(result, Err(SourceError::EndOfInput)));
    }

    #[test]
    fn cant_read_owned_past_end() {
        let mut source = StreamSource::new(Cursor::new(vec![1, 2, 3]));

        let result = source.read_owned(10);

        assert!(matches!(result, Err(SourceError::EndOfInput)));
    }

    #[test]
    fn can_read_owned_exactly() {
        let mut source = StreamSource::new(Cursor::new(vec![1, 2, 3]));

        assert_eq!(source.read_owned(3).unwrap(), vec![1, 2, 3]);
        assert_eq!(source.position(), 3);
    }

    #[test]
    fn cant_skip_byte_at_end() {
        let mut source = StreamSource::new(Cursor::new(vec![]));

        assert!(!source.skip_byte().unwrap());
        assert_eq!(source.position(), 0);
    }

    #[test]
    fn can_surface_io_errors() {
        let mut source = StreamSource::new(BrokenReader);

        let mut buf = [0; 1];
        let result = source.read_exact(&mut buf);

        assert!(matches!(result, Err(SourceError::Io(_))));
    }
}
