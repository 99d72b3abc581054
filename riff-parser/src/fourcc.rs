/*!
 Four-character codes: the 4-byte tags that name every chunk in a RIFF file.
*/

use std::fmt::{Debug, Display, Formatter, Result};

/// A 4-byte chunk identifier, compared as raw bytes
///
/// Tags are usually ASCII (`RIFF`, `fmt `, `data`), but nothing guarantees
/// printable content, so equality is always over the raw bytes — never the
/// rendered text and never a host-endian machine word.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Tag of the top-level container chunk
    pub const RIFF: FourCC = FourCC(*b"RIFF");
    /// Tag of the named sub-list container chunk
    pub const LIST: FourCC = FourCC(*b"LIST");

    /// Whether this tag names one of the two container chunk kinds
    ///
    /// Every other tag is a leaf, regardless of the bytes that follow it.
    pub fn is_container(&self) -> bool {
        *self == Self::RIFF || *self == Self::LIST
    }
}

impl Display for FourCC {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() || byte == b' ' {
                write!(fmt, "{}", byte as char)?;
            } else {
                write!(fmt, "?")?;
            }
        }
        Ok(())
    }
}

impl Debug for FourCC {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        write!(fmt, "FourCC(\"{self}\")")
    }
}
