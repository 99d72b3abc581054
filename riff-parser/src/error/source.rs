/*!
 Errors that can happen when pulling bytes out of a byte source.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when pulling bytes out of a byte source
#[derive(Debug)]
pub enum SourceError {
    EndOfInput,
    Io(std::io::Error),
}

impl Display for SourceError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            SourceError::EndOfInput => write!(fmt, "Unexpected end of input!"),
            SourceError::Io(why) => write!(fmt, "{why}"),
        }
    }
}
