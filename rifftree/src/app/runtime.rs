/*!
 The runtime that coordinates loading a file, parsing it, and rendering the tree.
*/

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdout},
};

use riff_parser::chunk::models::Chunk;

use crate::app::{error::RuntimeError, options::Options, printer::TreePrinter};

/// Contains the application state
pub struct Config {
    /// App configuration options
    pub options: Options,
}

impl Config {
    /// Create the application state
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Parse the input file and render its chunk tree to stdout
    pub fn start(&self) -> Result<(), RuntimeError> {
        let chunks = self.parse()?;

        if let (Some(expected), Some(first)) = (&self.options.expected_first_tag, chunks.first()) {
            if first.tag != *expected {
                return Err(RuntimeError::UnexpectedFirstTag(*expected, first.tag));
            }
        }

        let printer = TreePrinter::new(self.options.show_sizes);
        let mut out = BufWriter::new(stdout().lock());
        for chunk in &chunks {
            printer
                .print_tree(&mut out, chunk)
                .map_err(RuntimeError::DiskError)?;
        }
        out.flush().map_err(RuntimeError::DiskError)
    }

    /// Parse the top-level chunks of the input file
    fn parse(&self) -> Result<Vec<Chunk>, RuntimeError> {
        let file = File::open(&self.options.input)
            .map_err(|why| RuntimeError::OpenError(why, self.options.input.clone()))?;

        if !self.options.flat {
            let chunk =
                Chunk::from_reader(BufReader::new(file)).map_err(RuntimeError::ParseError)?;
            return Ok(vec![chunk]);
        }

        // A flat file is a bare sequence of sibling chunks with no enclosing
        // form, so parsing repeats until the buffer runs out
        let mut data = vec![];
        BufReader::new(file)
            .read_to_end(&mut data)
            .map_err(RuntimeError::DiskError)?;

        let mut chunks = vec![];
        let mut cursor = 0;
        while cursor < data.len() {
            chunks.push(Chunk::from_buffer(&data, &mut cursor).map_err(RuntimeError::ParseError)?);
        }
        Ok(chunks)
    }
}
