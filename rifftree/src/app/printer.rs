/*!
 Renders a parsed chunk tree as indented text, one chunk per line.
*/

use std::io::{Result, Write};

use riff_parser::chunk::models::{Chunk, ChunkBody};

/// One level of tree indentation
const INDENT: &str = "            ";

/// Renders chunk trees in the classic `rifftree` layout: containers as
/// `TAG(FORM)->` followed by their children one level deeper, leaves as `TAG;`
pub struct TreePrinter {
    /// If true, print each chunk's declared size next to its tag
    show_sizes: bool,
}

impl TreePrinter {
    pub fn new(show_sizes: bool) -> Self {
        Self { show_sizes }
    }

    /// Write the tree rooted at `chunk` to `out`
    pub fn print_tree(&self, out: &mut impl Write, chunk: &Chunk) -> Result<()> {
        self.print_chunk(out, chunk, 0)
    }

    fn print_chunk(&self, out: &mut impl Write, chunk: &Chunk, level: usize) -> Result<()> {
        for _ in 0..level {
            write!(out, "{INDENT}")?;
        }
        match &chunk.body {
            ChunkBody::List { form, children } => {
                write!(out, "{}({form})->", chunk.tag)?;
                if self.show_sizes {
                    // The form type is framing, not content
                    write!(out, " ({} Bytes)", chunk.size.saturating_sub(4))?;
                }
                writeln!(out)?;
                for child in children {
                    self.print_chunk(out, child, level + 1)?;
                }
            }
            _ => {
                write!(out, "{};", chunk.tag)?;
                if self.show_sizes {
                    write!(out, " ({} Bytes)", chunk.size)?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
