//! Plain (ASCII) PGM rendering of the stego matrix.

use std::io::{self, Write};

use crate::error::StegoError;
use crate::pipeline::PixelSink;
use crate::result::Result;
use crate::MATRIX_DIM;

/// Magic token of the plain gray-map format.
const MAGIC: &str = "P2";

/// Largest gray value announced in the header.
const MAX_GRAY: u8 = u8::MAX;

/// Writes the stego pixel stream as a plain PGM image: a three-line header
/// followed by every intensity and a trailing separator.
pub struct PgmWriter<W: Write> {
    inner: W,
    header_written: bool,
}

impl<W: Write> PgmWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.inner, "{MAGIC}")?;
        writeln!(self.inner, "{MATRIX_DIM} {MATRIX_DIM}")?;
        writeln!(self.inner, "{MAX_GRAY}")
    }

    /// Flushes the underlying writer.
    pub fn finish(mut self) -> Result<()> {
        self.inner
            .flush()
            .map_err(|source| StegoError::WriteError { source })
    }
}

impl<W: Write> PixelSink for PgmWriter<W> {
    fn write_pixel(&mut self, value: u8) -> Result<()> {
        if !self.header_written {
            self.write_header()
                .map_err(|source| StegoError::WriteError { source })?;
            self.header_written = true;
        }
        write!(self.inner, "{value} ").map_err(|source| StegoError::WriteError { source })
    }
}
