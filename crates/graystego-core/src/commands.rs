//! Path-level entry points the CLI delegates to.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::error;

use crate::pgm::PgmWriter;
use crate::pipeline::{EmbedWidth, Embedder, EmbeddingReport};
use crate::result::Result;
use crate::sources::{CoverMatrix, SecretBits};
use crate::StegoError;

/// Embeds the secret bit stream into the cover matrix and writes the stego
/// image as a plain PGM file.
///
/// Both sources are opened and parsed in full before the target file is
/// created, so every rejected run leaves no output behind.
pub fn embed(
    cover: &Path,
    secret: &Path,
    write_to_file: &Path,
    width: EmbedWidth,
) -> Result<EmbeddingReport> {
    let cover_file = open_source(cover)?;
    let secret_file = open_source(secret)?;

    let matrix = CoverMatrix::from_reader(BufReader::new(cover_file))?;
    let bits = SecretBits::from_reader(BufReader::new(secret_file))?;

    let embedder = Embedder::new(width);
    embedder.ensure_capacity(&bits)?;

    let target = File::create(write_to_file).map_err(|source| {
        error!("Error creating file {write_to_file:?}: {source}");
        StegoError::WriteError { source }
    })?;
    let mut sink = PgmWriter::new(BufWriter::new(target));
    let report = embedder.run(&matrix, &bits, &mut sink)?;
    sink.finish()?;

    Ok(report)
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| StegoError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })
}
