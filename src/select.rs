//! Selection of embeddings from text files.
//!
//! The embedding file is expected in word2vec's text format: the first
//! line is a header (usually the shape of the embedding matrix), every
//! following line holds a word and its vector:
//!
//! *word0 component_1 component_2 ... component_n*
//!
//! The header is always discarded, regardless of its contents. The
//! vector components are never parsed, selected lines are copied to
//! the output with only their surrounding whitespace removed.
//!
//! ```
//! use std::io::Cursor;
//!
//! use embedding_select::prelude::*;
//!
//! let vocab: Vocabulary = vec!["foo"].into_iter().collect();
//!
//! let mut embeddings = Cursor::new("2 3\n  foo   1 2 3  \nbar 4 5 6\n");
//! let mut output = Vec::new();
//! vocab.select_embeddings(&mut embeddings, &mut output).unwrap();
//!
//! assert_eq!(output, b"foo   1 2 3\n");
//! ```

use std::io::{BufRead, Write};

use tracing::info;

use crate::error::{Error, Result};
use crate::util::{decode_line, first_token, read_line_bytes};
use crate::vocab::Vocabulary;

/// Number of embedding lines between progress reports.
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Statistics of a selection pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SelectStats {
    /// Number of embedding lines read, excluding the header.
    pub n_lines: usize,

    /// Number of lines written to the output.
    pub n_selected: usize,
}

/// Method to select embeddings from a text stream.
///
/// This trait is implemented by vocabularies. Every line of the
/// embedding stream after the header whose first token is in the
/// vocabulary is written to the writer. The relative order of the
/// lines is preserved.
pub trait SelectEmbeddings<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Select embeddings from the given buffered reader.
    fn select_embeddings(&self, reader: &mut R, writer: &mut W) -> Result<SelectStats>;

    /// Select embeddings from the given buffered reader.
    ///
    /// In contrast to `select_embeddings`, this method does not fail
    /// if a line contains invalid UTF-8. Instead, it will replace
    /// invalid UTF-8 characters by the replacement character.
    fn select_embeddings_lossy(&self, reader: &mut R, writer: &mut W) -> Result<SelectStats>;
}

impl<R, W> SelectEmbeddings<R, W> for Vocabulary
where
    R: BufRead,
    W: Write,
{
    fn select_embeddings(&self, reader: &mut R, writer: &mut W) -> Result<SelectStats> {
        select_lines(self, reader, writer, false)
    }

    fn select_embeddings_lossy(&self, reader: &mut R, writer: &mut W) -> Result<SelectStats> {
        select_lines(self, reader, writer, true)
    }
}

fn select_lines(
    vocab: &Vocabulary,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    lossy: bool,
) -> Result<SelectStats> {
    let mut stats = SelectStats::default();
    let mut buf = Vec::new();

    // The header is not decoded, it only has to be skipped.
    if !read_line_bytes(reader, &mut buf, "Cannot read header from embedding file")? {
        return Ok(stats);
    }

    while read_line_bytes(reader, &mut buf, "Cannot read line from embedding file")? {
        // Header is line 1.
        let line = decode_line(&buf, lossy, stats.n_lines + 2)?;
        let line = line.trim();

        if first_token(line).map_or(false, |word| vocab.contains(word)) {
            writer
                .write_all(line.as_bytes())
                .and_then(|_| writer.write_all(b"\n"))
                .map_err(|e| Error::io_error("Cannot write selected embedding", e))?;
            stats.n_selected += 1;
        }

        stats.n_lines += 1;
        if stats.n_lines % PROGRESS_INTERVAL == 0 {
            info!("Processed {} lines", stats.n_lines);
        }
    }

    writer
        .flush()
        .map_err(|e| Error::io_error("Cannot flush selected embeddings", e))?;

    Ok(stats)
}
