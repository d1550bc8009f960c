//! Vocabularies of words to select.

use std::io::BufRead;
use std::iter::FromIterator;

use fnv::FnvHashSet;
use tracing::debug;

use crate::error::Result;
use crate::util::{decode_line, read_line_bytes};

/// Set of words whose embeddings should be selected.
///
/// Insertion is idempotent, duplicate words collapse into one entry.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Vocabulary {
    words: FnvHashSet<String>,
}

impl Vocabulary {
    /// Construct an empty vocabulary.
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Add a word, returns `false` if the word was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Check whether the vocabulary contains `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S> FromIterator<S> for Vocabulary
where
    S: Into<String>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Vocabulary {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Method to construct a `Vocabulary` from a word list.
///
/// The word list contains one word per line. Whitespace around a word
/// is removed and lines that are blank after trimming are skipped.
pub trait ReadWordList<R>
where
    Self: Sized,
    R: BufRead,
{
    /// Read the word list from the given buffered reader.
    fn read_word_list(reader: &mut R) -> Result<Self>;

    /// Read the word list from the given buffered reader.
    ///
    /// In contrast to `read_word_list`, this constructor does not
    /// fail if a word contains invalid UTF-8. Instead, it will
    /// replace invalid UTF-8 characters by the replacement
    /// character.
    fn read_word_list_lossy(reader: &mut R) -> Result<Self>;
}

impl<R> ReadWordList<R> for Vocabulary
where
    R: BufRead,
{
    fn read_word_list(reader: &mut R) -> Result<Self> {
        read_words(reader, false)
    }

    fn read_word_list_lossy(reader: &mut R) -> Result<Self> {
        read_words(reader, true)
    }
}

fn read_words(reader: &mut dyn BufRead, lossy: bool) -> Result<Vocabulary> {
    let mut vocab = Vocabulary::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    while read_line_bytes(reader, &mut buf, "Cannot read line from word list")? {
        line_no += 1;

        let line = decode_line(&buf, lossy, line_no)?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        vocab.insert(word);
    }

    debug!("Read {} words from {} word list lines", vocab.len(), line_no);

    Ok(vocab)
}
