//! Select the embeddings of a word list from an embedding text file.
//!
//! Embedding tables in word2vec's text format start with a header line
//! that holds the shape of the embedding matrix, followed by one word
//! and its vector per line. This crate shrinks such a table to the
//! words of a vocabulary: the word list is loaded into a
//! [`Vocabulary`](vocab::Vocabulary), after which the embedding file is
//! streamed line by line and every line whose word is in the vocabulary
//! is copied to the output.
//!
//! ```
//! use std::io::Cursor;
//!
//! use embedding_select::prelude::*;
//!
//! let mut words = Cursor::new("cat\ndog\n");
//! let vocab = Vocabulary::read_word_list(&mut words).unwrap();
//!
//! let mut embeddings = Cursor::new("3 2\nthe 0.1 0.2\ncat 0.3 0.4\ndog 0.5 0.6\n");
//! let mut output = Vec::new();
//! let stats = vocab.select_embeddings(&mut embeddings, &mut output).unwrap();
//!
//! assert_eq!(stats.n_selected, 2);
//! assert_eq!(output, b"cat 0.3 0.4\ndog 0.5 0.6\n");
//! ```

pub mod error;

pub mod io;

pub mod prelude;

pub mod select;

pub(crate) mod util;

pub mod vocab;
