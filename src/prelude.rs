//! Prelude exports the most commonly-used types and traits.

pub use crate::io::ensure_parent_dir;

pub use crate::select::{SelectEmbeddings, SelectStats};

pub use crate::vocab::{ReadWordList, Vocabulary};
