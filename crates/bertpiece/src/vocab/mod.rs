//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! * [`WordPieceVocab`] - the bidirectional ``{ String <-> T }`` vocabulary.
//! * [`SpecialTokens`] - the literal special token strings of a tokenizer.
//! * [`io`] - `vocab.txt` readers and writers.

pub mod io;
pub mod special_tokens;
pub mod token_vocab;

#[doc(inline)]
pub use special_tokens::SpecialTokens;
#[doc(inline)]
pub use token_vocab::WordPieceVocab;
