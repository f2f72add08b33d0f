//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use bertpiece::vocab::{WordPieceVocab, io::load_vocab_txt_path};
//!
//! fn example() -> bertpiece::BPResult<WordPieceVocab<u32>> {
//!     load_vocab_txt_path("bert-base-chinese/vocab.txt")
//! }
//! ```

mod vocab_txt;

#[doc(inline)]
pub use vocab_txt::*;
