//! # `bertpiece` BERT Tokenizer
//!
//! A BERT-style `WordPiece` tokenizer, producing fixed-length model inputs.
//!
//! Text flows through:
//! * [`matching`] - special tokens are found and protected from splitting.
//! * [`normalizer`] - literal text is cleaned, lower-cased, and split.
//! * [`segmentation`] - words are decomposed into vocabulary subwords.
//! * [`encoding`] - tokens are assembled into [`Encoding`]s.
//!
//! [`BertTokenizer`] wires these together over a [`vocab::WordPieceVocab`].
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all `HashMap`/`HashSet` implementations for ``ahash``.
//!
//! This is done by the ``types::BPHash{Map,Set}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! Batch operations ([`BertTokenizer::tokenize_multi_pairs`],
//! [`BertTokenizer::encode_multi_pair`]) run in parallel under ``rayon``.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bertpiece::BertTokenizer;
//!
//! fn example() -> bertpiece::BPResult<()> {
//!     let tokenizer: BertTokenizer<u32> =
//!         BertTokenizer::from_vocab_path("bert-base-chinese/vocab.txt", false, true)?;
//!
//!     let tokens = tokenizer.tokenize("[CLS]美甲");
//!     assert_eq!(tokens, vec!["[CLS]", "美", "甲"]);
//!
//!     let encoding = tokenizer.tokenize_pair("what is it?", "it is a tokenizer.", 32);
//!     assert_eq!(encoding.input_ids.len(), 32);
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

pub mod encoding;
pub mod errors;
pub mod matching;
pub mod normalizer;
pub mod segmentation;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use encoding::Encoding;
#[doc(inline)]
pub use errors::{BPResult, BertPieceError};
#[doc(inline)]
pub use tokenizer::{BertTokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialTokens, WordPieceVocab};
