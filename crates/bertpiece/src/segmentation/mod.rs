//! # Subword Segmentation
//!
//! [`WordPieceSegmenter`] decomposes normalized words into vocabulary subwords.

pub mod wordpiece;

#[doc(inline)]
pub use wordpiece::{DEFAULT_CONTINUATION_PREFIX, DEFAULT_MAX_CHARS_PER_WORD, WordPieceSegmenter};
