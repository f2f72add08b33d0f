//! # Model Encodings
//!
//! [`Encoding`] is the fixed-length `(input_ids, input_mask, segment_ids)`
//! triple consumed by BERT-family models; [`truncation`] holds the
//! length policy used to assemble it.

mod model_encoding;
pub mod truncation;

#[doc(inline)]
pub use model_encoding::Encoding;
