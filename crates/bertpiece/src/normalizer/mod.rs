//! # Text Normalization
//!
//! [`BasicNormalizer`] turns a literal (non-special) span of text into
//! whitespace-free tokens, ready for subword segmentation.
//!
//! The [`char_classes`] predicates and the [`width`] conversion are
//! exposed for callers that need the same classification.

mod basic_normalizer;
pub mod char_classes;
pub mod width;

#[doc(inline)]
pub use basic_normalizer::*;
#[doc(inline)]
pub use width::full_width_to_half_width;
