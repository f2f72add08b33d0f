//! # Special Token Matching
//!
//! [`SpecialMatcher`] finds special tokens in raw text, so that they
//! can be protected from normalization and subword segmentation.
//!
//! Most users will want [`SpecialMatcher::split_spans`], which labels
//! every byte of the input as either [`SpanRef::Literal`] or [`SpanRef::Special`].

mod special_matcher;

#[doc(inline)]
pub use special_matcher::*;
