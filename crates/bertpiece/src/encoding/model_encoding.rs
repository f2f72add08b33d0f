//! # Model Encoding

use serde::{Deserialize, Serialize};

use crate::types::TokenType;

/// Model-ready, fixed-length encoding.
///
/// The three sequences always have the same length.
///
/// ## Padding
/// Padded positions of `input_ids` hold a literal zero, not the
/// vocabulary's pad-token id. Consumers relying on the pad-token id
/// must use `input_mask` to find the padding instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Encoding<T: TokenType> {
    /// Token ids.
    pub input_ids: Vec<T>,

    /// `1` for real tokens, `0` for padding.
    pub input_mask: Vec<T>,

    /// `0` for the first sequence, `1` for the second.
    pub segment_ids: Vec<T>,
}

impl<T: TokenType> Encoding<T> {
    /// Build an encoding from `(id, segment)` rows, padded to `max_len`.
    ///
    /// Rows beyond `max_len` are dropped.
    pub(crate) fn from_rows<I>(
        rows: I,
        max_len: usize,
    ) -> Self
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut input_ids = Vec::with_capacity(max_len);
        let mut input_mask = Vec::with_capacity(max_len);
        let mut segment_ids = Vec::with_capacity(max_len);

        for (id, segment) in rows.into_iter().take(max_len) {
            input_ids.push(id);
            input_mask.push(T::one());
            segment_ids.push(segment);
        }

        input_ids.resize(max_len, T::zero());
        input_mask.resize(max_len, T::zero());
        segment_ids.resize(max_len, T::zero());

        Self {
            input_ids,
            input_mask,
            segment_ids,
        }
    }

    /// The encoding length.
    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    /// Is the encoding zero-length?
    pub fn is_empty(&self) -> bool {
        self.input_ids.is_empty()
    }

    /// The number of real (non-padding) positions.
    pub fn real_len(&self) -> usize {
        self.input_mask.iter().filter(|&&m| m == T::one()).count()
    }
}
