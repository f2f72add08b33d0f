//! Tokenizer Options
//!
//! Options for building a [`BertTokenizer`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    errors::BPResult,
    normalizer::NormalizerOptions,
    segmentation::{DEFAULT_CONTINUATION_PREFIX, DEFAULT_MAX_CHARS_PER_WORD},
    tokenizer::BertTokenizer,
    types::TokenType,
    vocab::{SpecialTokens, WordPieceVocab},
};

/// Options for configuring a [`BertTokenizer`].
///
/// ## Lower-casing
/// `lower_case` lower-cases literal text before normalization. The
/// default [`NormalizerOptions`] lower-case again, per token; so to
/// keep case, both `lower_case` and `normalizer.lower_case` must be off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Convert full-width characters to half-width before normalization.
    pub full_width_to_half_width: bool,

    /// Lower-case literal text before normalization.
    pub lower_case: bool,

    /// Normalizer options.
    pub normalizer: NormalizerOptions,

    /// Words longer than this (in UTF-16 code units) become the unknown token.
    pub max_chars_per_word: usize,

    /// Prefix marking non-initial subword pieces.
    pub continuation_prefix: String,

    /// The special token strings.
    pub special_tokens: SpecialTokens,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            full_width_to_half_width: false,
            lower_case: true,
            normalizer: NormalizerOptions::default(),
            max_chars_per_word: DEFAULT_MAX_CHARS_PER_WORD,
            continuation_prefix: DEFAULT_CONTINUATION_PREFIX.to_string(),
            special_tokens: SpecialTokens::default(),
        }
    }
}

impl TokenizerOptions {
    /// Create options with the two primary flags; everything else defaulted.
    pub fn new(
        full_width_to_half_width: bool,
        lower_case: bool,
    ) -> Self {
        Self::default()
            .with_full_width_to_half_width(full_width_to_half_width)
            .with_lower_case(lower_case)
    }

    /// Gets the configured full-width conversion value.
    pub fn full_width_to_half_width(&self) -> bool {
        self.full_width_to_half_width
    }

    /// Sets the configured full-width conversion value.
    pub fn set_full_width_to_half_width(
        &mut self,
        full_width_to_half_width: bool,
    ) {
        self.full_width_to_half_width = full_width_to_half_width;
    }

    /// Sets the configured full-width conversion value.
    pub fn with_full_width_to_half_width(
        mut self,
        full_width_to_half_width: bool,
    ) -> Self {
        self.set_full_width_to_half_width(full_width_to_half_width);
        self
    }

    /// Gets the configured lower-case value.
    pub fn lower_case(&self) -> bool {
        self.lower_case
    }

    /// Sets the configured lower-case value.
    pub fn set_lower_case(
        &mut self,
        lower_case: bool,
    ) {
        self.lower_case = lower_case;
    }

    /// Sets the configured lower-case value.
    pub fn with_lower_case(
        mut self,
        lower_case: bool,
    ) -> Self {
        self.set_lower_case(lower_case);
        self
    }

    /// Gets the normalizer options.
    pub fn normalizer(&self) -> &NormalizerOptions {
        &self.normalizer
    }

    /// Sets the normalizer options.
    pub fn with_normalizer(
        mut self,
        normalizer: NormalizerOptions,
    ) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Gets the word length limit.
    pub fn max_chars_per_word(&self) -> usize {
        self.max_chars_per_word
    }

    /// Sets the word length limit.
    pub fn with_max_chars_per_word(
        mut self,
        max_chars_per_word: usize,
    ) -> Self {
        self.max_chars_per_word = max_chars_per_word;
        self
    }

    /// Sets the continuation prefix.
    pub fn with_continuation_prefix<S: Into<String>>(
        mut self,
        continuation_prefix: S,
    ) -> Self {
        self.continuation_prefix = continuation_prefix.into();
        self
    }

    /// Gets the special tokens.
    pub fn special_tokens(&self) -> &SpecialTokens {
        &self.special_tokens
    }

    /// Sets the special tokens.
    pub fn with_special_tokens(
        mut self,
        special_tokens: SpecialTokens,
    ) -> Self {
        self.special_tokens = special_tokens;
        self
    }

    /// Add user-defined special tokens.
    ///
    /// These are never split or normalized, and are emitted verbatim,
    /// including when they only appear after full-width conversion or
    /// lower-casing.
    pub fn with_additional_special_tokens<I, S>(
        mut self,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_tokens = self.special_tokens.with_additional(tokens);
        self
    }

    /// Build a [`BertTokenizer`] for the given vocab.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<WordPieceVocab<T>>,
    ) -> BPResult<BertTokenizer<T>> {
        BertTokenizer::new(vocab, self.clone())
    }
}
