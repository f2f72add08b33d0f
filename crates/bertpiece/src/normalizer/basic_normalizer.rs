//! # Basic Normalizer
//!
//! Stages, in order:
//! 1. [`clean_text`] - drop control characters, collapse whitespace.
//! 2. [`isolate_cjk_chars`] - optional; surround CJK ideographs with spaces.
//! 3. [`whitespace_split`].
//! 4. per-token lower-casing and [`strip_accents`]; skipped for never-split tokens.
//! 5. [`split_on_punctuation`]; skipped for never-split tokens.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::{
    normalizer::char_classes::{
        is_accent_mark,
        is_cjk_char,
        is_control,
        is_punctuation,
        is_whitespace,
    },
    types::BPHashSet,
};

/// Options for configuring a [`BasicNormalizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Lower-case each token.
    pub lower_case: bool,

    /// Isolate CJK ideographs as their own tokens.
    pub tokenize_cjk_chars: bool,

    /// Strip accents.
    ///
    /// `None` follows `lower_case`.
    pub strip_accents: Option<bool>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            lower_case: true,
            tokenize_cjk_chars: true,
            strip_accents: None,
        }
    }
}

impl NormalizerOptions {
    /// Sets the configured lower-case value.
    pub fn with_lower_case(
        mut self,
        lower_case: bool,
    ) -> Self {
        self.lower_case = lower_case;
        self
    }

    /// Sets the configured CJK isolation value.
    pub fn with_tokenize_cjk_chars(
        mut self,
        tokenize_cjk_chars: bool,
    ) -> Self {
        self.tokenize_cjk_chars = tokenize_cjk_chars;
        self
    }

    /// Sets the configured strip-accents value.
    ///
    /// `None` strips accents exactly when lower-casing.
    pub fn with_strip_accents<S>(
        mut self,
        strip_accents: S,
    ) -> Self
    where
        S: Into<Option<bool>>,
    {
        self.strip_accents = strip_accents.into();
        self
    }

    /// Are accents stripped from (non never-split) tokens?
    pub fn effective_strip_accents(&self) -> bool {
        match self.strip_accents {
            Some(strip) => strip,
            None => self.lower_case,
        }
    }
}

/// Drop NUL, U+FFFD and control characters; map whitespace to `' '`.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '\0' || c == char::REPLACEMENT_CHARACTER || is_control(c) {
            continue;
        }
        out.push(if is_whitespace(c) { ' ' } else { c });
    }
    out
}

/// Surround each CJK ideograph with spaces.
pub fn isolate_cjk_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 2);
    for c in text.chars() {
        if is_cjk_char(c) {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

/// Split on whitespace, dropping empty pieces.
pub fn whitespace_split(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Canonically decompose (NFD), then drop non-spacing marks.
pub fn strip_accents(text: &str) -> String {
    text.nfd().filter(|&c| !is_accent_mark(c)).collect()
}

/// Split a token on punctuation.
///
/// Every punctuation character becomes its own piece.
///
/// ## Returns
/// Non-empty slices of `token`, in order.
pub fn split_on_punctuation(token: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut word_start: Option<usize> = None;
    for (idx, c) in token.char_indices() {
        if is_punctuation(c) {
            if let Some(start) = word_start.take() {
                pieces.push(&token[start..idx]);
            }
            pieces.push(&token[idx..idx + c.len_utf8()]);
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        pieces.push(&token[start..]);
    }
    pieces
}

/// Script-aware text normalizer; the "basic" half of BERT tokenization.
///
/// ## Style Hints
/// Instance names should prefer `normalizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BasicNormalizer {
    options: NormalizerOptions,
}

impl From<NormalizerOptions> for BasicNormalizer {
    fn from(options: NormalizerOptions) -> Self {
        Self::new(options)
    }
}

impl BasicNormalizer {
    /// Create a new normalizer.
    pub fn new(options: NormalizerOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Normalize `text` into tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to normalize.
    /// * `never_split` - Tokens which bypass case, accent and punctuation handling.
    ///
    /// ## Returns
    /// The normalized, non-empty tokens.
    pub fn normalize(
        &self,
        text: &str,
        never_split: &BPHashSet<String>,
    ) -> Vec<String> {
        let mut text = clean_text(text);
        if self.options.tokenize_cjk_chars {
            text = isolate_cjk_chars(&text);
        }

        let strip = self.options.effective_strip_accents();

        let mut tokens = Vec::new();
        for token in whitespace_split(&text) {
            let token = if never_split.contains(token) {
                token.to_string()
            } else {
                let token = if self.options.lower_case {
                    token.to_lowercase()
                } else {
                    token.to_string()
                };
                if strip { strip_accents(&token) } else { token }
            };

            if never_split.contains(&token) {
                tokens.push(token);
                continue;
            }
            for piece in split_on_punctuation(&token) {
                tokens.extend(whitespace_split(piece).map(str::to_string));
            }
        }
        tokens
    }
}
