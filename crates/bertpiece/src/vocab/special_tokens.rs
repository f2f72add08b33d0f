//! # Special Tokens

use serde::{Deserialize, Serialize};

use crate::types::BPHashSet;

/// Default unknown token.
pub const DEFAULT_UNK_TOKEN: &str = "[UNK]";
/// Default classification token.
pub const DEFAULT_CLS_TOKEN: &str = "[CLS]";
/// Default separator token.
pub const DEFAULT_SEP_TOKEN: &str = "[SEP]";
/// Default mask token.
pub const DEFAULT_MASK_TOKEN: &str = "[MASK]";
/// Default padding token.
pub const DEFAULT_PAD_TOKEN: &str = "[PAD]";

/// The literal special token strings of a tokenizer.
///
/// The five core tokens must be present in the vocabulary.
/// Every special token, core or `additional`, is emitted verbatim:
/// it is never split, lower-cased, or stripped of accents.
///
/// ## Style Hints
/// Instance names should prefer `special_tokens`, or `specials`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialTokens {
    /// Unknown token; the fallback for every failed lookup.
    pub unk: String,

    /// Classification token; opens every encoding.
    pub cls: String,

    /// Separator token; closes each sequence of an encoding.
    pub sep: String,

    /// Mask token.
    pub mask: String,

    /// Padding token.
    pub pad: String,

    /// User-defined special tokens.
    pub additional: Vec<String>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        Self {
            unk: DEFAULT_UNK_TOKEN.to_string(),
            cls: DEFAULT_CLS_TOKEN.to_string(),
            sep: DEFAULT_SEP_TOKEN.to_string(),
            mask: DEFAULT_MASK_TOKEN.to_string(),
            pad: DEFAULT_PAD_TOKEN.to_string(),
            additional: Vec::new(),
        }
    }
}

impl SpecialTokens {
    /// Add user-defined special tokens.
    ///
    /// ## Arguments
    /// * `tokens` - An iterator of token strings.
    pub fn with_additional<I, S>(
        mut self,
        tokens: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// The five core tokens: `[unk, cls, sep, mask, pad]`.
    pub fn core(&self) -> [&str; 5] {
        [
            self.unk.as_str(),
            self.cls.as_str(),
            self.sep.as_str(),
            self.mask.as_str(),
            self.pad.as_str(),
        ]
    }

    /// Every special token; core and additional.
    ///
    /// This is both the matcher's pattern set, and the normalizer's
    /// never-split set.
    pub fn all(&self) -> BPHashSet<String> {
        self.core()
            .iter()
            .map(|s| s.to_string())
            .chain(self.additional.iter().cloned())
            .collect()
    }
}
