//! # `WordPiece` Segmenter

use std::sync::Arc;

use crate::{types::TokenType, vocab::WordPieceVocab};

/// The default continuation prefix.
pub const DEFAULT_CONTINUATION_PREFIX: &str = "##";

/// The default word length limit.
pub const DEFAULT_MAX_CHARS_PER_WORD: usize = 200;

/// Greedy longest-match-first subword segmenter.
///
/// ## Style Hints
/// Instance names should prefer `segmenter`.
#[derive(Debug, Clone)]
pub struct WordPieceSegmenter<T: TokenType> {
    vocab: Arc<WordPieceVocab<T>>,
    unk_token: String,
    max_chars_per_word: usize,
    continuation_prefix: String,
}

impl<T: TokenType> WordPieceSegmenter<T> {
    /// Create a new segmenter with the default limits.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `unk_token` - The token emitted for unsegmentable words.
    pub fn new<S: Into<String>>(
        vocab: Arc<WordPieceVocab<T>>,
        unk_token: S,
    ) -> Self {
        Self {
            vocab,
            unk_token: unk_token.into(),
            max_chars_per_word: DEFAULT_MAX_CHARS_PER_WORD,
            continuation_prefix: DEFAULT_CONTINUATION_PREFIX.to_string(),
        }
    }

    /// Set the word length limit.
    ///
    /// Length is measured in UTF-16 code units.
    pub fn with_max_chars_per_word(
        self,
        max_chars_per_word: usize,
    ) -> Self {
        Self {
            max_chars_per_word,
            ..self
        }
    }

    /// Set the continuation prefix.
    pub fn with_continuation_prefix<S: Into<String>>(
        self,
        continuation_prefix: S,
    ) -> Self {
        Self {
            continuation_prefix: continuation_prefix.into(),
            ..self
        }
    }

    /// Get the vocabulary.
    pub fn vocab(&self) -> &Arc<WordPieceVocab<T>> {
        &self.vocab
    }

    /// Get the unknown token.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Get the word length limit.
    pub fn max_chars_per_word(&self) -> usize {
        self.max_chars_per_word
    }

    /// Get the continuation prefix.
    pub fn continuation_prefix(&self) -> &str {
        &self.continuation_prefix
    }

    /// Segment whitespace-delimited text into subword tokens.
    ///
    /// ## Arguments
    /// * `text` - The text; usually a single normalized word.
    ///
    /// ## Returns
    /// The subword tokens of every word, in order.
    pub fn segment(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            self.segment_append(word, &mut tokens);
        }
        tokens
    }

    /// Segment a single word, appending to a target buffer.
    ///
    /// A word is either fully segmented, or replaced by a single
    /// unknown token; partial segmentations are never emitted.
    ///
    /// ## Arguments
    /// * `word` - The word to segment.
    /// * `tokens` - The target token buffer to append to.
    pub fn segment_append(
        &self,
        word: &str,
        tokens: &mut Vec<String>,
    ) {
        if word.is_empty() {
            return;
        }

        let utf16_len: usize = word.chars().map(char::len_utf16).sum();
        if utf16_len > self.max_chars_per_word {
            tokens.push(self.unk_token.clone());
            return;
        }

        // Char boundaries, plus the end of the word.
        let mut bounds: Vec<usize> = word.char_indices().map(|(idx, _)| idx).collect();
        bounds.push(word.len());
        let last = bounds.len() - 1;

        let mark = tokens.len();
        let mut candidate = String::with_capacity(self.continuation_prefix.len() + word.len());
        let mut begin = 0;
        while begin < last {
            let mut end = last;
            let mut found = false;
            while begin < end {
                candidate.clear();
                if begin > 0 {
                    candidate.push_str(&self.continuation_prefix);
                }
                candidate.push_str(&word[bounds[begin]..bounds[end]]);

                if self.vocab.contains(&candidate) {
                    found = true;
                    break;
                }
                end -= 1;
            }

            if !found {
                tokens.truncate(mark);
                tokens.push(self.unk_token.clone());
                return;
            }
            tokens.push(candidate.clone());
            begin = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_segmenter() -> WordPieceSegmenter<u32> {
        let vocab = WordPieceVocab::from_tokens([
            "[UNK]", "[CLS]", "[SEP]", "want", "##want", "##ed", "wa", "un", "runn", "##ing",
            "##aff", "##able", "美", "##💅",
        ])
        .unwrap();
        WordPieceSegmenter::new(Arc::new(vocab), "[UNK]")
    }

    #[test]
    fn test_segment() {
        let segmenter = test_segmenter();

        assert_eq!(segmenter.segment("unaffable"), vec!["un", "##aff", "##able"]);
        assert_eq!(segmenter.segment("unwanted running"), vec![
            "un", "##want", "##ed", "runn", "##ing"
        ]);
        assert_eq!(segmenter.segment("unwantedX running"), vec![
            "[UNK]", "runn", "##ing"
        ]);
        assert_eq!(segmenter.segment("美💅"), vec!["美", "##💅"]);
        assert!(segmenter.segment("").is_empty());
        assert!(segmenter.segment("  \t ").is_empty());
    }

    #[test]
    fn test_partial_segmentation_discarded() {
        let segmenter = test_segmenter();

        let mut tokens = vec!["keep".to_string()];
        segmenter.segment_append("wantedz", &mut tokens);
        assert_eq!(tokens, vec!["keep", "[UNK]"]);
    }

    #[test]
    fn test_max_chars_per_word() {
        let segmenter = test_segmenter().with_max_chars_per_word(4);
        assert_eq!(segmenter.max_chars_per_word(), 4);

        assert_eq!(segmenter.segment("want"), vec!["want"]);
        assert_eq!(segmenter.segment("wanted"), vec!["[UNK]"]);

        // Astral characters count as two UTF-16 units.
        assert_eq!(segmenter.segment("美💅"), vec!["美", "##💅"]);
        assert_eq!(segmenter.segment("美💅💅"), vec!["[UNK]"]);
    }

    #[test]
    fn test_continuation_prefix() {
        let vocab = WordPieceVocab::<u32>::from_tokens(["[UNK]", "un", "@@aff"]).unwrap();
        let segmenter =
            WordPieceSegmenter::new(Arc::new(vocab), "[UNK]").with_continuation_prefix("@@");
        assert_eq!(segmenter.continuation_prefix(), "@@");
        assert_eq!(segmenter.segment("unaff"), vec!["un", "@@aff"]);
    }
}
