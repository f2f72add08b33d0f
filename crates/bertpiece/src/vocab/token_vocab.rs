//! # `WordPiece` Vocabulary

use crate::{
    errors::{BPResult, BertPieceError},
    types::{BPHashMap, TokenType, hash_map_with_capacity},
};

/// Bidirectional `{ String <-> T }` token vocabulary.
///
/// Both directions are built together at construction and are never
/// mutated afterward.
///
/// ## Style Hints
/// Instance names should prefer `vocab`, or `wordpiece_vocab`.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPieceVocab<T: TokenType> {
    /// `{ id -> token }`, indexed by id.
    tokens: Vec<String>,

    /// `{ token -> id }`.
    index: BPHashMap<String, T>,
}

impl<T: TokenType> WordPieceVocab<T> {
    /// Build a vocabulary from tokens in id order.
    ///
    /// The position of each token is its id.
    ///
    /// When a token string occurs more than once, the last occurrence
    /// owns the token; the earlier ids become unbound and no longer
    /// resolve to a token.
    ///
    /// ## Arguments
    /// * `tokens` - The tokens, in id order.
    ///
    /// ## Returns
    /// A new vocabulary, or [`BertPieceError::VocabSizeOverflow`]
    /// if `T` cannot hold every id.
    pub fn from_tokens<I, S>(tokens: I) -> BPResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        let mut index: BPHashMap<String, T> = hash_map_with_capacity(tokens.len());
        let mut duplicates = 0;
        for (id, token) in tokens.iter().enumerate() {
            let id = T::from_usize(id).ok_or(BertPieceError::VocabSizeOverflow {
                size: tokens.len(),
            })?;
            if index.insert(token.clone(), id).is_some() {
                duplicates += 1;
            }
        }

        if duplicates > 0 {
            log::warn!(
                "vocabulary contains {} duplicate tokens; later lines win",
                duplicates
            );
        }

        Ok(Self { tokens, index })
    }

    /// The number of ids in the vocabulary.
    ///
    /// This counts every line, including shadowed duplicates.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The largest id in the vocabulary, if any.
    pub fn max_token(&self) -> Option<T> {
        self.tokens.len().checked_sub(1).and_then(T::from_usize)
    }

    /// Does the vocabulary contain the token?
    pub fn contains(
        &self,
        token: &str,
    ) -> bool {
        self.index.contains_key(token)
    }

    /// Look up the id of a token.
    ///
    /// ## Arguments
    /// * `token` - The token string.
    ///
    /// ## Returns
    /// The id, if the token is in the vocabulary.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.index.get(token).copied()
    }

    /// Look up the token string of an id.
    ///
    /// ## Arguments
    /// * `id` - The token id.
    ///
    /// ## Returns
    /// The token, if the id is bound in the vocabulary.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        let token = self.tokens.get(id.to_usize()?)?;
        if self.index.get(token.as_str()) == Some(&id) {
            Some(token.as_str())
        } else {
            None
        }
    }

    /// Iterate over the bound `(token, id)` pairs, in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> + '_ {
        self.tokens.iter().enumerate().filter_map(|(id, token)| {
            let id = T::from_usize(id)?;
            (self.index.get(token.as_str()) == Some(&id)).then_some((token.as_str(), id))
        })
    }

    /// All token lines, in id order; including shadowed duplicates.
    pub fn token_lines(&self) -> &[String] {
        &self.tokens
    }
}
