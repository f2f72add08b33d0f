//! # BERT Tokenizer

use std::{borrow::Cow, io::BufRead, iter, path::Path, sync::Arc};

use crate::{
    encoding::{
        Encoding,
        truncation::{truncate_pair_lens, truncate_single_len},
    },
    errors::{BPResult, BertPieceError},
    matching::{SpanRef, SpecialMatcher},
    normalizer::{BasicNormalizer, full_width_to_half_width},
    segmentation::WordPieceSegmenter,
    tokenizer::TokenizerOptions,
    types::{BPHashSet, TokenType},
    vocab::{
        WordPieceVocab,
        io::{load_vocab_txt_path, read_vocab_txt},
    },
};

/// Full BERT tokenization pipeline.
///
/// Combines:
///  * [`SpecialMatcher`] - protects special tokens,
///  * [`BasicNormalizer`] - cleans and splits literal text,
///  * [`WordPieceSegmenter`] - decomposes words into subwords;
///
/// and assembles the results into fixed-length [`Encoding`]s.
///
/// Every operation is a pure function of its inputs; the tokenizer is
/// immutable after construction, and may be shared across threads.
/// Cloning is cheap.
#[derive(Clone)]
pub struct BertTokenizer<T: TokenType> {
    vocab: Arc<WordPieceVocab<T>>,
    options: Arc<TokenizerOptions>,

    matcher: Arc<SpecialMatcher>,
    normalizer: BasicNormalizer,
    segmenter: WordPieceSegmenter<T>,

    /// Every special token; the normalizer's never-split set.
    never_split: Arc<BPHashSet<String>>,

    unk_id: T,
    cls_id: T,
    sep_id: T,
    pad_id: T,
}

impl<T: TokenType> BertTokenizer<T> {
    /// Build a tokenizer.
    ///
    /// ## Arguments
    /// * `vocab` - The shared vocabulary.
    /// * `options` - The tokenizer options.
    ///
    /// ## Returns
    /// The tokenizer; or an error if a special token is empty, or a
    /// core special token is missing from `vocab`.
    pub fn new(
        vocab: Arc<WordPieceVocab<T>>,
        options: TokenizerOptions,
    ) -> BPResult<Self> {
        let specials = &options.special_tokens;
        if specials.core().iter().any(|s| s.is_empty())
            || specials.additional.iter().any(String::is_empty)
        {
            return Err(BertPieceError::EmptySpecialToken);
        }

        let lookup = |token: &str| {
            vocab
                .lookup_id(token)
                .ok_or_else(|| BertPieceError::MissingSpecialToken {
                    token: token.to_string(),
                })
        };
        let unk_id = lookup(&specials.unk)?;
        let cls_id = lookup(&specials.cls)?;
        let sep_id = lookup(&specials.sep)?;
        lookup(&specials.mask)?;
        let pad_id = lookup(&specials.pad)?;

        for token in &specials.additional {
            if !vocab.contains(token) {
                log::warn!(
                    "special token {:?} is not in the vocabulary; it will encode as {:?}",
                    token,
                    specials.unk
                );
            }
        }

        let never_split = specials.all();
        let matcher = SpecialMatcher::new(&never_split);
        let normalizer = BasicNormalizer::new(options.normalizer);
        let segmenter = WordPieceSegmenter::new(vocab.clone(), specials.unk.clone())
            .with_max_chars_per_word(options.max_chars_per_word)
            .with_continuation_prefix(options.continuation_prefix.clone());

        log::debug!(
            "built tokenizer: vocab={} specials={} states={} unk={} cls={} sep={} pad={}",
            vocab.len(),
            matcher.patterns().len(),
            matcher.state_count(),
            unk_id,
            cls_id,
            sep_id,
            pad_id
        );

        Ok(Self {
            vocab,
            options: Arc::new(options),
            matcher: Arc::new(matcher),
            normalizer,
            segmenter,
            never_split: Arc::new(never_split),
            unk_id,
            cls_id,
            sep_id,
            pad_id,
        })
    }

    /// Build a tokenizer from a `vocab.txt` file.
    ///
    /// ## Arguments
    /// * `path` - The vocabulary file; one token per line.
    /// * `full_width_to_half_width` - Convert full-width characters.
    /// * `lower_case` - Lower-case literal text before normalization.
    pub fn from_vocab_path<P: AsRef<Path>>(
        path: P,
        full_width_to_half_width: bool,
        lower_case: bool,
    ) -> BPResult<Self> {
        let vocab = load_vocab_txt_path(path)?;
        Self::new(
            Arc::new(vocab),
            TokenizerOptions::new(full_width_to_half_width, lower_case),
        )
    }

    /// Build a tokenizer from a `vocab.txt` reader.
    ///
    /// See [`from_vocab_path`](Self::from_vocab_path).
    pub fn from_vocab_reader<R: BufRead>(
        reader: R,
        full_width_to_half_width: bool,
        lower_case: bool,
    ) -> BPResult<Self> {
        let vocab = read_vocab_txt(reader)?;
        Self::new(
            Arc::new(vocab),
            TokenizerOptions::new(full_width_to_half_width, lower_case),
        )
    }

    /// Get the underlying vocabulary.
    pub fn vocab(&self) -> &Arc<WordPieceVocab<T>> {
        &self.vocab
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Get the special token matcher.
    pub fn matcher(&self) -> &SpecialMatcher {
        &self.matcher
    }

    /// Get the subword segmenter.
    pub fn segmenter(&self) -> &WordPieceSegmenter<T> {
        &self.segmenter
    }

    /// The unknown token id.
    pub fn unk_id(&self) -> T {
        self.unk_id
    }

    /// The classification token id.
    pub fn cls_id(&self) -> T {
        self.cls_id
    }

    /// The separator token id.
    pub fn sep_id(&self) -> T {
        self.sep_id
    }

    /// The padding token id.
    ///
    /// Only used by [`convert_tokens_to_ids_padded`](Self::convert_tokens_to_ids_padded);
    /// encodings pad with literal zero.
    pub fn pad_id(&self) -> T {
        self.pad_id
    }

    /// Split `text` into tokens.
    ///
    /// Special tokens are emitted verbatim; literal text is normalized
    /// and segmented into subwords.
    ///
    /// ## Returns
    /// Non-empty tokens, in text order. Empty text yields no tokens.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn tokenize(
        &self,
        text: &str,
    ) -> Vec<String> {
        let mut tokens = Vec::new();
        for span in self.matcher.split_spans(text) {
            match span {
                SpanRef::Special(range) => tokens.push(text[range].to_string()),
                SpanRef::Literal(range) => self.tokenize_literal_append(&text[range], &mut tokens),
            }
        }
        tokens
    }

    fn tokenize_literal_append(
        &self,
        literal: &str,
        tokens: &mut Vec<String>,
    ) {
        let mut piece = Cow::Borrowed(literal);
        if self.options.full_width_to_half_width {
            piece = Cow::Owned(full_width_to_half_width(&piece));
        }
        if self.options.lower_case {
            piece = Cow::Owned(piece.to_lowercase());
        }

        match piece {
            Cow::Borrowed(literal) => self.normalize_append(literal, tokens),
            Cow::Owned(converted) => {
                // Conversion may have produced special tokens.
                for span in self.matcher.split_spans(&converted) {
                    match span {
                        SpanRef::Special(range) => tokens.push(converted[range].to_string()),
                        SpanRef::Literal(range) => self.normalize_append(&converted[range], tokens),
                    }
                }
            }
        }
    }

    fn normalize_append(
        &self,
        literal: &str,
        tokens: &mut Vec<String>,
    ) {
        for token in self.normalizer.normalize(literal, &self.never_split) {
            if self.never_split.contains(&token) {
                tokens.push(token);
            } else {
                self.segmenter.segment_append(&token, tokens);
            }
        }
    }

    /// Look up a token id; unknown tokens map to the unknown token id.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> T {
        self.vocab.lookup_id(token).unwrap_or(self.unk_id)
    }

    /// Look up a token; unknown ids map to the unknown token.
    pub fn id_to_token(
        &self,
        id: T,
    ) -> &str {
        self.vocab
            .lookup_token(id)
            .unwrap_or(&self.options.special_tokens.unk)
    }

    /// Convert tokens to ids.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Convert tokens to exactly `max_len` ids.
    ///
    /// Longer sequences are truncated; shorter ones are padded with the
    /// padding token id.
    pub fn convert_tokens_to_ids_padded<S: AsRef<str>>(
        &self,
        tokens: &[S],
        max_len: usize,
    ) -> Vec<T> {
        let mut ids = self.convert_tokens_to_ids(&tokens[..tokens.len().min(max_len)]);
        ids.resize(max_len, self.pad_id);
        ids
    }

    /// Convert ids to tokens.
    pub fn convert_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> Vec<String> {
        ids.iter()
            .map(|&id| self.id_to_token(id).to_string())
            .collect()
    }

    /// Encode a single tokenized sequence as `[CLS] tokens [SEP]`.
    ///
    /// Sequences longer than `max_len - 2` tokens keep their first
    /// `max_len - 1` tokens, and the encoding is cut at `max_len`;
    /// in which case the closing `[SEP]` does not fit.
    ///
    /// ## Returns
    /// An [`Encoding`] of exactly `max_len` positions.
    pub fn encode_single<S: AsRef<str>>(
        &self,
        tokens: &[S],
        max_len: usize,
    ) -> Encoding<T> {
        let kept = truncate_single_len(tokens.len(), max_len);
        let first = T::zero();

        let rows = iter::once((self.cls_id, first))
            .chain(
                tokens[..kept]
                    .iter()
                    .map(|token| (self.token_to_id(token.as_ref()), first)),
            )
            .chain(iter::once((self.sep_id, first)));

        Encoding::from_rows(rows, max_len)
    }

    /// Encode a tokenized pair as `[CLS] query [SEP] doc [SEP]`.
    ///
    /// `[CLS]`, the query and the first `[SEP]` are segment 0;
    /// the doc and the second `[SEP]` are segment 1.
    /// See [`truncate_pair_lens`] for the truncation policy.
    ///
    /// ## Returns
    /// An [`Encoding`] of exactly `max_len` positions.
    pub fn encode_pair<Q, D>(
        &self,
        query_tokens: &[Q],
        doc_tokens: &[D],
        max_len: usize,
    ) -> Encoding<T>
    where
        Q: AsRef<str>,
        D: AsRef<str>,
    {
        let (query_len, doc_len) =
            truncate_pair_lens(query_tokens.len(), doc_tokens.len(), max_len);
        let first = T::zero();
        let second = T::one();

        let rows = iter::once((self.cls_id, first))
            .chain(
                query_tokens[..query_len]
                    .iter()
                    .map(|token| (self.token_to_id(token.as_ref()), first)),
            )
            .chain(iter::once((self.sep_id, first)))
            .chain(
                doc_tokens[..doc_len]
                    .iter()
                    .map(|token| (self.token_to_id(token.as_ref()), second)),
            )
            .chain(iter::once((self.sep_id, second)));

        Encoding::from_rows(rows, max_len)
    }

    /// Encode one tokenized query against many tokenized docs.
    ///
    /// ## Returns
    /// One pair [`Encoding`] per doc, in doc order.
    pub fn encode_multi_pair<Q, D>(
        &self,
        query_tokens: &[Q],
        docs_tokens: &[Vec<D>],
        max_len: usize,
    ) -> Vec<Encoding<T>>
    where
        Q: AsRef<str> + Sync,
        D: AsRef<str> + Sync,
    {
        map_batch(docs_tokens, |doc_tokens| {
            self.encode_pair(query_tokens, doc_tokens, max_len)
        })
    }

    /// Tokenize and encode a single text.
    pub fn tokenize_single(
        &self,
        text: &str,
        max_len: usize,
    ) -> Encoding<T> {
        self.encode_single(&self.tokenize(text), max_len)
    }

    /// Tokenize and encode a `(query, doc)` text pair.
    pub fn tokenize_pair(
        &self,
        query: &str,
        doc: &str,
        max_len: usize,
    ) -> Encoding<T> {
        self.encode_pair(&self.tokenize(query), &self.tokenize(doc), max_len)
    }

    /// Tokenize and encode one query against many docs.
    ///
    /// The query is tokenized once, and reused for every doc.
    ///
    /// ## Returns
    /// One pair [`Encoding`] per doc, in doc order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn tokenize_multi_pairs<S: AsRef<str> + Sync>(
        &self,
        query: &str,
        docs: &[S],
        max_len: usize,
    ) -> Vec<Encoding<T>> {
        let query_tokens = self.tokenize(query);
        map_batch(docs, |doc| {
            self.encode_pair(&query_tokens, &self.tokenize(doc.as_ref()), max_len)
        })
    }
}

/// Map over a batch; in parallel when ``rayon`` is enabled.
#[cfg(feature = "rayon")]
fn map_batch<I, R, F>(
    batch: &[I],
    f: F,
) -> Vec<R>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    use rayon::prelude::*;
    batch.par_iter().map(f).collect()
}

/// Map over a batch; in parallel when ``rayon`` is enabled.
#[cfg(not(feature = "rayon"))]
fn map_batch<I, R, F>(
    batch: &[I],
    f: F,
) -> Vec<R>
where
    F: Fn(&I) -> R,
{
    batch.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        normalizer::NormalizerOptions,
        types::{check_is_send, check_is_sync},
    };

    type T = u32;

    const VOCAB: &[&str] = &[
        "[UNK]", "[CLS]", "[SEP]", "[MASK]", "[PAD]", "un", "##aff", "##able", "美", "甲", "。",
        "hello", ",", "world", "!", "[", "]", "cafe", "<e>", "##s",
    ];

    fn test_vocab() -> Arc<WordPieceVocab<T>> {
        Arc::new(WordPieceVocab::from_tokens(VOCAB.iter().copied()).unwrap())
    }

    fn test_tokenizer() -> BertTokenizer<T> {
        TokenizerOptions::default().build(test_vocab()).unwrap()
    }

    #[test]
    fn test_send_sync() {
        let tokenizer = test_tokenizer();
        check_is_send(&tokenizer);
        check_is_sync(&tokenizer);
    }

    #[test]
    fn test_special_ids() {
        let tokenizer = test_tokenizer();
        assert_eq!(tokenizer.unk_id(), 0);
        assert_eq!(tokenizer.cls_id(), 1);
        assert_eq!(tokenizer.sep_id(), 2);
        assert_eq!(tokenizer.pad_id(), 4);
    }

    #[test]
    fn test_missing_special_token() {
        let vocab = WordPieceVocab::<T>::from_tokens(["[UNK]", "[CLS]", "[SEP]", "[PAD]"]).unwrap();
        let result = TokenizerOptions::default().build(Arc::new(vocab));
        assert!(matches!(
            result,
            Err(BertPieceError::MissingSpecialToken { token }) if token == "[MASK]"
        ));
    }

    #[test]
    fn test_empty_special_token() {
        let result = TokenizerOptions::default()
            .with_additional_special_tokens([""])
            .build(test_vocab());
        assert!(matches!(result, Err(BertPieceError::EmptySpecialToken)));
    }

    #[test]
    fn test_tokenize() {
        let tokenizer = test_tokenizer();

        assert_eq!(tokenizer.tokenize("unaffable"), vec!["un", "##aff", "##able"]);
        assert_eq!(tokenizer.tokenize("Hello, WORLD!"), vec![
            "hello", ",", "world", "!"
        ]);
        assert_eq!(tokenizer.tokenize("[CLS]美甲"), vec!["[CLS]", "美", "甲"]);
        assert_eq!(tokenizer.tokenize("Café xyz"), vec!["cafe", "[UNK]"]);
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn test_tokenize_specials_without_whitespace() {
        let tokenizer = test_tokenizer();
        assert_eq!(tokenizer.tokenize("hello[SEP]world[PAD][PAD]"), vec![
            "hello", "[SEP]", "world", "[PAD]", "[PAD]"
        ]);
        // Case-variant specials are literal text.
        assert_eq!(tokenizer.tokenize("[sep]"), vec!["[", "[UNK]", "]"]);
    }

    #[test]
    fn test_tokenize_additional_specials() {
        let tokenizer = TokenizerOptions::default()
            .with_additional_special_tokens(["<e>", "<E-NOPE>"])
            .build(test_vocab())
            .unwrap();

        assert_eq!(tokenizer.tokenize("hello<e>world<E-NOPE>"), vec![
            "hello", "<e>", "world", "<E-NOPE>"
        ]);
        assert_eq!(tokenizer.convert_tokens_to_ids(&["<e>", "<E-NOPE>"]), vec![18, 0]);
    }

    #[test]
    fn test_additional_specials_after_conversion() {
        let vocab = test_vocab();

        let tokenizer = TokenizerOptions::new(true, true)
            .with_additional_special_tokens(["<e>"])
            .build(vocab.clone())
            .unwrap();
        assert_eq!(tokenizer.tokenize("hello＜ｅ＞"), vec!["hello", "<e>"]);
        assert_eq!(tokenizer.tokenize("ＨＥＬＬＯ＜Ｅ＞"), vec!["hello", "<e>"]);

        let tokenizer = TokenizerOptions::new(false, true)
            .with_additional_special_tokens(["hello!"])
            .build(vocab.clone())
            .unwrap();
        assert_eq!(tokenizer.tokenize("HELLO!"), vec!["hello!"]);
        assert_eq!(tokenizer.tokenize("Hello!World"), vec!["hello!", "world"]);

        // Produced by the normalizer's own lower-casing.
        let tokenizer = TokenizerOptions::new(false, false)
            .with_additional_special_tokens(["hello!"])
            .build(vocab)
            .unwrap();
        assert_eq!(tokenizer.tokenize("HELLO! world"), vec!["hello!", "world"]);
    }

    #[test]
    fn test_full_width_to_half_width() {
        let vocab = test_vocab();
        let plain = TokenizerOptions::new(false, true).build(vocab.clone()).unwrap();
        let converted = TokenizerOptions::new(true, true).build(vocab).unwrap();

        assert_eq!(plain.tokenize("ｈｅｌｌｏ！"), vec!["[UNK]", "[UNK]"]);
        assert_eq!(converted.tokenize("ｈｅｌｌｏ！"), vec!["hello", "!"]);
    }

    #[test]
    fn test_case_preserving() {
        let tokens = VOCAB.iter().copied().chain(["Hello"]);
        let vocab = Arc::new(WordPieceVocab::<T>::from_tokens(tokens).unwrap());

        let options = TokenizerOptions::new(false, false)
            .with_normalizer(NormalizerOptions::default().with_lower_case(false));
        let tokenizer = options.build(vocab.clone()).unwrap();
        assert_eq!(tokenizer.tokenize("Hello hello"), vec!["Hello", "hello"]);

        // The default normalizer lower-cases regardless.
        let tokenizer = TokenizerOptions::new(false, false).build(vocab).unwrap();
        assert_eq!(tokenizer.tokenize("Hello"), vec!["hello"]);
    }

    #[test]
    fn test_convert_round_trip() {
        let tokenizer = test_tokenizer();

        let tokens = vec!["[CLS]", "un", "##aff", "##able", "[SEP]"];
        let ids = tokenizer.convert_tokens_to_ids(&tokens);
        assert_eq!(ids, vec![1, 5, 6, 7, 2]);
        assert_eq!(tokenizer.convert_ids_to_tokens(&ids), tokens);

        assert_eq!(tokenizer.convert_tokens_to_ids(&["nope"]), vec![0]);
        assert_eq!(tokenizer.convert_ids_to_tokens(&[999]), vec!["[UNK]"]);
    }

    #[test]
    fn test_convert_tokens_to_ids_padded() {
        let tokenizer = test_tokenizer();

        assert_eq!(
            tokenizer.convert_tokens_to_ids_padded(&["un", "##aff"], 5),
            vec![5, 6, 4, 4, 4]
        );
        assert_eq!(
            tokenizer.convert_tokens_to_ids_padded(&["un", "##aff", "##able"], 2),
            vec![5, 6]
        );
        assert!(tokenizer.convert_tokens_to_ids_padded(&["un"], 0).is_empty());
    }

    #[test]
    fn test_encode_single() {
        let tokenizer = test_tokenizer();

        let encoding = tokenizer.encode_single(&["un", "##aff", "##able"], 10);
        assert_eq!(encoding.input_ids, vec![1, 5, 6, 7, 2, 0, 0, 0, 0, 0]);
        assert_eq!(encoding.input_mask, vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
        assert_eq!(encoding.segment_ids, vec![0; 10]);
    }

    #[test]
    fn test_encode_single_truncation() {
        let tokenizer = test_tokenizer();
        let tokens = vec!["hello"; 12];

        // Exactly fits: [CLS] + 8 + [SEP].
        let encoding = tokenizer.encode_single(&tokens[..8], 10);
        assert_eq!(encoding.input_ids, vec![1, 11, 11, 11, 11, 11, 11, 11, 11, 2]);

        // Overflow keeps max_len - 1 tokens; [SEP] is cut.
        let encoding = tokenizer.encode_single(&tokens, 10);
        assert_eq!(encoding.input_ids, vec![1, 11, 11, 11, 11, 11, 11, 11, 11, 11]);
        assert_eq!(encoding.input_mask, vec![1; 10]);
        assert_eq!(encoding.len(), 10);
    }

    #[test]
    fn test_encode_pair() {
        let tokenizer = test_tokenizer();

        let encoding = tokenizer.encode_pair(&["hello"], &["world", "!"], 8);
        assert_eq!(encoding.input_ids, vec![1, 11, 2, 13, 14, 2, 0, 0]);
        assert_eq!(encoding.input_mask, vec![1, 1, 1, 1, 1, 1, 0, 0]);
        assert_eq!(encoding.segment_ids, vec![0, 0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_encode_pair_truncation() {
        let tokenizer = test_tokenizer();
        let query = vec!["hello"; 5];
        let doc = vec!["world"; 5];

        // budget 7, delta 3: query keeps 4, doc keeps 2.
        let encoding = tokenizer.encode_pair(&query, &doc, 10);
        assert_eq!(encoding.input_ids, vec![1, 11, 11, 11, 11, 2, 13, 13, 13, 2]);
        assert_eq!(encoding.segment_ids, vec![0, 0, 0, 0, 0, 0, 1, 1, 1, 1]);
        assert_eq!(encoding.real_len(), 10);
    }

    #[test]
    fn test_tokenize_single_and_pair() {
        let tokenizer = test_tokenizer();

        assert_eq!(
            tokenizer.tokenize_single("unaffable", 10),
            tokenizer.encode_single(&["un", "##aff", "##able"], 10)
        );
        assert_eq!(
            tokenizer.tokenize_pair("hello", "world!", 8),
            tokenizer.encode_pair(&["hello"], &["world", "!"], 8)
        );

        let empty = tokenizer.tokenize_single("", 4);
        assert_eq!(empty.input_ids, vec![1, 2, 0, 0]);
    }

    #[test]
    fn test_multi_pairs() {
        let tokenizer = test_tokenizer();
        let docs = ["world", "美甲。", "", "unaffable hello"];

        let encodings = tokenizer.tokenize_multi_pairs("hello", &docs, 12);
        assert_eq!(encodings.len(), docs.len());
        for (doc, encoding) in docs.iter().zip(&encodings) {
            assert_eq!(encoding, &tokenizer.tokenize_pair("hello", doc, 12));
        }

        let docs_tokens: Vec<Vec<String>> = docs.iter().map(|d| tokenizer.tokenize(d)).collect();
        assert_eq!(
            tokenizer.encode_multi_pair(&tokenizer.tokenize("hello"), &docs_tokens, 12),
            encodings
        );
    }

    #[test]
    fn test_from_vocab_reader() {
        let data = VOCAB.join("\n");
        let tokenizer: BertTokenizer<T> =
            BertTokenizer::from_vocab_reader(data.as_bytes(), false, true).unwrap();
        assert_eq!(tokenizer.tokenize("unaffable"), vec!["un", "##aff", "##able"]);
    }
}
