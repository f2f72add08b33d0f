//! # BERT Tokenizer
//!
//! * [`BertTokenizer`] - the full pipeline; text to tokens to [`Encoding`](crate::Encoding)s.
//! * [`TokenizerOptions`] - serializable construction options.

mod bert_tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use bert_tokenizer::*;
#[doc(inline)]
pub use tokenizer_options::*;
