use std::{fs::File, io::BufReader};

use bertpiece::{BertTokenizer, TokenizerOptions, WordPieceVocab, vocab::io::load_vocab_txt_path};

/// Tokenizer construction arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Path to a `vocab.txt`; one token per line.
    #[arg(long)]
    pub vocab: String,

    /// Optional JSON `TokenizerOptions` file; flags override it.
    #[arg(long, default_value = None)]
    pub options: Option<String>,

    /// Convert full-width characters to half-width.
    #[arg(long)]
    pub full_width: bool,

    /// Preserve case.
    #[arg(long)]
    pub no_lower_case: bool,

    /// Words longer than this become the unknown token.
    #[arg(long, default_value = None)]
    pub max_chars_per_word: Option<usize>,
}

impl TokenizerArgs {
    /// Resolve the tokenizer options.
    pub fn tokenizer_options(&self) -> Result<TokenizerOptions, Box<dyn std::error::Error>> {
        let mut options: TokenizerOptions = match &self.options {
            Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
            None => TokenizerOptions::default(),
        };

        if self.full_width {
            options.set_full_width_to_half_width(true);
        }
        if self.no_lower_case {
            options.set_lower_case(false);
            options.normalizer = options.normalizer.with_lower_case(false);
        }
        if let Some(max_chars) = self.max_chars_per_word {
            options = options.with_max_chars_per_word(max_chars);
        }

        Ok(options)
    }

    /// Load the vocabulary, and build the tokenizer.
    pub fn load_tokenizer(&self) -> Result<BertTokenizer<u32>, Box<dyn std::error::Error>> {
        let options = self.tokenizer_options()?;
        let vocab: WordPieceVocab<u32> = load_vocab_txt_path(&self.vocab)?;
        log::info!("loaded {} vocab entries from {:?}", vocab.len(), self.vocab);

        Ok(options.build(vocab.into())?)
    }
}
