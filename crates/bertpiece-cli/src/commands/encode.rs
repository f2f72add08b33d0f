use std::io::Write;

use bertpiece::{BertTokenizer, Encoding};

use crate::{
    input_output::{InputArgs, OutputArgs, for_each_line},
    tokenizer_args::TokenizerArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// The fixed encoding length.
    #[arg(long, default_value_t = 128)]
    max_len: usize,

    /// Lines containing this are encoded as a ``(query, doc)`` pair.
    #[arg(long, default_value = "\t")]
    pair_delimiter: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |line| {
            let encoding = encode_line(&tokenizer, line, &self.pair_delimiter, self.max_len);
            serde_json::to_writer(&mut writer, &encoding)?;
            writeln!(writer)?;
            Ok(())
        })?;
        writer.flush()?;
        Ok(())
    }
}

/// Encode a line as a pair when it contains `delimiter`; else as a single sequence.
fn encode_line(
    tokenizer: &BertTokenizer<u32>,
    line: &str,
    delimiter: &str,
    max_len: usize,
) -> Encoding<u32> {
    match line.split_once(delimiter) {
        Some((query, doc)) if !delimiter.is_empty() => tokenizer.tokenize_pair(query, doc, max_len),
        _ => tokenizer.tokenize_single(line, max_len),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer() -> BertTokenizer<u32> {
        let vocab = "[UNK]\n[CLS]\n[SEP]\n[MASK]\n[PAD]\nhello\nworld\n";
        BertTokenizer::from_vocab_reader(vocab.as_bytes(), false, true).unwrap()
    }

    #[test]
    fn test_encode_line() {
        let tokenizer = tokenizer();

        let single = encode_line(&tokenizer, "Hello world", "\t", 6);
        assert_eq!(single.input_ids, vec![1, 5, 6, 2, 0, 0]);
        assert_eq!(single.segment_ids, vec![0; 6]);

        let pair = encode_line(&tokenizer, "hello\tworld", "\t", 6);
        assert_eq!(pair.input_ids, vec![1, 5, 2, 6, 2, 0]);
        assert_eq!(pair.segment_ids, vec![0, 0, 0, 1, 1, 0]);

        let empty_delimiter = encode_line(&tokenizer, "hello", "", 4);
        assert_eq!(empty_delimiter.input_ids, vec![1, 5, 2, 0]);
    }
}
