//! # `vocab.txt` Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{errors::BPResult, types::TokenType, vocab::WordPieceVocab};

/// Load a [`WordPieceVocab`] from a `vocab.txt` file.
///
/// Lines are:
/// ```terminaloutput
/// {TOKEN}
/// ```
/// The 0-based line number is the token id.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_vocab_txt_path<T, P>(path: P) -> BPResult<WordPieceVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_vocab_txt(reader)
}

/// Read a [`WordPieceVocab`] from a `vocab.txt` line reader.
///
/// Both `\n` and `\r\n` line endings are accepted;
/// empty lines are tokens, and occupy an id.
///
/// ## Arguments
/// * `reader` - the line reader.
pub fn read_vocab_txt<T, R>(reader: R) -> BPResult<WordPieceVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let tokens = reader.lines().collect::<Result<Vec<String>, _>>()?;
    WordPieceVocab::from_tokens(tokens)
}

/// Save a [`WordPieceVocab`] to a `vocab.txt` file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_vocab_txt_path<T: TokenType, P: AsRef<Path>>(
    vocab: &WordPieceVocab<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab_txt(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`WordPieceVocab`] to a [`Write`] writer.
///
/// Every line is written, including shadowed duplicates;
/// so that ids survive the round trip.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_vocab_txt<T, W>(
    vocab: &WordPieceVocab<T>,
    writer: &mut W,
) -> BPResult<()>
where
    T: TokenType,
    W: Write,
{
    for token in vocab.token_lines() {
        writeln!(writer, "{}", token)?;
    }
    Ok(())
}
