use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs, for_each_line},
    tokenizer_args::TokenizerArgs,
};

/// Args for the tokenize command.
#[derive(clap::Args, Debug)]
pub struct TokenizeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl TokenizeArgs {
    /// Run the tokenize command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |line| {
            writeln!(writer, "{}", tokenizer.tokenize(line).join(" "))?;
            Ok(())
        })?;
        writer.flush()?;
        Ok(())
    }
}
