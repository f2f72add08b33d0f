use std::io::Write;

use crate::{
    input_output::{InputArgs, OutputArgs, for_each_line},
    tokenizer_args::TokenizerArgs,
};

/// Args for the ids command.
#[derive(clap::Args, Debug)]
pub struct IdsArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl IdsArgs {
    /// Run the ids command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        for_each_line(&mut reader, |line| {
            let ids = tokenizer.convert_tokens_to_ids(&tokenizer.tokenize(line));
            for (idx, id) in ids.iter().enumerate() {
                write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
            }
            writeln!(writer)?;
            Ok(())
        })?;
        writer.flush()?;
        Ok(())
    }
}
