use crate::commands::{encode::EncodeArgs, ids::IdsArgs, tokenize::TokenizeArgs};

pub mod encode;
pub mod ids;
pub mod tokenize;

/// Subcommands for bertpiece.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the tokens of each line.
    Tokenize(TokenizeArgs),

    /// Print the token ids of each line.
    Ids(IdsArgs),

    /// Print a JSON model encoding for each line.
    Encode(EncodeArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Tokenize(cmd) => cmd.run(),
            Commands::Ids(cmd) => cmd.run(),
            Commands::Encode(cmd) => cmd.run(),
        }
    }
}
