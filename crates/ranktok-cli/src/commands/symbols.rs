use std::io::{Read, Write};

use ranktok::Tokenizer;

use crate::{
    encoding_selector::EncodingSelectorArgs,
    input_output::{InputArgs, OutputArgs},
    special_args::SpecialPolicyArgs,
};

/// Args for the symbols command.
#[derive(clap::Args, Debug)]
pub struct SymbolsArgs {
    #[command(flatten)]
    encoding: EncodingSelectorArgs,

    #[command(flatten)]
    policy: SpecialPolicyArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl SymbolsArgs {
    /// Run the symbols command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.encoding.load_tokenizer()?;

        let mut text = Vec::new();
        self.input.open_reader()?.read_to_end(&mut text)?;

        let tokens = tokenizer.encode_bytes(&text, self.policy.allowed(), self.policy.disallowed())?;

        let mut writer = self.output.open_writer()?;
        write_symbols(&tokenizer, &tokens, &mut writer)
    }
}

/// Write one `id<TAB>symbol` line per token.
///
/// Symbols are escaped, so partial UTF-8 sequences show as `\xNN`.
pub fn write_symbols(
    tokenizer: &Tokenizer<u32>,
    tokens: &[u32],
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (token, symbol) in tokens.iter().zip(tokenizer.decode_tokens_bytes(tokens)) {
        writeln!(writer, "{token}\t{}", symbol.escape_ascii())?;
    }
    writer.flush()?;
    Ok(())
}
