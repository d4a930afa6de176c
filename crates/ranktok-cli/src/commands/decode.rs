use std::io::{BufRead, Write};

use ranktok::{TokenDecoder, Tokenizer};

use crate::{
    encoding_selector::EncodingSelectorArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    encoding: EncodingSelectorArgs,

    /// Fail on ids the encoding does not know, instead of dropping them.
    #[arg(long)]
    strict: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.encoding.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        decode_lines(&tokenizer, self.strict, &mut reader, &mut writer)
    }
}

/// Decode each line of whitespace separated ids, writing the bytes as is.
pub fn decode_lines(
    tokenizer: &Tokenizer<u32>,
    strict: bool,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let tokens = line
            .split_whitespace()
            .map(|id| {
                id.parse::<u32>()
                    .map_err(|err| format!("line {}: bad token id {id:?}: {err}", idx + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = tokenizer.decoder().decode_to_bytes(&tokens);
        if result.skipped > 0 {
            if strict {
                return Err(format!("line {}: {} unknown token ids", idx + 1, result.skipped).into());
            }
            log::warn!("line {}: dropped {} unknown token ids", idx + 1, result.skipped);
        }
        writer.write_all(&result.value)?;
    }
    writer.flush()?;
    Ok(())
}
