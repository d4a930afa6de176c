use std::io::{BufRead, Write};

use ranktok::{SpecialSelection, Tokenizer};

use crate::{
    encoding_selector::EncodingSelectorArgs,
    input_output::{InputArgs, OutputArgs},
    special_args::SpecialPolicyArgs,
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    encoding: EncodingSelectorArgs,

    #[command(flatten)]
    policy: SpecialPolicyArgs,

    /// Treat special words as ordinary text; ignores the special policy.
    #[arg(long)]
    ordinary: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.encoding.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let policy = (!self.ordinary).then(|| (self.policy.allowed(), self.policy.disallowed()));
        encode_lines(&tokenizer, policy, &mut reader, &mut writer)
    }
}

/// Encode each input line, keeping its line ending, as one line of ids.
pub fn encode_lines(
    tokenizer: &Tokenizer<u32>,
    policy: Option<(&SpecialSelection, &SpecialSelection)>,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let tokens = match policy {
            None => tokenizer.encode_ordinary_bytes(&line)?,
            Some((allowed, disallowed)) => tokenizer.encode_bytes(&line, allowed, disallowed)?,
        };

        let ids: Vec<String> = tokens.iter().map(u32::to_string).collect();
        writeln!(writer, "{}", ids.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}
