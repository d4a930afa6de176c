pub mod decode;
pub mod download;
pub mod encode;
pub mod list;
pub mod symbols;

/// Subcommands for ranktok.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text into token ids, one line of ids per input line.
    Encode(encode::EncodeArgs),

    /// Decode lines of token ids back into text.
    Decode(decode::DecodeArgs),

    /// Show the bytes each token of the input stands for.
    Symbols(symbols::SymbolsArgs),

    /// List encodings or models.
    List(list::ListArgs),

    /// Fetch rank files into the cache.
    Download(download::DownloadArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Symbols(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Download(cmd) => cmd.run(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Cursor;

    use ranktok::{
        Tokenizer,
        pretrained::EncodingName,
        types::SpanTokenMap,
        vocab::io::write_base64_span_map,
    };

    /// A `cl100k_base` tokenizer over single bytes plus a few merges.
    pub fn small_tokenizer() -> Tokenizer<u32> {
        let mut span_map: SpanTokenMap<u32> = (0..=255u8).map(|b| (vec![b], b as u32)).collect();
        for (idx, word) in ["he", "ll", "llo", "hello", " w", "or", " wor", "ld", " world"]
            .iter()
            .enumerate()
        {
            span_map.insert(word.as_bytes().to_vec(), 256 + idx as u32);
        }

        let mut buf = Vec::new();
        write_base64_span_map(&span_map, &mut buf).unwrap();
        EncodingName::Cl100kBase
            .read_tokenizer(Cursor::new(buf))
            .unwrap()
    }
}
