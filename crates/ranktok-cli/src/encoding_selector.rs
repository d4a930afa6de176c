use std::path::PathBuf;

use ranktok::{
    Tokenizer,
    pretrained::{EncodingName, encoding_name_for_model},
};

use crate::disk_cache::DiskCacheArgs;

/// Encoding selector arg group.
#[derive(clap::Args, Debug)]
pub struct EncodingSelectorArgs {
    /// Encoding to use.
    #[arg(long, default_value = "cl100k_base")]
    encoding: String,

    /// Model name; picks the encoding that model uses.
    #[arg(long, conflicts_with = "encoding")]
    model: Option<String>,

    /// Local rank file; skips the cache and download.
    #[arg(long)]
    rank_file: Option<PathBuf>,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,
}

impl EncodingSelectorArgs {
    /// Resolve the selected encoding.
    pub fn encoding_name(&self) -> Result<EncodingName, Box<dyn std::error::Error>> {
        Ok(match &self.model {
            Some(model) => encoding_name_for_model(model)?,
            None => EncodingName::from_name(&self.encoding)?,
        })
    }

    /// Load the tokenizer.
    pub fn load_tokenizer(&self) -> Result<Tokenizer<u32>, Box<dyn std::error::Error>> {
        let encoding = self.encoding_name()?;
        log::info!("using encoding {encoding}");

        let tokenizer = match &self.rank_file {
            Some(path) => encoding.load_path(path)?,
            None => {
                let mut disk_cache = self.disk_cache.init_disk_cache()?;
                encoding.load_tokenizer(&mut disk_cache)?
            }
        };
        Ok(tokenizer)
    }
}
