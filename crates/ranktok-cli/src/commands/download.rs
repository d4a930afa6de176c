use ranktok::{
    RTResult,
    pretrained::{self, EncodingName},
};
use strum::IntoEnumIterator;

use crate::disk_cache::DiskCacheArgs;

/// Args for the download command.
#[derive(clap::Args, Debug)]
pub struct DownloadArgs {
    /// Encodings to fetch; all of them when empty.
    encodings: Vec<String>,

    #[command(flatten)]
    disk_cache: DiskCacheArgs,
}

impl DownloadArgs {
    /// Run the download command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encodings = self.selected()?;
        let mut disk_cache = self.disk_cache.init_disk_cache()?;

        let failed: Vec<String> = encodings
            .into_iter()
            .filter(|&encoding| !pretrained::download_encoding(encoding, &mut disk_cache))
            .map(|encoding| encoding.to_string())
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(format!("failed to download: {}", failed.join(", ")).into())
        }
    }

    fn selected(&self) -> Result<Vec<EncodingName>, Box<dyn std::error::Error>> {
        if self.encodings.is_empty() {
            return Ok(EncodingName::iter().collect());
        }
        let encodings = self
            .encodings
            .iter()
            .map(|name| EncodingName::from_name(name))
            .collect::<RTResult<Vec<_>>>()?;
        Ok(encodings)
    }
}
