use std::path::PathBuf;

use ranktok::disk_cache::{RanktokDiskCache, RanktokDiskCacheOptions};

/// Disk cache argument group.
#[derive(clap::Args, Debug, Default)]
pub struct DiskCacheArgs {
    /// Cache directory; defaults to `$RANKTOK_CACHE_DIR`, then the platform cache dir.
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

impl DiskCacheArgs {
    /// Initialize the disk cache.
    pub fn init_disk_cache(&self) -> Result<RanktokDiskCache, Box<dyn std::error::Error>> {
        let options = RanktokDiskCacheOptions::default().with_cache_dir(self.cache_dir.as_ref());
        Ok(RanktokDiskCache::new(options)?)
    }
}
