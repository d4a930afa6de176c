//! # Ranktok Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{RANKTOK_CACHE_CONFIG, path_utils};

/// Options for [`RanktokDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct RanktokDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl RanktokDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded vocabulary files.
///
/// Directories come from [`PathResolver`](`crate::PathResolver`); an explicit
/// option beats `$RANKTOK_CACHE_DIR` / `$RANKTOK_DATA_DIR`, which beat the
/// platform defaults. Files are fetched with [`Downloader`], which honors
/// the usual proxy environment variables.
pub struct RanktokDiskCache {
    cache_dir: PathBuf,
    data_dir: PathBuf,
    downloader: Downloader,
}

impl RanktokDiskCache {
    /// Construct a new [`RanktokDiskCache`].
    ///
    /// ## Errors
    /// * If no cache or data directory can be resolved.
    /// * If the downloader cannot be built.
    pub fn new(options: RanktokDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = RANKTOK_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = RANKTOK_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        let downloader = match options.downloader {
            Some(builder) => builder(),
            None => Downloader::builder()
                .build()
                .context("failed to build downloader")?,
        };

        Ok(Self {
            cache_dir,
            data_dir,
            downloader,
        })
    }

    /// Construct a cache with default options.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(RanktokDiskCacheOptions::default())
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the downloader.
    pub fn downloader(&self) -> &Downloader {
        &self.downloader
    }

    /// Get the cache path for `file` under `context` dirs.
    ///
    /// Does not check that the path exists.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Get the data path for `file` under `context` dirs.
    ///
    /// Does not check that the path exists.
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.data_dir, context, file)
    }

    /// The cache path a download from `urls` lands at.
    ///
    /// The file name is the last path segment of the first URL.
    pub fn cached_url_path<C, S>(
        &self,
        context: &[C],
        urls: &[S],
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let url = urls.first().context("no urls given")?.as_ref();
        let file = path_utils::url_file_name(url)
            .with_context(|| format!("no file name in url: {url}"))?;
        Ok(self.cache_path(context, file))
    }

    /// Get the cached copy of a remote file, downloading it if missing.
    ///
    /// ## Arguments
    /// * `context` - prefix dirs under the cache directory.
    /// * `urls` - mirrors of the same file, tried in order.
    /// * `download` - whether a missing file may be downloaded.
    ///
    /// ## Errors
    /// * If the file is missing and `download` is `false`.
    /// * If the download fails.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let path = self.cached_url_path(context, urls)?;
        if path.exists() {
            log::debug!("cache hit: {}", path.display());
            return Ok(path);
        }

        if !download {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let urls: Vec<&str> = urls.iter().map(|s| s.as_ref()).collect();
        let part = partial_path(&path);
        if part.exists() {
            fs::remove_file(&part)
                .with_context(|| format!("failed to remove stale {}", part.display()))?;
        }

        log::info!("downloading {} to {}", urls[0], path.display());
        if let Err(err) = self.download_to(&urls, &part) {
            if part.exists()
                && let Err(rm_err) = fs::remove_file(&part)
            {
                log::warn!("failed to remove {}: {rm_err}", part.display());
            }
            return Err(err);
        }

        fs::rename(&part, &path)
            .with_context(|| format!("failed to move download into {}", path.display()))?;
        Ok(path)
    }

    fn download_to(
        &mut self,
        urls: &[&str],
        target: &Path,
    ) -> anyhow::Result<()> {
        let mut dl = Download::new_mirrored(urls);
        dl.file_name = target.to_path_buf();

        for summary in self.downloader.download(&[dl])? {
            summary.with_context(|| format!("failed to download {}", urls[0]))?;
        }
        Ok(())
    }
}

/// Where a download is written before it is complete.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}
