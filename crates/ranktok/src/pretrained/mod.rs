//! # Pretrained Encodings
//!
//! Named encodings, model name resolution, and rank file locations.
//!
//! ## Loading Pretrained Encodings
//!
//! An encoding needs its rank file plus static configuration (word pattern
//! and special words). With the ``download`` feature the rank file is fetched
//! into a [`RanktokDiskCache`](crate::disk_cache::RanktokDiskCache) on first use.
//!
//! ```rust,no_run
//! use ranktok::{SpecialSelection, disk_cache::RanktokDiskCache, pretrained};
//!
//! fn example() -> ranktok::RTResult<()> {
//!     let mut disk_cache = RanktokDiskCache::from_env()
//!         .map_err(|err| ranktok::RanktokError::External(err.to_string()))?;
//!     let tok = pretrained::encoding_for_model::<u32>("gpt-4", &mut disk_cache)?;
//!
//!     let tokens = tok.encode(
//!         "hello <|endoftext|>",
//!         &SpecialSelection::All,
//!         &SpecialSelection::All,
//!     )?;
//!     assert_eq!(tok.decode(&tokens), "hello <|endoftext|>");
//!     Ok(())
//! }
//! ```
//!
//! Without the ``download`` feature, point [`registry::EncodingName::load_path`]
//! at a local rank file.

pub mod models;
pub mod openai;
pub mod registry;

#[doc(inline)]
pub use models::encoding_name_for_model;
#[doc(inline)]
pub use registry::{EncodingName, list_encoding_names};

#[cfg(feature = "download")]
use crate::{
    RTResult,
    disk_cache::RanktokDiskCache,
    tokenizer::Tokenizer,
    types::TokenType,
};

/// Load an encoding by name, downloading its rank file if needed.
///
/// ## Errors
/// * `UnknownEncoding` if the name is not registered.
/// * `External` if the rank file cannot be fetched.
#[cfg(feature = "download")]
pub fn get_encoding<T: TokenType>(
    name: &str,
    disk_cache: &mut RanktokDiskCache,
) -> RTResult<Tokenizer<T>> {
    EncodingName::from_name(name)?.load_tokenizer(disk_cache)
}

/// Load the encoding a model uses, downloading its rank file if needed.
///
/// ## Errors
/// * `UnknownModel` if the model cannot be resolved.
/// * `External` if the rank file cannot be fetched.
#[cfg(feature = "download")]
pub fn encoding_for_model<T: TokenType>(
    model: &str,
    disk_cache: &mut RanktokDiskCache,
) -> RTResult<Tokenizer<T>> {
    encoding_name_for_model(model)?.load_tokenizer(disk_cache)
}

/// Make sure an encoding's rank file is in the cache.
///
/// Failures are logged, not returned.
///
/// ## Returns
/// `true` if the file is cached afterwards.
#[cfg(feature = "download")]
pub fn download_encoding(
    encoding: EncodingName,
    disk_cache: &mut RanktokDiskCache,
) -> bool {
    match encoding.cached_path(disk_cache, true) {
        Ok(path) => {
            log::info!("{encoding} rank file is at {}", path.display());
            true
        }
        Err(err) => {
            log::warn!("failed to download {encoding}: {err}");
            false
        }
    }
}
