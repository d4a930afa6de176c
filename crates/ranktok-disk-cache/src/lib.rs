//! # ranktok-disk-cache
//!
//! Resolves where `ranktok` keeps downloaded vocabularies, and fetches them.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{RanktokDiskCache, RanktokDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const RANKTOK_CACHE_DIR: &str = "RANKTOK_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const RANKTOK_DATA_DIR: &str = "RANKTOK_DATA_DIR";

/// Default [`PathResolver`] for ranktok.
pub const RANKTOK_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.ranktok",
    organization: "",
    application: "ranktok",
    cache_env_vars: &[RANKTOK_CACHE_DIR],
    data_env_vars: &[RANKTOK_DATA_DIR],
};
