//! # App Path Resolver
//!
//! Static defaults for cache and data directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Cache directory environment variables, highest priority first.
    pub cache_env_vars: &'static [&'static str],

    /// Data directory environment variables, highest priority first.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.organization, self.application, self.qualifier)
    }

    /// Resolve the cache directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each of `self.cache_env_vars`, in order.
    /// 3. `self.project_dirs().cache_dir()`, if present.
    /// 4. `None`
    ///
    /// On Linux the project dir is `$XDG_CACHE_HOME/ranktok`
    /// or `$HOME/.cache/ranktok`.
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        resolve_dir(path, self.cache_env_vars, || {
            self.project_dirs().map(|pds| pds.cache_dir().to_path_buf())
        })
    }

    /// Resolve the data directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each of `self.data_env_vars`, in order.
    /// 3. `self.project_dirs().data_dir()`, if present.
    /// 4. `None`
    ///
    /// On Linux the project dir is `$XDG_DATA_HOME/ranktok`
    /// or `$HOME/.local/share/ranktok`.
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        resolve_dir(path, self.data_env_vars, || {
            self.project_dirs().map(|pds| pds.data_dir().to_path_buf())
        })
    }
}

fn resolve_dir<P, F>(
    path: Option<P>,
    env_vars: &[&str],
    fallback: F,
) -> Option<PathBuf>
where
    P: AsRef<Path>,
    F: FnOnce() -> Option<PathBuf>,
{
    if let Some(path) = path {
        return Some(path.as_ref().to_path_buf());
    }

    if let Some(path) = env_vars.iter().find_map(|var| env::var_os(var)) {
        log::debug!("using directory from environment: {}", path.to_string_lossy());
        return Some(PathBuf::from(path));
    }

    fallback()
}
