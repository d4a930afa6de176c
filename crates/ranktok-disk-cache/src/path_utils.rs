//! # Path Utilities

use std::path::{Path, PathBuf};

/// Join `context` dirs and a file name onto `root`.
///
/// Touches nothing on disk.
pub fn extend_path<P, S, F>(
    root: P,
    context: &[S],
    file: F,
) -> PathBuf
where
    P: AsRef<Path>,
    S: AsRef<Path>,
    F: AsRef<Path>,
{
    let mut path = root.as_ref().to_path_buf();
    path.extend(context.iter().map(|s| s.as_ref()));
    path.push(file.as_ref());
    path
}

/// The last path segment of a URL, without query or fragment.
pub fn url_file_name(url: &str) -> Option<&str> {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_path() {
        let path = extend_path("/tmp/ranktok", &["openai", "cl100k_base"], "cl100k_base.tiktoken");
        assert_eq!(
            path,
            PathBuf::from("/tmp/ranktok/openai/cl100k_base/cl100k_base.tiktoken")
        );

        let empty: &[&str] = &[];
        assert_eq!(extend_path("/tmp", empty, "f"), PathBuf::from("/tmp/f"));
    }

    #[test]
    fn test_url_file_name() {
        assert_eq!(
            url_file_name("https://example.com/encodings/r50k_base.tiktoken"),
            Some("r50k_base.tiktoken")
        );
        assert_eq!(url_file_name("https://example.com/a/b.txt?sig=1#x"), Some("b.txt"));
        assert_eq!(url_file_name("https://example.com/dir/"), None);
    }
}
