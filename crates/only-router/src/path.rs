//! Route paths
//!
//! A route path is an ordered list of non-empty segments. Every constructor
//! normalizes: leading, trailing and repeated `/` separators are dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment separator used in path strings and URLs
pub const SEPARATOR: char = '/';

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct RoutePath {
    segments: Vec<String>,
}

impl RoutePath {
    /// The empty path (root is the target)
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-delimited path string
    pub fn parse(input: &str) -> Self {
        Self {
            segments: input
                .split(SEPARATOR)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        // Segments may themselves contain separators ("a/b" given as one item)
        let segments = segments
            .into_iter()
            .map(Into::into)
            .flat_map(|s| Self::parse(&s).segments)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment, used for top-level tab selection
    pub fn head(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// Path with the first `n` segments removed
    pub fn skip(&self, n: usize) -> Self {
        Self {
            segments: self.segments.iter().skip(n).cloned().collect(),
        }
    }

    /// Path made of the first `n` segments
    pub fn take(&self, n: usize) -> Self {
        Self {
            segments: self.segments.iter().take(n).cloned().collect(),
        }
    }

    pub fn join(&self) -> String {
        self.segments.join("/")
    }

    /// Visible URL for this path, always rooted at `/`
    pub fn to_url(&self) -> String {
        format!("/{}", self.join())
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.join())
    }
}

impl From<&str> for RoutePath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for RoutePath {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&String> for RoutePath {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<Vec<String>> for RoutePath {
    fn from(value: Vec<String>) -> Self {
        Self::from_segments(value)
    }
}

impl From<&[&str]> for RoutePath {
    fn from(value: &[&str]) -> Self {
        Self::from_segments(value.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for RoutePath {
    fn from(value: [&str; N]) -> Self {
        Self::from_segments(value)
    }
}

impl From<&RoutePath> for RoutePath {
    fn from(value: &RoutePath) -> Self {
        value.clone()
    }
}

impl From<RoutePath> for Vec<String> {
    fn from(value: RoutePath) -> Self {
        value.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_separators() {
        let path = RoutePath::parse("//a/b///c/");
        assert_eq!(path.segments(), &["a", "b", "c"]);
        assert_eq!(path.to_string(), "a/b/c");
        assert_eq!(path.to_url(), "/a/b/c");
    }

    #[test]
    fn test_root_path() {
        assert!(RoutePath::parse("/").is_empty());
        assert!(RoutePath::parse("").is_empty());
        assert_eq!(RoutePath::root().to_url(), "/");
        assert_eq!(RoutePath::root().head(), None);
    }

    #[test]
    fn test_from_segments_drops_empty() {
        let path = RoutePath::from(vec!["".to_string(), "a".to_string(), "b/c".to_string()]);
        assert_eq!(path, RoutePath::parse("a/b/c"));
    }

    #[test]
    fn test_skip_and_take() {
        let path = RoutePath::from(["a", "b", "c"]);
        assert_eq!(path.skip(1), RoutePath::parse("b/c"));
        assert_eq!(path.take(2), RoutePath::parse("a/b"));
        assert!(path.skip(5).is_empty());
    }

    #[test]
    fn test_serializes_as_array() {
        let path = RoutePath::parse("docs/intro");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"["docs","intro"]"#);

        let back: RoutePath = serde_json::from_str(r#"["", "docs", "intro"]"#).unwrap();
        assert_eq!(back, path);
    }
}
