//! Filtering of flat file listings.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How a search string is matched against a path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    /// Unanchored regular expression.
    Regex,
    /// Substring that must occur after the first character.
    ///
    /// Only the first occurrence counts: a path that starts with the search
    /// string never matches, and an empty search matches nothing. Kept for
    /// compatibility with existing callers; use [`SearchKind::Contains`]
    /// for a plain containment test.
    #[default]
    Substring,
    /// Plain "contains" test.
    Contains,
}

/// A compiled search over file paths.
#[derive(Debug, Clone)]
pub struct FileSearch {
    needle: String,
    matcher: Matcher,
}

#[derive(Debug, Clone)]
enum Matcher {
    Regex(Regex),
    Substring,
    Contains,
}

impl FileSearch {
    /// Compiles `needle` for the given kind.
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is [`SearchKind::Regex`] and `needle` is
    /// not a valid pattern.
    pub fn new(needle: impl Into<String>, kind: SearchKind) -> Result<Self, regex::Error> {
        let needle = needle.into();
        let matcher = match kind {
            SearchKind::Regex => Matcher::Regex(Regex::new(&needle)?),
            SearchKind::Substring => Matcher::Substring,
            SearchKind::Contains => Matcher::Contains,
        };
        Ok(Self { needle, matcher })
    }

    /// Returns `true` if `path` matches.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        match &self.matcher {
            Matcher::Regex(re) => re.is_match(path),
            Matcher::Substring => path.find(&self.needle).is_some_and(|pos| pos > 0),
            Matcher::Contains => path.contains(&self.needle),
        }
    }

    /// Keeps the matching paths, in order.
    pub fn filter<I, S>(&self, paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String> + AsRef<str>,
    {
        paths.into_iter().filter(|p| self.matches(p.as_ref())).map(Into::into).collect()
    }
}
