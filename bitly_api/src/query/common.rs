//! Shared query infrastructure: the [`Query`] trait and [`LinkRef`].

use url::Url;

/// Prefix that marks an input as a full short URL rather than a bare hash.
pub const SHORT_URL_PREFIX: &str = "http://bit.ly/";

/// Trait implemented by all query builders.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;
}

/// A reference to an existing short link, as accepted by `expand`, `info`
/// and `stats`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkRef {
    /// A full short URL, e.g. `http://bit.ly/abcde`.
    ShortUrl(String),
    /// A bare hash, e.g. `abcde`.
    Hash(String),
}

impl LinkRef {
    /// Classifies `input`. Only an exact, case-sensitive `http://bit.ly/`
    /// prefix makes it a short URL; anything else is taken as a hash as-is.
    pub fn parse(input: &str) -> Self {
        if input.starts_with(SHORT_URL_PREFIX) {
            LinkRef::ShortUrl(input.to_string())
        } else {
            LinkRef::Hash(input.to_string())
        }
    }

    /// Key under which the service files this link in its `results`.
    pub fn lookup_key(&self) -> &str {
        match self {
            LinkRef::ShortUrl(url) => &url[SHORT_URL_PREFIX.len()..],
            LinkRef::Hash(hash) => hash,
        }
    }

    /// The raw input this reference was parsed from.
    pub fn as_str(&self) -> &str {
        match self {
            LinkRef::ShortUrl(value) | LinkRef::Hash(value) => value,
        }
    }

    fn param_name(&self) -> &'static str {
        match self {
            LinkRef::ShortUrl(_) => "shortUrl",
            LinkRef::Hash(_) => "hash",
        }
    }
}

impl From<&str> for LinkRef {
    fn from(input: &str) -> Self {
        LinkRef::parse(input)
    }
}

impl Query for LinkRef {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(self.param_name(), self.as_str());
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{LinkRef, Query};

    #[test]
    fn test_link_ref_parse() {
        assert_eq!(
            LinkRef::parse("http://bit.ly/abcde"),
            LinkRef::ShortUrl("http://bit.ly/abcde".to_string())
        );
        assert_eq!(LinkRef::parse("abcde"), LinkRef::Hash("abcde".to_string()));
        // prefix match is exact and case-sensitive
        assert_eq!(
            LinkRef::parse("HTTP://bit.ly/abcde"),
            LinkRef::Hash("HTTP://bit.ly/abcde".to_string())
        );
        assert_eq!(
            LinkRef::parse("https://bit.ly/abcde"),
            LinkRef::Hash("https://bit.ly/abcde".to_string())
        );
    }

    #[test]
    fn test_lookup_key() {
        assert_eq!(LinkRef::parse("http://bit.ly/abcde").lookup_key(), "abcde");
        assert_eq!(LinkRef::parse("http://bit.ly/").lookup_key(), "");
        assert_eq!(LinkRef::parse("http://bit.ly/a/b").lookup_key(), "a/b");
        assert_eq!(LinkRef::parse("FGHiJ").lookup_key(), "FGHiJ");
    }

    #[test]
    fn test_link_ref_query() {
        let url = Url::parse("http://api.bit.ly/expand?version=2.0.1").unwrap();

        insta::assert_snapshot!(
            LinkRef::parse("http://bit.ly/abcde").add_to_url(&url).to_string(),
            @"http://api.bit.ly/expand?version=2.0.1&shortUrl=http%3A%2F%2Fbit.ly%2Fabcde"
        );
        insta::assert_snapshot!(
            LinkRef::parse("FGHiJ").add_to_url(&url).to_string(),
            @"http://api.bit.ly/expand?version=2.0.1&hash=FGHiJ"
        );
    }
}
