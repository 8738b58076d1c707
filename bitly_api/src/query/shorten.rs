use url::Url;

use super::Query;

/// Parameters for the `shorten` endpoint.
#[derive(Clone, Debug)]
pub struct ShortenQuery {
    long_url: String,
}

impl ShortenQuery {
    pub fn new(long_url: &str) -> Self {
        Self {
            long_url: long_url.to_string(),
        }
    }

    /// The long URL exactly as supplied; the service keys its results by it.
    pub fn long_url(&self) -> &str {
        &self.long_url
    }
}

impl Query for ShortenQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().append_pair("longUrl", &self.long_url);
        url
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{Query, ShortenQuery};

    #[test]
    fn test_shorten_query() {
        let url = Url::parse("http://api.bit.ly/shorten?version=2.0.1").unwrap();

        insta::assert_snapshot!(
            ShortenQuery::new("http://example.com/a?b=c&d=e").add_to_url(&url).to_string(),
            @"http://api.bit.ly/shorten?version=2.0.1&longUrl=http%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d%3De"
        );
    }
}
