use url::Url;

use super::{LinkRef, Query};

/// Parameters for the `info` endpoint: the link plus an optional list of
/// metadata keys to narrow the response to.
#[derive(Clone, Debug)]
pub struct InfoQuery {
    link: LinkRef,
    keys: Vec<String>,
}

impl InfoQuery {
    pub fn new(input: &str) -> Self {
        Self {
            link: LinkRef::parse(input),
            keys: Vec::new(),
        }
    }

    pub fn link(&self) -> &LinkRef {
        &self.link
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.keys.push(key.to_string());
        self
    }

    pub fn with_keys(mut self, keys: &[&str]) -> Self {
        self.keys.extend(keys.iter().map(|k| k.to_string()));
        self
    }
}

impl Query for InfoQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.link.add_to_url(url);
        if !self.keys.is_empty() {
            url.query_pairs_mut()
                .append_pair("keys", &self.keys.join(","));
        }
        url
    }
}
