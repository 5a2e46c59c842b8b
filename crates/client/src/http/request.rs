use reqwest::Url;
use url::form_urlencoded;

use crate::config::API_KEY_PARAM;
use crate::errors::{FmpError, Result};

/// A fully resolved request: path relative to the base URL plus query parameters.
///
/// The API key is not part of the request; it is appended when the final URL is
/// built so that requests can be compared and cached independently of the key.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ApiRequest {
    /// Path relative to the base URL, e.g. `v3/profile/AAPL`.
    pub path: String,
    /// Query parameters in the order they were declared.
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Adds a query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Adds a query parameter only when a value is present.
    pub fn param_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Looks up the value of a query parameter.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Builds the outgoing URL with the API key appended as `apikey`.
    pub fn url(&self, base_url: &str, api_key: &str) -> Result<Url> {
        let joined = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        );

        let params = self
            .query
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .chain(std::iter::once((API_KEY_PARAM, api_key)));

        Url::parse_with_params(&joined, params)
            .map_err(|e| FmpError::InvalidUrl(format!("{}: {}", joined, e)))
    }

    /// Cache key for this request.
    ///
    /// Parameters are sorted so that declaration order does not matter, and
    /// any parameter listed in `ignored` is left out. Names and values are
    /// form-encoded, so a value containing `&` or `=` cannot alias other pairs.
    pub fn cache_key(&self, ignored: &[String]) -> String {
        let mut params: Vec<_> = self
            .query
            .iter()
            .filter(|(key, _)| !ignored.iter().any(|ignored| ignored == key))
            .collect();
        params.sort();

        let path = self.path.trim_start_matches('/');
        if params.is_empty() {
            return path.to_string();
        }

        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in params {
            query.append_pair(name, value);
        }
        format!("{}?{}", path, query.finish())
    }
}

impl std::fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.cache_key(&[]))
    }
}
