//! Page-load query string parsing.
//!
//! A `query` parameter in the page location pre-populates the search field.

use url::form_urlencoded;
use url::Url;

/// Name of the query-string parameter carrying the initial search text.
pub const QUERY_PARAM: &str = "query";

/// Extracts the decoded `query` parameter from a page location.
///
/// Accepts a full URL (`http://host/explore?query=x`) or a bare query string
/// (`?query=x` or `query=x`). Blank or whitespace-only values count as absent.
///
/// # Examples
///
/// ```
/// use dataset_explorer::infrastructure::query_param;
///
/// assert_eq!(query_param("/explore?query=deep%20learning").as_deref(), Some("deep learning"));
/// assert_eq!(query_param("http://localhost/explore?query=+"), None);
/// assert_eq!(query_param("sorting=oldest"), None);
/// ```
#[must_use]
pub fn query_param(location: &str) -> Option<String> {
    let raw_query = match Url::parse(location) {
        Ok(url) => url.query().unwrap_or_default().to_string(),
        Err(_) => location
            .split_once('?')
            .map_or(location, |(_, query)| query)
            .to_string(),
    };
    let raw_query = raw_query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(raw_query.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_and_percent_decoding() {
        assert_eq!(query_param("?query=a+b%26c").as_deref(), Some("a b&c"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(query_param("query=one&query=two").as_deref(), Some("one"));
    }

    #[test]
    fn test_fragment_is_ignored() {
        assert_eq!(query_param("/explore?query=phones#results").as_deref(), Some("phones"));
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(query_param(""), None);
        assert_eq!(query_param("/explore"), None);
        assert_eq!(query_param("/explore?query="), None);
    }
}
