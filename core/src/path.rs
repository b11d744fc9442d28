//! Relative path construction for the resource wrappers.

use std::borrow::Cow;

use url::form_urlencoded;

/// Percent-encode one caller supplied path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Append a form-url-encoded query string to `path`.
pub(crate) fn with_query<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, String)>,
{
    let mut query = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        query.append_pair(key, &value);
    }
    let query = query.finish();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(segment("user 1/2"), "user%201%2F2");
        assert_eq!(segment("abc-123"), "abc-123");
    }

    #[test]
    fn query_pairs_keep_order() {
        let path = with_query("/players", [("app_id", "a b".to_string()), ("limit", "10".to_string())]);
        assert_eq!(path, "/players?app_id=a+b&limit=10");
    }

    #[test]
    fn empty_query_leaves_path_alone() {
        assert_eq!(with_query("/apps", Vec::<(&str, String)>::new()), "/apps");
    }
}
