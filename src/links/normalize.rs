use url::Url;

/// Tracking query parameters removed during cleaning
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "ref",
    "source",
    "campaign",
    "_ga",
    "mc_cid",
];

/// Resolves an href against a base URL, rejecting non-fetchable links
///
/// Returns `None` for:
/// - `javascript:`, `mailto:`, `tel:`, `data:` links
/// - fragment-only links (same-page anchors)
/// - hrefs that fail to resolve
/// - anything that is not http(s) after resolution
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    match base.join(href) {
        Ok(resolved) if resolved.scheme() == "http" || resolved.scheme() == "https" => {
            Some(resolved)
        }
        _ => None,
    }
}

/// Cleans a URL by removing the fragment and tracking query parameters
///
/// Remaining query parameters are preserved in their original order. An
/// all-tracking query string is removed entirely (no trailing `?`).
///
/// # Examples
///
/// ```
/// use frontpage::links::clean_url;
/// use url::Url;
///
/// let url = Url::parse("https://example.com/story?utm_source=x&page=2#top").unwrap();
/// assert_eq!(clean_url(url).as_str(), "https://example.com/story?page=2");
/// ```
pub fn clean_url(mut url: Url) -> Url {
    url.set_fragment(None);

    if let Some(query) = url.query().map(str::to_string) {
        // Filter raw key=value chunks so percent-encoding in kept values
        // survives untouched
        let kept: Vec<&str> = query
            .split('&')
            .filter(|part| {
                let key = part.split('=').next().unwrap_or(part);
                !is_tracking_param(key)
            })
            .collect();

        if kept.is_empty() {
            url.set_query(None);
        } else {
            let query = kept.join("&");
            url.set_query(Some(&query));
        }
    }

    url
}

/// Checks if a query parameter key is a tracking parameter
fn is_tracking_param(key: &str) -> bool {
    let key = key.to_lowercase();
    TRACKING_PARAMS.contains(&key.as_str()) || key.starts_with("utm_")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/section/page").unwrap()
    }

    #[test]
    fn test_resolve_relative() {
        let url = resolve_link(&base(), "/other").unwrap();
        assert_eq!(url.as_str(), "https://example.com/other");
    }

    #[test]
    fn test_resolve_absolute() {
        let url = resolve_link(&base(), "https://other.com/page").unwrap();
        assert_eq!(url.as_str(), "https://other.com/page");
    }

    #[test]
    fn test_skip_special_schemes() {
        assert!(resolve_link(&base(), "javascript:void(0)").is_none());
        assert!(resolve_link(&base(), "mailto:a@b.com").is_none());
        assert!(resolve_link(&base(), "tel:+123").is_none());
        assert!(resolve_link(&base(), "data:text/plain,hi").is_none());
    }

    #[test]
    fn test_skip_fragment_only() {
        assert!(resolve_link(&base(), "#section").is_none());
    }

    #[test]
    fn test_skip_empty() {
        assert!(resolve_link(&base(), "   ").is_none());
    }

    #[test]
    fn test_clean_removes_fragment() {
        let url = Url::parse("https://example.com/story#comments").unwrap();
        assert_eq!(clean_url(url).as_str(), "https://example.com/story");
    }

    #[test]
    fn test_clean_removes_tracking_params() {
        let url =
            Url::parse("https://example.com/story?utm_source=tw&fbclid=abc&gclid=x").unwrap();
        assert_eq!(clean_url(url).as_str(), "https://example.com/story");
    }

    #[test]
    fn test_clean_keeps_real_params() {
        let url = Url::parse("https://example.com/story?id=42&utm_medium=email").unwrap();
        assert_eq!(clean_url(url).as_str(), "https://example.com/story?id=42");
    }

    #[test]
    fn test_clean_preserves_encoded_delimiters_in_kept_params() {
        let url = Url::parse("https://example.com/story?q=a%26b&utm_source=x").unwrap();
        assert_eq!(clean_url(url).as_str(), "https://example.com/story?q=a%26b");

        let url = Url::parse("https://example.com/story?filter=a%3Db&fbclid=y").unwrap();
        assert_eq!(
            clean_url(url).as_str(),
            "https://example.com/story?filter=a%3Db"
        );
    }

    #[test]
    fn test_clean_catches_any_utm_prefix() {
        let url = Url::parse("https://example.com/story?utm_custom=1").unwrap();
        assert_eq!(clean_url(url).as_str(), "https://example.com/story");
    }
}
