use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Path patterns that indicate a likely article
static ARTICLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/news/",
        r"/articles?/",
        r"/stor(y|ies)/",
        r"/blog/",
        r"/posts?/",
        r"/reviews?/",
        r"/opinions?/",
        r"/features?/",
        r"/analysis/",
        r"/commentary/",
        r"/editorial/",
        // Year in path (2020, 2021, ...)
        r"/20\d{2}/",
        // YYYY/MM pattern
        r"/\d{4}/\d{2}/",
        // YYYY-MM-DD pattern
        r"/\d{4}-\d{2}-\d{2}/",
        // Long slug patterns
        r"[-_]\w+[-_]\w+[-_]\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

/// Path patterns that indicate a non-article page (listings, media, chrome)
static EXCLUDE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"/live[/?]",
        r"/videos?[/?]",
        r"/photos?[/?]",
        r"/galler(y|ies)[/?]",
        r"/tags?[/?]",
        r"/categor(y|ies)[/?]",
        r"/topics?[/?]",
        r"/authors?[/?]",
        r"/search[/?]",
        r"/contact[/?]",
        r"/about[/?]",
        r"/privacy[/?]",
        r"/terms[/?]",
        r"/subscribe[/?]",
        r"/newsletter[/?]",
        r"/rss[/?]",
        r"/sitemap",
        r"/api[/?]",
        r"/feed[/?]",
        r"\.xml$",
        r"\.rss$",
        r"\.json$",
        r"\.pdf$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static pattern"))
    .collect()
});

static DATE_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(20\d{2}|\d{4}-\d{2}-\d{2})").expect("static pattern"));

/// Decides whether a URL looks like an article rather than a listing page
///
/// Exclusion patterns win over article patterns. When neither matches,
/// structural heuristics run: deep paths with date-like or long hyphenated
/// slug segments pass, as do long multi-hyphen paths.
///
/// # Examples
///
/// ```
/// use frontpage::links::looks_like_article;
/// use url::Url;
///
/// let article = Url::parse("https://example.com/news/2024/03/01/big-story").unwrap();
/// assert!(looks_like_article(&article));
///
/// let listing = Url::parse("https://example.com/category/politics").unwrap();
/// assert!(!looks_like_article(&listing));
/// ```
pub fn looks_like_article(url: &Url) -> bool {
    let url_lower = url.as_str().to_lowercase();
    let path = url.path().to_lowercase();

    for pattern in EXCLUDE_PATTERNS.iter() {
        if pattern.is_match(&url_lower) {
            return false;
        }
    }

    for pattern in ARTICLE_PATTERNS.iter() {
        if pattern.is_match(&url_lower) {
            return true;
        }
    }

    // Long paths with multiple segments often indicate articles
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() >= 3 {
        for segment in &segments {
            if DATE_SEGMENT.is_match(segment) {
                return true;
            }
            if segment.len() > 10 && segment.contains('-') {
                return true;
            }
        }
    }

    // Long hyphenated slugs are likely articles even in shallow paths
    path.len() > 20 && path.matches('-').count() >= 2
}
