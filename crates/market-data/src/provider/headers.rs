//! HTTP headers for upstream price providers

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/120.0.0.0 Safari/537.36";

/// Headers the SJC price service expects on its form posts.
pub fn sjc_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    headers.insert(
        REFERER,
        HeaderValue::from_static("https://sjc.com.vn/bieu-do-gia-vang"),
    );
    headers.insert(ORIGIN, HeaderValue::from_static("https://sjc.com.vn"));
    headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sjc_headers_post_a_form() {
        let headers = sjc_headers();
        assert_eq!(
            headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("application/x-www-form-urlencoded")
        );
        assert!(headers.contains_key(REFERER));
        assert!(headers.contains_key(ORIGIN));
        assert!(headers.contains_key(USER_AGENT));
    }
}
