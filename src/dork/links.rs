use url::form_urlencoded;

use super::SearchEngine;

fn endpoint(engine: SearchEngine) -> (&'static str, &'static str, (&'static str, &'static str)) {
    match engine {
        SearchEngine::Google => ("https://www.google.com/search", "q", ("hl", "en")),
        SearchEngine::Yandex => ("https://yandex.com/search", "text", ("lr", "10267")),
    }
}

/// Search URL for a dork. The dork text is embedded as-is, without encoding.
pub fn format_url(dork: &str, engine: SearchEngine) -> String {
    let (base, query_key, (extra_key, extra_value)) = endpoint(engine);
    format!("{}?{}={}&{}={}", base, query_key, dork, extra_key, extra_value)
}

/// Search URL with form-urlencoded query values, ready to open in a browser
pub fn format_url_encoded(dork: &str, engine: SearchEngine) -> String {
    let (base, query_key, (extra_key, extra_value)) = endpoint(engine);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(query_key, dork)
        .append_pair(extra_key, extra_value)
        .finish();
    format!("{}?{}", base, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_urls() {
        assert_eq!(format_url("test", SearchEngine::Google), "https://www.google.com/search?q=test&hl=en");
        assert_eq!(format_url("test", SearchEngine::Yandex), "https://yandex.com/search?text=test&lr=10267");
    }

    #[test]
    fn test_plain_url_keeps_special_characters() {
        let url = format_url(r#"site:a.com "x" | y"#, SearchEngine::Google);
        assert_eq!(url, r#"https://www.google.com/search?q=site:a.com "x" | y&hl=en"#);
    }

    #[test]
    fn test_encoded_url() {
        let url = format_url_encoded(r#"site:a.com "x" | y"#, SearchEngine::Google);
        assert_eq!(url, "https://www.google.com/search?q=site%3Aa.com+%22x%22+%7C+y&hl=en");

        let url = format_url_encoded("test", SearchEngine::Yandex);
        assert_eq!(url, "https://yandex.com/search?text=test&lr=10267");
    }
}
