//! HTTP transport for the ibibles.net quote source.

use kbible_core::session::{FetchError, VerseSource};
use std::sync::OnceLock;

const QUOTE_BASE: &str = "http://ibibles.net/quote.php";
const PROXY_BASE: &str = "https://api.allorigins.win/raw?url=";

pub(crate) fn http_client() -> &'static reqwest::blocking::Client {
    static CLI: OnceLock<reqwest::blocking::Client> = OnceLock::new();
    CLI.get_or_init(|| {
        reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap()
    })
}

/// The quote endpoint takes "kor-{key}/{chapter}:{verses}" as its bare query
/// string; the whole URL then goes through the CORS-stripping proxy, matching
/// the upstream plugin's transport.
pub(crate) fn quote_build_url(lookup_key: &str) -> String {
    let api_url = format!("{}?kor-{}", QUOTE_BASE, lookup_key);
    format!("{}{}", PROXY_BASE, urlencoding::encode(&api_url))
}

/// Live verse source. Up to 3 attempts with exponential backoff; no caching
/// of fetched verses.
pub(crate) struct HttpVerseSource;

impl VerseSource for HttpVerseSource {
    fn fetch(&self, lookup_key: &str) -> Result<String, FetchError> {
        let url = quote_build_url(lookup_key);
        let mut backoff = 500u64;
        let mut last_err = String::new();
        for attempt in 0..3 {
            if attempt > 0 {
                std::thread::sleep(std::time::Duration::from_millis(backoff));
                backoff = (backoff * 2).min(8000);
            }
            match http_client().get(&url).send() {
                Ok(r) if r.status().is_success() => match r.text() {
                    Ok(body) => return Ok(body),
                    Err(e) => last_err = format!("read body: {}", e),
                },
                Ok(r) => last_err = format!("HTTP status {}", r.status()),
                Err(e) => last_err = format!("{}", e),
            }
        }
        Err(FetchError::new(last_err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_url_wraps_proxy() {
        let url = quote_build_url("john/3:16-18");
        assert!(url.starts_with("https://api.allorigins.win/raw?url="));
        assert!(url.contains(
            &urlencoding::encode("http://ibibles.net/quote.php?kor-john/3:16-18").into_owned()
        ));
    }
}
