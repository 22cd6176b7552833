use alloy::primitives::Address;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use tracing::{debug, warn};

use super::EligibilityRecord;
use crate::error::Result;

// The airdrop API rejects requests that don't look like they came from the
// claim site, so the client presents the same header shape as a browser.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const REFERER_URL: &str = "https://airdrop.layeredge.foundation/";
const ORIGIN_URL: &str = "https://airdrop.layeredge.foundation";

pub struct EligibilityClient {
    http: reqwest::Client,
    base_url: String,
}

impl EligibilityClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        headers.insert(REFERER, HeaderValue::from_static(REFERER_URL));
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_URL));

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Fetch the eligibility record for an address.
    ///
    /// "No record" is a first-class outcome: transport errors, non-2xx
    /// statuses, and HTML block pages all map to `None` with a warning log.
    pub async fn fetch(&self, address: &Address) -> Option<EligibilityRecord> {
        match self.try_fetch(address).await {
            Ok(record) => {
                debug!("eligibility record retrieved for {}", address);
                Some(record)
            }
            Err(e) => {
                warn!("eligibility lookup failed for {}: {}", address, e);
                None
            }
        }
    }

    async fn try_fetch(&self, address: &Address) -> anyhow::Result<EligibilityRecord> {
        let url = format!("{}?address={}", self.base_url, address);
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("API returned HTTP {}", status);
        }

        let body = response.text().await?;
        if looks_like_html(&body) {
            anyhow::bail!("API returned an HTML page instead of JSON (outage or block page)");
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn looks_like_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(15)
        .collect::<String>()
        .to_ascii_lowercase();
    head.starts_with("<!doctype html") || head.starts_with("<html")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_address() -> Address {
        "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"
            .parse()
            .unwrap()
    }

    #[test]
    fn html_detection() {
        assert!(looks_like_html("<!doctype html><html>...</html>"));
        assert!(looks_like_html("  <!DOCTYPE HTML>"));
        assert!(looks_like_html("<html lang=\"en\">"));
        assert!(!looks_like_html(r#"{"allocation": "500"}"#));
        assert!(!looks_like_html(""));
    }

    #[tokio::test]
    async fn fetch_returns_record_on_json() {
        let server = MockServer::start().await;
        let address = test_address();

        Mock::given(method("GET"))
            .and(path("/"))
            .and(query_param("address", address.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "allocation": "500",
                "initAllocation": "1000",
                "proof": ["0xaa", "0xbb", "0xcc"]
            })))
            .mount(&server)
            .await;

        let client = EligibilityClient::new(&server.uri()).unwrap();
        let record = client.fetch(&address).await.unwrap();
        assert_eq!(record.allocation_display(), "500");
        assert_eq!(record.proof.len(), 3);
    }

    #[tokio::test]
    async fn fetch_treats_html_body_as_no_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<!doctype html><html><body>blocked</body></html>"),
            )
            .mount(&server)
            .await;

        let client = EligibilityClient::new(&server.uri()).unwrap();
        assert!(client.fetch(&test_address()).await.is_none());
    }

    #[tokio::test]
    async fn fetch_treats_server_error_as_no_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = EligibilityClient::new(&server.uri()).unwrap();
        assert!(client.fetch(&test_address()).await.is_none());
    }

    #[tokio::test]
    async fn fetch_treats_bad_json_as_no_record() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = EligibilityClient::new(&server.uri()).unwrap();
        assert!(client.fetch(&test_address()).await.is_none());
    }
}
