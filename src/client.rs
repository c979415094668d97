//! This module provides the HTTP client used to reach the KartingRM backend

use std::error::Error;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::BackendConfig;


/// A pre-configured client, whose requests are relative to `http://<host>:<port>/api` and are sent as JSON.
///
/// There is no retry, timeout or authentication: callers issue raw requests against this base.
#[derive(Clone, Debug)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    /// Create a client. This does not start a connection, and does not validate the base URL either:
    /// a malformed one (e.g. because the host is missing) only makes the requests fail.
    pub fn new(config: &BackendConfig) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = config.base_url();
        log::debug!("Backend base URL is {}", base_url);
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL of a path relative to the base URL
    pub fn url_for(&self, path: &str) -> Result<Url, Box<dyn Error>> {
        let full = format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'));
        let url = Url::parse(&full)
            .map_err(|err| format!("Invalid request URL {:?}: {}", full, err))?;
        Ok(url)
    }

    /// Send a GET request and decode the JSON body of the response
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Box<dyn Error>> {
        let url = self.url_for(path)?;
        log::debug!("GET {}", url);

        let response = self.client
            .get(url.clone())
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {} for {}", response.status(), url).into());
        }

        let text = response.text().await?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_url_for() {
        let client = HttpClient::new(&BackendConfig::new("localhost", 8090)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8090/api");
        assert_eq!(client.url_for("reservation/rack").unwrap().as_str(), "http://localhost:8090/api/reservation/rack");
        assert_eq!(client.url_for("/reservation/rack").unwrap().as_str(), "http://localhost:8090/api/reservation/rack");
    }

    #[tokio::test]
    async fn test_missing_host_fails_at_call_time() {
        let _ = env_logger::builder().is_test(true).try_init();

        // Building the client must succeed...
        let client = HttpClient::new(&BackendConfig::default()).unwrap();
        assert_eq!(client.base_url(), "http://:8090/api");

        // ...but the request is rejected
        let res: Result<serde_json::Value, _> = client.get_json("reservation/rack").await;
        assert!(res.is_err());
    }
}
