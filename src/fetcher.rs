use crate::error::LoonError;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = "loon-rules/0.1";

/// Blocking HTTP fetcher for the raw README.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// `None` disables the timeout entirely; reqwest's blocking client
    /// otherwise applies its own 30 second default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, LoonError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(LoonError::ClientError)?;

        Ok(Self { client })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    ///
    /// The body is always decoded as strict UTF-8, whatever charset the
    /// `Content-Type` header claims. Invalid bytes are an error rather than
    /// being replaced.
    pub fn fetch(&self, url: &str) -> Result<String, LoonError> {
        debug!("Fetching {}", url);

        let to_fetch_error = |source| LoonError::FetchError {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(to_fetch_error)?;
        let bytes = response.bytes().map_err(to_fetch_error)?;

        debug!("Fetched {} bytes from {}", bytes.len(), url);
        String::from_utf8(bytes.to_vec()).map_err(|source| LoonError::DecodeError {
            url: url.to_string(),
            source,
        })
    }
}
