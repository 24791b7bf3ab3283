//! HTTP download of calendar feeds and the optional planner logo.

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::thread;
use std::time::Duration;

/// Raw GET with a size cap. Split out so fetch policy can be tested offline.
#[cfg_attr(test, mockall::automock)]
pub trait Transport {
    fn get(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>>;
}

/// `Transport` backed by a blocking reqwest client.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &str, max_bytes: usize) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .context("Network error during fetch")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Fetch failed with HTTP status {}", status));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > max_bytes {
                return Err(anyhow!(
                    "Response too large ({} bytes > {} bytes)",
                    content_length,
                    max_bytes
                ));
            }
        }

        let bytes = response.bytes().context("Failed to read response body")?;

        if bytes.len() > max_bytes {
            return Err(anyhow!(
                "Response too large ({} bytes > {} bytes)",
                bytes.len(),
                max_bytes
            ));
        }

        Ok(bytes.to_vec())
    }
}

pub struct HttpFetcher {
    transport: Box<dyn Transport>,
    max_response_bytes: usize,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(20))?;
        Ok(Self::with_transport(Box::new(transport)))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            max_response_bytes: 5 * 1024 * 1024,
            max_retries: 2,
            retry_delay_ms: 400,
        }
    }

    /// Download a feed and check that it looks like iCalendar text.
    pub fn fetch_ics(&self, url: &str) -> Result<String> {
        let bytes = self.fetch_with_retries(url)?;
        let content = String::from_utf8(bytes).context("ICS response is not valid UTF-8")?;

        if !(content.contains("BEGIN:VCALENDAR") || content.contains("BEGIN:VEVENT")) {
            return Err(anyhow!("Response does not appear to be valid ICS content"));
        }

        Ok(content)
    }

    /// Download logo bytes. Any failure is logged and yields `None`; a
    /// missing logo never stops a render.
    pub fn fetch_logo(&self, url: &str) -> Option<Vec<u8>> {
        match self.fetch_with_retries(url) {
            Ok(bytes) if bytes.is_empty() => {
                log::warn!("Logo at {} is empty; rendering without it", Self::redact_url(url));
                None
            }
            Ok(bytes) => Some(bytes),
            Err(err) => {
                log::warn!("Logo download failed, rendering without it: {:#}", err);
                None
            }
        }
    }

    fn fetch_with_retries(&self, url: &str) -> Result<Vec<u8>> {
        let url = url.trim();
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(anyhow!("URL must use http or https"));
        }

        let redacted = Self::redact_url(url);
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.transport.get(url, self.max_response_bytes) {
                Ok(bytes) => return Ok(bytes),
                Err(err) => {
                    let is_last_attempt = attempt == self.max_retries;
                    if is_last_attempt {
                        last_error = Some(err.context(format!(
                            "Failed to fetch {} after {} attempts",
                            redacted,
                            attempt + 1
                        )));
                    } else {
                        log::warn!("Fetch attempt {} failed for {}: {}", attempt + 1, redacted, err);
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown fetch error")))
    }

    /// Feed URLs often embed private tokens; keep only scheme and host.
    pub fn redact_url(url: &str) -> String {
        if let Some(index) = url.find("/calendar/ical/") {
            let prefix_end = index + "/calendar/ical/".len();
            return format!("{}***redacted***", &url[..prefix_end]);
        }

        if let Some(scheme_end) = url.find("://") {
            let rest = &url[scheme_end + 3..];
            let host_end = rest.find('/').unwrap_or(rest.len());
            return format!("{}/***redacted***", &url[..scheme_end + 3 + host_end]);
        }

        "***redacted-url***".to_string()
    }

    #[cfg(test)]
    fn without_retry_delay(mut self) -> Self {
        self.retry_delay_ms = 0;
        self
    }
}
