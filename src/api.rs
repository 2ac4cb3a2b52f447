//! Synchronous client for the **OnAir company API (v1)**.
//!
//! This module covers the `company/{id}/{resource}` endpoints and returns
//! results as the typed collections in [`crate::models`]. Every endpoint
//! wraps its payload in the same envelope (`{"Content": ...}`), so all three
//! operations share one generic fetch-and-double-decode helper.
//!
//! ### Notes
//! - Authentication is a single `oa-apikey` header carrying the key verbatim.
//! - There are no retries and no pagination; each call is one GET.
//! - Network timeouts use a sane default (30s) and can be adjusted by
//!   constructing the client with your own transport via [`Client::with_http`].
//!
//! Typical usage:
//! ```no_run
//! # use onair_va::Client;
//! let client = Client::new("my-api-key")?;
//! let flights = client.flights("my-company-id")?;
//! # Ok::<(), onair_va::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::models::{CashFlow, Envelope, Flight, Notification};
use log::{debug, warn};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Production API host; override with [`Client::with_base_url`] in tests.
pub const BASE_URL: &str = "https://server1.onair.company/api/v1/";

/// Name of the credential header expected by the service.
pub const API_KEY_HEADER: &str = "oa-apikey";

/// Fixed client identity sent as `User-Agent` on every request.
pub const DEFAULT_USER_AGENT: &str = concat!("onair_va/", env!("CARGO_PKG_VERSION"));

// Allow -, _, . unescaped in company ids (the service uses GUID-like ids)
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Client bound to one base address and one API key.
///
/// Holds only immutable configuration; the same client can be shared for any
/// number of sequential calls.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    user_agent: String,
    http: HttpClient,
}

impl Client {
    /// Build a client with a default transport (30s total timeout, 10s
    /// connect timeout, capped redirects).
    ///
    /// ### Errors
    /// - `Config` if the API key is empty
    /// - `Transport` if the underlying HTTP client cannot be constructed
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .build()?;
        Self::with_http(http, api_key)
    }

    /// Build a client around a caller-supplied transport.
    pub fn with_http(http: HttpClient, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".into()));
        }
        Ok(Self {
            base_url: BASE_URL.to_string(),
            api_key,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http,
        })
    }

    /// Point the client at a different base address (e.g., a local test
    /// server). A trailing slash is added if missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Fetch the company's notifications, in the order the server sends them.
    pub fn notifications(&self, company_id: &str) -> Result<Vec<Notification>> {
        self.fetch(company_id, "notifications")
    }

    /// Fetch the company's flights. In-progress flights have no `end_time`.
    pub fn flights(&self, company_id: &str) -> Result<Vec<Flight>> {
        self.fetch(company_id, "flights")
    }

    /// Fetch the company's cash-flow report.
    pub fn cash_flow(&self, company_id: &str) -> Result<CashFlow> {
        self.fetch(company_id, "cashflow")
    }

    /// One GET against `company/{id}/{resource}`, decoded through the shared
    /// envelope into `T`.
    fn fetch<T: DeserializeOwned>(&self, company_id: &str, resource: &'static str) -> Result<T> {
        let company_id = company_id.trim();
        if company_id.is_empty() {
            return Err(Error::Config("company id must not be empty".into()));
        }

        let url = format!(
            "{}company/{}/{}",
            self.base_url,
            percent_encoding::utf8_percent_encode(company_id, SAFE),
            resource
        );
        debug!("GET {url}");

        let resp = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()?;

        let status = resp.status();
        let body = resp.text()?;
        if !status.is_success() {
            warn!("GET {url} failed with HTTP {status}");
            return Err(Error::Status {
                status,
                body: snippet(&body),
            });
        }

        decode_body(&body, resource)
    }
}

/// The double decode used by every operation: the body is first read as the
/// generic envelope, then its `Content` is re-decoded into the target type.
///
/// Public so offline tests can drive the exact decode path the client uses.
pub fn decode_body<T: DeserializeOwned>(body: &str, resource: &'static str) -> Result<T> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|source| Error::Envelope {
        source,
        body: body.to_string(),
    })?;
    serde_json::from_str(envelope.content.get()).map_err(|source| Error::Payload {
        resource,
        source,
        body: body.to_string(),
    })
}

// Status-error bodies are logged, so cap them; decode errors keep the full
// body instead.
fn snippet(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &body[..end])
    }
}
