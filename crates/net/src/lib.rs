//! Blocking page fetch.

mod content_type;

use std::io::Read;
use std::sync::Arc;
use std::time::{Duration, Instant};

use url::Url;

pub use crate::content_type::is_html;

pub const DEFAULT_USER_AGENT: &str = concat!("tagstats/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_BYTES: usize = 16 * 1024 * 1024;

#[derive(Clone, Debug)]
pub struct FetchConfig {
    /// Overall request timeout, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
    /// Bodies longer than this are cut off and flagged as truncated.
    pub max_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FetchedPage {
    pub url: String,           // final URL after redirects
    pub requested_url: String, // what we asked for
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
    pub bytes: usize,
    pub truncated: bool,
    pub duration_ms: u128,
}

impl FetchedPage {
    pub fn is_html(&self) -> bool {
        is_html(self.content_type.as_deref())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme {scheme:?} in {url} (expected http or https)")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("TLS setup failed for {url}")]
    Tls {
        url: String,
        #[source]
        source: rustls::Error,
    },
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },
    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("failed reading response body from {url}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::UnsupportedScheme { url, .. }
            | FetchError::Tls { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }
}

/// GETs `url` and returns its body as (lossy) UTF-8 text.
///
/// Redirects are followed. Any final status outside `200..300` is an error.
pub fn fetch_text(url: &str, config: &FetchConfig) -> Result<FetchedPage, FetchError> {
    let start = Instant::now();
    let requested_url = url.to_string();

    let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: requested_url.clone(),
        source,
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme {
            url: requested_url,
            scheme: parsed.scheme().to_string(),
        });
    }

    let mut builder = ureq::AgentBuilder::new()
        .timeout(config.timeout)
        .user_agent(&config.user_agent);
    if parsed.scheme() == "https" {
        let tls = tls_config().map_err(|source| FetchError::Tls {
            url: requested_url.clone(),
            source,
        })?;
        builder = builder.tls_config(tls);
    }
    let agent = builder.build();

    log::info!(target: "net", "GET {parsed}");
    let response = match agent.request_url("GET", &parsed).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(status, response)) => {
            return Err(FetchError::Status {
                url: response.get_url().to_string(),
                status,
            });
        }
        Err(ureq::Error::Transport(transport)) => {
            return Err(FetchError::Transport {
                url: requested_url,
                source: Box::new(transport),
            });
        }
    };

    let status = response.status();
    let final_url = response.get_url().to_string();
    if !(200..300).contains(&status) {
        return Err(FetchError::Status {
            url: final_url,
            status,
        });
    }
    let content_type = response.header("content-type").map(str::to_string);

    // One byte past the limit tells a body of exactly `max_bytes` apart from a longer one.
    let limit = (config.max_bytes as u64).saturating_add(1);
    let mut buf = Vec::new();
    response
        .into_reader()
        .take(limit)
        .read_to_end(&mut buf)
        .map_err(|source| FetchError::Body {
            url: final_url.clone(),
            source,
        })?;
    let truncated = buf.len() > config.max_bytes;
    if truncated {
        buf.truncate(config.max_bytes);
        log::warn!(
            target: "net",
            "body of {final_url} exceeds {} bytes; truncating",
            config.max_bytes
        );
    }

    let body = String::from_utf8_lossy(&buf).into_owned();
    let page = FetchedPage {
        url: final_url,
        requested_url,
        status,
        content_type,
        body,
        bytes: buf.len(),
        truncated,
        duration_ms: start.elapsed().as_millis(),
    };
    log::info!(
        target: "net",
        "{} {} ({} bytes, {:?}) in {} ms",
        page.status,
        page.url,
        page.bytes,
        page.content_type,
        page.duration_ms
    );
    Ok(page)
}

fn tls_config() -> Result<Arc<rustls::ClientConfig>, rustls::Error> {
    let mut roots = rustls::RootCertStore::empty();
    let native = rustls_native_certs::load_native_certs();
    for err in &native.errors {
        log::warn!(target: "net", "skipping native root certificate: {err}");
    }
    let (added, ignored) = roots.add_parsable_certificates(native.certs);
    log::debug!(target: "net", "loaded {added} native root certificates ({ignored} ignored)");

    let config = rustls::ClientConfig::builder_with_provider(Arc::new(
        rustls::crypto::ring::default_provider(),
    ))
    .with_safe_default_protocol_versions()?
    .with_root_certificates(roots)
    .with_no_client_auth();
    Ok(Arc::new(config))
}
