//! Page location (`window.location`) passed explicitly to the URL builders.

use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("invalid origin {origin:?}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: url::ParseError,
    },
    #[error("origin {0:?} has no host")]
    MissingHost(String),
    /// No browser window or location is reachable (web builds only).
    #[error("window.location unavailable: {0}")]
    Unavailable(String),
}

/// Protocol and host of the page the client runs on.
///
/// Field values follow the browser's `Location` API: `protocol` keeps the
/// trailing colon (`"https:"`) and `host` carries the port if it is not the
/// scheme's default (`"localhost:8000"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub protocol: String,
    pub host: String,
}

impl Location {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Builds a location from an origin or any absolute URL, e.g. `https://example.com:8443/x`.
    pub fn parse(origin: &str) -> Result<Self, LocationError> {
        let parsed = url::Url::parse(origin).map_err(|source| LocationError::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let host = parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| LocationError::MissingHost(origin.to_string()))?;
        let host = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self {
            protocol: format!("{}:", parsed.scheme()),
            host,
        })
    }

    /// Reads the current page location from the browser.
    #[cfg(all(feature = "web", target_arch = "wasm32"))]
    pub fn from_window() -> Result<Self, LocationError> {
        let window = web_sys::window()
            .ok_or_else(|| LocationError::Unavailable("no global window".to_string()))?;
        let location = window.location();
        let protocol = location
            .protocol()
            .map_err(|e| LocationError::Unavailable(format!("{e:?}")))?;
        let host = location
            .host()
            .map_err(|e| LocationError::Unavailable(format!("{e:?}")))?;
        Ok(Self { protocol, host })
    }

    /// Protocol without the trailing colon.
    pub fn scheme(&self) -> &str {
        self.protocol.strip_suffix(':').unwrap_or(&self.protocol)
    }

    pub fn is_secure(&self) -> bool {
        self.protocol == "https:"
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme(), self.host)
    }
}
