//! Blocking HTTP transport.
use super::Headers;
use std::time::Duration;

/// Error surfaced when a request never produced an HTTP response.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Canonical reason phrase for `status` (`Not Found` for 404), not the
    /// phrase the server sent; empty for codes without one.
    pub reason: String,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// `"<code> <reason>"`, e.g. `404 Not Found`.
    pub fn status_line(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs a single GET. Non-2xx statuses are responses, not errors.
pub trait Transport {
    fn get(&self, url: &str, headers: &Headers) -> Result<RawResponse, TransportError>;
}

/// `ureq` agent configured with a global timeout.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();
        Self {
            agent: config.into(),
        }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str, headers: &Headers) -> Result<RawResponse, TransportError> {
        let mut request = self.agent.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }
        let mut response = request.call()?;
        let status = response.status();
        let body = response.body_mut().read_to_vec()?;
        Ok(RawResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RawResponse;

    fn response(status: u16, reason: &str) -> RawResponse {
        RawResponse {
            status,
            reason: reason.to_string(),
            body: Vec::new(),
        }
    }

    #[test]
    fn status_line_joins_code_and_reason() {
        assert_eq!(response(404, "Not Found").status_line(), "404 Not Found");
        assert_eq!(response(599, "").status_line(), "599");
    }

    #[test]
    fn only_200_counts_as_ok() {
        assert!(response(200, "OK").is_ok());
        assert!(!response(204, "No Content").is_ok());
    }
}
