use thiserror::Error;

/// Failures talking to the image CDN or the geocoding service.
///
/// All variants surface as 503 `service_unavailable`; details are logged only.
#[derive(Error, Debug)]
pub enum IntegrationError {
    /// CDN credentials are not configured on this deployment.
    #[error("Image uploads are not configured")]
    CdnNotConfigured,

    /// Upstream answered with a non-success status.
    #[error("{service} responded with status {status}: {body}")]
    UpstreamStatus {
        service: &'static str,
        status: u16,
        body: String,
    },

    /// Transport failure or unreadable response body.
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Configured base URL cannot be combined into a request URL.
    #[error("{service} endpoint is invalid: {reason}")]
    InvalidEndpoint {
        service: &'static str,
        reason: String,
    },

    /// Upstream returned a payload missing the fields we need.
    #[error("{service} returned an unexpected payload: {reason}")]
    InvalidPayload {
        service: &'static str,
        reason: String,
    },
}
