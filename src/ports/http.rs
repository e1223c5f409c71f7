use serde_json::Value;
use url::Url;

use crate::error::TransportFailure;

/// Port trait for the outbound HTTP calls made against upstream services.
///
/// Implementations live in `services::http` (production) or test mocks.
/// Implementations report failures in their raw shape; turning them into an
/// [`crate::UpstreamError`] is done once, by the caller, through
/// [`crate::error::normalize`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UpstreamHttp: Send + Sync {
    /// `GET` the URL and decode the body as JSON.
    ///
    /// Any non-2xx status must be reported as [`TransportFailure::Status`].
    async fn get_json(&self, url: &Url) -> Result<Value, TransportFailure>;
}
