//! Raw request functions and payload types for each upstream service.
//!
//! Everything in here speaks the upstream's own JSON shape. The conversion
//! into [`crate::entities`] happens in `services`.

pub mod backend;
pub mod billboard;
pub mod google_search;
pub mod spotify;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{TransportFailure, UpstreamError, is_error_payload, normalize};
use crate::ports::http::UpstreamHttp;

/// Resolve `path` against a configured base URL.
///
/// `path` is always appended below the base, even when the base was built
/// in code without a trailing `/`.
pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, UpstreamError> {
    let joined = if base.path().ends_with('/') {
        base.join(path)
    } else {
        let mut base = base.clone();
        let slashed = format!("{}/", base.path());
        base.set_path(&slashed);
        base.join(path)
    };
    joined.map_err(|e| {
        tracing::warn!(%base, path, error = %e, "Failed to build upstream URL");
        UpstreamError::fallback()
    })
}

/// Encode a caller-supplied value for use as a single path segment.
///
/// Empty and dot-only values are refused: `join` would resolve them as
/// relative segments and address a different endpoint.
pub(crate) fn segment(value: &str) -> Result<String, UpstreamError> {
    if matches!(value, "" | "." | "..") {
        tracing::warn!(value, "Refusing identifier that is not a path segment");
        return Err(UpstreamError::new(format!("Invalid identifier: \"{}\"", value)));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// Issue one `GET` and decode the body into `T`.
///
/// This is the single point where raw failures become [`UpstreamError`]:
/// transport errors, non-success statuses, error payloads returned with a
/// success status and bodies that do not match `T`.
pub(crate) async fn fetch<T: DeserializeOwned>(
    http: &dyn UpstreamHttp,
    url: &Url,
    service: &'static str,
) -> Result<T, UpstreamError> {
    tracing::debug!(%url, service, "Requesting upstream");

    let body = match http.get_json(url).await {
        Ok(body) => body,
        Err(failure) => {
            tracing::warn!(%url, service, %failure, "Upstream request failed");
            return Err(normalize(failure));
        }
    };

    if is_error_payload(&body) {
        tracing::warn!(%url, service, %body, "Upstream returned an error payload");
        return Err(normalize(TransportFailure::Status {
            status: 200,
            body: Some(body),
        }));
    }

    serde_json::from_value(body).map_err(|e| {
        tracing::warn!(%url, service, error = %e, "Failed to decode upstream response");
        UpstreamError::malformed(service)
    })
}
