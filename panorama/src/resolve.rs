//! Image-resolution fallback policy.
//!
//! ARCHITECTURE
//! ============
//! A panorama URL may be same-origin, cross-origin without CORS headers, or
//! simply path-mismatched in local development. The resolver therefore works
//! through a strict cascade (direct image load with canvas re-encode,
//! credentialed fetch, opaque (no-cors) fetch, server-side static proxy)
//! and, when everything fails, hands back the original URL so the engine can
//! still try it. It never surfaces an error to the caller.
//!
//! The decisions live here, where they run natively under `cargo test`; the
//! `client` crate's `viewer::resolver` performs the actual browser I/O and
//! maps each outcome through these functions.

#[cfg(test)]
#[path = "resolve_test.rs"]
mod resolve_test;

use url::Url;

/// Usable image reference produced by the resolver.
///
/// `ObjectUrl` is a transient object reference: exclusively owned by the
/// viewer controller that requested the resolution, and revoked exactly once
/// when that controller unmounts or replaces it. The resolver itself never
/// tracks or releases handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedImage {
    /// Base64 data URL from the off-screen canvas re-encode.
    DataUrl(String),
    /// `blob:` object URL wrapping a fetched body.
    ObjectUrl(String),
    /// The source URL verbatim, the last-resort value; it may still fail
    /// downstream.
    Original(String),
}

impl ResolvedImage {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::DataUrl(s) | Self::ObjectUrl(s) | Self::Original(s) => s,
        }
    }

    /// Whether the owner must revoke this handle on teardown.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ObjectUrl(_))
    }

    #[must_use]
    pub fn is_original(&self) -> bool {
        matches!(self, Self::Original(_))
    }
}

/// One fetch-based fallback strategy, in cascade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStrategy {
    /// Plain fetch of the absolute URL with credentials included.
    CredentialedFetch,
    /// `no-cors` fetch tolerating an opaque response.
    OpaqueFetch,
    /// Same-origin request through the static asset proxy.
    ServerProxy,
}

/// A concrete attempt: which strategy, against which URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAttempt {
    pub strategy: FallbackStrategy,
    pub url: String,
}

/// Ordered fetch attempts made after the image-element load fails.
#[must_use]
pub fn fallback_plan(src: &str, page_url: &str) -> Vec<FallbackAttempt> {
    let abs = absolute_url(src, page_url);
    vec![
        FallbackAttempt { strategy: FallbackStrategy::CredentialedFetch, url: abs.clone() },
        FallbackAttempt { strategy: FallbackStrategy::OpaqueFetch, url: abs },
        FallbackAttempt { strategy: FallbackStrategy::ServerProxy, url: proxy_url(src) },
    ]
}

/// Result when every strategy failed: the original source, verbatim.
#[must_use]
pub fn exhausted(src: &str) -> ResolvedImage {
    ResolvedImage::Original(src.to_owned())
}

/// Resolve `src` against the page URL; falls back to `src` unchanged when
/// either side does not parse (data URLs and friends).
#[must_use]
pub fn absolute_url(src: &str, page_url: &str) -> String {
    match Url::parse(page_url).and_then(|base| base.join(src)) {
        Ok(abs) => abs.to_string(),
        Err(_) => src.to_owned(),
    }
}

/// Static-proxy request URL for a relative source path.
#[must_use]
pub fn proxy_url(src: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(src.as_bytes()).collect();
    format!("/api/static-proxy?path={encoded}")
}

/// Content-type check for prefetched bodies: only `image/*` payloads are
/// wrapped as object URLs; anything else falls through to the loader.
#[must_use]
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type.trim_start().to_ascii_lowercase().starts_with("image/")
}

/// Whether a fetched body may be used.
///
/// Opaque (no-cors) responses always report a failure-like status even when
/// bytes arrived, so "body obtained without throwing" counts as success for
/// them; there is no better signal available for an opaque response.
#[must_use]
pub fn accept_body(status_ok: bool, opaque: bool) -> bool {
    status_ok || opaque
}

/// Whether the engine should load the resolved image with
/// `crossOrigin = "anonymous"`.
///
/// Same-origin images must NOT get the attribute: it forces a CORS-style
/// fetch that fails when the server sends no CORS headers. Data and blob
/// URLs never need it.
#[must_use]
pub fn needs_cross_origin(resolved: &str, page_url: &str) -> bool {
    if resolved.starts_with("data:") || resolved.starts_with("blob:") {
        return false;
    }
    let Ok(base) = Url::parse(page_url) else {
        return false;
    };
    match base.join(resolved) {
        Ok(abs) => abs.origin() != base.origin(),
        Err(_) => false,
    }
}

/// Whether the acquisition pipeline should make one final attempt through
/// the server proxy after the loader settled.
///
/// Only an untouched original URL warrants the retry: a data URL or object
/// URL is already usable, so a retry can never orphan a transient handle.
#[must_use]
pub fn should_retry_via_proxy(resolved: &ResolvedImage, src: &str) -> bool {
    resolved.is_original() && resolved.as_str() == src
}

/// Outcome of the direct image-element load + canvas export step.
///
/// Canvas export throwing means the canvas was tainted by a cross-origin
/// image; the original URL is still usable by the engine, so that case
/// degrades rather than failing.
#[must_use]
pub fn after_canvas_export(src: &str, export: Result<String, ()>) -> ResolvedImage {
    match export {
        Ok(data_url) => ResolvedImage::DataUrl(data_url),
        Err(()) => ResolvedImage::Original(src.to_owned()),
    }
}
