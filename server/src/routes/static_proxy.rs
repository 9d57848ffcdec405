//! Same-origin static asset proxy.
//!
//! `GET /api/static-proxy?path=/images/360.jpg` returns the file's bytes
//! from the configured asset root with a content type derived from the
//! extension. The panorama resolver uses this as its same-origin fallback
//! when a direct image load or cross-origin fetch fails.
//!
//! The path must be site-relative (leading `/`), and lexical `..`
//! traversal can never escape the asset root.

#[cfg(test)]
#[path = "static_proxy_test.rs"]
mod static_proxy_test;

use std::path::{Component, Path, PathBuf};

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub path: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("missing path")]
    MissingPath,
    #[error("only relative paths allowed")]
    NotRelative,
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingPath | Self::NotRelative => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// `GET /api/static-proxy?path=<relative path>`: stream a public asset.
pub async fn static_proxy(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<impl IntoResponse, ProxyError> {
    let path = query.path.ok_or(ProxyError::MissingPath)?;
    if !path.starts_with('/') {
        return Err(ProxyError::NotRelative);
    }

    // Escaping the asset root is answered like any other absent file.
    let file = resolve_under_root(&state.asset_root, &path).ok_or(ProxyError::NotFound)?;

    let bytes = tokio::fs::read(&file).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::IsADirectory => ProxyError::NotFound,
        _ => ProxyError::Internal(e.to_string()),
    })?;

    tracing::debug!(path = %file.display(), len = bytes.len(), "proxied asset");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type_for(&file)),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        bytes,
    ))
}

/// Content type from the file extension; unknown extensions are generic
/// binary.
fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Lexically resolve a site-relative request path under `root`.
///
/// `.` segments are dropped and `..` pops within the request path only; a
/// `..` at the top would escape the root and yields `None`. No filesystem
/// access happens here.
fn resolve_under_root(root: &Path, request: &str) -> Option<PathBuf> {
    let mut resolved = PathBuf::new();
    let mut depth: usize = 0;
    for component in Path::new(request.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return None;
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if depth == 0 {
        return None;
    }
    Some(root.join(resolved))
}
