//! Browser driver for the image-resolution cascade.
//!
//! The decisions (strategy order, acceptance rules, URL construction) live
//! in `panorama::resolve` where they are unit-tested natively; this module
//! performs the DOM and network I/O and maps every outcome through that
//! policy. Both entry points always settle with a usable value; no error
//! escapes to the caller.

use panorama::resolve::{self, FallbackStrategy, ResolvedImage};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, RequestCredentials,
    RequestInit, RequestMode, Response,
};

/// Acquire the panorama image the way the viewer wants it: prefetch the
/// bytes directly when possible (static assets sometimes fail when handed
/// to the engine by URL), otherwise run the full loader cascade.
///
/// At most one transient object URL survives this call; intermediate
/// failures never create one.
pub async fn acquire_panorama(src: &str) -> ResolvedImage {
    let page = page_url();
    let abs = resolve::absolute_url(src, &page);

    let mut resolved = match fetch(&abs, FetchMode::Credentialed).await {
        Ok(resp) if resp.ok() => {
            let content_type = header(&resp, "content-type");
            if resolve::is_image_content_type(&content_type) {
                match object_url_from_response(&resp).await {
                    Ok(url) => {
                        log::debug!("prefetched panorama as object URL {url}");
                        ResolvedImage::ObjectUrl(url)
                    }
                    Err(_) => load_image_as_data_url(src).await,
                }
            } else {
                log::debug!("panorama prefetch returned non-image content-type {content_type}");
                load_image_as_data_url(src).await
            }
        }
        Ok(resp) => {
            log::debug!("panorama prefetch response not ok: {}", resp.status());
            load_image_as_data_url(src).await
        }
        Err(_) => {
            // Network-level failure; try the same-origin proxy before the
            // generic loader.
            log::debug!("panorama prefetch failed, attempting server proxy");
            match fetch_object_url(&resolve::proxy_url(src)).await {
                Some(url) => ResolvedImage::ObjectUrl(url),
                None => load_image_as_data_url(src).await,
            }
        }
    };

    // The loader handing back the original URL means every strategy it
    // tried failed; give the proxy one explicit chance before the engine
    // receives a URL that may redirect-loop on the dev server.
    if resolve::should_retry_via_proxy(&resolved, src) {
        if let Some(url) = fetch_object_url(&resolve::proxy_url(src)).await {
            log::debug!("replaced original URL with proxy object URL {url}");
            resolved = ResolvedImage::ObjectUrl(url);
        }
    }

    resolved
}

/// The loader cascade: image element → canvas re-encode, then the fetch
/// fallback plan, then the original URL verbatim. Never rejects.
pub async fn load_image_as_data_url(src: &str) -> ResolvedImage {
    let page = page_url();

    if let Ok(img) = HtmlImageElement::new() {
        // Same-origin images must not get crossOrigin: it forces a CORS
        // fetch that fails without CORS headers.
        if resolve::needs_cross_origin(src, &page) {
            img.set_cross_origin(Some("anonymous"));
        }
        if await_image_load(&img, src).await {
            return resolve::after_canvas_export(src, canvas_export(&img));
        }
        log::warn!("image element failed to load {src}");
    }

    for attempt in resolve::fallback_plan(src, &page) {
        let mode = match attempt.strategy {
            FallbackStrategy::OpaqueFetch => FetchMode::NoCors,
            FallbackStrategy::CredentialedFetch | FallbackStrategy::ServerProxy => {
                FetchMode::Credentialed
            }
        };
        match fetch(&attempt.url, mode).await {
            Ok(resp) => {
                let opaque = resp.type_() == web_sys::ResponseType::Opaque;
                if !resolve::accept_body(resp.ok(), opaque) {
                    log::debug!("{:?} against {} returned {}", attempt.strategy, attempt.url, resp.status());
                    continue;
                }
                if let Ok(url) = object_url_from_response(&resp).await {
                    log::debug!("{:?} produced object URL {url}", attempt.strategy);
                    return ResolvedImage::ObjectUrl(url);
                }
            }
            Err(err) => {
                log::debug!("{:?} against {} failed: {err:?}", attempt.strategy, attempt.url);
            }
        }
    }

    log::warn!("all fallbacks exhausted for {src}, returning original URL");
    resolve::exhausted(src)
}

#[derive(Debug, Clone, Copy)]
enum FetchMode {
    Credentialed,
    NoCors,
}

async fn fetch(url: &str, mode: FetchMode) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let init = RequestInit::new();
    init.set_credentials(RequestCredentials::Include);
    if matches!(mode, FetchMode::NoCors) {
        init.set_mode(RequestMode::NoCors);
    }
    let value = JsFuture::from(window.fetch_with_str_and_init(url, &init)).await?;
    value.dyn_into::<Response>()
}

/// Credentialed fetch that yields an object URL only for a 2xx body.
async fn fetch_object_url(url: &str) -> Option<String> {
    match fetch(url, FetchMode::Credentialed).await {
        Ok(resp) if resp.ok() => object_url_from_response(&resp).await.ok(),
        Ok(resp) => {
            log::debug!("fetch of {url} returned {}", resp.status());
            None
        }
        Err(err) => {
            log::debug!("fetch of {url} failed: {err:?}");
            None
        }
    }
}

async fn object_url_from_response(resp: &Response) -> Result<String, JsValue> {
    let blob = JsFuture::from(resp.blob()?).await?;
    let blob: Blob = blob.dyn_into()?;
    web_sys::Url::create_object_url_with_blob(&blob)
}

/// Release a transient object URL. Owned by the viewer controller; called
/// exactly once per handle on unmount or replacement.
pub fn release_object_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}

async fn await_image_load(img: &HtmlImageElement, src: &str) -> bool {
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(src);
    let loaded = JsFuture::from(promise).await.is_ok();
    img.set_onload(None);
    img.set_onerror(None);
    loaded
}

/// Draw the loaded image to an off-screen canvas and export as JPEG. A
/// cross-origin image taints the canvas and makes the export throw, which
/// the policy maps back to the original URL.
fn canvas_export(img: &HtmlImageElement) -> Result<String, ()> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(())?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| ())?
        .dyn_into()
        .map_err(|_| ())?;
    canvas.set_width(img.natural_width());
    canvas.set_height(img.natural_height());

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .ok_or(())?
        .dyn_into()
        .map_err(|_| ())?;
    context
        .draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|_| ())?;

    canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &JsValue::from_f64(0.95))
        .map_err(|_| ())
}

fn header(resp: &Response, name: &str) -> String {
    resp.headers().get(name).ok().flatten().unwrap_or_default()
}

fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_else(|| "http://localhost/".to_owned())
}
