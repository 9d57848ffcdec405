use super::*;

const PAGE: &str = "https://mirai.example.com/Maps";

// --- ResolvedImage ---

#[test]
fn resolved_image_as_str() {
    assert_eq!(ResolvedImage::DataUrl("data:x".into()).as_str(), "data:x");
    assert_eq!(ResolvedImage::ObjectUrl("blob:y".into()).as_str(), "blob:y");
    assert_eq!(ResolvedImage::Original("/z.jpg".into()).as_str(), "/z.jpg");
}

#[test]
fn only_object_urls_are_transient() {
    assert!(ResolvedImage::ObjectUrl("blob:y".into()).is_transient());
    assert!(!ResolvedImage::DataUrl("data:x".into()).is_transient());
    assert!(!ResolvedImage::Original("/z.jpg".into()).is_transient());
}

#[test]
fn exhausted_returns_source_verbatim() {
    let resolved = exhausted("/missing.jpg");
    assert!(resolved.is_original());
    assert_eq!(resolved.as_str(), "/missing.jpg");
}

// --- fallback_plan ---

#[test]
fn fallback_plan_order_is_fixed() {
    let plan = fallback_plan("/200m.jpg", PAGE);
    let strategies: Vec<_> = plan.iter().map(|a| a.strategy).collect();
    assert_eq!(
        strategies,
        vec![
            FallbackStrategy::CredentialedFetch,
            FallbackStrategy::OpaqueFetch,
            FallbackStrategy::ServerProxy,
        ]
    );
}

#[test]
fn fallback_plan_fetches_absolute_url() {
    let plan = fallback_plan("/200m.jpg", PAGE);
    assert_eq!(plan[0].url, "https://mirai.example.com/200m.jpg");
    assert_eq!(plan[1].url, plan[0].url);
}

#[test]
fn fallback_plan_proxy_targets_original_path() {
    let plan = fallback_plan("/200m.jpg", PAGE);
    assert_eq!(plan[2].url, "/api/static-proxy?path=%2F200m.jpg");
}

// --- absolute_url ---

#[test]
fn absolute_url_resolves_relative_paths() {
    assert_eq!(absolute_url("/a/b.jpg", PAGE), "https://mirai.example.com/a/b.jpg");
}

#[test]
fn absolute_url_passes_through_absolute() {
    assert_eq!(
        absolute_url("https://cdn.example.net/p.jpg", PAGE),
        "https://cdn.example.net/p.jpg"
    );
}

#[test]
fn absolute_url_falls_back_on_unparsable_base() {
    assert_eq!(absolute_url("/a.jpg", "not a url"), "/a.jpg");
}

// --- proxy_url ---

#[test]
fn proxy_url_percent_encodes_path() {
    assert_eq!(proxy_url("/images/360.jpg"), "/api/static-proxy?path=%2Fimages%2F360.jpg");
}

#[test]
fn proxy_url_encodes_query_unsafe_characters() {
    assert_eq!(proxy_url("/a&b=c.jpg"), "/api/static-proxy?path=%2Fa%26b%3Dc.jpg");
}

// --- content type / acceptance ---

#[test]
fn image_content_types_accepted() {
    assert!(is_image_content_type("image/jpeg"));
    assert!(is_image_content_type("image/png; charset=binary"));
    assert!(is_image_content_type(" IMAGE/WEBP"));
}

#[test]
fn non_image_content_types_rejected() {
    assert!(!is_image_content_type("text/html"));
    assert!(!is_image_content_type("application/octet-stream"));
    assert!(!is_image_content_type(""));
}

#[test]
fn accept_body_requires_ok_or_opaque() {
    assert!(accept_body(true, false));
    assert!(accept_body(false, true));
    assert!(accept_body(true, true));
    assert!(!accept_body(false, false));
}

// --- cross-origin decision ---

#[test]
fn same_origin_never_sets_cross_origin() {
    assert!(!needs_cross_origin("/200m.jpg", PAGE));
    assert!(!needs_cross_origin("https://mirai.example.com/200m.jpg", PAGE));
}

#[test]
fn cross_origin_hosts_set_anonymous() {
    assert!(needs_cross_origin("https://cdn.example.net/p.jpg", PAGE));
}

#[test]
fn data_and_blob_urls_never_set_cross_origin() {
    assert!(!needs_cross_origin("data:image/jpeg;base64,AAAA", PAGE));
    assert!(!needs_cross_origin("blob:https://mirai.example.com/u-u-i-d", PAGE));
}

// --- proxy retry decision ---

#[test]
fn exhausted_original_triggers_proxy_retry() {
    let resolved = exhausted("/200m.jpg");
    assert!(should_retry_via_proxy(&resolved, "/200m.jpg"));
}

#[test]
fn usable_results_never_retry() {
    // A retry after either of these could orphan the handle already made.
    let data = ResolvedImage::DataUrl("data:image/jpeg;base64,QQ==".into());
    let object = ResolvedImage::ObjectUrl("blob:https://m/u".into());
    assert!(!should_retry_via_proxy(&data, "/200m.jpg"));
    assert!(!should_retry_via_proxy(&object, "/200m.jpg"));
}

#[test]
fn rewritten_original_does_not_retry() {
    let resolved = ResolvedImage::Original("https://cdn.example.net/p.jpg".into());
    assert!(!should_retry_via_proxy(&resolved, "/200m.jpg"));
}

// --- canvas export step ---

#[test]
fn canvas_export_success_yields_data_url() {
    let resolved = after_canvas_export("/200m.jpg", Ok("data:image/jpeg;base64,QQ==".into()));
    assert_eq!(resolved, ResolvedImage::DataUrl("data:image/jpeg;base64,QQ==".into()));
}

#[test]
fn tainted_canvas_falls_back_to_original() {
    let resolved = after_canvas_export("/200m.jpg", Err(()));
    assert_eq!(resolved, ResolvedImage::Original("/200m.jpg".into()));
}
