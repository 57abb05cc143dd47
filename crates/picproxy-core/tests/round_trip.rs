//! Integration test: every built proxy URL parses back to its target.
//!
//! Covers the public API only: builder, codec, and `ProxyRequest::parse`.

use picproxy_core::codec::{encode_base64_url_text, encode_uri_component};
use picproxy_core::proxy_url::{with_origin, PROXY_ENDPOINT};
use picproxy_core::{build_proxy_url, proxy_picture, EncodingScheme, ProxyRequest};

fn targets() -> Vec<String> {
    let mut targets: Vec<String> = [
        "",
        "https://example.com/a.png",
        "https://example.com/a b.png",
        "https://example.com/img?w=100&h=200#frag",
        "https://user:pa ss@example.com:8080/p/a/t/h.jpg?q=a+b%20c",
        "//cdn.example.com/relative.webp",
        "not a url at all",
        "!'()*~-._",
        "ünïcödé/路径/画像.png",
        "emoji 🦀.gif",
        "%41%zz%",
        "type=encodeBase64URL&url=x",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    // Every printable ASCII character once, plus a few controls.
    targets.push((0x20u8..0x7f).map(char::from).collect());
    targets.push("\t\n\r\u{0}".to_string());
    targets
}

#[test]
fn percent_prefix_and_payload() {
    for s in targets() {
        let out = build_proxy_url(&s, EncodingScheme::PercentEncoding);
        let expected = format!(
            "/api/proxy/img.png?type=encodeURIComponent&url={}",
            encode_uri_component(&s)
        );
        assert_eq!(out, expected, "target {s:?}");
        assert_eq!(proxy_picture(&s), out, "default scheme for {s:?}");
    }
}

#[test]
fn base64_prefix_and_payload() {
    for s in targets() {
        let out = build_proxy_url(&s, EncodingScheme::Base64UrlEncoding);
        let payload = out
            .strip_prefix("/api/proxy/img.png?type=encodeBase64URL&url=")
            .unwrap_or_else(|| panic!("bad prefix for {s:?}: {out}"));
        assert_eq!(payload, encode_base64_url_text(&s));
        assert!(
            payload
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
            "unsafe base64url output for {s:?}: {payload}"
        );
    }
}

#[test]
fn parse_reverses_build_for_both_schemes() {
    for scheme in EncodingScheme::ALL {
        for s in targets() {
            let built = build_proxy_url(&s, scheme);
            let parsed = ProxyRequest::parse(&built)
                .unwrap_or_else(|e| panic!("parse {built}: {e}"));
            assert_eq!(parsed, ProxyRequest::new(s.clone(), scheme));

            let absolute = with_origin("http://localhost:3000/", &built);
            assert_eq!(ProxyRequest::parse(&absolute).unwrap().target, s);
        }
    }
}

#[test]
fn percent_output_has_no_raw_reserved_characters() {
    for s in targets() {
        let out = proxy_picture(&s);
        let query = out.strip_prefix(PROXY_ENDPOINT).unwrap();
        let value = query.split_once("&url=").unwrap().1;
        assert!(
            value
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)),
            "unescaped byte in {value}"
        );
    }
}
