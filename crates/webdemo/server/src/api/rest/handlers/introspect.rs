//! Request introspection handler

use crate::api::rest::state::AppState;
use axum::{
    body::Bytes,
    extract::{ConnectInfo, OriginalUri, State},
    http::{header, HeaderMap, Method, Uri, Version},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use webdemo_types::RequestInfo;

/// Describe the incoming request: URL, method, headers, cookies, body, peer
#[allow(clippy::too_many_arguments)]
pub async fn request_parameters(
    State(state): State<AppState>,
    method: Method,
    version: Version,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    jar: CookieJar,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    body: Bytes,
) -> Json<RequestInfo> {
    let request_url = request_url(&uri, &headers);
    tracing::info!(
        method = %method,
        url = %request_url,
        query = uri.query().unwrap_or(""),
        "Request parameters requested"
    );

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    Json(RequestInfo {
        id: state.identity.id.clone(),
        request_url,
        query: uri.query().map(str::to_string),
        // Bodies in other charsets are reported lossily rather than rejected
        body: String::from_utf8_lossy(&body).into_owned(),
        character_encoding: content_type.as_deref().and_then(charset),
        method: method.to_string(),
        cookies: cookie_map(&jar),
        content_type,
        headers: header_map(&headers),
        protocol: format!("{:?}", version),
        remote_info: connect_info
            .map(|ConnectInfo(addr)| addr.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    })
}

/// Scheme, host and path of the request, without the query
fn request_url(uri: &Uri, headers: &HeaderMap) -> String {
    let host = uri
        .authority()
        .map(|authority| authority.as_str().to_string())
        .or_else(|| {
            headers
                .get(header::HOST)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "localhost".to_string());
    let scheme = uri.scheme_str().unwrap_or("http");

    format!("{}://{}{}", scheme, host, uri.path())
}

/// `charset` parameter of a content type, if present
fn charset(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_string())
    })
}

fn cookie_map(jar: &CookieJar) -> BTreeMap<String, String> {
    jar.iter()
        .map(|cookie| {
            let key = match cookie.domain() {
                Some(domain) => format!("{}:{}", domain, cookie.name()),
                None => cookie.name().to_string(),
            };
            (key, cookie.stripped().to_string())
        })
        .collect()
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    headers
        .keys()
        .map(|name| {
            let values = headers
                .get_all(name)
                .iter()
                .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
                .collect();
            (name.as_str().to_string(), values)
        })
        .collect()
}
