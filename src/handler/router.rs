//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, path
//! decoding and hand-off to static file serving.

use crate::config::AppState;
use crate::handler::{path, static_files};
use crate::http;
use crate::http::cache::Conditions;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::HeaderMap;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Percent-decoded request path, not yet cleaned
    pub path: &'a str,
    /// Raw query string, carried over on redirects
    pub query: Option<&'a str>,
    pub is_head: bool,
    pub conditions: Conditions<'a>,
    pub range: Option<&'a str>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // The body is never read
    let (parts, _) = req.into_parts();

    // 1. Check HTTP method
    if let Some(resp) = check_http_method(&parts.method) {
        return Ok(resp);
    }

    // 2. Decode path
    let Ok(decoded) = path::decode(parts.uri.path()) else {
        return Ok(http::build_400_response());
    };

    // 3. Extract validators and range
    let headers = &parts.headers;
    let ctx = RequestContext {
        path: &decoded,
        query: parts.uri.query(),
        is_head: parts.method == Method::HEAD,
        conditions: Conditions {
            if_modified_since: header_str(headers, "if-modified-since"),
            if_unmodified_since: header_str(headers, "if-unmodified-since"),
            has_if_none_match: headers.contains_key("if-none-match"),
            if_range: header_str(headers, "if-range"),
        },
        range: header_str(headers, "range"),
    };

    // 4. Serve
    let response =
        static_files::serve(&ctx, &state.static_dir, &state.config.assets.index_file).await;
    Ok(response)
}

/// Only GET and HEAD reach the file server
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => Some(http::build_405_response()),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
