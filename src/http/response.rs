//! HTTP response building module
//!
//! Builders for the status codes the file server answers with.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::http::response::Builder;
use hyper::Response;

use super::range::ByteRange;

/// Headers shared by full and partial file responses
#[derive(Debug, Clone, Copy)]
pub struct FileHeaders<'a> {
    pub content_type: &'a str,
    pub last_modified: Option<&'a str>,
}

/// Build 200 OK response for a file
pub fn build_file_response(
    data: Bytes,
    headers: FileHeaders<'_>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { data };

    file_builder(200, headers)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 206 Partial Content response; `data` holds only the range bytes
pub fn build_partial_response(
    data: Bytes,
    headers: FileHeaders<'_>,
    range: ByteRange,
    total_size: u64,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let body = if is_head { Bytes::new() } else { data };

    file_builder(206, headers)
        .header("Content-Length", range.length())
        .header("Content-Range", range.content_range(total_size))
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("206", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build generic HTML response, used for directory listings
pub fn build_html_response(
    content: String,
    last_modified: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length);
    if let Some(date) = last_modified {
        builder = builder.header("Last-Modified", date);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("HTML", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 304 Not Modified response
pub fn build_304_response(last_modified: Option<&str>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(304);
    if let Some(date) = last_modified {
        builder = builder.header("Last-Modified", date);
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("304", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 301 redirect to a path relative to the request URL
pub fn build_redirect_response(location: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", location)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 400 Bad Request response
pub fn build_400_response() -> Response<Full<Bytes>> {
    build_text_response(400, "400 Bad Request")
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    build_text_response(403, "403 Forbidden")
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_text_response(404, "404 page not found")
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut response = build_text_response(405, "405 method not allowed");
    response
        .headers_mut()
        .insert("Allow", hyper::header::HeaderValue::from_static("GET, HEAD"));
    response
}

/// Build 412 Precondition Failed response
pub fn build_412_response() -> Response<Full<Bytes>> {
    build_text_response(412, "412 Precondition Failed")
}

/// Build 416 Range Not Satisfiable response
pub fn build_416_response(file_size: u64) -> Response<Full<Bytes>> {
    let mut response = build_text_response(416, "416 Requested Range Not Satisfiable");
    if let Ok(value) = hyper::header::HeaderValue::from_str(&format!("bytes */{file_size}")) {
        response.headers_mut().insert("Content-Range", value);
    }
    response
}

/// Build 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_text_response(500, "500 Internal Server Error")
}

fn build_text_response(status: u16, message: &'static str) -> Response<Full<Bytes>> {
    let body = format!("{message}\n");
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("X-Content-Type-Options", "nosniff")
        .header("Content-Length", body.len())
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(message, &e);
            Response::new(Full::new(Bytes::from(message)))
        })
}

fn file_builder(status: u16, headers: FileHeaders<'_>) -> Builder {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", headers.content_type)
        .header("Accept-Ranges", "bytes");
    if let Some(date) = headers.last_modified {
        builder = builder.header("Last-Modified", date);
    }
    builder
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    const HEADERS: FileHeaders<'static> = FileHeaders {
        content_type: "text/plain; charset=utf-8",
        last_modified: Some("Sun, 06 Nov 1994 08:49:37 GMT"),
    };

    async fn body_of(response: Response<Full<Bytes>>) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_file_response() {
        let response = build_file_response(Bytes::from_static(b"hi"), HEADERS, false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Length"], "2");
        assert_eq!(response.headers()["Accept-Ranges"], "bytes");
        assert_eq!(
            response.headers()["Last-Modified"],
            "Sun, 06 Nov 1994 08:49:37 GMT"
        );
        assert_eq!(body_of(response).await, "hi");
    }

    #[tokio::test]
    async fn test_head_keeps_length_drops_body() {
        let response = build_file_response(Bytes::from_static(b"hello"), HEADERS, true);
        assert_eq!(response.headers()["Content-Length"], "5");
        assert!(body_of(response).await.is_empty());
    }

    #[test]
    fn test_partial_response_headers() {
        let range = ByteRange { start: 2, end: 4 };
        let response =
            build_partial_response(Bytes::from_static(b"llo"), HEADERS, range, 10, false);
        assert_eq!(response.status(), 206);
        assert_eq!(response.headers()["Content-Length"], "3");
        assert_eq!(response.headers()["Content-Range"], "bytes 2-4/10");
    }

    #[tokio::test]
    async fn test_error_responses() {
        let response = build_404_response();
        assert_eq!(response.status(), 404);
        assert_eq!(body_of(response).await, "404 page not found\n");

        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers()["Allow"], "GET, HEAD");

        let response = build_416_response(42);
        assert_eq!(response.status(), 416);
        assert_eq!(response.headers()["Content-Range"], "bytes */42");
    }

    #[test]
    fn test_redirect_response() {
        let response = build_redirect_response("docs/");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers()["Location"], "docs/");
    }
}
