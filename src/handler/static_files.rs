//! Static file serving module
//!
//! Maps a request path onto the static directory and answers with the
//! file, an index page, a directory listing, a redirect or an error.

use std::fs::Metadata;
use std::io;
use std::path::Path;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use super::listing;
use super::path;
use super::router::RequestContext;
use crate::http::cache::{self, Precondition};
use crate::http::response::{self, FileHeaders};
use crate::http::{self, mime, RangeOutcome};
use crate::resolver::StaticDir;

/// Serve the request path from `static_dir`
pub async fn serve(
    ctx: &RequestContext<'_>,
    static_dir: &StaticDir,
    index_file: &str,
) -> Response<Full<Bytes>> {
    // Dot segments and doubled slashes are sent to the cleaned path first
    let canonical = path::canonical(ctx.path);
    if canonical != ctx.path {
        return redirect(ctx, &path::encode(&canonical));
    }

    let cleaned = path::clean(ctx.path);
    let Some(fs_path) = path::to_fs_path(static_dir.path(), &cleaned) else {
        return http::build_404_response();
    };

    let metadata = match fs::metadata(&fs_path).await {
        Ok(m) => m,
        Err(e) => return error_response(&e),
    };

    if metadata.is_dir() {
        if !ctx.path.ends_with('/') {
            let base = urlencoding::encode(path::base_name(ctx.path));
            return redirect(ctx, &format!("{base}/"));
        }

        let index_path = fs_path.join(index_file);
        return match fs::metadata(&index_path).await {
            Ok(index_meta) if index_meta.is_file() => {
                serve_file(ctx, &index_path, &index_meta).await
            }
            _ => serve_listing(ctx, &fs_path, &metadata).await,
        };
    }

    if ctx.path.ends_with('/') {
        let base = match path::base_name(ctx.path) {
            "/" | "." => String::new(),
            name => urlencoding::encode(name).into_owned(),
        };
        return redirect(ctx, &format!("../{base}"));
    }

    serve_file(ctx, &fs_path, &metadata).await
}

async fn serve_file(
    ctx: &RequestContext<'_>,
    file_path: &Path,
    metadata: &Metadata,
) -> Response<Full<Bytes>> {
    let modified = cache::last_modified(metadata.modified().ok());
    let last_modified = modified.as_ref().map(cache::http_date);

    match cache::evaluate(&ctx.conditions, modified) {
        Precondition::NotModified => return http::build_304_response(last_modified.as_deref()),
        Precondition::Failed => return http::build_412_response(),
        Precondition::Proceed => {}
    }

    let content = match fs::read(file_path).await {
        Ok(c) => Bytes::from(c),
        Err(e) => return error_response(&e),
    };

    let headers = FileHeaders {
        content_type: mime::content_type(file_path, &content),
        last_modified: last_modified.as_deref(),
    };
    let total_size = u64::try_from(content.len()).unwrap_or(u64::MAX);

    let range_header = if cache::range_allowed(&ctx.conditions, modified) {
        ctx.range
    } else {
        None
    };

    match http::parse_range(range_header, total_size) {
        RangeOutcome::Partial(range) => {
            let (Ok(start), Ok(end)) = (usize::try_from(range.start), usize::try_from(range.end))
            else {
                return http::build_500_response();
            };
            response::build_partial_response(
                content.slice(start..=end),
                headers,
                range,
                total_size,
                ctx.is_head,
            )
        }
        RangeOutcome::Unsatisfiable => http::build_416_response(total_size),
        RangeOutcome::Full => response::build_file_response(content, headers, ctx.is_head),
    }
}

async fn serve_listing(
    ctx: &RequestContext<'_>,
    dir: &Path,
    metadata: &Metadata,
) -> Response<Full<Bytes>> {
    let modified = cache::last_modified(metadata.modified().ok());
    let last_modified = modified.as_ref().map(cache::http_date);

    match cache::evaluate(&ctx.conditions, modified) {
        Precondition::NotModified => return http::build_304_response(last_modified.as_deref()),
        Precondition::Failed => return http::build_412_response(),
        Precondition::Proceed => {}
    }

    match listing::render(dir).await {
        Ok(html) => response::build_html_response(html, last_modified.as_deref(), ctx.is_head),
        Err(e) => error_response(&e),
    }
}

/// Redirect that keeps the query string
fn redirect(ctx: &RequestContext<'_>, target: &str) -> Response<Full<Bytes>> {
    match ctx.query {
        Some(query) if !query.is_empty() => {
            http::build_redirect_response(&format!("{target}?{query}"))
        }
        _ => http::build_redirect_response(target),
    }
}

fn error_response(err: &io::Error) -> Response<Full<Bytes>> {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => http::build_404_response(),
        io::ErrorKind::PermissionDenied => http::build_403_response(),
        _ => http::build_500_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        let status = |kind: io::ErrorKind| error_response(&io::Error::from(kind)).status();
        assert_eq!(status(io::ErrorKind::NotFound), 404);
        assert_eq!(status(io::ErrorKind::NotADirectory), 404);
        assert_eq!(status(io::ErrorKind::PermissionDenied), 403);
        assert_eq!(status(io::ErrorKind::Other), 500);
    }
}
