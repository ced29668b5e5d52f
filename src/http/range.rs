//! HTTP Range request parsing module
//!
//! Single `bytes` ranges per RFC 9110 §14. Multi-range requests are served
//! as a full response; any other malformed header is not satisfiable.

/// Inclusive byte range resolved against the file size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub const fn length(&self) -> u64 {
        self.end - self.start + 1
    }

    /// `Content-Range` header value for a file of `size` bytes
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{size}", self.start, self.end)
    }
}

/// Range header parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No Range header, or several ranges: send the whole file
    Full,
    Partial(ByteRange),
    /// 416 Range Not Satisfiable
    Unsatisfiable,
}

/// Parse a `Range` header against a file of `size` bytes
///
/// # Examples
/// ```
/// use dev_server::http::range::{parse_range, ByteRange, RangeOutcome};
///
/// assert_eq!(
///     parse_range(Some("bytes=0-99"), 1000),
///     RangeOutcome::Partial(ByteRange { start: 0, end: 99 })
/// );
/// assert_eq!(parse_range(None, 1000), RangeOutcome::Full);
/// ```
pub fn parse_range(header: Option<&str>, size: u64) -> RangeOutcome {
    let Some(header) = header.map(str::trim).filter(|h| !h.is_empty()) else {
        return RangeOutcome::Full;
    };
    let Some(spec) = header.strip_prefix("bytes=") else {
        return RangeOutcome::Unsatisfiable;
    };

    if spec.contains(',') {
        return RangeOutcome::Full;
    }

    let Some((first, last)) = spec.split_once('-') else {
        return RangeOutcome::Unsatisfiable;
    };
    let (first, last) = (first.trim(), last.trim());

    if first.is_empty() {
        suffix_range(last, size)
    } else {
        bounded_range(first, last, size)
    }
}

// "-500": the final 500 bytes
fn suffix_range(suffix: &str, size: u64) -> RangeOutcome {
    let Ok(suffix) = suffix.parse::<u64>() else {
        return RangeOutcome::Unsatisfiable;
    };

    if suffix == 0 || size == 0 {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Partial(ByteRange {
        start: size.saturating_sub(suffix),
        end: size - 1,
    })
}

// "100-" or "100-199"
fn bounded_range(first: &str, last: &str, size: u64) -> RangeOutcome {
    let Ok(start) = first.parse::<u64>() else {
        return RangeOutcome::Unsatisfiable;
    };

    if start >= size {
        return RangeOutcome::Unsatisfiable;
    }

    let end = if last.is_empty() {
        size - 1
    } else {
        let Ok(end) = last.parse::<u64>() else {
            return RangeOutcome::Unsatisfiable;
        };
        if end < start {
            return RangeOutcome::Unsatisfiable;
        }
        end.min(size - 1)
    };

    RangeOutcome::Partial(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_range() {
        assert_eq!(parse_range(None, 100), RangeOutcome::Full);
        assert_eq!(parse_range(Some(""), 100), RangeOutcome::Full);
    }

    #[test]
    fn test_bounded_range() {
        let RangeOutcome::Partial(range) = parse_range(Some("bytes=0-9"), 100) else {
            panic!("Expected Partial");
        };
        assert_eq!(range, ByteRange { start: 0, end: 9 });
        assert_eq!(range.length(), 10);
        assert_eq!(range.content_range(100), "bytes 0-9/100");
    }

    #[test]
    fn test_open_range_and_clamping() {
        assert_eq!(
            parse_range(Some("bytes=50-"), 100),
            RangeOutcome::Partial(ByteRange { start: 50, end: 99 })
        );
        assert_eq!(
            parse_range(Some("bytes=90-500"), 100),
            RangeOutcome::Partial(ByteRange { start: 90, end: 99 })
        );
    }

    #[test]
    fn test_suffix_range() {
        assert_eq!(
            parse_range(Some("bytes=-20"), 100),
            RangeOutcome::Partial(ByteRange { start: 80, end: 99 })
        );
        assert_eq!(
            parse_range(Some("bytes=-500"), 100),
            RangeOutcome::Partial(ByteRange { start: 0, end: 99 })
        );
        assert_eq!(parse_range(Some("bytes=-0"), 100), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_not_satisfiable() {
        assert_eq!(parse_range(Some("bytes=200-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=0-"), 0), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=-5"), 0), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_malformed_is_not_satisfiable() {
        assert_eq!(parse_range(Some("bytes=a-b"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=9-2"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("bytes=5"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(parse_range(Some("items=0-9"), 100), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_multi_range_sends_full_body() {
        assert_eq!(parse_range(Some("bytes=0-9,20-29"), 100), RangeOutcome::Full);
    }
}
