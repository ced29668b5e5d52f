//! HTTP protocol layer module
//!
//! Content types, validators, byte ranges and response builders, kept apart
//! from the filesystem mapping in `handler`.

pub mod cache;
pub mod mime;
pub mod range;
pub mod response;

// Re-export commonly used types
pub use range::{parse_range, ByteRange, RangeOutcome};
pub use response::{
    build_304_response, build_400_response, build_403_response, build_404_response,
    build_405_response, build_412_response, build_416_response, build_500_response,
    build_redirect_response,
};
