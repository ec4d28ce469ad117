pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{normalize_asset_url, request_origin, strip_trailing_slash};
