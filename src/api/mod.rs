// Client for the remote color service and its wire types.
pub mod client;
pub mod response;

pub use client::{
    ColorApiClient, DEFAULT_BASE_URL, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_SCHEME_KIND,
    DEFAULT_STATUS_TIMEOUT,
};
pub use response::UNKNOWN_COLOR_NAME;
