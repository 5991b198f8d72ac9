//! Search source implementations.

pub mod http;

pub use http::HttpVideoSearch;
