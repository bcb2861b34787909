//! Data transfer objects for the HTTP debug surface.

pub mod http;
