//! HTTP transport for the configuration endpoint

pub mod transport;

pub use transport::HttpConfigTransport;
