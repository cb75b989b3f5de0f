//! Configuration types module

pub mod app;
pub mod http;
pub mod logging;

pub use app::AppConfig;
pub use http::HttpClientConfig;
pub use logging::LoggingConfig;
