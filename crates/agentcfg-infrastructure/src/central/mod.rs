//! Central configuration synchronization
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`ResponseParser`] | Turns one endpoint response into a delta and a wait interval |
//! | [`ConfigStore`] | Holds the current snapshot and runs update hooks |
//! | [`CentralConfigFetcher`] | Polls the endpoint until cancelled |
//! | [`FetchError`] | Classified failure of one poll |

pub mod cache_control;
pub mod error;
pub mod fetcher;
pub mod parser;
pub mod store;

pub use error::FetchError;
pub use fetcher::{CentralConfigFetcher, FetcherState};
pub use parser::{ParsedResponse, ResponseParser};
pub use store::ConfigStore;
