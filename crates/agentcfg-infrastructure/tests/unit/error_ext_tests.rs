//! Error Extension Tests

use agentcfg_domain::error::{Error, Result};
use agentcfg_infrastructure::error_ext::ErrorContext;
use std::io;

#[test]
fn test_io_context() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");

    if let Err(Error::Io { source, message }) = result {
        assert!(message.contains("failed to read file"));
        assert!(message.contains("file not found"));
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_network_context() {
    let result: Result<()> = Err(io::Error::other("reset")).network_context("request failed");
    assert!(matches!(result, Err(Error::Network { .. })));
}

#[test]
fn test_lazy_context_only_on_error() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context must not be built on success") })
        .unwrap();
    assert_eq!(value, 1);

    let err: std::result::Result<u8, io::Error> = Err(io::Error::other("boom"));
    match err.with_context(|| "loading") {
        Err(Error::Infrastructure { message, .. }) => assert_eq!(message, "loading: boom"),
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}
