//! Shared utilities for CPCDP crates.
//!
//! This crate provides the logging setup used by hosts embedding the
//! validation engine, plus the redaction helpers the engine uses so that
//! clinical values never reach log output by accident.

pub mod logging;

pub use logging::{
    LogConfig, LogFormat, LoggingError, REDACTED_VALUE, init_logging, init_logging_with_writer,
    log_data_enabled, redact_value, set_log_data,
};
