//! confmask driver: configuration, file I/O, logging, and exit codes.
//!
//! The masking logic lives in `cm-redact`; this crate feeds it lines from
//! disk and writes the result back out. The file layer is deliberately
//! thin: one buffered reader, one truncated-then-appended writer, strict
//! input order.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod run;

pub use config::RunConfig;
pub use error::{CoreError, Result};
pub use exit_codes::ExitCode;
pub use run::{obfuscate_file, RunSummary};
