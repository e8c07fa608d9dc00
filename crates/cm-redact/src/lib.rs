//! Secret masking core for confmask.
//!
//! This crate is a single-pass, line-by-line filter over configuration
//! files. It recognizes a fixed set of secret-bearing line shapes, isolates
//! the secret substring, and replaces it with a partially revealed mask
//! while leaving every other byte of the line untouched.
//!
//! # Key Properties
//!
//! - **Closed pattern set**: only the known key names and delimiters are
//!   recognized; this is not a general secret scanner.
//! - **Pass-through by default**: any line that does not match, or matches
//!   but yields no extractable secret, is emitted unchanged. Per-line
//!   misses are never errors.
//! - **Exact substring bookkeeping**: matching is case-insensitive, but
//!   substitution replaces the first exact-case occurrence only, so
//!   everything outside the secret span is byte-identical to the input.
//!
//! # Example
//!
//! ```
//! use cm_redact::{MaskPolicy, Pipeline};
//!
//! let pipeline = Pipeline::new(MaskPolicy::default());
//! let line = pipeline.process_line("ClientSecret: abcdefghijklmno");
//! assert_eq!(line.output, "ClientSecret: abcde...klmno");
//! assert!(line.was_masked);
//! ```

pub mod error;
pub mod extract;
pub mod mask;
pub mod pattern;
pub mod pipeline;
pub mod policy;

pub use error::{RedactError, Result};
pub use extract::extract;
pub use mask::{Masker, MASK_SEPARATOR};
pub use pattern::{classify, PatternKind};
pub use pipeline::{MaskedLine, Pipeline};
pub use policy::{MaskPolicy, POLICY_SCHEMA_VERSION};
