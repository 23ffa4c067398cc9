//! Structured logging facility for HeroDex
//!
//! - Single initialization point via `init(profile)`
//! - Structured lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The repository layer (`herodex-engine`) owns lifecycle logging. Store and
//! core code only emit `tracing::debug!` details beneath it.
//!
//! # Usage
//!
//! ```rust
//! use herodex_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
