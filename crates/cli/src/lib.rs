//! Percent Run CLI Library
//!
//! This crate provides the command-line interface for percent-run. It
//! handles argument parsing and the decode-before-dispatch pipeline that
//! the `prun` binary drives.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`dispatch`]: Mode selection, argument/stdin decoding, preview and
//!   subprocess launch
//!
//! # Examples
//!
//! The CLI binary (`prun`) can be used in several ways:
//!
//! ```bash
//! # Decode arguments, then run the target
//! prun echo "hello%20world"
//!
//! # Preview without executing
//! prun --dry-run echo "arg1%20space" "arg2"
//!
//! # Decode stdin to stdout
//! printf 'line1%%20one\n' | prun --filter
//!
//! # Decode stdin and arguments, feed both to the target
//! printf 'a%%20b\n' | prun --filter grep "a%20b"
//! ```

pub mod cli_args;
pub mod dispatch;
