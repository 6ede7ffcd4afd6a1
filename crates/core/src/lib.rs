//! Percent Run Core Library
//!
//! This crate provides the core functionality for percent-run, a
//! command-line wrapper that percent-decodes its arguments (and optionally
//! standard input) before handing them to a target executable. It exists so
//! that callers (automated agents in particular) can pass arguments
//! containing shell metacharacters or newlines without fighting shell
//! quoting.
//!
//! # Key Features
//!
//! - **Percent Decoding**: Total, byte-level decoder; malformed escapes pass
//!   through literally instead of failing
//! - **Stdin Filtering**: Line-by-line decoding of standard input, either
//!   streamed to stdout or spooled for a subprocess
//! - **Process Execution**: Spawn-and-wait with full exit-status propagation
//! - **Error Handling**: Error types for the usage and launch failure modes
//!
//! # Examples
//!
//! Decoding a single argument:
//!
//! ```
//! use percent_run_core::decode::decode;
//!
//! assert_eq!(decode(b"hello%20world"), b"hello world".to_vec());
//! assert_eq!(decode(b"100%"), b"100%".to_vec());
//! ```

pub mod decode;
pub mod error;
pub mod execution;
pub mod filter;
