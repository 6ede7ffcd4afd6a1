//! Line-oriented decoding of standard input.
//!
//! Filter mode treats stdin as a sequence of byte lines terminated by a
//! line feed. Each line is decoded independently: the terminator is
//! stripped before decoding and re-appended after, so an escape can never
//! straddle a line boundary. A final line without a terminator is decoded
//! and written without one.

use std::fs::File;
use std::io::{BufRead, Seek, SeekFrom, Write};

use log::debug;

use crate::decode::decode;
use crate::error::Result;

/// Reads byte lines from `input` until EOF, decoding each one and writing
/// it to `output` in input order.
///
/// This is the filter-without-executable path: decoded passthrough, no
/// subprocess involved.
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
/// Decoding itself cannot fail.
pub fn decode_lines<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            return Ok(());
        }

        let terminated = line.last() == Some(&b'\n');
        if terminated {
            line.pop();
        }

        output.write_all(&decode(&line))?;
        if terminated {
            output.write_all(b"\n")?;
        }
    }
}

/// Decodes all of `input` into an anonymous temporary file and returns it,
/// rewound, for use as a subprocess's standard input.
///
/// The stream is fully materialized before the caller launches anything, so
/// the subprocess never races the decoder. The spool file is unlinked the
/// moment it is created: the operating system reclaims it on every exit
/// path, including abnormal termination.
///
/// # Errors
///
/// Returns an error if reading `input` or writing the spool file fails.
pub fn spool_decoded<R: BufRead>(input: &mut R) -> Result<File> {
    let mut spool = tempfile::tempfile()?;

    decode_lines(input, &mut spool)?;

    let spooled_bytes = spool.stream_position()?;
    debug!("Spooled {spooled_bytes} decoded byte(s) for subprocess stdin");

    spool.seek(SeekFrom::Start(0))?;
    Ok(spool)
}
