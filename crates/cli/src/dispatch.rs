//! Decode-before-dispatch pipeline.
//!
//! Takes the parsed [`Args`] and either streams decoded stdin to stdout,
//! prints a preview of the decoded command, or launches the target
//! executable with decoded arguments (and, in filter mode, decoded stdin).

use std::ffi::OsString;
use std::io;
use std::process::{Command, Stdio};

use log::{debug, info};
use percent_run_core::decode::decode_os;
use percent_run_core::error::{Error, Result};
use percent_run_core::{execution, filter};

use crate::cli_args::Args;

/// Runs the pipeline described by `args` and returns the exit code the
/// wrapper should adopt.
///
/// Mode priority, highest first: filter passthrough (stdin to stdout, no
/// executable), preview, execution. Each positional argument is decoded
/// exactly once as a whole; the executable name is never decoded.
///
/// # Errors
///
/// Returns an error if no executable was given outside filter mode, if
/// stdin cannot be read or spooled, or if the executable cannot be
/// launched. Malformed percent-escapes are not errors.
pub fn run(args: &Args) -> Result<i32> {
    if args.filter && args.executable.is_none() {
        debug!("Filter mode without an executable: decoding stdin to stdout");
        let stdin = io::stdin();
        let stdout = io::stdout();
        filter::decode_lines(&mut stdin.lock(), &mut stdout.lock())?;
        return Ok(0);
    }

    let Some(executable) = args.executable.as_deref() else {
        return Err(Error::MissingExecutable);
    };

    let decoded_arguments = decode_arguments(&args.arguments);
    debug!(
        "Decoded {} argument(s) for `{executable}`",
        decoded_arguments.len()
    );

    if args.dry_run {
        info!("Dry run requested, printing instead of executing");
        print!("{}", render_preview(executable, &decoded_arguments));
        return Ok(0);
    }

    let mut command = Command::new(executable);
    command.args(&decoded_arguments);

    if args.filter {
        let stdin = io::stdin();
        let spool = filter::spool_decoded(&mut stdin.lock())?;
        command.stdin(Stdio::from(spool));
    } else {
        command.stdin(Stdio::inherit());
    }

    execution::execute_command(command)
}

/// Decodes each raw argument once, in order.
pub fn decode_arguments(arguments: &[String]) -> Vec<OsString> {
    arguments
        .iter()
        .map(|argument| decode_os(argument))
        .collect()
}

/// Renders the preview block: the executable, then each decoded argument
/// quoted on its own 1-indexed line.
pub fn render_preview(executable: &str, arguments: &[OsString]) -> String {
    let mut preview = format!("Command: {executable}\n");

    for (index, argument) in arguments.iter().enumerate() {
        preview.push_str(&format!(
            "Arg {}: '{}'\n",
            index + 1,
            argument.to_string_lossy()
        ));
    }

    preview
}
