use std::process::{Command, ExitStatus, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Runs a prepared command to completion and returns its exit code.
///
/// Stdout and stderr are inherited; stdin is whatever the caller wired onto
/// the command (inherited, or a spooled file in filter mode). The returned
/// code is the child's own status so the wrapper exits indistinguishably
/// from a direct invocation; on Unix a signal death maps to `128 + signal`.
///
/// # Errors
///
/// Returns an error if the command cannot be spawned or waited on.
pub fn execute_command(mut command: Command) -> Result<i32> {
    let program = command.get_program().to_string_lossy().into_owned();

    let command = command.stdout(Stdio::inherit()).stderr(Stdio::inherit());

    info!("Executing `{program}`");

    let status = command
        .spawn()
        .map_err(|original| Error::launch_error(program, original))?
        .wait()
        .map_err(Error::SubProcess)?;

    Ok(exit_code(&status))
}

fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
