//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure for the `prun`
//! binary using the `clap` crate. Parsing produces a single immutable value;
//! nothing downstream mutates flag state.

use clap::Parser;

/// Command-line arguments for the `prun` binary.
///
/// `prun` decodes percent-escapes in ARGS (and, with `--filter`, in each
/// line of standard input) and then runs EXECUTABLE with the decoded
/// values. Option-shaped tokens after EXECUTABLE are passed to it rather
/// than parsed here; put `--` before EXECUTABLE when its name or arguments
/// could be mistaken for `prun` options.
///
/// # Examples
///
/// ```bash
/// # Run `echo` with one decoded argument
/// prun echo "hello%20world"
///
/// # Show what would run without running it
/// prun --dry-run echo "arg1%20space" "arg2"
///
/// # Decode stdin to stdout, no subprocess
/// printf 'line%%20one\n' | prun --filter
///
/// # Decode stdin and feed it to a subprocess
/// printf 'a%%20b\n' | prun --filter wc -c
///
/// # Pass an executable whose name starts with `--`
/// prun -- --weird-binary-name
/// ```
#[derive(Parser, Debug)]
#[command(version, term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Also decode standard input, line by line.
    ///
    /// Without EXECUTABLE, the decoded lines are written to standard output
    /// and no subprocess runs. With EXECUTABLE, the fully decoded stream
    /// becomes the subprocess's standard input.
    #[arg(long, action)]
    pub filter: bool,

    /// Print the decoded command instead of executing it.
    ///
    /// Shows the executable and each decoded argument, one per line, then
    /// exits successfully without launching anything.
    #[arg(long, short = 'd', visible_alias = "preview", action)]
    pub dry_run: bool,

    /// The executable to run with decoded arguments.
    ///
    /// The name itself is not decoded. Prefix with `--` if it begins with a
    /// dash. May be omitted only in `--filter` mode.
    #[arg(num_args(1))]
    pub executable: Option<String>,

    /// Percent-encoded arguments for the executable.
    ///
    /// Each argument is decoded exactly once, independently of the others.
    /// Use `%20` for spaces; `+` is passed through as a literal plus.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub arguments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["prun"]);

        assert!(!args.filter);
        assert!(!args.dry_run);
        assert!(args.executable.is_none());
        assert!(args.arguments.is_empty());
    }

    #[test]
    fn test_args_executable_and_arguments() {
        let args = Args::parse_from(["prun", "echo", "hello%20world", "plain"]);

        assert_eq!(args.executable, Some("echo".to_string()));
        assert_eq!(args.arguments, vec!["hello%20world", "plain"]);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["prun", "--filter", "--dry-run", "cat"]);

        assert!(args.filter);
        assert!(args.dry_run);
        assert_eq!(args.executable, Some("cat".to_string()));
    }

    #[test]
    fn test_args_preview_is_an_alias_for_dry_run() {
        let args = Args::parse_from(["prun", "--preview", "echo"]);
        assert!(args.dry_run);

        let args = Args::parse_from(["prun", "-d", "echo"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_filter_without_executable() {
        let args = Args::parse_from(["prun", "--filter"]);

        assert!(args.filter);
        assert!(args.executable.is_none());
        assert!(args.arguments.is_empty());
    }

    #[test]
    fn test_args_trailing_arguments_keep_dashes() {
        // Tokens after the executable belong to it, even option-shaped ones.
        let args = Args::parse_from(["prun", "grep", "-v", "--line-number", "x%20y"]);

        assert_eq!(args.executable, Some("grep".to_string()));
        assert_eq!(args.arguments, vec!["-v", "--line-number", "x%20y"]);
    }

    #[test]
    fn test_args_double_dash_allows_dashed_executable() {
        let args = Args::parse_from(["prun", "--", "--weird-name", "arg"]);

        assert_eq!(args.executable, Some("--weird-name".to_string()));
        assert_eq!(args.arguments, vec!["arg"]);
    }

    #[test]
    fn test_args_unknown_option_is_rejected() {
        let result = Args::try_parse_from(["prun", "--bogus", "echo"]);
        assert!(result.is_err());
    }
}
