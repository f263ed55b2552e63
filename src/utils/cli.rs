//! Command-line argument parsing and help for askfile.
//!
//! This module handles all CLI flag parsing: selection mode, extension filter,
//! start directory, output style and config initialization.
//!
//! When invoked with no args (askfile), a file is selected starting in the current directory.

use crate::config::Config;
use crate::core::{ExtensionFilter, SelectionMode};

/// Options for an interactive run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: SelectionMode,
    pub filter: Option<ExtensionFilter>,
    pub start: Option<String>,
    pub raw: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            mode: SelectionMode::File,
            filter: None,
            start: None,
            raw: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(RunOptions),
    Help,
    Version,
    Init,
}

/// Parses the arguments after the program name.
/// # Returns
/// The action to take, or a message describing the first bad argument.
pub fn parse_args<I, S>(args: I) -> Result<CliAction, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut opts = RunOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" | "--version" => return Ok(CliAction::Version),
            "--init" => return Ok(CliAction::Init),
            "-d" | "--dir" => opts.mode = SelectionMode::Directory,
            "-f" | "--file" => opts.mode = SelectionMode::File,
            "--raw" => opts.raw = true,
            "-e" | "--ext" => {
                let list = args
                    .next()
                    .ok_or_else(|| format!("{} expects a comma separated list", arg))?;
                opts.filter = Some(ExtensionFilter::parse(list.as_ref()));
            }
            a if a.starts_with("--ext=") => {
                opts.filter = Some(ExtensionFilter::parse(&a["--ext=".len()..]));
            }
            a if a.starts_with('-') && a.len() > 1 => {
                return Err(format!("Unknown argument: {}", a));
            }
            a if !a.trim().is_empty() => {
                if opts.start.is_some() {
                    return Err("askfile accepts only one PATH".to_string());
                }
                opts.start = Some(a.to_string());
            }
            _ => {}
        }
    }

    if opts.filter.as_ref().is_some_and(ExtensionFilter::is_empty) {
        opts.filter = None;
    }
    Ok(CliAction::Run(opts))
}

/// Parses `std::env::args` and handles the informational actions directly.
/// # Returns
/// `Some(options)` if the selector should run.
pub fn handle_args() -> Result<Option<RunOptions>, String> {
    match parse_args(std::env::args().skip(1))? {
        CliAction::Run(opts) => Ok(Some(opts)),
        CliAction::Help => {
            print_help();
            Ok(None)
        }
        CliAction::Version => {
            print_version();
            Ok(None)
        }
        CliAction::Init => {
            let path = Config::default_path();
            Config::generate_default(&path).map_err(|e| e.to_string())?;
            println!("Default config generated at {:?}", path);
            Ok(None)
        }
    }
}

fn print_version() {
    println!("askfile {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"askfile - pick a file or directory from the terminal

USAGE:
  askfile [OPTIONS] [PATH]

PATH:
  Directory to start in (defaults to the current directory)

OPTIONS:
  -d, --dir               Select a directory instead of a file
  -f, --file              Select a file (default)
  -e, --ext <LIST>        Only list files with these extensions, e.g. "py,txt"
      --raw               Print only the selected path
      --init              Generate the default configuration
  -h, --help              Print help information
  -v, --version           Display the current installed version of askfile

COMMANDS (at the prompt):
  <index> | <name>        Open a directory or pick a file
  . | ..                  Stay here / go to the parent directory
  :sel <index or name>    Select a directory (also ":sel ." and ":sel ..")
  :: <name>               Use <name> literally, even if it looks like a command
  :q, :quit, :exit        Quit without selecting

ENVIRONMENT:
  ASKFILE_CONFIG          Override the default config path
  ASKFILE_LOG             Write logs to this file
  RUST_LOG                Log filter (default "askfile=info")
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> RunOptions {
        match parse_args(args) {
            Ok(CliAction::Run(opts)) => opts,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn defaults_to_file_mode() {
        assert_eq!(run(&[]), RunOptions::default());
    }

    #[test]
    fn mode_filter_and_path() {
        let opts = run(&["-d", "--ext", "py,txt", "~/src", "--raw"]);
        assert_eq!(opts.mode, SelectionMode::Directory);
        assert_eq!(opts.filter, Some(ExtensionFilter::parse("txt,py")));
        assert_eq!(opts.start.as_deref(), Some("~/src"));
        assert!(opts.raw);

        let opts = run(&["--ext=CSV"]);
        assert!(opts.filter.is_some_and(|f| f.contains("csv")));
        assert!(run(&["--ext="]).filter.is_none());
    }

    #[test]
    fn informational_flags() {
        assert_eq!(parse_args(["--help"]), Ok(CliAction::Help));
        assert_eq!(parse_args(["-v"]), Ok(CliAction::Version));
        assert_eq!(parse_args(["--init"]), Ok(CliAction::Init));
    }

    #[test]
    fn bad_arguments() {
        assert!(parse_args(["--bogus"]).is_err());
        assert!(parse_args(["--ext"]).is_err());
        assert!(parse_args(["a", "b"]).is_err());
    }
}
