//! main.rs
//! Entry point for askfile

use askfile::config::Config;
use askfile::core::terminal;
use askfile::utils::cli::handle_args;
use askfile::utils::logging::init_tracing;
use askfile::utils::{expand_home_path, is_browsable_directory};
use askfile::{Error, select_path_in};

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    std::panic::set_hook(Box::new(|info| {
        let _ = terminal::restore_cursor(&mut std::io::stdout());
        eprintln!("\n[askfile] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let opts = match handle_args() {
        Ok(Some(opts)) => opts,
        Ok(None) => return ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Try --help for available options");
            return ExitCode::FAILURE;
        }
    };

    let config = Config::load();
    if let Err(e) = init_tracing(config.general().log_file()) {
        eprintln!("[askfile] Warning: cannot open log file: {}", e);
    }

    let start = match &opts.start {
        Some(arg) => {
            let target = expand_home_path(arg);
            if !is_browsable_directory(&target) {
                eprintln!("[askfile] Error: Path '{}' cannot be opened.", arg);
                return ExitCode::FAILURE;
            }
            target
        }
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("[askfile] Error: {}", Error::from(e));
                return ExitCode::FAILURE;
            }
        },
    };

    match select_path_in(&config, opts.mode, opts.filter, start) {
        Ok(Some(path)) => match print_selection(&mut io::stdout().lock(), &path, opts.raw) {
            Ok(()) => ExitCode::SUCCESS,
            // the reader went away, e.g. `askfile --raw | head -c0`
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("[askfile] Error: {}", Error::from(e));
                ExitCode::FAILURE
            }
        },
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "selection failed");
            eprintln!("\n[askfile] Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_selection<W: Write>(out: &mut W, path: &Path, raw: bool) -> io::Result<()> {
    if raw {
        writeln!(out, "{}", path.display())?;
    } else {
        writeln!(out, "\nselected path: {}", path.display())?;
    }
    out.flush()
}
