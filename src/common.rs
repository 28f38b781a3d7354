//! Harness shared by the problem binaries.
//!
//! A binary computes its answer in a `solve` function and hands it to
//! [`problem!`](macro.problem.html), which parses the command line, times the
//! run and prints the result.

extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate getopts;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate term;
extern crate time;

mod error;
mod options;
mod report;

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

pub use error::{Error, Result};
pub use options::Options;
pub use report::Report;

/// Declares `main` for a problem binary.
///
/// `$expected` is the known answer checked by `--check`, `$solve` a
/// `fn() -> String`, and `$headline` the sentence printed before the answer.
#[macro_export]
macro_rules! problem {
    ($expected:expr, $solve:ident, $headline:expr) => {
        fn main() {
            let args: Vec<::std::ffi::OsString> = ::std::env::args_os().collect();
            let stdout = ::std::io::stdout();
            let res = $crate::run(
                module_path!(),
                $expected,
                $headline,
                $solve,
                args,
                &mut stdout.lock(),
            );
            if let Err(err) = res {
                $crate::exit_with(&err);
            }
        }
    };
}

/// Runs one problem according to the flags in `args` (program name first),
/// writing the result to `out`. Diagnostics go to stderr.
pub fn run<F, W>(
    name: &str,
    expected: &str,
    headline: &str,
    solve: F,
    args: Vec<OsString>,
    out: &mut W,
) -> Result<()>
where
    F: FnOnce() -> String,
    W: Write,
{
    let program = args
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    let options = Options::parse(&program, args.into_iter().skip(1))?;
    if options.help {
        write!(out, "{}", options.usage())?;
        return Ok(());
    }

    let report = Report::measure(name, expected, headline, solve);
    if options.json {
        writeln!(out, "{}", report.to_json()?)?;
    } else {
        writeln!(out, "{}", report.line())?;
    }
    out.flush()?;

    if options.time {
        report.print_timing()?;
    }
    if options.check {
        // A mismatch is reported once, by `exit_with`.
        report.verify()?;
        report.print_verdict()?;
    }
    Ok(())
}

/// Reports `err` on stderr and exits with status 1.
pub fn exit_with(err: &Error) -> ! {
    let program = env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_default();
    if report::paint(term::color::RED, &format!("{}: {}", program, err)).is_err() {
        let _ = writeln!(io::stderr(), "{}: {}", program, err);
    }
    process::exit(1);
}
