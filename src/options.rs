use std::ffi::OsStr;

use crate::error::{Error, Result};

/// Command-line flags accepted by every problem binary.
#[derive(Debug, Clone)]
pub struct Options {
    pub help: bool,
    pub check: bool,
    pub json: bool,
    pub time: bool,
    usage: String,
}

fn spec() -> getopts::Options {
    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "print this help menu");
    opts.optflag("c", "check", "compare the answer with the known answer");
    opts.optflag("j", "json", "print the run report as JSON");
    opts.optflag("t", "time", "print how long the solution took");
    opts
}

impl Options {
    /// Parses `args`, which must not include the program name.
    pub fn parse<I>(program: &str, args: I) -> Result<Options>
    where
        I: IntoIterator,
        I::Item: AsRef<OsStr>,
    {
        let opts = spec();
        let matches = opts.parse(args)?;
        if let Some(arg) = matches.free.first() {
            return Err(Error::UnexpectedArgument(arg.clone()));
        }
        Ok(Options {
            help: matches.opt_present("h"),
            check: matches.opt_present("c"),
            json: matches.opt_present("j"),
            time: matches.opt_present("t"),
            usage: opts.usage(&format!("Usage: {} [options]", program)),
        })
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }
}
