use std::io;
use std::result;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "invalid arguments: {}", _0)]
    Options(#[cause] getopts::Fail),
    #[fail(display = "unexpected argument `{}`", _0)]
    UnexpectedArgument(String),
    #[fail(display = "{} answered {} but expected {}", problem, actual, expected)]
    Mismatch {
        problem: String,
        expected: String,
        actual: String,
    },
    #[fail(display = "failed to write output: {}", _0)]
    Io(#[cause] io::Error),
    #[fail(display = "failed to encode report: {}", _0)]
    Json(#[cause] serde_json::Error),
    #[fail(display = "terminal error: {}", _0)]
    Terminal(String),
}

pub type Result<T> = result::Result<T, Error>;

impl From<getopts::Fail> for Error {
    fn from(err: getopts::Fail) -> Error {
        Error::Options(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}

impl From<term::Error> for Error {
    fn from(err: term::Error) -> Error {
        Error::Terminal(err.to_string())
    }
}
