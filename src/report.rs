use std::io::{self, IsTerminal, Write};

use term::color;

use crate::error::{Error, Result};

/// Outcome of a single problem run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub problem: String,
    pub headline: String,
    pub answer: String,
    pub expected: String,
    pub correct: bool,
    pub elapsed_ns: u64,
}

impl Report {
    /// Calls `solve` once and records its answer and wall-clock time.
    pub fn measure<F>(problem: &str, expected: &str, headline: &str, solve: F) -> Report
    where
        F: FnOnce() -> String,
    {
        let start = time::precise_time_ns();
        let answer = solve();
        let elapsed_ns = time::precise_time_ns().saturating_sub(start);
        Report {
            problem: problem.to_string(),
            headline: headline.to_string(),
            correct: answer == expected,
            answer,
            expected: expected.to_string(),
            elapsed_ns,
        }
    }

    /// The line printed on stdout: headline, a space, then the answer.
    pub fn line(&self) -> String {
        format!("{} {}", self.headline, self.answer)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn verify(&self) -> Result<()> {
        if self.correct {
            Ok(())
        } else {
            Err(Error::Mismatch {
                problem: self.problem.clone(),
                expected: self.expected.clone(),
                actual: self.answer.clone(),
            })
        }
    }

    pub fn print_verdict(&self) -> Result<()> {
        if self.correct {
            paint(color::GREEN, &format!("{}: correct", self.problem))
        } else {
            paint(
                color::RED,
                &format!("{}: wrong (expected {})", self.problem, self.expected),
            )
        }
    }

    pub fn print_timing(&self) -> Result<()> {
        paint(
            color::YELLOW,
            &format!("{}: solved in {:.3} ms", self.problem, self.elapsed_ns as f64 / 1e6),
        )
    }
}

/// Writes `msg` to stderr in `fg`. Colour is only used when stderr is a
/// terminal with a terminfo entry; pipes and files get plain text.
pub(crate) fn paint(fg: color::Color, msg: &str) -> Result<()> {
    if io::stderr().is_terminal() {
        if let Some(mut t) = term::stderr() {
            t.fg(fg)?;
            writeln!(t, "{}", msg)?;
            t.reset()?;
            return Ok(());
        }
    }
    writeln!(io::stderr(), "{}", msg)?;
    Ok(())
}
