use tracing::debug;

use crate::core::errors::{Result, TourError};
use crate::utils::section;

pub const COMPLETION_LINE: &str = "✅ Error handling walkthrough complete";

/// Integer division that refuses a zero divisor instead of panicking.
pub fn divide(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(TourError::DivisionByZero);
    }
    a.checked_div(b).ok_or(TourError::Overflow(a, b))
}

/// Which handler picked up the failure, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caught {
    Arithmetic,
    Other,
}

/// What the walkthrough would print, split by stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
    pub caught: Option<Caught>,
}

/// Divides each `(a, b)` pair in turn, stopping at the first failure.
///
/// Division by zero is handled apart from every other error kind, and the
/// completion line is recorded whether or not a division failed.
pub fn divide_all(pairs: &[(i32, i32)]) -> Transcript {
    let mut transcript = Transcript::default();

    let outcome = pairs.iter().try_for_each(|&(a, b)| -> Result<()> {
        let quotient = divide(a, b)?;
        transcript.stdout.push(format!("{a} ÷ {b} = {quotient}"));
        Ok(())
    });

    match outcome {
        Ok(()) => {}
        Err(e @ TourError::DivisionByZero) => {
            transcript.caught = Some(Caught::Arithmetic);
            transcript.stderr.push(format!("❌ Arithmetic error: {e}"));
        }
        Err(e) => {
            transcript.caught = Some(Caught::Other);
            transcript.stderr.push(format!("❌ Unexpected error: {e}"));
        }
    }
    transcript.stdout.push(COMPLETION_LINE.to_string());
    transcript
}

pub fn run() {
    section("🛡️ Error handling");

    // The second division fails, so nothing is printed for it.
    let transcript = divide_all(&[(10, 2), (10, 0)]);
    // The completion line is always last in `stdout`.
    let (results, completion) = transcript
        .stdout
        .split_at(transcript.stdout.len().saturating_sub(1));
    for line in results {
        println!("{line}");
    }
    for line in &transcript.stderr {
        eprintln!("{line}");
    }
    for line in completion {
        println!("{line}");
    }
    debug!(caught = ?transcript.caught, "error handling walkthrough finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisor_is_caught_as_arithmetic() {
        let transcript = divide_all(&[(10, 2), (10, 0)]);

        assert_eq!(transcript.caught, Some(Caught::Arithmetic));
        assert_eq!(transcript.stdout, vec!["10 ÷ 2 = 5", COMPLETION_LINE]);
        assert!(!transcript.stdout.iter().any(|l| l.starts_with("10 ÷ 0")));
        assert_eq!(
            transcript.stderr,
            vec!["❌ Arithmetic error: divisor must not be zero"]
        );
    }

    #[test]
    fn overflow_takes_the_other_branch() {
        let transcript = divide_all(&[(i32::MIN, -1), (10, 2)]);

        assert_eq!(transcript.caught, Some(Caught::Other));
        assert_eq!(transcript.stdout, vec![COMPLETION_LINE]);
        assert_eq!(transcript.stderr.len(), 1);
        assert!(transcript.stderr[0].starts_with("❌ Unexpected error:"));
    }

    #[test]
    fn completion_line_follows_clean_runs_too() {
        let transcript = divide_all(&[(9, 3)]);

        assert_eq!(transcript.caught, None);
        assert_eq!(transcript.stdout, vec!["9 ÷ 3 = 3", COMPLETION_LINE]);
        assert!(transcript.stderr.is_empty());
    }
}
