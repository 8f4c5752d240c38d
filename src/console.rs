//! Interactive console front end.
//!
//! Reads passwords line by line and prints a strength report for each.
//! Generic over the reader and writer so it can be driven from tests.

use std::io::{self, BufRead, Write};

use crate::evaluator::evaluate;
use crate::mask::mask_password;
use crate::types::PasswordEvaluation;

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

const PROMPT: &str = "Enter password to check (or 'quit' to exit): ";
const CONTINUE_PROMPT: &str = "Check another password? (yes/no): ";
const EMPTY_INPUT: &str = "Password cannot be empty. Please try again.";
const FAREWELL: &str = "Thanks for using Password Strength Checker!";

/// Scores at or above this are reported as strong.
pub const STRONG_THRESHOLD: u32 = 75;

/// Runs the interactive loop until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<()> {
    show_requirements(&mut output)?;

    loop {
        let Some(password) = prompt(&mut input, &mut output, PROMPT)? else {
            break;
        };

        if password.eq_ignore_ascii_case("quit") {
            writeln!(output, "\n{FAREWELL}")?;
            break;
        }

        if password.is_empty() {
            writeln!(output, "{EMPTY_INPUT}\n")?;
            continue;
        }

        let evaluation = evaluate(&password);
        display_results(&mut output, &password, &evaluation)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(score = evaluation.score.value(), "console evaluation displayed");

        if evaluation.score.value() >= STRONG_THRESHOLD {
            let again = prompt(&mut input, &mut output, CONTINUE_PROMPT)?;
            if !again.is_some_and(|answer| answer.eq_ignore_ascii_case("yes")) {
                writeln!(output, "\n{FAREWELL}")?;
                break;
            }
            writeln!(output)?;
        }
    }

    Ok(())
}

/// Prints `message`, then reads one line with its terminator stripped.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}

fn show_requirements<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "\n{RULE}")?;
    writeln!(output, "         PASSWORD STRENGTH CHECKER")?;
    writeln!(output, "{RULE}")?;
    writeln!(output, "\nPassword Requirements:")?;
    writeln!(output, "  • At least 8 characters long")?;
    writeln!(output, "  • At least one uppercase letter (A-Z)")?;
    writeln!(output, "  • At least one lowercase letter (a-z)")?;
    writeln!(output, "  • At least one number (0-9)")?;
    writeln!(output, "  • At least one special character (!@#$%^&* etc.)")?;
    writeln!(output, "  • Should not be a common password")?;
    writeln!(output, "\n{RULE}\n")
}

fn display_results<W: Write>(
    output: &mut W,
    password: &str,
    evaluation: &PasswordEvaluation,
) -> io::Result<()> {
    writeln!(output, "\n{RULE}")?;
    writeln!(output, "           PASSWORD STRENGTH ANALYSIS")?;
    writeln!(output, "{RULE}")?;
    writeln!(output, "Password: {}", mask_password(password))?;
    writeln!(output, "Strength: {}", evaluation.strength())?;
    writeln!(output, "Score: {}/100", evaluation.score)?;
    writeln!(output, "{THIN_RULE}")?;
    writeln!(output, "Feedback:")?;
    for line in &evaluation.feedback {
        writeln!(output, "  {line}")?;
    }
    writeln!(output, "{RULE}")?;

    if evaluation.score.value() >= STRONG_THRESHOLD {
        writeln!(output, "Your password is strong! Good job!")?;
    } else {
        writeln!(output, "Your password could be stronger. See feedback above.")?;
    }
    writeln!(output)
}
