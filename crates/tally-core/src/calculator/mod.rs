//! Menu-driven integer calculator.
//!
//! Each round shows a three-option menu (add, subtract, exit), reads a
//! choice and, for arithmetic choices, two integer operands. The session
//! ends on the exit choice or when input runs out.

use std::io::Write;

use strum::{Display, FromRepr, IntoStaticStr};
use tracing::{debug, info, warn};

use crate::config::{calculator, messages};
use crate::error::Result;
use crate::input::LineSource;
use crate::session::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum MenuChoice {
    #[strum(serialize = "add")]
    Add = 1,
    #[strum(serialize = "subtract")]
    Subtract = 2,
    #[strum(serialize = "exit")]
    Exit = 3,
}

impl MenuChoice {
    /// Parse a menu line (`1`, `2` or `3`)
    pub fn parse(line: &str) -> Option<Self> {
        line.trim().parse::<u8>().ok().and_then(Self::from_repr)
    }

    /// Apply the operation. Returns `None` for `Exit` or on overflow.
    pub fn apply(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => a.checked_sub(b),
            Self::Exit => None,
        }
    }
}

/// Totals for one calculator session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorReport {
    /// Completed add/subtract rounds
    pub rounds: usize,
    pub invalid_choices: usize,
    /// `Sentinel` means the exit choice was taken
    pub termination: Termination,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuCalculator;

impl MenuCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<CalculatorReport>
    where
        S: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let mut rounds = 0usize;
        let mut invalid_choices = 0usize;

        let termination = loop {
            writeln!(out)?;
            writeln!(out, "{}", calculator::HEADER)?;
            for option in calculator::OPTIONS {
                writeln!(out, "{}", option)?;
            }
            write!(out, "{}", calculator::CHOICE_PROMPT)?;
            out.flush()?;

            let Some(line) = source.read_line()? else {
                break end_of_input(out)?;
            };

            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(out, "{}", calculator::GOODBYE)?;
                    break Termination::Sentinel;
                }
                Some(choice) => choice,
                None => {
                    invalid_choices += 1;
                    debug!("Invalid menu choice: {:?}", line.trim());
                    writeln!(out, "{}", calculator::INVALID_CHOICE)?;
                    continue;
                }
            };

            let Some(a) = read_operand(source, out, calculator::FIRST_PROMPT)? else {
                break end_of_input(out)?;
            };
            let Some(b) = read_operand(source, out, calculator::SECOND_PROMPT)? else {
                break end_of_input(out)?;
            };

            rounds += 1;
            match choice.apply(a, b) {
                Some(result) => {
                    debug!("{} {} {} = {}", choice, a, b, result);
                    writeln!(out, "Result: {}", result)?;
                }
                None => writeln!(out, "{}", calculator::OUT_OF_RANGE)?,
            }
        };
        out.flush()?;

        info!(
            "Calculator finished after {} rounds ({})",
            rounds, termination
        );
        Ok(CalculatorReport {
            rounds,
            invalid_choices,
            termination,
        })
    }
}

/// Prompt until an integer is entered. Returns `None` at end of input.
fn read_operand<S, W>(source: &mut S, out: &mut W, prompt: &str) -> Result<Option<i64>>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let Some(line) = source.read_line()? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "{}", messages::NOT_A_NUMBER)?,
        }
    }
}

fn end_of_input<W: Write + ?Sized>(out: &mut W) -> Result<Termination> {
    warn!("Input closed, leaving calculator");
    writeln!(out)?;
    Ok(Termination::EndOfInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedLines;

    fn run(lines: &[&str]) -> (CalculatorReport, String) {
        let mut source = ScriptedLines::new(lines.iter().copied());
        let mut out = Vec::new();
        let report = MenuCalculator::new().run(&mut source, &mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::Subtract));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("4"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_menu_choice_apply() {
        assert_eq!(MenuChoice::Add.apply(2, 3), Some(5));
        assert_eq!(MenuChoice::Subtract.apply(2, 3), Some(-1));
        assert_eq!(MenuChoice::Exit.apply(2, 3), None);
        assert_eq!(MenuChoice::Add.apply(i64::MAX, 1), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (report, output) = run(&["3"]);
        assert_eq!(
            output,
            "\n--- Simple Calculator ---\n1. Add two numbers\n2. Subtract two numbers\n3. Exit\nChoice (1-3): Bye!\n"
        );
        assert_eq!(report.rounds, 0);
        assert_eq!(report.termination, Termination::Sentinel);
    }

    #[test]
    fn test_add_then_subtract() {
        let (report, output) = run(&["1", "4", "5", "2", "10", "3", "3"]);
        assert!(output.contains("First number: Second number: Result: 9\n"));
        assert!(output.contains("Result: 7\n"));
        assert!(output.ends_with("Bye!\n"));
        assert_eq!(report.rounds, 2);
        assert_eq!(report.invalid_choices, 0);
    }

    #[test]
    fn test_invalid_choice() {
        let (report, output) = run(&["9", "x", "3"]);
        assert_eq!(output.matches("Invalid choice.").count(), 2);
        assert_eq!(report.invalid_choices, 2);
    }

    #[test]
    fn test_operand_retry() {
        let (report, output) = run(&["1", "abc", "2", "2", "3"]);
        assert!(output.contains("First number: Not a number, try again.\nFirst number: "));
        assert!(output.contains("Result: 4\n"));
        assert_eq!(report.rounds, 1);
    }

    #[test]
    fn test_overflow() {
        let max = i64::MAX.to_string();
        let (_, output) = run(&["1", max.as_str(), "1", "3"]);
        assert!(output.contains("Result out of range.\n"));
    }

    #[test]
    fn test_end_of_input() {
        let (report, output) = run(&["1", "5"]);
        assert_eq!(report.termination, Termination::EndOfInput);
        assert_eq!(report.rounds, 0);
        assert!(output.ends_with("Second number: \n"));
    }
}
