//! Menu text and choice parsing for the interactive loop.

use std::str::FromStr;

use thiserror::Error;

/// Fixed menu shown at the top of every loop iteration.
pub(crate) const MENU: &str = "--- Gradekeeper ---\n\
1. Add a new student\n\
2. Add grades for a student\n\
3. Generate a full report\n\
4. Find the top student\n\
5. Exit program";

/// One of the five menu operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Register a new student.
    AddStudent,
    /// Record grades for an existing student.
    RecordGrades,
    /// Print the full report.
    ShowReport,
    /// Print the top-performing student.
    TopStudent,
    /// Leave the program.
    Exit,
}

/// Rejection reasons for a menu selection line.
///
/// Both leave the registry untouched and keep the loop running.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    /// The input did not parse as an integer.
    #[error("Invalid choice. Please enter a number from 1 to 5.")]
    NotANumber,
    /// The input parsed but names no menu entry.
    #[error("Invalid choice. Please select a number from 1 to 5.")]
    OutOfRange,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice: i64 = s.trim().parse().map_err(|_| MenuError::NotANumber)?;
        match choice {
            1 => Ok(Self::AddStudent),
            2 => Ok(Self::RecordGrades),
            3 => Ok(Self::ShowReport),
            4 => Ok(Self::TopStudent),
            5 => Ok(Self::Exit),
            _ => Err(MenuError::OutOfRange),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_entry() {
        assert_eq!("1".parse(), Ok(MenuChoice::AddStudent));
        assert_eq!("2".parse(), Ok(MenuChoice::RecordGrades));
        assert_eq!("3".parse(), Ok(MenuChoice::ShowReport));
        assert_eq!("4".parse(), Ok(MenuChoice::TopStudent));
        assert_eq!(" 5 ".parse(), Ok(MenuChoice::Exit));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert_eq!("abc".parse::<MenuChoice>(), Err(MenuError::NotANumber));
        assert_eq!("".parse::<MenuChoice>(), Err(MenuError::NotANumber));
    }

    #[test]
    fn rejects_numbers_outside_the_menu() {
        assert_eq!("0".parse::<MenuChoice>(), Err(MenuError::OutOfRange));
        assert_eq!("6".parse::<MenuChoice>(), Err(MenuError::OutOfRange));
        assert_eq!("-3".parse::<MenuChoice>(), Err(MenuError::OutOfRange));
    }
}
