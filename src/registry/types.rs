//! Core data types and error definitions for the student registry.

use thiserror::Error;

/// A single student and the grades recorded for them.
///
/// Records are created through [`crate::registry::Registry::add_student`] and
/// mutated only by appending validated grades; nothing ever removes a record
/// during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    name: String,
    grades: Vec<u8>,
}

impl StudentRecord {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            grades: Vec::new(),
        }
    }

    /// Display name as stored: trimmed, original case preserved.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Grades in the order they were recorded.
    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    /// Append one validated grade.
    pub(crate) fn record(&mut self, grade: u8) {
        tracing::debug!(student = %self.name, grade, "Recorded grade");
        self.grades.push(grade);
    }

    /// Mean of the recorded grades, or `None` when no grades exist yet.
    ///
    /// An empty grade list is reported as undefined, never as `0.0`.
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: u32 = self.grades.iter().map(|&grade| u32::from(grade)).sum();
        Some(f64::from(sum) / self.grades.len() as f64)
    }
}

/// Failures reported when registering a new student.
///
/// Both leave the registry unchanged; the `Display` text is the exact console
/// wording shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddStudentError {
    /// The name was empty after trimming surrounding whitespace.
    #[error("Student name cannot be empty.")]
    EmptyName,
    /// A student with the same normalized name is already registered.
    #[error("Student '{0}' already exists.")]
    DuplicateName(String),
}

/// Preconditions that stop a grade-entry session before any token is read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeEntryError {
    /// No students have been registered yet.
    #[error("No students found. Please add a student first.")]
    EmptyRegistry,
    /// The requested student is not present in the registry.
    #[error("Student '{0}' not found.")]
    StudentNotFound(String),
}

/// Rejection reasons for a single grade token.
///
/// Per-token rejections are warnings: the entry session keeps accepting
/// further tokens after reporting one.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GradeTokenError {
    /// The token did not parse as a base-10 integer.
    #[error("Invalid input. Please enter a number.")]
    InvalidFormat,
    /// The token parsed as an integer outside the accepted range.
    #[error("Invalid grade. Please enter a value between 0 and 100.")]
    OutOfRange,
}
