//! The in-memory student registry and its operations.

use super::normalize::{normalize_name, sanitize_name};
use super::types::{AddStudentError, GradeEntryError, StudentRecord};

/// Insertion-ordered collection of student records for one session.
///
/// The registry is owned by the running session and never shared; it lives
/// for one program run and is discarded on exit. Name uniqueness is enforced
/// case-insensitively after trimming surrounding whitespace.
#[derive(Debug, Default)]
pub struct Registry {
    students: Vec<StudentRecord>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered students.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// True when no students are registered.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Records in insertion order.
    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    /// Case- and whitespace-insensitive lookup by name.
    ///
    /// Returns the first record whose normalized name matches the normalized
    /// input; absence is not an error. No side effects.
    pub fn find(&self, name: &str) -> Option<&StudentRecord> {
        let normalized = normalize_name(name);
        self.students
            .iter()
            .find(|record| normalize_name(record.name()) == normalized)
    }

    /// Register a new student with an empty grade list.
    ///
    /// The stored name is the trimmed input with its original case. Fails
    /// without touching the registry when the trimmed name is empty or a
    /// normalized match already exists.
    pub fn add_student(&mut self, raw_name: &str) -> Result<&StudentRecord, AddStudentError> {
        let name = sanitize_name(raw_name).ok_or(AddStudentError::EmptyName)?;
        if self.find(&name).is_some() {
            return Err(AddStudentError::DuplicateName(name));
        }

        tracing::debug!(student = %name, "Registered student");
        self.students.push(StudentRecord::new(name));
        Ok(self
            .students
            .last()
            .expect("registry cannot be empty after push"))
    }

    /// Resolve the target of a grade-entry session.
    ///
    /// Enforces the entry preconditions: the registry must hold at least one
    /// student, and the named student must exist.
    pub fn grade_target(&mut self, name: &str) -> Result<&mut StudentRecord, GradeEntryError> {
        if self.students.is_empty() {
            return Err(GradeEntryError::EmptyRegistry);
        }

        let normalized = normalize_name(name);
        let position = self
            .students
            .iter()
            .position(|record| normalize_name(record.name()) == normalized);
        match position {
            Some(index) => Ok(&mut self.students[index]),
            None => Err(GradeEntryError::StudentNotFound(name.trim().to_string())),
        }
    }
}
