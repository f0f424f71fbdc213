//! Report construction and top-performer selection over the registry.
//!
//! Averages are computed with unrounded `f64` arithmetic; rounding to one
//! decimal place happens only in the `Display` implementations. The overall
//! average is a mean of the per-student averages, weighting every student
//! equally no matter how many grades each holds.

use std::fmt;

use thiserror::Error;

use crate::registry::{Registry, StudentRecord};

/// Raised when a report is requested against an empty registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The registry holds no students at all.
    #[error("No students to report.")]
    NoStudents,
}

/// Why a top performer could not be selected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopPerformerError {
    /// The registry holds no students at all.
    #[error("No students found.")]
    NoStudents,
    /// Students exist, but none has a recorded grade.
    #[error("No grades available to determine top performer.")]
    NoGradesAvailable,
}

/// One report line: a student and their average, when defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    /// Student display name.
    pub name: String,
    /// Mean grade, absent when the student has no grades.
    pub average: Option<f64>,
}

/// Aggregate statistics over the students with at least one grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregates {
    /// Highest per-student average.
    pub max_average: f64,
    /// Lowest per-student average.
    pub min_average: f64,
    /// Mean of the per-student averages.
    pub overall_average: f64,
}

/// Snapshot report over every student in the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Per-student lines in registry order.
    pub lines: Vec<ReportLine>,
    /// Aggregate statistics; absent when no student has any grades.
    pub aggregates: Option<Aggregates>,
}

impl Report {
    /// Build a report over the registry.
    ///
    /// Students without grades appear with an undefined average and are
    /// excluded from the aggregates; when every student is in that state the
    /// aggregates are omitted entirely.
    pub fn build(registry: &Registry) -> Result<Self, ReportError> {
        if registry.is_empty() {
            return Err(ReportError::NoStudents);
        }

        let lines: Vec<ReportLine> = registry
            .students()
            .iter()
            .map(|record| ReportLine {
                name: record.name().to_string(),
                average: record.average(),
            })
            .collect();

        let defined: Vec<f64> = lines.iter().filter_map(|line| line.average).collect();
        let aggregates = if defined.is_empty() {
            None
        } else {
            Some(Aggregates {
                max_average: defined.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                min_average: defined.iter().copied().fold(f64::INFINITY, f64::min),
                overall_average: defined.iter().sum::<f64>() / defined.len() as f64,
            })
        };

        Ok(Self { lines, aggregates })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Student Report ---")?;
        for line in &self.lines {
            match line.average {
                Some(average) => {
                    writeln!(f, "{}'s average grade is {average:.1}.", line.name)?;
                }
                None => writeln!(f, "{}'s average grade is N/A.", line.name)?,
            }
        }

        match &self.aggregates {
            None => {
                writeln!(f, "No grades have been added yet.")?;
                write!(f, "------------------------")
            }
            Some(aggregates) => {
                writeln!(f, "------------------------")?;
                writeln!(f, "Max Average: {:.1}", aggregates.max_average)?;
                writeln!(f, "Min Average: {:.1}", aggregates.min_average)?;
                writeln!(f, "Overall Average: {:.1}", aggregates.overall_average)?;
                write!(f, "------------------------")
            }
        }
    }
}

/// The best-performing student and their average.
#[derive(Debug, Clone, PartialEq)]
pub struct TopPerformer {
    /// Student display name.
    pub name: String,
    /// The student's mean grade.
    pub average: f64,
}

impl fmt::Display for TopPerformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The student with the highest average is {} with a grade of {:.1}.",
            self.name, self.average
        )
    }
}

/// Select the student with the highest average grade.
///
/// Students without grades are skipped. Ties keep the first record in
/// registry order: the scan only replaces the leader on a strictly greater
/// average.
pub fn top_performer(registry: &Registry) -> Result<TopPerformer, TopPerformerError> {
    if registry.is_empty() {
        return Err(TopPerformerError::NoStudents);
    }

    let mut best: Option<(&StudentRecord, f64)> = None;
    for student in registry.students() {
        let Some(average) = student.average() else {
            continue;
        };
        let leads = match best {
            Some((_, lead)) => average > lead,
            None => true,
        };
        if leads {
            best = Some((student, average));
        }
    }

    best.map(|(student, average)| TopPerformer {
        name: student.name().to_string(),
        average,
    })
    .ok_or(TopPerformerError::NoGradesAvailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(entries: &[(&str, &[u8])]) -> Registry {
        let mut registry = Registry::new();
        for (name, grades) in entries {
            registry.add_student(name).expect("added");
            let target = registry.grade_target(name).expect("target");
            for &grade in *grades {
                target.record(grade);
            }
        }
        registry
    }

    #[test]
    fn average_of_three_grades() {
        let registry = registry_with(&[("Ann", &[70, 80, 90])]);
        let report = Report::build(&registry).expect("report");
        assert_eq!(report.lines[0].average, Some(80.0));
    }

    #[test]
    fn empty_grade_list_is_undefined_not_zero() {
        let registry = registry_with(&[("Ann", &[])]);
        let report = Report::build(&registry).expect("report");
        assert_eq!(report.lines[0].average, None);
        assert!(report.aggregates.is_none());
    }

    #[test]
    fn empty_registry_yields_no_students() {
        assert_eq!(Report::build(&Registry::new()), Err(ReportError::NoStudents));
    }

    #[test]
    fn aggregates_cover_only_defined_averages() {
        let registry = registry_with(&[("Ann", &[90, 100]), ("Bob", &[60, 70]), ("Cora", &[])]);
        let report = Report::build(&registry).expect("report");
        let aggregates = report.aggregates.expect("aggregates");
        assert_eq!(aggregates.max_average, 95.0);
        assert_eq!(aggregates.min_average, 65.0);
        assert_eq!(aggregates.overall_average, 80.0);
    }

    #[test]
    fn overall_average_weights_students_equally() {
        // Pooled mean of the raw grades would be 40.0; the report must
        // average the per-student averages instead.
        let registry = registry_with(&[("Ann", &[100]), ("Bob", &[0, 0, 0, 100])]);
        let report = Report::build(&registry).expect("report");
        let aggregates = report.aggregates.expect("aggregates");
        assert_eq!(aggregates.overall_average, 62.5);
        assert_eq!(aggregates.max_average, 100.0);
        assert_eq!(aggregates.min_average, 25.0);
    }

    #[test]
    fn report_renders_one_decimal_lines() {
        let registry = registry_with(&[("Ann", &[50]), ("Bob", &[])]);
        let rendered = Report::build(&registry).expect("report").to_string();
        assert_eq!(
            rendered,
            "--- Student Report ---\n\
             Ann's average grade is 50.0.\n\
             Bob's average grade is N/A.\n\
             ------------------------\n\
             Max Average: 50.0\n\
             Min Average: 50.0\n\
             Overall Average: 50.0\n\
             ------------------------"
        );
    }

    #[test]
    fn report_without_grades_renders_notice() {
        let registry = registry_with(&[("Ann", &[])]);
        let rendered = Report::build(&registry).expect("report").to_string();
        assert_eq!(
            rendered,
            "--- Student Report ---\n\
             Ann's average grade is N/A.\n\
             No grades have been added yet.\n\
             ------------------------"
        );
    }

    #[test]
    fn top_performer_picks_highest_average() {
        let registry = registry_with(&[("Ann", &[60]), ("Bob", &[90]), ("Cora", &[75])]);
        let top = top_performer(&registry).expect("top");
        assert_eq!(top.name, "Bob");
        assert_eq!(top.average, 90.0);
    }

    #[test]
    fn top_performer_tie_keeps_first_in_registry_order() {
        let registry = registry_with(&[("Ann", &[80]), ("Bob", &[80])]);
        let top = top_performer(&registry).expect("top");
        assert_eq!(top.name, "Ann");
    }

    #[test]
    fn top_performer_skips_students_without_grades() {
        let registry = registry_with(&[("Ann", &[]), ("Bob", &[40])]);
        let top = top_performer(&registry).expect("top");
        assert_eq!(top.name, "Bob");
    }

    #[test]
    fn top_performer_preconditions() {
        assert_eq!(
            top_performer(&Registry::new()).err(),
            Some(TopPerformerError::NoStudents)
        );
        let registry = registry_with(&[("Ann", &[])]);
        assert_eq!(
            top_performer(&registry).err(),
            Some(TopPerformerError::NoGradesAvailable)
        );
    }

    #[test]
    fn top_performer_renders_one_decimal() {
        let registry = registry_with(&[("Ann", &[80, 85])]);
        let top = top_performer(&registry).expect("top");
        assert_eq!(
            top.to_string(),
            "The student with the highest average is Ann with a grade of 82.5."
        );
    }
}
