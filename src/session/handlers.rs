//! Handlers for the interactive menu operations.
//!
//! Each handler reads what it needs through the console, applies exactly one
//! registry operation, and prints the outcome. Validation failures are
//! reported and leave the registry unchanged; end of input makes a handler
//! hand control back so the session can close down gracefully.

use std::io;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::{
    metrics::SessionMetrics,
    registry::{GradeEntryError, GradeToken, Registry, parse_grade_token},
    report::{Report, top_performer},
    session::console::Console,
};

const NAME_PROMPT: &str = "Enter student name: ";
const GRADE_PROMPT: &str = "Enter a grade (or 'done' to finish): ";

/// Whether the session should keep looping after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Register a new student from a prompted name.
pub(crate) async fn add_student<R, W>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    metrics: &SessionMetrics,
) -> io::Result<Flow>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let Some(name) = console.prompt(NAME_PROMPT).await? else {
        return Ok(Flow::Quit);
    };

    match registry.add_student(&name) {
        Ok(record) => {
            metrics.record_student();
            console
                .line(&format!("Student '{}' added.", record.name()))
                .await?;
        }
        Err(err) => console.line(&err.to_string()).await?,
    }
    Ok(Flow::Continue)
}

/// Record grades for a prompted student until the sentinel token.
///
/// Rejected tokens are reported individually and skipped; the closing
/// summary counts only the grades actually appended.
pub(crate) async fn record_grades<R, W>(
    console: &mut Console<R, W>,
    registry: &mut Registry,
    metrics: &SessionMetrics,
) -> io::Result<Flow>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if registry.is_empty() {
        console
            .line(&GradeEntryError::EmptyRegistry.to_string())
            .await?;
        return Ok(Flow::Continue);
    }

    let Some(name) = console.prompt(NAME_PROMPT).await? else {
        return Ok(Flow::Quit);
    };
    let student = match registry.grade_target(&name) {
        Ok(student) => student,
        Err(err) => {
            console.line(&err.to_string()).await?;
            return Ok(Flow::Continue);
        }
    };

    let initial = student.grades().len();
    let mut rejected = 0u64;
    loop {
        let Some(token) = console.prompt(GRADE_PROMPT).await? else {
            break;
        };
        match parse_grade_token(&token) {
            Ok(GradeToken::Done) => break,
            Ok(GradeToken::Grade(grade)) => student.record(grade),
            Err(err) => {
                rejected += 1;
                console.line(&err.to_string()).await?;
            }
        }
    }

    let added = student.grades().len() - initial;
    metrics.record_grades(added as u64);
    metrics.record_rejections(rejected);
    console
        .line(&format!(
            "Grades updated for '{}'. ({added} grade(s) added)",
            student.name()
        ))
        .await?;
    Ok(Flow::Continue)
}

/// Print the full report, or the reason none could be built.
pub(crate) async fn show_report<R, W>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> io::Result<Flow>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match Report::build(registry) {
        Ok(report) => {
            console.line("").await?;
            console.line(&report.to_string()).await?;
            console.line("").await?;
        }
        Err(err) => console.line(&err.to_string()).await?,
    }
    Ok(Flow::Continue)
}

/// Print the top-performing student, or the reason none exists.
pub(crate) async fn show_top_performer<R, W>(
    console: &mut Console<R, W>,
    registry: &Registry,
) -> io::Result<Flow>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    match top_performer(registry) {
        Ok(top) => console.line(&top.to_string()).await?,
        Err(err) => console.line(&err.to_string()).await?,
    }
    Ok(Flow::Continue)
}
