//! Interactive session loop: menu display, dispatch, and shutdown.
//!
//! The session is a two-state machine (running / exiting). Every iteration
//! prints the menu, reads one line, and dispatches to exactly one registry
//! operation; invalid selections are reported and leave all state untouched.
//! Choice 5 and end of input both end the loop with the farewell line, and
//! the binary races the whole loop against Ctrl-C so an interrupt exits just
//! as cleanly.

mod console;
mod handlers;
mod menu;

pub use console::Console;
pub use menu::{MenuChoice, MenuError};

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};

use crate::{metrics::SessionMetrics, registry::Registry};
use handlers::Flow;

/// Farewell printed on every exit path.
pub const FAREWELL: &str = "Exiting program.";

/// One interactive session over a console transport.
pub struct Session<R, W> {
    console: Console<R, W>,
    registry: Registry,
    metrics: Arc<SessionMetrics>,
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a session reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W, metrics: Arc<SessionMetrics>) -> Self {
        Self {
            console: Console::new(reader, writer),
            registry: Registry::new(),
            metrics,
        }
    }

    /// Registry state, exposed for inspection once the loop has ended.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Drive the menu loop until the user exits or input ends.
    pub async fn run(&mut self) -> io::Result<()> {
        tracing::debug!("Session starting");
        loop {
            let prompt = format!("\n{}\nEnter your choice: ", menu::MENU);
            let Some(input) = self.console.prompt(&prompt).await? else {
                break;
            };

            let flow = match input.parse::<MenuChoice>() {
                Ok(MenuChoice::AddStudent) => {
                    handlers::add_student(&mut self.console, &mut self.registry, &self.metrics)
                        .await?
                }
                Ok(MenuChoice::RecordGrades) => {
                    handlers::record_grades(&mut self.console, &mut self.registry, &self.metrics)
                        .await?
                }
                Ok(MenuChoice::ShowReport) => {
                    handlers::show_report(&mut self.console, &self.registry).await?
                }
                Ok(MenuChoice::TopStudent) => {
                    handlers::show_top_performer(&mut self.console, &self.registry).await?
                }
                Ok(MenuChoice::Exit) => Flow::Quit,
                Err(err) => {
                    self.console.line(&err.to_string()).await?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                break;
            }
        }

        self.console.line(FAREWELL).await?;
        tracing::debug!(students = self.registry.len(), "Session ended");
        Ok(())
    }
}
