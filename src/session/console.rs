//! Line-oriented console transport for interactive sessions.

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, Lines};

/// Buffered reader/writer pair backing one interactive session.
///
/// Generic over the transport so tests can drive a session with in-memory
/// buffers while the binary wires it to stdin/stdout.
pub struct Console<R, W> {
    lines: Lines<BufReader<R>>,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Wrap a transport pair in a console.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            writer,
        }
    }

    /// Write `text` without a trailing newline, flush, and read one line.
    ///
    /// The returned line is trimmed. Returns `None` when the input stream is
    /// exhausted.
    pub async fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(self
            .lines
            .next_line()
            .await?
            .map(|line| line.trim().to_string()))
    }

    /// Write one line of output and flush it.
    pub async fn line(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }
}
