//! Line-oriented terminal front end for the goal editor.
//!
//! Each input line is a [`Command`]. The goal list is re-rendered after every
//! change and the prompt shows the submit action (`Add` / `Update`). Reader and
//! writer are generic so the console can be driven from memory in tests.

mod command;

pub use command::{Command, CommandError, HELP};

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::sync::CancellationToken;

use crate::editor::render::{render_goals, render_prompt};
use crate::editor::{GoalEditor, SubmitOutcome};
use crate::suggestion::SuggestionService;

pub struct Console<S> {
    editor: GoalEditor,
    service: S,
    shutdown: CancellationToken,
}

impl<S: SuggestionService> Console<S> {
    /// `shutdown` ends the session; an in-flight request is cancelled with it.
    pub fn new(service: S, shutdown: CancellationToken) -> Self {
        Self {
            editor: GoalEditor::new(),
            service,
            shutdown,
        }
    }

    pub fn editor(&self) -> &GoalEditor {
        &self.editor
    }

    /// Process lines from `reader` until `/quit`, end of input, or shutdown.
    pub async fn run<R, W>(&mut self, mut reader: R, writer: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        let mut show_list = true;

        loop {
            if show_list {
                writer.write_all(render_goals(&self.editor).as_bytes()).await?;
                show_list = false;
            }
            writer.write_all(render_prompt(&self.editor).as_bytes()).await?;
            writer.flush().await?;

            buf.clear();
            let read = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => break,
                read = reader.read_until(b'\n', &mut buf) => read?,
            };
            if read == 0 {
                break;
            }
            let Some(line) = decode_line(&buf) else {
                write_line(writer, "Input is not valid UTF-8, line skipped.").await?;
                continue;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    write_line(writer, &e.to_string()).await?;
                    continue;
                }
            };

            match command {
                Command::Enter(text) => {
                    self.editor.set_input(text);
                    show_list = self.submit(writer).await?;
                }
                Command::Submit => {
                    show_list = self.submit(writer).await?;
                }
                Command::Edit(id) => match self.editor.start_editing(id) {
                    Ok(()) => show_list = true,
                    Err(e) => write_line(writer, &e.to_string()).await?,
                },
                Command::Delete(id) => {
                    if self.editor.delete(id) {
                        show_list = true;
                    } else {
                        write_line(writer, &format!("Goal not found: {}", id)).await?;
                    }
                }
                Command::List => show_list = true,
                Command::Help => write_line(writer, HELP).await?,
                Command::Quit => break,
            }
        }

        writer.flush().await?;
        Ok(())
    }

    /// Submit the current input. Returns whether the list changed.
    async fn submit<W: AsyncWrite + Unpin>(&mut self, writer: &mut W) -> Result<bool> {
        let cancel = self.shutdown.child_token();
        let outcome = self.editor.submit(&self.service, &cancel).await;
        tracing::debug!("Submit finished: {:?}", outcome);

        match outcome {
            SubmitOutcome::Added(_) | SubmitOutcome::Updated(_) => Ok(true),
            SubmitOutcome::Ignored => {
                write_line(writer, "Enter a goal first.").await?;
                Ok(false)
            }
            SubmitOutcome::TargetGone(id) => {
                write_line(writer, &format!("Goal {} no longer exists.", id)).await?;
                Ok(true)
            }
            SubmitOutcome::Cancelled => {
                write_line(writer, "Suggestion request cancelled.").await?;
                Ok(false)
            }
        }
    }
}

/// Print one suggestion for `goal` to `writer`, or the fallback text.
pub async fn suggest_once<S, W>(service: &S, goal: &str, writer: &mut W) -> Result<()>
where
    S: SuggestionService,
    W: AsyncWrite + Unpin,
{
    let suggestion = service.suggest(goal).await;
    write_line(writer, suggestion.text()).await?;
    writer.flush().await?;
    Ok(())
}

/// Strip the line ending and decode. `None` if the line is not UTF-8.
fn decode_line(bytes: &[u8]) -> Option<&str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    std::str::from_utf8(bytes).ok()
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_line_strips_line_endings() {
        assert_eq!(decode_line(b"Run 5k\n"), Some("Run 5k"));
        assert_eq!(decode_line(b"Run 5k\r\n"), Some("Run 5k"));
        assert_eq!(decode_line(b"Run 5k"), Some("Run 5k"));
    }

    #[test]
    fn decode_line_rejects_invalid_utf8() {
        assert_eq!(decode_line(b"caf\xe9\n"), None);
    }
}
