//! The dispatch loop behind the `tasklist` binary.
//!
//! Reads one action per line, sends it through a [`Store`], and re-renders
//! the list whenever the store publishes a list value different from the
//! one last rendered. Unrecognized or malformed input ends the loop.

use crate::action::{decode_json, parse_command, TaskAction};
use crate::config::{Config, InputFormat};
use crate::error::{HostError, TaskError};
use crate::reducer::{TaskEnvironment, TaskReducer};
use crate::render::render;
use crate::types::TaskList;
use tasklist_runtime::Store;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Store type used by the host
pub type TaskStore = Store<TaskList, TaskAction, TaskEnvironment, TaskReducer>;

/// Decodes one input line according to the configured format
///
/// # Errors
///
/// See [`decode_json`] and [`TaskAction::try_from`].
pub fn decode_line(format: InputFormat, line: &str) -> Result<TaskAction, TaskError> {
    match format {
        InputFormat::Text => TaskAction::try_from(parse_command(line)),
        InputFormat::Json => decode_json(line),
    }
}

/// Runs the dispatch loop until `input` is exhausted
///
/// Returns the final list. Blank lines are skipped.
///
/// # Errors
///
/// - [`HostError::Action`] on the first line that is not a valid action;
///   the store is shut down before returning
/// - [`HostError::Io`] if reading input or writing output fails
/// - [`HostError::Store`] if the store rejects an action or fails to drain
pub async fn run<I, W>(
    config: &Config,
    env: TaskEnvironment,
    input: I,
    output: &mut W,
) -> Result<TaskList, HostError>
where
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let store: TaskStore =
        Store::with_config(TaskList::new(), TaskReducer::new(), env, config.store_config());
    let mut states = store.subscribe_state();

    let mut rendered = states.borrow_and_update().clone();
    output
        .write_all(render(&rendered, config.show_ids).as_bytes())
        .await?;

    let mut lines = input.lines();
    let mut line_no = 0_usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        let action = match decode_line(config.input_format, &line) {
            Ok(action) => action,
            Err(error) => {
                tracing::error!(
                    line = line_no,
                    %error,
                    expected = ?TaskAction::KINDS,
                    "rejecting input, stopping"
                );
                if let Err(shutdown_error) = store.shutdown_default().await {
                    tracing::warn!(error = %shutdown_error, "store did not drain cleanly");
                }
                return Err(error.into());
            },
        };

        tracing::debug!(line = line_no, kind = action.kind(), "dispatching");
        store.send(action).await?;

        let current = states.borrow_and_update().clone();
        if current.ptr_eq(&rendered) {
            tracing::debug!(line = line_no, "list unchanged, skipping render");
            continue;
        }

        output
            .write_all(render(&current, config.show_ids).as_bytes())
            .await?;
        rendered = current;
    }

    output.flush().await?;
    store.shutdown_default().await?;

    tracing::info!(
        lines = line_no,
        tasks = rendered.len(),
        completed = rendered.completed_count(),
        "input exhausted"
    );

    Ok(rendered)
}
