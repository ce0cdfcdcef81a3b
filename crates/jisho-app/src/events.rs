use jisho_types::{BatchEvent, TermOutcome};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

/// Log batch progress until the batch drops its sender or is cancelled
pub async fn progress_loop(
    rx: AsyncReceiver<BatchEvent>,
    total: usize,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut resolved = 0;
    let mut committed = 0;

    loop {
        let event = tokio::select! {
            event = rx.recv() => match event {
                Ok(event) => event,
                Err(_) => break,
            },
            _ = cancel.cancelled() => break,
        };

        match event {
            BatchEvent::Resolved { term, found } => {
                resolved += 1;
                if found {
                    tracing::info!("[lookup {resolved}/{total}] {term}");
                } else {
                    tracing::warn!("[lookup {resolved}/{total}] {term}: not found");
                }
            }
            BatchEvent::Committed { term, outcome } => {
                committed += 1;
                let action = match outcome {
                    TermOutcome::Added(id) => format!("added as note {id}"),
                    TermOutcome::Merged(ids) => format!("merged into {} existing", ids.len()),
                    TermOutcome::Missing(id) => format!("placeholder note {id}"),
                    TermOutcome::Failed(reason) => {
                        tracing::error!("[save {committed}/{total}] {term}: {reason}");
                        continue;
                    }
                };
                tracing::info!("[save {committed}/{total}] {term}: {action}");
            }
            BatchEvent::Finished { total } => {
                tracing::debug!("All {total} terms saved");
            }
        }
    }

    Ok(())
}
