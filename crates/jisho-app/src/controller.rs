use std::sync::Arc;

use anyhow::Context;
use jisho_core::{BatchEngine, BatchOutcome, BatchRequest, CollectionStore};
use jisho_dictionary::Dictionary;
use jisho_types::BatchEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::signal;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::progress_loop;

/// Runs one batch alongside its progress reporter, stopping both on Ctrl+C
pub struct BatchController {
    progress: (AsyncSender<BatchEvent>, AsyncReceiver<BatchEvent>),
    cancel_token: CancellationToken,
}

impl BatchController {
    pub fn new() -> Self {
        Self {
            progress: kanal::bounded_async(256),
            cancel_token: CancellationToken::new(),
        }
    }

    pub async fn run<D, S>(
        self,
        engine: Arc<BatchEngine<D, S>>,
        request: BatchRequest,
    ) -> anyhow::Result<BatchOutcome>
    where
        D: Dictionary + 'static,
        S: CollectionStore + 'static,
    {
        let (progress_tx, progress_rx) = self.progress;
        let total = request.terms.len();

        let mut tasks = JoinSet::new();
        tasks.spawn(progress_loop(
            progress_rx,
            total,
            self.cancel_token.child_token(),
        ));

        let mut batch = engine.submit(request, Some(progress_tx));

        let result = tokio::select! {
            joined = &mut batch => joined.context("Batch task panicked")?.map_err(anyhow::Error::from),
            _ = signal::ctrl_c() => {
                tracing::warn!("Interrupted, stopping batch");
                batch.abort();
                self.cancel_token.cancel();
                Err(anyhow::anyhow!("Batch interrupted, notes saved so far are kept"))
            }
        };

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(Err(e)) => tracing::error!("progress task failed: {e}"),
                Err(e) => tracing::error!("progress task panicked: {e}"),
                Ok(Ok(())) => {}
            }
        }

        result
    }
}

impl Default for BatchController {
    fn default() -> Self {
        Self::new()
    }
}
