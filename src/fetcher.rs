//! Runs one qualifying request per trigger on a spawned task and reports the
//! outcome to the event loop.
//!
//! Each request carries the generation handed out by `ScreenState`, so the
//! loop can discard responses that were overtaken by a newer request. A send
//! that fails means the screen is gone; the task just logs and exits.

use crate::api::{parser, ResultsApi};
use crate::app::{QualifyingQuery, QualifyingSession};
use crate::events::AppEvent;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Clone)]
pub struct Fetcher {
    api: Arc<dyn ResultsApi>,
    query: QualifyingQuery,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl Fetcher {
    pub fn new(
        api: Arc<dyn ResultsApi>,
        query: QualifyingQuery,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { api, query, tx }
    }

    pub fn spawn(&self, generation: u64) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let query = self.query.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_session(api.as_ref(), &query).await;
            if let Err(e) = &result {
                tracing::warn!(generation, "qualifying fetch failed: {e}");
            }
            if tx
                .send(AppEvent::FetchSettled { generation, result })
                .is_err()
            {
                tracing::debug!(generation, "fetch settled after screen closed");
            }
        })
    }
}

/// One request plus parse, with every failure flattened to a message.
pub async fn fetch_session(
    api: &dyn ResultsApi,
    query: &QualifyingQuery,
) -> Result<QualifyingSession, String> {
    let json = api
        .get_qualifying_results(query)
        .await
        .map_err(|e| format!("{e:#}"))?;
    parser::parse_session(&json).map_err(|e| format!("{e:#}"))
}
