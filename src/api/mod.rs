pub mod client;
pub mod parser;

use crate::app::QualifyingQuery;
use async_trait::async_trait;
use color_eyre::eyre::Result;

pub use client::ErgastClient;

/// Source of qualifying results. Returns the raw JSON body; parsing lives in
/// [`parser`].
#[async_trait]
pub trait ResultsApi: Send + Sync {
    async fn get_qualifying_results(&self, query: &QualifyingQuery) -> Result<String>;
}
