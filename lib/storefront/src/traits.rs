use async_trait::async_trait;
use shared::Track;

use crate::error::Result;
use crate::sequence::RequestTicket;

/// Anything that can answer the two proxy queries.
///
/// Futures are `Send` on native targets; the browser fetch backend is not.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TrackSource {
    /// The proxy's default listing.
    async fn top_tracks(&self) -> Result<Vec<Track>>;

    async fn search(&self, query: &str) -> Result<Vec<Track>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Top,
    Search { query: String },
}

impl Endpoint {
    /// Prefix used when a request to this endpoint fails.
    pub fn failure_context(&self) -> &'static str {
        match self {
            Endpoint::Top => "Error loading top tracks",
            Endpoint::Search { .. } => "Search error",
        }
    }
}

/// A request the page has committed to, tagged with its submission ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub endpoint: Endpoint,
}

impl FetchRequest {
    pub async fn send<S>(&self, source: &S) -> Result<Vec<Track>>
    where
        S: TrackSource + ?Sized,
    {
        match &self.endpoint {
            Endpoint::Top => source.top_tracks().await,
            Endpoint::Search { query } => source.search(query).await,
        }
    }
}
