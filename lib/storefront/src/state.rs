//! Page state for the music store and the transitions that mutate it.
//!
//! The state is plain data. Issuing a request hands back a [`FetchRequest`];
//! the caller runs it against a [`TrackSource`](crate::TrackSource) and feeds
//! the outcome to [`StoreState::complete`]. Nothing here awaits, so the same
//! transitions drive the Dioxus page and the tests.

use shared::Track;
use std::collections::HashSet;
use tracing::{debug, error, info};

use crate::{
    config::PLACEHOLDER_COUNT,
    error::Result,
    sequence::RequestSequencer,
    traits::{Endpoint, FetchRequest},
};

#[derive(Debug, Clone, PartialEq)]
pub struct StoreState {
    query: String,
    tracks: Vec<Track>,
    loading: bool,
    sequencer: RequestSequencer,
}

/// What a finished request did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Tracks were replaced.
    Applied,
    /// The request failed; tracks were kept.
    Failed,
    /// A later request superseded this one; nothing changed.
    Stale,
}

/// What the grid should show for the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridView<'a> {
    Placeholders(usize),
    Cards(&'a [Track]),
}

impl<'a> GridView<'a> {
    /// The grid for `(tracks, loading)`: skeletons while loading, otherwise
    /// one card per track in server order.
    pub fn new(tracks: &'a [Track], loading: bool) -> Self {
        if loading {
            GridView::Placeholders(PLACEHOLDER_COUNT)
        } else {
            GridView::Cards(tracks)
        }
    }

    /// Number of cards the grid renders.
    pub fn len(&self) -> usize {
        match self {
            GridView::Placeholders(count) => *count,
            GridView::Cards(tracks) => tracks.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Render keys for a card grid, one per track and unique within the slice.
/// The proxy's id is used as-is unless an earlier card already claimed it.
pub fn card_keys(tracks: &[Track]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(tracks.len());
    tracks
        .iter()
        .enumerate()
        .map(|(index, track)| {
            let mut key = track.id.to_string();
            while !seen.insert(key.clone()) {
                key = format!("{key}-{index}");
            }
            key
        })
        .collect()
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreState {
    /// Fresh state for a newly mounted page. Loading starts on, since the
    /// initial load is issued on mount.
    pub fn new() -> Self {
        Self {
            query: String::new(),
            tracks: Vec::new(),
            loading: true,
            sequencer: RequestSequencer::new(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Issues the top tracks request made once per mount.
    pub fn begin_initial_load(&mut self) -> FetchRequest {
        self.issue(Endpoint::Top)
    }

    /// Issues a search for the current query. A blank query is ignored: no
    /// request and no state change.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        if self.query.trim().is_empty() {
            return None;
        }
        let query = self.query.clone();
        Some(self.issue(Endpoint::Search { query }))
    }

    fn issue(&mut self, endpoint: Endpoint) -> FetchRequest {
        self.loading = true;
        FetchRequest {
            ticket: self.sequencer.issue(),
            endpoint,
        }
    }

    /// Applies the outcome of `request`.
    ///
    /// Responses to superseded requests are dropped. Otherwise loading is
    /// cleared, and tracks are replaced on success or kept on failure.
    pub fn complete(&mut self, request: &FetchRequest, outcome: Result<Vec<Track>>) -> Completion {
        if !self.sequencer.try_apply(request.ticket) {
            debug!(
                "Discarding stale response for request #{}",
                request.ticket.value()
            );
            return Completion::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(tracks) => {
                info!(
                    "Request #{} returned {} tracks",
                    request.ticket.value(),
                    tracks.len()
                );
                self.tracks = tracks;
                Completion::Applied
            }
            Err(e) => {
                error!("{}: {}", request.endpoint.failure_context(), e);
                Completion::Failed
            }
        }
    }

    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.tracks, self.loading)
    }
}
