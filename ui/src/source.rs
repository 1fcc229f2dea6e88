use std::rc::Rc;

use async_trait::async_trait;
use dioxus::logger::tracing::error;
use dioxus::prelude::*;
use shared::Track;
use storefront::{ProxyClient, Result, StoreError, TrackSource};

/// The track source the store page fetches from.
///
/// Pages use the one provided through context, or a [`ProxyClient`] for the
/// configured proxy when none is provided.
#[derive(Clone)]
pub struct SourceHandle(Rc<dyn TrackSource>);

impl SourceHandle {
    pub fn new(source: impl TrackSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    pub fn from_config() -> Self {
        match ProxyClient::from_config() {
            Ok(client) => Self::new(client),
            Err(e) => {
                error!("Music proxy unavailable: {}", e);
                Self::new(Unconfigured)
            }
        }
    }

    pub fn source(&self) -> &dyn TrackSource {
        self.0.as_ref()
    }
}

pub fn use_source() -> SourceHandle {
    let provided = try_use_context::<SourceHandle>();
    use_hook(move || provided.unwrap_or_else(SourceHandle::from_config))
}

/// Stands in when the proxy URL could not be turned into a client; every
/// request fails.
struct Unconfigured;

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TrackSource for Unconfigured {
    async fn top_tracks(&self) -> Result<Vec<Track>> {
        Err(StoreError::NotConfigured)
    }

    async fn search(&self, _query: &str) -> Result<Vec<Track>> {
        Err(StoreError::NotConfigured)
    }
}
