//! Client side of the digital music store: talks to the music proxy and owns
//! the page state the UI renders.

pub mod client;
pub mod config;
pub mod error;
pub mod sequence;
pub mod state;
pub mod traits;

pub use client::{ProxyClient, ProxyClientBuilder};
pub use config::{AppConfig, CONFIG, PLACEHOLDER_COUNT};
pub use error::{Result, StoreError};
pub use sequence::{RequestSequencer, RequestTicket};
pub use state::{card_keys, Completion, GridView, StoreState};
pub use traits::{Endpoint, FetchRequest, TrackSource};
