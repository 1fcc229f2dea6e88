use dioxus::prelude::*;
use shared::Track;
use storefront::{card_keys, GridView};

use super::{SkeletonCard, TrackCard};

const GRID_CLASSES: &str =
    "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-4 gap-8";

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub tracks: Vec<Track>,
    pub loading: bool,
}

/// Skeletons while loading, otherwise one card per track in server order.
#[component]
pub fn TrackGrid(props: Props) -> Element {
    match GridView::new(&props.tracks, props.loading) {
        GridView::Placeholders(count) => rsx! {
          div { class: GRID_CLASSES,
            for i in 0..count {
              SkeletonCard { key: "{i}" }
            }
          }
        },
        GridView::Cards(tracks) => {
            let keys = card_keys(tracks);
            rsx! {
              div { class: GRID_CLASSES,
                for (key, track) in keys.into_iter().zip(tracks.iter()) {
                  TrackCard { key: "{key}", track: track.clone() }
                }
              }
            }
        }
    }
}
