use dioxus::prelude::*;
use shared::Track;

use crate::{Button, ButtonVariant, CoverArt};

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub track: Track,
}

#[component]
pub fn TrackCard(props: Props) -> Element {
    let track = props.track;

    rsx! {
      div { class: "track-card relative bg-gray-800 border border-gray-700 rounded-xl shadow-lg hover:shadow-xl transition-all duration-300 p-5 group",

        CoverArt { src: track.album_image.clone(), alt: track.name.clone() }

        h3 { class: "font-bold text-lg text-white line-clamp-2", "{track.name}" }
        p { class: "text-gray-400 text-sm mb-3", "{track.artist_name}" }

        div { class: "flex justify-between items-center",
          if let Some(audio) = &track.audio {
            audio {
              controls: true,
              class: "w-3/4 h-10",
              style: "background: transparent",
              source { src: "{audio}", r#type: "audio/mpeg" }
            }
          }
          // Purchasing is not wired up.
          Button { variant: ButtonVariant::Link, "Buy Now" }
        }

        // Hover tint
        div { class: "absolute inset-0 bg-purple-900/30 opacity-0 group-hover:opacity-100 transition-opacity duration-300 rounded-xl pointer-events-none" }
      }
    }
}
