use dioxus::prelude::*;

/// Content-free stand-in for a track card while a fetch is in flight.
#[component]
pub fn SkeletonCard() -> Element {
    rsx! {
      div { class: "skeleton-card bg-gray-800 border border-gray-700 rounded-xl shadow-lg p-5 animate-pulse",
        div { class: "w-full h-56 bg-gray-700 rounded-lg mb-4" }
        div { class: "h-4 w-2/3 bg-gray-700 rounded mb-2" }
        div { class: "h-3 w-1/2 bg-gray-700 rounded mb-3" }
        div { class: "h-3 w-full bg-gray-700 rounded" }
      }
    }
}
