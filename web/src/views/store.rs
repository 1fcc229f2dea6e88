use dioxus::prelude::*;
use ui::{Layout, MusicSearch};

#[component]
pub fn StorePage() -> Element {
    rsx! {
        Layout { MusicSearch {} }
    }
}
