use dioxus::prelude::*;

use crate::Button;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    pub query: String,
    pub on_input: EventHandler<String>,
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn SearchForm(props: Props) -> Element {
    rsx! {
      form {
        class: "flex flex-col sm:flex-row mb-12 gap-4 max-w-3xl mx-auto",
        onsubmit: move |event: FormEvent| {
            event.prevent_default();
            props.on_submit.call(());
        },

        input {
          value: "{props.query}",
          class: "flex-1 px-5 py-3 bg-gray-700 text-white border border-gray-600 rounded-full focus:outline-none focus:ring-2 focus:ring-purple-500 placeholder-gray-400 transition-all duration-300",
          placeholder: "Search for artists, songs, or albums...",
          oninput: move |event| props.on_input.call(event.value()),
        }
        Button { submit: true, "Search" }
      }
    }
}
