use dioxus::prelude::*;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        header { class: "mb-10",
            h1 { class: "text-center text-4xl md:text-5xl font-extrabold text-white tracking-tight",
                "🎧 Digital Music Store"
            }
        }
    }
}
