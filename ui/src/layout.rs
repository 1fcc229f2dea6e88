use crate::Navbar;
use dioxus::prelude::*;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
      // Page background
      div { class: "w-[99vw] min-h-[100vh] overflow-x-hidden bg-gradient-to-b from-gray-900 to-gray-800",
        div { class: "px-2 py-12",
          Navbar {}
          {children}
        }
      }
    }
}
