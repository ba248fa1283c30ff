use crate::components::Footer;
use dioxus::prelude::*;

/// Sidebar on the left, page content and footer on the right.
#[component]
pub fn AppShell(sidebar: Element, children: Element) -> Element {
    rsx! {
      div { class: "flex min-h-screen bg-exam-dark text-exam-text",
        {sidebar}

        div { class: "flex-1 flex flex-col min-w-0",
          main { class: "flex-grow w-full max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8 overflow-y-auto",
            {children}
          }
          Footer {}
        }
      }
    }
}
