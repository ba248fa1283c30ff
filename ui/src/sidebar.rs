use dioxus::prelude::*;

/// Classes for the router links placed inside [`Sidebar`].
pub const SIDEBAR_LINK_CLASS: &str = "flex items-center gap-3 px-4 py-3 rounded-lg text-exam-text/80 border border-transparent hover:border-exam-cyan hover:text-exam-cyan transition-colors";
pub const SIDEBAR_ACTIVE_CLASS: &str = "bg-exam-violet/30 border-exam-cyan text-exam-cyan";

#[component]
pub fn Sidebar(children: Element, on_logout: EventHandler) -> Element {
    let mut open = use_signal(|| false);
    let visibility = if open() { "translate-x-0" } else { "-translate-x-full md:translate-x-0" };

    rsx! {
      // Mobile toggle
      button {
        class: "md:hidden fixed top-4 left-4 z-40 p-2 rounded-lg bg-exam-panel border border-exam-cyan text-exam-cyan cursor-pointer",
        onclick: move |_| open.toggle(),
        if open() { "✕" } else { "☰" }
      }

      aside { class: "fixed md:sticky top-0 left-0 z-30 h-screen w-64 shrink-0 flex flex-col bg-exam-panel/90 border-r-2 border-exam-violet transition-transform {visibility}",
        div { class: "px-6 py-8 flex items-center gap-3",
          div { class: "w-10 h-10 rounded-lg bg-exam-pink flex items-center justify-center font-black text-black shadow-[0_0_15px_rgba(255,0,234,0.6)]",
            "E"
          }
          h1 { class: "text-2xl font-extrabold tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-exam-cyan to-exam-pink",
            "Examinie"
          }
        }

        nav {
          class: "flex-1 flex flex-col gap-1 px-3",
          onclick: move |_| open.set(false),
          {children}
        }

        button {
          class: "m-4 flex items-center gap-3 px-4 py-3 rounded-lg text-red-300 border border-red-500/40 hover:bg-red-500/20 transition-colors cursor-pointer",
          onclick: move |_| on_logout.call(()),
          span { "⏻" }
          span { "Logout" }
        }
      }
    }
}

/// Icon and label of one sidebar entry.
#[component]
pub fn SidebarLink(#[props(into)] icon: String, #[props(into)] label: String) -> Element {
    rsx! {
      span { class: "w-6 text-center", "{icon}" }
      span { class: "font-medium", "{label}" }
    }
}
