use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Called on backdrop click and on the close button. Without it the
    /// modal can only be left through its own actions.
    #[props(optional)]
    pub on_close: Option<EventHandler>,
    /// The content to be displayed inside the modal
    pub children: Element,
    /// The header of the modal
    pub header: Element,
}

#[component]
pub fn Modal(props: Props) -> Element {
    let close = move |_| {
        if let Some(on_close) = props.on_close {
            on_close.call(());
        }
    };

    rsx! {
      // Backdrop
      div {
        class: "fixed inset-0 bg-black/70 backdrop-blur-sm z-40 transition-opacity",
        onclick: close,
      }

      div { class: "fixed inset-0 flex items-center justify-center z-50 pointer-events-none p-4",
        div {
          class: "bg-exam-panel/95 border-2 border-exam-cyan max-h-[85vh] overflow-hidden flex flex-col rounded-2xl shadow-2xl max-w-lg w-full pointer-events-auto",
          onclick: move |event| event.stop_propagation(),
          div { class: "flex items-center justify-between p-4 border-b border-exam-cyan/30",
            div { class: "flex-1 min-w-0 text-exam-text font-bold", {props.header} }
            if props.on_close.is_some() {
              button {
                class: "text-exam-text/60 hover:text-exam-text transition-colors ml-4 cursor-pointer",
                onclick: close,
                "✕"
              }
            }
          }
          div { class: "overflow-y-auto p-6 text-exam-text", {props.children} }
        }
      }
    }
}
