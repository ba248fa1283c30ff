use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum AlertKind {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn classes(&self) -> &'static str {
        match self {
            AlertKind::Error => "bg-red-900/20 border-red-500/60 text-red-300",
            AlertKind::Success => "bg-exam-cyan/10 border-exam-cyan text-exam-cyan",
            AlertKind::Info => "bg-exam-violet/10 border-exam-violet text-exam-text",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(into)]
    message: String,
    #[props(optional, default)]
    kind: AlertKind,
    /// Shows a close button when set.
    #[props(optional)]
    on_dismiss: Option<EventHandler>,
}

/// Inline message box. Renders nothing for an empty message.
#[component]
pub fn Alert(props: Props) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }
    let classes = props.kind.classes();

    rsx! {
      div { class: "mb-4 p-4 border-l-4 rounded-lg text-sm flex items-start gap-3 {classes}",
        span { class: "flex-1", "{props.message}" }
        if let Some(on_dismiss) = props.on_dismiss {
          button {
            class: "opacity-70 hover:opacity-100 cursor-pointer",
            onclick: move |_| on_dismiss.call(()),
            "✕"
          }
        }
      }
    }
}

/// Full-width error state with an optional retry action.
#[component]
pub fn ErrorPanel(
    #[props(into)] title: String,
    #[props(into)] message: String,
    on_retry: Option<EventHandler>,
) -> Element {
    rsx! {
      div { class: "max-w-md w-full mx-auto p-8 text-center rounded-2xl border-2 border-exam-pink bg-exam-panel/80 shadow-2xl",
        h2 { class: "text-2xl font-bold text-exam-pink mb-4", "{title}" }
        p { class: "text-exam-text mb-6", "{message}" }
        if let Some(on_retry) = on_retry {
          button {
            class: "neon-btn rounded-lg",
            onclick: move |_| on_retry.call(()),
            "Retry"
          }
        }
      }
    }
}

#[component]
pub fn Loader(#[props(into)] label: String) -> Element {
    rsx! {
      div { class: "flex flex-col items-center justify-center py-16 gap-4",
        div { class: "animate-spin rounded-full h-14 w-14 border-t-4 border-b-4 border-exam-cyan" }
        p { class: "text-exam-cyan font-medium animate-pulse", "{label}" }
      }
    }
}
