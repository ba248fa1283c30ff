use dioxus::prelude::*;

pub const INPUT_CLASS: &str = "w-full bg-exam-dark border-2 border-exam-violet rounded-lg p-3 text-exam-text placeholder-exam-text/40 focus:outline-none focus:border-exam-cyan focus:shadow-[0_0_10px_rgba(0,255,247,0.3)] transition-all";

#[derive(Props, Clone, PartialEq)]
pub struct Props {
    #[props(into)]
    label: String,
    #[props(into)]
    value: String,
    oninput: EventHandler<String>,
    #[props(optional, into, default = "text".to_string())]
    input_type: String,
    #[props(optional, into)]
    placeholder: String,
    /// Fired on Enter.
    #[props(optional)]
    on_enter: Option<EventHandler>,
}

#[component]
pub fn TextField(props: Props) -> Element {
    rsx! {
      div {
        label { class: "block text-xs font-semibold text-exam-cyan mb-1 uppercase tracking-wider",
          "{props.label}"
        }
        input {
          class: INPUT_CLASS,
          "type": "{props.input_type}",
          value: "{props.value}",
          placeholder: "{props.placeholder}",
          oninput: move |e| props.oninput.call(e.value()),
          onkeydown: move |e| {
              if e.key() == Key::Enter {
                  if let Some(on_enter) = props.on_enter {
                      on_enter.call(());
                  }
              }
          },
        }
      }
    }
}
