use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
      footer { class: "py-4 text-center border-t border-exam-cyan/10",
        p { class: "text-[11px] uppercase tracking-widest text-exam-text/40",
          "Examinie · AI generated exams from your own material"
        }
      }
    }
}
