use dioxus::logger::tracing::info;
use dioxus::prelude::*;
use shared::exam::{Difficulty, ExamForm, QuestionType, MAX_DURATION_MINUTES, MAX_QUESTIONS};

use crate::components::{Button, INPUT_CLASS};
use crate::storage::handoff;

const LEVELS: [(u8, &str); 3] = [(1, "Easy"), (3, "Medium"), (5, "Hard")];

fn parse_number(value: &str, min: u32, max: u32) -> Option<u32> {
    value.trim().parse::<u32>().ok().map(|n| n.clamp(min, max))
}

/// Question type and exam parameters.
#[component]
pub fn ExamTypeSelection(on_continue: EventHandler) -> Element {
    let mut form = use_signal(|| {
        let exam_type = handoff().exam_type().unwrap_or(QuestionType::Mcq);
        ExamForm::new(exam_type)
    });

    let handle_continue = move |_: MouseEvent| {
        let params = form().into_parameters(handoff().selected_content_ids());
        handoff().store_exam_setup(&params);
        info!(
            "Exam setup stored: {} x {} questions",
            params.number_of_questions,
            params.exam_type.label()
        );
        on_continue.call(());
    };

    let current = form();
    let total = current.total_marks();
    let level = current.difficulty.level();

    rsx! {
      div { class: "space-y-8",
        h1 { class: "text-3xl font-extrabold text-exam-cyan", "Generate Exam" }

        section {
          h2 { class: "text-lg font-bold text-exam-pink mb-3", "Question type" }
          div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
            for kind in QuestionType::ALL {
              button {
                key: "{kind.api_name()}",
                class: if kind == current.exam_type { "p-5 rounded-2xl border-2 border-exam-cyan bg-exam-cyan/10 text-exam-cyan cursor-pointer" } else { "p-5 rounded-2xl border-2 border-exam-violet bg-exam-panel/70 hover:border-exam-pink cursor-pointer transition-colors" },
                onclick: move |_| form.write().exam_type = kind,
                div { class: "text-2xl font-black mb-2", "{kind.icon()}" }
                div { class: "font-semibold", "{kind.label()}" }
              }
            }
          }
        }

        section { class: "p-6 rounded-2xl border-2 border-exam-violet bg-exam-panel/70 grid md:grid-cols-2 gap-6",
          div {
            label { class: "block text-sm font-semibold mb-2", "Number of questions (1-{MAX_QUESTIONS})" }
            input {
              class: INPUT_CLASS,
              "type": "number",
              min: "1",
              max: "{MAX_QUESTIONS}",
              value: "{current.number_of_questions}",
              oninput: move |e| {
                  if let Some(n) = parse_number(&e.value(), 1, MAX_QUESTIONS) {
                      form.write().number_of_questions = n;
                  }
              },
            }
          }

          div {
            label { class: "block text-sm font-semibold mb-2", "Marks per question" }
            input {
              class: INPUT_CLASS,
              "type": "number",
              min: "1",
              value: "{current.marks_per_question}",
              oninput: move |e| {
                  if let Some(n) = parse_number(&e.value(), 1, u32::MAX) {
                      form.write().marks_per_question = n;
                  }
              },
            }
          }

          div {
            label { class: "block text-sm font-semibold mb-2", "Difficulty" }
            div { class: "flex gap-2",
              for (value , name) in LEVELS {
                button {
                  key: "{value}",
                  class: if value == level { "flex-1 py-2 rounded-lg border-2 border-exam-cyan text-exam-cyan bg-exam-cyan/10 cursor-pointer" } else { "flex-1 py-2 rounded-lg border-2 border-exam-violet hover:border-exam-pink cursor-pointer" },
                  onclick: move |_| form.write().difficulty = Difficulty::from_level(value),
                  "{name}"
                }
              }
            }
          }

          div {
            label { class: "flex items-center gap-3 text-sm font-semibold mb-2 cursor-pointer",
              input {
                "type": "checkbox",
                class: "w-5 h-5 accent-exam-cyan",
                checked: current.is_timed,
                onchange: move |e| form.write().is_timed = e.checked(),
              }
              "Timed exam"
            }
            if current.is_timed {
              input {
                class: INPUT_CLASS,
                "type": "number",
                min: "1",
                max: "{MAX_DURATION_MINUTES}",
                value: "{current.duration}",
                oninput: move |e| {
                    if let Some(n) = parse_number(&e.value(), 1, MAX_DURATION_MINUTES) {
                        form.write().duration = n;
                    }
                },
              }
              p { class: "text-xs text-exam-text/60 mt-1", "Minutes (1-{MAX_DURATION_MINUTES})" }
            } else {
              p { class: "text-sm text-exam-text/60", "No time limit" }
            }
          }
        }

        div { class: "flex items-center justify-between p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/70",
          div {
            p { class: "text-sm text-exam-text/70", "Total marks" }
            p { class: "text-3xl font-black text-exam-cyan", "{total}" }
          }
          Button { onclick: handle_continue, "Continue" }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_clamped_and_garbage_ignored() {
        assert_eq!(parse_number("250", 1, MAX_QUESTIONS), Some(100));
        assert_eq!(parse_number(" 0 ", 1, MAX_QUESTIONS), Some(1));
        assert_eq!(parse_number("12", 1, MAX_QUESTIONS), Some(12));
        assert_eq!(parse_number("", 1, MAX_QUESTIONS), None);
        assert_eq!(parse_number("-3", 1, MAX_QUESTIONS), None);
    }
}
