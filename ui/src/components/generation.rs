use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::exam::{CreateExamRequest, QuestionType};

use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant, Modal};
use crate::hooks::sleep;
use crate::storage::handoff;

const MISSING_SETUP: &str =
    "Missing authentication token, exam parameters, content IDs, or exam type";
const GENERATION_FAILED: &str = "Failed to generate exam";
const REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Success(String),
    Failure(String),
}

/// Summary of the stored exam setup and the "Generate" action.
#[component]
pub fn ExamGeneration(on_generated: EventHandler<QuestionType>) -> Element {
    let auth = use_auth();
    let params = use_signal(|| handoff().exam_parameters());
    let mut notice = use_signal(|| None::<Notice>);
    let mut busy = use_signal(|| false);

    let generate = move |_: MouseEvent| {
        if busy() {
            return;
        }
        let store = handoff();
        let ids = store.selected_content_ids();
        let setup = match (auth.token(), params(), store.exam_type()) {
            (Some(_), Some(params), Some(exam_type)) if !ids.is_empty() => Some((params, exam_type)),
            _ => None,
        };
        let Some((params, exam_type)) = setup else {
            notice.set(Some(Notice::Failure(MISSING_SETUP.to_string())));
            return;
        };
        let request = CreateExamRequest::new(&params, ids);

        spawn(async move {
            busy.set(true);
            notice.set(None);
            let created = auth
                .call(async move { auth.client()?.create_exam(&request).await })
                .await;
            match created {
                Ok(exam) => {
                    handoff().set_exam_id(&exam.id);
                    info!("Exam {} ready", exam.id);
                    notice.set(Some(Notice::Success(
                        "Exam generated successfully! Redirecting...".to_string(),
                    )));
                    sleep(REDIRECT_DELAY_MS).await;
                    on_generated.call(exam_type);
                }
                Err(e) => {
                    warn!("Exam generation failed: {}", e);
                    notice.set(Some(Notice::Failure(e.user_message(GENERATION_FAILED))));
                    busy.set(false);
                }
            }
        });
    };

    let Some(summary) = params() else {
        return rsx! {
          div { class: "max-w-xl mx-auto p-8 text-center rounded-2xl border-2 border-exam-pink bg-exam-panel/80",
            h2 { class: "text-2xl font-bold text-exam-pink mb-2", "No exam setup found" }
            p { class: "text-exam-text/80", "Choose a question type and parameters first." }
          }
        };
    };

    let rows = [
        ("Question type", summary.exam_type.label().to_string()),
        ("Number of questions", summary.number_of_questions.to_string()),
        ("Difficulty", summary.difficulty.as_str().to_string()),
        ("Time limit", summary.time_limit_label()),
        ("Marks per question", summary.marks_per_question.to_string()),
        ("Total marks", summary.total_marks.to_string()),
    ];

    rsx! {
      div { class: "max-w-2xl mx-auto space-y-6",
        h1 { class: "text-3xl font-extrabold text-exam-cyan", "Exam Summary" }

        div { class: "rounded-2xl border-2 border-exam-violet bg-exam-panel/70 divide-y divide-exam-violet/40",
          for (label , value) in rows {
            div { key: "{label}", class: "flex justify-between px-6 py-4",
              span { class: "text-exam-text/70", "{label}" }
              span { class: "font-semibold capitalize", "{value}" }
            }
          }
        }

        Button { class: "w-full", disabled: busy(), onclick: generate,
          if busy() {
            "Generating..."
          } else {
            "Generate Exam"
          }
        }

        match notice() {
            Some(Notice::Success(message)) => rsx! {
              Modal { header: rsx! { "Exam ready" },
                p { class: "text-exam-cyan", "{message}" }
              }
            },
            Some(Notice::Failure(message)) => rsx! {
              Modal {
                header: rsx! { "Generation failed" },
                on_close: move |_| notice.set(None),
                p { class: "text-red-300 mb-6", "{message}" }
                Button {
                  variant: ButtonVariant::Secondary,
                  onclick: move |_| notice.set(None),
                  "Cancel"
                }
              }
            },
            None => rsx! {},
        }
      }
    }
}
