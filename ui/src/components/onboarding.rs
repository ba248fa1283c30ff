use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::profile::{OnboardingState, QUESTIONS};

use crate::auth::use_auth;
use crate::components::{Alert, Button, ButtonVariant};

const SUBMIT_FAILED: &str = "Failed to save your profile. Please try again.";

/// Thirteen-question profile questionnaire shown after the first login.
#[component]
pub fn Onboarding(on_done: EventHandler) -> Element {
    let auth = use_auth();
    let mut state = use_signal(OnboardingState::default);
    let mut error = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |_: MouseEvent| {
        let request = match state.read().to_request() {
            Ok(request) => request,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        spawn(async move {
            busy.set(true);
            error.set(String::new());
            let saved = auth
                .call(async move { auth.client()?.create_profile(&request).await })
                .await;
            match saved {
                Ok(_) => {
                    info!("Student profile created");
                    on_done.call(());
                }
                Err(e) => {
                    warn!("Profile creation failed: {}", e);
                    error.set(e.user_message(SUBMIT_FAILED));
                }
            }
            busy.set(false);
        });
    };

    let current = state.read();
    let question = current.question();
    let selected = current.current_answer().unwrap_or_default().to_string();
    let additional = current.visible_additional();
    let progress = current.progress();
    let position = current.index() + 1;
    let is_first = current.is_first();
    let is_last = current.is_last();
    let answered = current.is_answered();
    drop(current);
    let total = QUESTIONS.len();

    rsx! {
      div { class: "flex flex-col items-center justify-center min-h-screen bg-exam-dark text-exam-text px-4 py-10",
        div { class: "w-full max-w-2xl",
          div { class: "mb-6",
            div { class: "flex justify-between text-sm mb-2 text-exam-text/70",
              span { "Question {position} of {total}" }
              span { "{progress}%" }
            }
            div { class: "h-2 w-full bg-exam-panel rounded-full overflow-hidden",
              div {
                class: "h-full bg-gradient-to-r from-exam-cyan to-exam-pink transition-all duration-300",
                style: "width: {progress}%",
              }
            }
          }

          div { class: "p-8 bg-exam-panel/90 border-2 border-exam-cyan rounded-2xl shadow-2xl",
            div { class: "flex items-center gap-4 mb-6",
              span { class: "text-4xl", "{question.icon}" }
              h2 { class: "text-2xl font-bold", "{question.prompt}" }
            }

            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
              for option in question.options.iter().copied() {
                button {
                  key: "{option}",
                  class: if selected == option { "p-4 rounded-lg border-2 border-exam-cyan bg-exam-cyan/10 text-exam-cyan text-left cursor-pointer" } else { "p-4 rounded-lg border-2 border-exam-violet/60 hover:border-exam-pink text-left cursor-pointer transition-colors" },
                  onclick: move |_| state.write().select(option),
                  "{option}"
                }
              }
            }

            if !additional.is_empty() {
              div { class: "mt-6",
                p { class: "text-sm text-exam-text/70 mb-3", "Choose one:" }
                div { class: "grid grid-cols-2 sm:grid-cols-3 gap-2 max-h-64 overflow-y-auto pr-1",
                  for option in additional.iter().copied() {
                    button {
                      key: "{option}",
                      class: "px-3 py-2 rounded-lg border border-exam-violet/60 hover:border-exam-cyan hover:text-exam-cyan text-sm cursor-pointer",
                      onclick: move |_| state.write().select_additional(option),
                      "{option}"
                    }
                  }
                }
              }
            }

            div { class: "mt-6",
              Alert { message: error(), on_dismiss: move |_| error.set(String::new()) }
            }

            div { class: "flex justify-between mt-4",
              Button {
                variant: ButtonVariant::Secondary,
                disabled: is_first,
                onclick: move |_| state.write().previous(),
                "Previous"
              }
              if is_last {
                Button { disabled: !answered || busy(), onclick: submit,
                  if busy() {
                    "Submitting..."
                  } else {
                    "Submit"
                  }
                }
              } else {
                Button {
                  disabled: !answered,
                  onclick: move |_| {
                      state.write().next();
                  },
                  "Next"
                }
              }
            }
          }
        }
      }
    }
}
