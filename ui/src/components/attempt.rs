//! Taking an exam: overview, countdown, answer entry and submission.
//!
//! The countdown and the manual Submit button go through the same
//! [`SubmitGuard`], so answers are posted at most once at a time and never
//! after the backend has accepted them.

use api::ApiError;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::attempt::{AnswerSheet, AttemptClock, SubmitGuard, SubmitOutcome, Tick};
use shared::exam::{ExamDetails, Question, QuestionType};

use crate::auth::{use_auth, Auth};
use crate::components::{Alert, Button, ButtonVariant, ErrorPanel, Loader, Modal, INPUT_CLASS};
use crate::hooks::sleep;
use crate::storage::handoff;

const TICK_MS: u32 = 1000;
const MISSING_EXAM: &str = "Missing exam ID or access token.";
const NO_QUESTIONS: &str =
    "This exam has no questions. Please contact your instructor or try again later.";

async fn load_exam(auth: Auth) -> Result<ExamDetails, String> {
    let (Some(exam_id), Some(_)) = (handoff().exam_id(), auth.token()) else {
        return Err(MISSING_EXAM.to_string());
    };
    let exam = auth
        .call(async move { auth.client()?.full_exam(&exam_id).await })
        .await
        .map_err(|e| {
            warn!("Failed to fetch exam: {}", e);
            format!("Failed to fetch exam details: {}", e.user_message(&e.to_string()))
        })?;
    if exam.questions.is_empty() {
        return Err(NO_QUESTIONS.to_string());
    }
    info!("Loaded exam {} with {} questions", exam.id, exam.questions.len());
    Ok(exam)
}

#[component]
pub fn ExamAttempt(on_result: EventHandler) -> Element {
    let auth = use_auth();
    let mut exam = use_resource(move || load_exam(auth));

    // Set once "Start Exam" succeeds.
    let mut active = use_signal(|| None::<ExamDetails>);
    let mut sheet = use_signal(AnswerSheet::default);
    let mut clock = use_signal(AttemptClock::untimed);
    let mut guard = use_signal(SubmitGuard::default);
    let mut submitted = use_signal(|| false);
    let mut error = use_signal(String::new);
    let mut starting = use_signal(|| false);

    let mut submit = move || {
        if !guard.write().try_begin() {
            return;
        }
        let Some(exam_id) = active.read().as_ref().map(|e| e.id.clone()) else {
            guard.write().finish(SubmitOutcome::Failed);
            return;
        };
        let answers = sheet.read().answers().to_vec();

        spawn(async move {
            error.set(String::new());
            let result = auth
                .call(async move { auth.client()?.submit_answers(&exam_id, answers).await })
                .await;
            let outcome = match result {
                Ok(()) => {
                    info!("Answers submitted");
                    submitted.set(true);
                    SubmitOutcome::Accepted
                }
                Err(ApiError::AlreadySubmitted) => {
                    error.set(ApiError::AlreadySubmitted.to_string());
                    SubmitOutcome::AlreadySubmitted
                }
                Err(e) => {
                    warn!("Submission failed: {}", e);
                    error.set(format!(
                        "Failed to submit answers: {}",
                        e.user_message("Please try again.")
                    ));
                    SubmitOutcome::Failed
                }
            };
            guard.write().finish(outcome);
        });
    };

    use_future(move || async move {
        loop {
            sleep(TICK_MS).await;
            if active.read().is_none() || guard.read().is_settled() {
                continue;
            }
            if clock.write().tick() == Tick::Expired {
                info!("Time is up, submitting answers");
                submit();
            }
        }
    });

    let start = move |details: ExamDetails| {
        if starting() {
            return;
        }
        spawn(async move {
            starting.set(true);
            error.set(String::new());
            let exam_id = details.id.clone();
            match auth
                .call(async move { auth.client()?.start_attempt(&exam_id).await })
                .await
            {
                Ok(attempt_id) => {
                    match attempt_id {
                        Some(id) => handoff().set_attempt_id(&id),
                        None => warn!("Attempt started without an id"),
                    }
                    sheet.set(AnswerSheet::for_exam(&details));
                    clock.set(AttemptClock::new(details.time_limit));
                    guard.set(SubmitGuard::default());
                    active.set(Some(details));
                }
                Err(e) => {
                    warn!("Failed to start attempt: {}", e);
                    error.set(format!(
                        "Failed to start exam: {}",
                        e.user_message("Please try again.")
                    ));
                }
            }
            starting.set(false);
        });
    };

    if let Some(details) = active() {
        return rsx! {
          AttemptView {
            exam: details,
            sheet,
            clock: clock(),
            guard: guard(),
            error: error(),
            on_submit: move |_| submit(),
            on_dismiss: move |_| error.set(String::new()),
          }
          if submitted() {
            Modal { header: rsx! { "Exam Submitted Successfully!" },
              p { class: "mb-6 text-exam-text/80", "Your answers have been recorded." }
              Button { class: "w-full", onclick: move |_| on_result.call(()), "See Result" }
            }
          } else if guard().is_settled() {
            div { class: "mt-6 text-center",
              Button {
                variant: ButtonVariant::Secondary,
                onclick: move |_| on_result.call(()),
                "See Result"
              }
            }
          }
        };
    }

    let state = exam.read().as_ref().cloned();
    match state {
        None => rsx! {
          Loader { label: "Loading exam..." }
        },
        Some(Err(message)) => rsx! {
          ErrorPanel {
            title: "Could not load exam",
            message,
            on_retry: move |_| exam.restart(),
          }
        },
        Some(Ok(details)) => {
            rsx! {
              Overview {
                exam: details.clone(),
                starting: starting(),
                error: error(),
                on_start: move |_| start(details.clone()),
              }
            }
        }
    }
}

#[component]
fn Overview(exam: ExamDetails, starting: bool, error: String, on_start: EventHandler) -> Element {
    let kind = exam
        .question_type()
        .map(|t| t.label())
        .unwrap_or(exam.questions_type.as_str())
        .to_string();
    let count = exam.questions.len();

    rsx! {
      div { class: "max-w-xl mx-auto p-8 rounded-2xl border-2 border-exam-cyan bg-exam-panel/80 shadow-2xl space-y-6",
        h1 { class: "text-3xl font-extrabold text-exam-cyan", "{exam.display_title()}" }
        dl { class: "grid grid-cols-2 gap-4",
          dt { class: "text-exam-text/70", "Type" }
          dd { class: "font-semibold", "{kind}" }
          dt { class: "text-exam-text/70", "Questions" }
          dd { class: "font-semibold", "{count}" }
          dt { class: "text-exam-text/70", "Total marks" }
          dd { class: "font-semibold", "{exam.total_marks}" }
          dt { class: "text-exam-text/70", "Time limit" }
          dd { class: "font-semibold", "{exam.time_limit_label()}" }
        }
        Alert { message: error }
        Button { class: "w-full", disabled: starting, onclick: move |_| on_start.call(()),
          if starting {
            "Starting..."
          } else {
            "Start Exam"
          }
        }
      }
    }
}

#[component]
fn AttemptView(
    exam: ExamDetails,
    mut sheet: Signal<AnswerSheet>,
    clock: AttemptClock,
    guard: SubmitGuard,
    error: String,
    on_submit: EventHandler,
    on_dismiss: EventHandler,
) -> Element {
    let current = sheet.read().current();
    let Some(question) = exam.questions.get(current).cloned() else {
        return rsx! {};
    };
    let total = exam.questions.len();
    let is_first = sheet.read().is_first();
    let is_last = sheet.read().is_last();
    let answered = sheet.read().answered_count();
    let response = sheet.read().response(current).unwrap_or_default().to_string();
    let is_coding = exam.question_type() == Some(QuestionType::CodingProblem);
    let low_time = clock.remaining_secs().is_some_and(|s| s <= 60);
    let locked = guard.is_in_flight() || guard.is_settled();

    rsx! {
      div { class: "grid lg:grid-cols-[1fr_16rem] gap-6",
        div { class: "space-y-6",
          div { class: "flex items-center justify-between",
            h1 { class: "text-2xl font-extrabold text-exam-cyan", "{exam.display_title()}" }
            if let Some(remaining) = clock.display() {
              span {
                class: if low_time { "px-4 py-2 rounded-lg font-mono text-xl border-2 border-red-500 text-red-300 animate-pulse" } else { "px-4 py-2 rounded-lg font-mono text-xl border-2 border-exam-cyan text-exam-cyan" },
                "{remaining}"
              }
            }
          }

          Alert { message: error, on_dismiss: move |_| on_dismiss.call(()) }

          QuestionCard {
            question: question.clone(),
            number: current + 1,
            total,
            response,
            is_coding,
            disabled: locked,
            on_answer: move |value: String| sheet.write().respond(&question.id, value),
          }

          div { class: "flex justify-between",
            Button {
              variant: ButtonVariant::Secondary,
              disabled: is_first,
              onclick: move |_| sheet.write().previous(),
              "Previous"
            }
            if is_last {
              Button { disabled: locked, onclick: move |_| on_submit.call(()),
                if guard.is_in_flight() {
                  "Submitting..."
                } else {
                  "Submit"
                }
              }
            } else {
              Button { onclick: move |_| sheet.write().next(), "Next" }
            }
          }
        }

        aside { class: "p-4 rounded-2xl border-2 border-exam-violet bg-exam-panel/70 h-fit",
          p { class: "text-sm text-exam-text/70 mb-3", "Answered {answered} of {total}" }
          div { class: "grid grid-cols-5 gap-2",
            for index in 0..total {
              button {
                key: "{index}",
                class: jump_class(index == current, sheet.read().is_answered(index)),
                onclick: move |_| sheet.write().jump(index),
                "{index + 1}"
              }
            }
          }
          Button {
            class: "w-full mt-4",
            disabled: locked,
            onclick: move |_| on_submit.call(()),
            "Submit Exam"
          }
        }
      }
    }
}

fn jump_class(current: bool, answered: bool) -> &'static str {
    match (current, answered) {
        (true, _) => "h-9 rounded border-2 border-exam-cyan bg-exam-cyan text-black font-bold cursor-pointer",
        (false, true) => "h-9 rounded border-2 border-exam-pink bg-exam-pink/20 text-exam-text cursor-pointer",
        (false, false) => "h-9 rounded border-2 border-exam-violet/60 text-exam-text/70 cursor-pointer",
    }
}

#[component]
fn QuestionCard(
    question: Question,
    number: usize,
    total: usize,
    response: String,
    is_coding: bool,
    disabled: bool,
    on_answer: EventHandler<String>,
) -> Element {
    let options = question.options();

    rsx! {
      div { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/80 space-y-5",
        p { class: "text-sm text-exam-text/60", "Question {number} of {total}" }

        if let Some(passage) = question.case_study.as_ref().filter(|p| !p.trim().is_empty()) {
          div { class: "p-4 rounded-lg bg-exam-dark/70 border-l-4 border-exam-pink whitespace-pre-wrap text-sm leading-relaxed",
            h3 { class: "font-bold text-exam-pink mb-2", "Case Study" }
            "{passage}"
          }
        }

        h2 { class: "text-lg font-semibold whitespace-pre-wrap", "{question.statement}" }

        if !options.is_empty() {
          div { class: "space-y-3",
            for (key , label) in options {
              button {
                key: "{key}",
                disabled,
                class: if response == key { "w-full text-left p-4 rounded-lg border-2 border-exam-cyan bg-exam-cyan/10 text-exam-cyan cursor-pointer" } else { "w-full text-left p-4 rounded-lg border-2 border-exam-violet/60 hover:border-exam-pink cursor-pointer transition-colors" },
                onclick: {
                    let key = key.clone();
                    move |_| on_answer.call(key.clone())
                },
                "{label}"
              }
            }
          }
        } else if is_coding {
          textarea {
            class: "{INPUT_CLASS} font-mono text-sm min-h-72 bg-black/60",
            spellcheck: "false",
            placeholder: "// Write your solution here",
            disabled,
            value: "{response}",
            oninput: move |e| on_answer.call(e.value()),
          }
        } else {
          textarea {
            class: "{INPUT_CLASS} min-h-48",
            placeholder: "Type your answer...",
            disabled,
            value: "{response}",
            oninput: move |e| on_answer.call(e.value()),
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jump_grid_marks_current_before_answered() {
        assert!(jump_class(true, true).contains("bg-exam-cyan"));
        assert!(jump_class(false, true).contains("border-exam-pink"));
        assert!(jump_class(false, false).contains("border-exam-violet"));
    }
}
