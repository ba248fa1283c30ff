use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::card::{pdf_data_url, render_result_card, PersonalDetails, FILE_NAME};
use shared::result::{format_score, QuestionResult, ResultData, INCOMPLETE_RESULT};

use crate::auth::{use_auth, Auth};
use crate::components::{Button, ButtonVariant, ErrorPanel, Loader, SplitDonut, TextField};
use crate::storage::handoff;

const MISSING_DATA: &str = "Missing required data (exam ID, attempt ID, or access token). Please try again or retake the exam.";

/// Cached result for the current attempt, else complete the attempt and have
/// the backend grade it.
async fn fetch_result(auth: Auth) -> Result<ResultData, String> {
    let store = handoff();
    let (Some(exam_id), Some(attempt_id), Some(_)) =
        (store.exam_id(), store.attempt_id(), auth.token())
    else {
        return Err(MISSING_DATA.to_string());
    };

    if let Some(cached) = store.cached_result(&attempt_id) {
        info!("Using cached result for attempt {}", attempt_id);
        return Ok(cached);
    }

    let (exam, attempt) = (exam_id.clone(), attempt_id.clone());
    auth.call(async move { auth.client()?.complete_attempt(&exam, &attempt).await })
        .await
        .map_err(|e| {
            warn!("Completing attempt failed: {}", e);
            format!("Failed to complete the exam: {}", e.user_message(&e.to_string()))
        })?;

    let attempt = attempt_id.clone();
    let data = auth
        .call(async move { auth.client()?.generate_result(&attempt).await })
        .await
        .map_err(|e| {
            warn!("Result generation failed: {}", e);
            format!("Failed to fetch result: {}", e.user_message(&e.to_string()))
        })?;

    if !data.is_complete() {
        return Err(INCOMPLETE_RESULT.to_string());
    }
    store.cache_result(&attempt_id, &data);
    info!("Result for attempt {} ready", attempt_id);
    Ok(data)
}

#[derive(Debug, Clone, PartialEq)]
enum Phase {
    Details,
    Loading,
    Ready(ResultData),
    Failed(String),
}

#[component]
pub fn ResultView(on_dashboard: EventHandler, on_retake: EventHandler) -> Element {
    let auth = use_auth();
    let mut phase = use_signal(|| Phase::Details);
    let mut details = use_signal(|| handoff().personal_details());

    let load = move || {
        spawn(async move {
            phase.set(Phase::Loading);
            match fetch_result(auth).await {
                Ok(data) => phase.set(Phase::Ready(data)),
                Err(message) => phase.set(Phase::Failed(message)),
            }
        });
    };

    let retry = move |_: ()| {
        handoff().drop_cached_result();
        load();
    };

    let retake = move || {
        handoff().clear_attempt();
        on_retake.call(());
    };

    match phase() {
        Phase::Details => rsx! {
          DetailsForm {
            details: details(),
            on_save: move |saved: PersonalDetails| {
                handoff().store_personal_details(&saved);
                details.set(saved);
                load();
            },
            on_skip: move |_| load(),
          }
        },
        Phase::Loading => rsx! {
          Loader { label: "Generating your result..." }
        },
        Phase::Failed(message) => rsx! {
          div { class: "flex flex-col items-center gap-6 py-10",
            ErrorPanel { title: "Result unavailable", message, on_retry: retry }
            div { class: "flex gap-3",
              Button { variant: ButtonVariant::Secondary, onclick: move |_| retake(), "Retake Exam" }
              Button { variant: ButtonVariant::Secondary, onclick: move |_| on_dashboard.call(()), "Dashboard" }
            }
          }
        },
        Phase::Ready(data) => rsx! {
          ResultReport {
            data,
            details: details(),
            on_retake: move |_| retake(),
            on_dashboard: move |_| on_dashboard.call(()),
          }
        },
    }
}

#[component]
fn DetailsForm(
    details: PersonalDetails,
    on_save: EventHandler<PersonalDetails>,
    on_skip: EventHandler,
) -> Element {
    let mut form = use_signal(|| details.clone());

    rsx! {
      div { class: "max-w-xl mx-auto p-8 rounded-2xl border-2 border-exam-cyan bg-exam-panel/80 space-y-5",
        h1 { class: "text-2xl font-extrabold text-exam-cyan", "Personal Details" }
        p { class: "text-sm text-exam-text/70", "These appear on your downloadable result card." }

        TextField {
          label: "Name",
          value: form.read().name.clone(),
          oninput: move |v| form.write().name = v,
        }
        TextField {
          label: "Father Name",
          value: form.read().father_name.clone(),
          oninput: move |v| form.write().father_name = v,
        }
        div { class: "grid grid-cols-2 gap-4",
          TextField {
            label: "Age",
            value: form.read().age.clone(),
            oninput: move |v| form.write().age = v,
          }
          TextField {
            label: "Class",
            value: form.read().class_name.clone(),
            oninput: move |v| form.write().class_name = v,
          }
        }
        TextField {
          label: "Email",
          input_type: "email",
          value: form.read().email.clone(),
          oninput: move |v| form.write().email = v,
        }
        TextField {
          label: "Number",
          input_type: "tel",
          value: form.read().number.clone(),
          oninput: move |v| form.write().number = v,
        }

        div { class: "flex justify-end gap-3 pt-2",
          Button {
            variant: ButtonVariant::Secondary,
            onclick: move |_| on_skip.call(()),
            "Skip"
          }
          Button { onclick: move |_| on_save.call(form()), "Save" }
        }
      }
    }
}

#[component]
fn ResultReport(
    data: ResultData,
    details: PersonalDetails,
    on_retake: EventHandler,
    on_dashboard: EventHandler,
) -> Element {
    let Some(overall) = data.overall_result.clone() else {
        return rsx! {
          ErrorPanel { title: "Result unavailable", message: INCOMPLETE_RESULT }
        };
    };
    let (obtained, remaining) = data.pie_split();
    let card_url = pdf_data_url(&render_result_card(&details, &overall));
    let title = if overall.exam_title.is_empty() {
        "Exam Result".to_string()
    } else {
        overall.exam_title.clone()
    };
    let stats = [
        ("Total Marks", format_score(overall.total_marks)),
        ("Obtained", format_score(overall.obtained_marks)),
        ("Percentage", format!("{}%", format_score(overall.percentage))),
        ("Grade", overall.grade.clone()),
    ];

    rsx! {
      div { class: "space-y-8",
        div { class: "flex flex-wrap items-center justify-between gap-4",
          h1 { class: "text-3xl font-extrabold text-exam-cyan", "{title}" }
          div { class: "flex flex-wrap gap-3",
            a {
              class: "neon-btn rounded-lg",
              href: "{card_url}",
              download: FILE_NAME,
              "Download Result Card"
            }
            Button {
              variant: ButtonVariant::Secondary,
              onclick: move |_| on_retake.call(()),
              "Retake Exam"
            }
            Button {
              variant: ButtonVariant::Secondary,
              onclick: move |_| on_dashboard.call(()),
              "Dashboard"
            }
          }
        }

        div { class: "grid md:grid-cols-[auto_1fr] gap-8 items-center p-6 rounded-2xl border-2 border-exam-violet bg-exam-panel/70",
          SplitDonut {
            first: obtained,
            second: remaining,
            first_label: "Obtained",
            second_label: "Remaining",
          }
          div { class: "grid grid-cols-2 gap-4",
            for (label , value) in stats {
              div {
                key: "{label}",
                class: "p-4 rounded-xl border border-exam-cyan/40 bg-exam-dark/60",
                p { class: "text-xs uppercase tracking-wider text-exam-text/60", "{label}" }
                p { class: "text-2xl font-black text-exam-cyan", "{value}" }
              }
            }
          }
        }

        section { class: "space-y-4",
          h2 { class: "text-xl font-bold text-exam-pink", "Question breakdown" }
          for (index , question) in data.question_results.iter().enumerate() {
            QuestionRow { key: "{index}", number: index + 1, question: question.clone() }
          }
        }
      }
    }
}

#[component]
fn QuestionRow(number: usize, question: QuestionResult) -> Element {
    let marks_class = if question.is_full_marks() {
        "text-exam-cyan"
    } else {
        "text-exam-pink"
    };
    let obtained = format_score(question.obtained_marks);
    let total = format_score(question.total_marks);

    rsx! {
      article { class: "p-5 rounded-2xl border-2 border-exam-violet/60 bg-exam-panel/60 space-y-3",
        div { class: "flex justify-between gap-4",
          h3 { class: "font-semibold whitespace-pre-wrap", "{number}. {question.statement}" }
          span { class: "shrink-0 font-mono {marks_class}", "{obtained} / {total}" }
        }
        p { class: "text-sm",
          span { class: "text-exam-text/60", "Your answer: " }
          span { class: "whitespace-pre-wrap", "{question.response_label()}" }
        }
        if !question.feedback.is_empty() {
          p { class: "text-sm p-3 rounded-lg bg-exam-dark/60 border-l-4 border-exam-cyan whitespace-pre-wrap",
            "{question.feedback}"
          }
        }
      }
    }
}
