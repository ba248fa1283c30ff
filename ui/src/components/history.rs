use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::result::{filter_history, format_score, ExamHistoryEntry, ExamStatus};

use crate::auth::{use_auth, Auth};
use crate::components::{ErrorPanel, Loader, INPUT_CLASS};
use crate::storage::handoff;

const LOAD_FAILED: &str = "Failed to load exam history. Please try again later.";

async fn load_history(auth: Auth) -> Result<Vec<ExamHistoryEntry>, String> {
    auth.call(async move { auth.client()?.all_results().await })
        .await
        .map_err(|e| {
            warn!("Failed to load exam history: {}", e);
            e.user_message(LOAD_FAILED)
        })
}

fn status_class(status: ExamStatus) -> &'static str {
    match status {
        ExamStatus::Completed => "bg-exam-cyan/15 text-exam-cyan border-exam-cyan",
        ExamStatus::InProgress => "bg-yellow-500/15 text-yellow-300 border-yellow-500",
        ExamStatus::Failed => "bg-red-500/15 text-red-300 border-red-500",
        ExamStatus::Unknown => "bg-exam-violet/15 text-exam-text/70 border-exam-violet",
    }
}

/// Every past exam with a title search. "View details" reopens the result.
#[component]
pub fn ExamHistory(on_view: EventHandler) -> Element {
    let auth = use_auth();
    let mut entries = use_resource(move || load_history(auth));
    let mut query = use_signal(String::new);

    let view = move |entry: ExamHistoryEntry| {
        let store = handoff();
        if let Some(attempt_id) = &entry.attempt_id {
            store.set_attempt_id(attempt_id);
        }
        if let Some(exam_id) = &entry.exam_id {
            store.set_exam_id(exam_id);
        }
        info!("Opening result of {}", entry.display_title());
        on_view.call(());
    };

    let state = entries.read().as_ref().cloned();
    let all = match state {
        None => return rsx! { Loader { label: "Loading history..." } },
        Some(Err(message)) => {
            return rsx! {
              ErrorPanel {
                title: "History unavailable",
                message,
                on_retry: move |_| entries.restart(),
              }
            }
        }
        Some(Ok(all)) => all,
    };
    let visible: Vec<ExamHistoryEntry> = filter_history(&all, &query.read())
        .into_iter()
        .cloned()
        .collect();

    rsx! {
      div { class: "space-y-6",
        div { class: "flex flex-wrap items-center justify-between gap-4",
          h1 { class: "text-3xl font-extrabold text-exam-cyan", "Exam History" }
          input {
            class: "{INPUT_CLASS} max-w-xs",
            "type": "search",
            placeholder: "Search by title...",
            value: "{query}",
            oninput: move |e| query.set(e.value()),
          }
        }

        if visible.is_empty() {
          p { class: "text-center text-exam-text/60 italic py-12",
            if all.is_empty() {
              "You haven't taken any exams yet."
            } else {
              "No exams match your search."
            }
          }
        }

        div { class: "overflow-x-auto rounded-2xl border-2 border-exam-violet",
          table { class: "w-full text-left text-sm",
            thead { class: "bg-exam-panel text-exam-text/70 uppercase text-xs",
              tr {
                th { class: "px-4 py-3", "Title" }
                th { class: "px-4 py-3", "Type" }
                th { class: "px-4 py-3", "Date" }
                th { class: "px-4 py-3", "Score" }
                th { class: "px-4 py-3", "Status" }
                th { class: "px-4 py-3" }
              }
            }
            tbody {
              for entry in visible {
                tr {
                  key: "{entry.key()}",
                  class: "border-t border-exam-violet/40 hover:bg-exam-panel/50",
                  td { class: "px-4 py-3 font-semibold", "{entry.display_title()}" }
                  td { class: "px-4 py-3", "{entry.kind_label()}" }
                  td { class: "px-4 py-3 font-mono", "{entry.date_label()}" }
                  td { class: "px-4 py-3", "{format_score(entry.percentage)}%" }
                  td { class: "px-4 py-3",
                    span { class: "px-2 py-1 rounded border text-xs {status_class(entry.status())}",
                      "{entry.status_label()}"
                    }
                  }
                  td { class: "px-4 py-3 text-right",
                    button {
                      class: "text-exam-cyan hover:underline cursor-pointer",
                      onclick: {
                          let entry = entry.clone();
                          move |_| view(entry.clone())
                      },
                      "View details"
                    }
                  }
                }
              }
            }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_colour() {
        let classes = [
            status_class(ExamStatus::Completed),
            status_class(ExamStatus::InProgress),
            status_class(ExamStatus::Failed),
            status_class(ExamStatus::Unknown),
        ];
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
