use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::result::{
    format_score, last_ten_exams, ExamHistoryEntry, LastExamResult, StudentProgress,
};

use crate::auth::{use_auth, Auth};
use crate::components::{ErrorPanel, ExamBars, Loader, ScoreRing, SplitDonut};

#[derive(Debug, Clone, PartialEq)]
struct Overview {
    progress: StudentProgress,
    last: Option<LastExamResult>,
    history: Vec<ExamHistoryEntry>,
}

async fn load_overview(auth: Auth) -> Result<Overview, String> {
    let client = auth.client().map_err(|e| e.to_string())?;
    let (progress, last, history) = futures::join!(
        auth.call(client.latest_progress()),
        auth.call(client.last_exam_result()),
        auth.call(client.all_results()),
    );

    let progress = progress.map_err(|e| {
        warn!("Failed to load progress: {}", e);
        e.user_message("Failed to load dashboard data. Please try again later.")
    })?;
    // A student without exams has no last result; the rest of the page still renders.
    let last = last
        .inspect_err(|e| warn!("No last exam result: {}", e))
        .ok();
    let history = history.unwrap_or_else(|e| {
        warn!("Failed to load exam history: {}", e);
        Vec::new()
    });

    Ok(Overview {
        progress,
        last,
        history,
    })
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut overview = use_resource(move || load_overview(auth));

    let state = overview.read().as_ref().cloned();
    let data = match state {
        None => return rsx! { Loader { label: "Loading dashboard..." } },
        Some(Err(message)) => {
            return rsx! {
              ErrorPanel {
                title: "Dashboard unavailable",
                message,
                on_retry: move |_| overview.restart(),
              }
            }
        }
        Some(Ok(data)) => data,
    };

    let progress = &data.progress;
    let cards = [
        ("Exams taken", progress.total_exams_taken.to_string()),
        ("Passed", progress.exams_passed.to_string()),
        ("Failed", progress.exams_failed.to_string()),
        ("Total points", format_score(progress.total_points)),
        ("Overall grade", if progress.overall_grade.is_empty() { "-".to_string() } else { progress.overall_grade.clone() }),
        ("Pass rate", format!("{}%", format_score(progress.pass_rate()))),
    ];
    let chart = last_ten_exams(&data.history);

    rsx! {
      div { class: "space-y-8",
        h1 { class: "text-3xl font-extrabold text-exam-cyan", "Dashboard" }

        div { class: "grid grid-cols-2 md:grid-cols-3 gap-4",
          for (label , value) in cards {
            div {
              key: "{label}",
              class: "p-5 rounded-2xl border-2 border-exam-violet bg-exam-panel/70",
              p { class: "text-xs uppercase tracking-wider text-exam-text/60", "{label}" }
              p { class: "text-3xl font-black text-exam-cyan mt-1", "{value}" }
            }
          }
        }

        div { class: "grid md:grid-cols-3 gap-6",
          section { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/70 flex flex-col items-center",
            h2 { class: "text-lg font-bold text-exam-pink mb-4 self-start", "Overall" }
            ScoreRing { percentage: progress.overall_percentage, caption: "overall" }
          }

          section { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/70 flex flex-col items-center",
            h2 { class: "text-lg font-bold text-exam-pink mb-4 self-start", "Pass / Fail" }
            SplitDonut {
              first: progress.exams_passed as f64,
              second: progress.exams_failed as f64,
              first_label: "Passed",
              second_label: "Failed",
            }
          }

          section { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/70",
            h2 { class: "text-lg font-bold text-exam-pink mb-4", "Latest result" }
            if let Some(last) = &data.last {
              p { class: "font-semibold mb-3", "{last.exam_title}" }
              dl { class: "grid grid-cols-2 gap-2 text-sm",
                dt { class: "text-exam-text/60", "Marks" }
                dd { "{format_score(last.obtained_marks)} / {format_score(last.total_marks)}" }
                dt { class: "text-exam-text/60", "Percentage" }
                dd { "{format_score(last.percentage)}%" }
                dt { class: "text-exam-text/60", "Grade" }
                dd { class: "font-bold text-exam-cyan", "{last.grade}" }
              }
            } else {
              p { class: "text-sm text-exam-text/60 italic", "No exams taken yet." }
            }
          }
        }

        section { class: "p-6 rounded-2xl border-2 border-exam-violet bg-exam-panel/70",
          h2 { class: "text-lg font-bold text-exam-pink mb-4", "Last ten exams" }
          ExamBars { points: chart }
        }
      }
    }
}
