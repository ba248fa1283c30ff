use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::profile::StudentProfile;

use crate::auth::{use_auth, Auth};
use crate::components::{ErrorPanel, Loader};

const LOAD_FAILED: &str = "Failed to load profile data. Please try again later.";

#[derive(Debug, Clone, PartialEq)]
enum ProfileError {
    Unauthorized,
    Failed,
}

async fn load_profile(auth: Auth) -> Result<StudentProfile, ProfileError> {
    auth.call(async move { auth.client()?.student_profile().await })
        .await
        .map_err(|e| {
            warn!("Failed to load profile: {}", e);
            if e.is_unauthorized() {
                ProfileError::Unauthorized
            } else {
                ProfileError::Failed
            }
        })
}

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

#[component]
pub fn Profile(on_unauthorized: EventHandler) -> Element {
    let auth = use_auth();
    let mut profile = use_resource(move || load_profile(auth));

    use_effect(move || {
        if let Some(Err(ProfileError::Unauthorized)) = &*profile.read() {
            on_unauthorized.call(());
        }
    });

    let state = profile.read().as_ref().cloned();
    let student = match state {
        None => return rsx! { Loader { label: "Loading profile..." } },
        Some(Err(ProfileError::Unauthorized)) => return rsx! {},
        Some(Err(ProfileError::Failed)) => {
            return rsx! {
              ErrorPanel {
                title: "Profile unavailable",
                message: LOAD_FAILED,
                on_retry: move |_| profile.restart(),
              }
            }
        }
        Some(Ok(student)) => student,
    };

    let sections = [
        (
            "Personal",
            vec![
                ("Age", student.age.to_string()),
                ("Gender", student.gender.clone()),
                ("Country", student.country.clone()),
            ],
        ),
        (
            "Learning style",
            vec![
                ("Social interaction", student.social_interaction_style.clone()),
                ("Decision making", student.decision_making_approach.clone()),
                ("Free time", student.free_time_activities.clone()),
                ("Motivation", student.motivation_to_study.clone()),
            ],
        ),
        (
            "Academics",
            vec![
                ("Education level", student.current_level_of_education.clone()),
                ("Last grade", student.last_grade.clone()),
                ("Favorite subject", student.favorite_subject.clone()),
                ("Career paths", student.interested_career_paths.clone()),
            ],
        ),
        (
            "Goals",
            vec![
                ("Short term", student.short_term_academic_goals.clone()),
                ("Long term", student.long_term_academic_goals.clone()),
            ],
        ),
    ];

    rsx! {
      div { class: "space-y-8",
        div { class: "flex items-center gap-6 p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/70",
          div { class: "w-20 h-20 rounded-full bg-gradient-to-br from-exam-cyan to-exam-pink flex items-center justify-center text-4xl font-black text-black",
            "{student.initial()}"
          }
          div {
            h1 { class: "text-3xl font-extrabold text-exam-cyan", "{or_dash(&student.name)}" }
            p { class: "text-exam-text/70", "{or_dash(&student.email)}" }
            p { class: "text-xs text-exam-text/50 mt-1", "Member since {student.member_since()}" }
          }
        }

        if !student.profile_summary.trim().is_empty() {
          section { class: "p-6 rounded-2xl border-2 border-exam-violet bg-exam-panel/70",
            h2 { class: "text-lg font-bold text-exam-pink mb-2", "Summary" }
            p { class: "whitespace-pre-wrap leading-relaxed", "{student.profile_summary}" }
          }
        }

        div { class: "grid md:grid-cols-2 gap-6",
          for (title , rows) in sections {
            section {
              key: "{title}",
              class: "p-6 rounded-2xl border-2 border-exam-violet bg-exam-panel/70",
              h2 { class: "text-lg font-bold text-exam-pink mb-4", "{title}" }
              dl { class: "space-y-3",
                for (label , value) in rows {
                  div { key: "{label}", class: "flex justify-between gap-4",
                    dt { class: "text-exam-text/60", "{label}" }
                    dd { class: "font-semibold text-right capitalize", "{or_dash(&value)}" }
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
    fn blank_fields_render_as_dash() {
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Physics"), "Physics");
    }
}
