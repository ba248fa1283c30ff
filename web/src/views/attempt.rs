use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use shared::exam::QuestionType;
use ui::ExamAttempt;

use crate::Route;

/// Every exam kind shares one attempt page; `kind` only names it in the URL.
#[component]
pub fn AttemptPage(kind: String) -> Element {
    let nav = use_navigator();

    if QuestionType::from_api_name(&kind).is_none() {
        warn!("Unknown exam kind in route: {}", kind);
    }

    rsx! {
        ExamAttempt {
            on_result: move |_| {
                nav.replace(Route::ResultPage {});
            },
        }
    }
}
