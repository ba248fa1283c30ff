use dioxus::prelude::*;
use shared::exam::QuestionType;
use ui::ExamGeneration;

use crate::Route;

#[component]
pub fn GenerationPage() -> Element {
    let nav = use_navigator();

    rsx! {
        ExamGeneration {
            on_generated: move |kind: QuestionType| {
                nav.replace(Route::AttemptPage {
                    kind: kind.route_segment(),
                });
            },
        }
    }
}
