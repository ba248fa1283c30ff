use dioxus::prelude::*;
use ui::ExamTypeSelection;

use crate::Route;

#[component]
pub fn ExamTypePage() -> Element {
    let nav = use_navigator();

    rsx! {
        ExamTypeSelection {
            on_continue: move |_| {
                nav.push(Route::GenerationPage {});
            },
        }
    }
}
