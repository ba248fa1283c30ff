use dioxus::prelude::*;
use ui::ContentSelection;

use crate::Route;

#[component]
pub fn ContentPage() -> Element {
    let nav = use_navigator();

    rsx! {
        ContentSelection {
            on_continue: move |_| {
                nav.push(Route::ExamTypePage {});
            },
        }
    }
}
