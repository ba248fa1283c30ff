use dioxus::prelude::*;
use ui::ExamHistory;

use crate::Route;

#[component]
pub fn HistoryPage() -> Element {
    let nav = use_navigator();

    rsx! {
        ExamHistory {
            on_view: move |_| {
                nav.push(Route::ResultPage {});
            },
        }
    }
}
