use dioxus::prelude::*;
use ui::ResultView;

use crate::Route;

#[component]
pub fn ResultPage() -> Element {
    let nav = use_navigator();

    rsx! {
        ResultView {
            on_dashboard: move |_| {
                nav.push(Route::DashboardPage {});
            },
            on_retake: move |_| {
                nav.push(Route::retake());
            },
        }
    }
}
