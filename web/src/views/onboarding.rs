use dioxus::prelude::*;
use ui::Onboarding;

use crate::Route;

#[component]
pub fn OnboardingPage() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "min-h-screen py-10 px-4",
            Onboarding {
                on_done: move |_| {
                    nav.replace(Route::DashboardPage {});
                },
            }
        }
    }
}
