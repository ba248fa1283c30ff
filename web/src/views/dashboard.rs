use dioxus::prelude::*;
use ui::Dashboard;

#[component]
pub fn DashboardPage() -> Element {
    rsx! {
        Dashboard {}
    }
}
