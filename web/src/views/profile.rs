use dioxus::prelude::*;
use shared::auth::RedirectReason;
use ui::Profile;

use crate::Route;

#[component]
pub fn ProfilePage() -> Element {
    let nav = use_navigator();

    rsx! {
        Profile {
            on_unauthorized: move |_| {
                nav.replace(Route::login(RedirectReason::SessionExpired));
            },
        }
    }
}
