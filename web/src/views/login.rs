use dioxus::prelude::*;
use shared::auth::{skip_login_page, RedirectReason};
use ui::{use_auth, Login, LoginOutcome};

use crate::Route;

#[component]
pub fn LoginPage(reason: String) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let reason = RedirectReason::from_query(&reason);

    // Untracked, so a login completing on this page does not re-trigger it.
    use_effect(move || {
        if skip_login_page(auth.had_session(), reason) {
            nav.replace(Route::DashboardPage {});
        }
    });

    rsx! {
        Login {
            reason,
            on_done: move |outcome| match outcome {
                LoginOutcome::Dashboard => {
                    nav.replace(Route::DashboardPage {});
                }
                LoginOutcome::Onboarding => {
                    nav.replace(Route::OnboardingPage {});
                }
            },
            on_signup: move |_| {
                nav.push(Route::SignupPage {});
            },
        }
    }
}
