use auth::AuthProvider;
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;
use shared::auth::{guard_action, GuardAction, RedirectReason};

use ui::{
    use_auth, verify_session, AppShell, Loader, Sidebar, SidebarLink, SIDEBAR_ACTIVE_CLASS,
    SIDEBAR_LINK_CLASS,
};
use views::{
    AttemptPage, ContentPage, DashboardPage, ExamTypePage, GenerationPage, HistoryPage, LoginPage,
    OnboardingPage, ProfilePage, ResultPage, SignupPage,
};

mod auth;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:reason")]
    LoginPage { reason: String },
    #[route("/signup")]
    SignupPage {},

    #[layout(AuthGuard)]
        #[route("/onboarding")]
        OnboardingPage {},

        #[layout(Shell)]
            #[route("/")]
            Home {},
            #[route("/dashboard")]
            DashboardPage {},
            #[route("/content")]
            ContentPage {},
            #[route("/exam-type")]
            ExamTypePage {},
            #[route("/exam-generation")]
            GenerationPage {},
            #[route("/exam/:kind")]
            AttemptPage { kind: String },
            #[route("/result")]
            ResultPage {},
            #[route("/history")]
            HistoryPage {},
            #[route("/profile")]
            ProfilePage {},
}

impl Route {
    pub fn login(reason: RedirectReason) -> Self {
        Route::LoginPage {
            reason: reason.as_query().to_string(),
        }
    }

    /// "Retake" keeps the stored exam setup and generates a fresh exam.
    pub fn retake() -> Self {
        Route::GenerationPage {}
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Examinie" }

        AuthProvider { Router::<Route> {} }
    }
}

/// Checks the session whenever a protected route is entered.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let check = use_resource(use_reactive!(|route| async move {
        debug!("Checking session for {}", route);
        verify_session(auth, chrono::Utc::now().timestamp()).await
    }));

    let action = move || guard_action(*check.read(), auth.is_logged_in(), auth.signed_out());

    use_effect(move || {
        if let GuardAction::Login(reason) = action() {
            nav.replace(Route::LoginPage {
                reason: reason.map(|r| r.as_query().to_string()).unwrap_or_default(),
            });
        }
    });

    match action() {
        GuardAction::Render => rsx! {
            Outlet::<Route> {}
        },
        _ => rsx! {
            div { class: "min-h-screen flex items-center justify-center",
                Loader { label: "Checking your session..." }
            }
        },
    }
}

#[component]
fn Shell() -> Element {
    let mut auth = use_auth();

    // The guard takes the student to /login once the session is gone.
    let logout = move |_: ()| auth.sign_out();

    let links = [
        (Route::DashboardPage {}, "▦", "Dashboard"),
        (Route::ContentPage {}, "⇪", "Upload Content"),
        (Route::ExamTypePage {}, "✎", "Generate Exam"),
        (Route::HistoryPage {}, "◷", "History"),
        (Route::ProfilePage {}, "☺", "Profile"),
    ];

    rsx! {
        AppShell {
            sidebar: rsx! {
                Sidebar { on_logout: logout,
                    for (to , icon , label) in links {
                        Link {
                            key: "{label}",
                            class: SIDEBAR_LINK_CLASS,
                            active_class: SIDEBAR_ACTIVE_CLASS,
                            to,
                            SidebarLink { icon, label }
                        }
                    }
                }
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    let nav = use_navigator();
    use_effect(move || {
        nav.replace(Route::DashboardPage {});
    });
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retake_returns_to_exam_generation() {
        assert_eq!(Route::retake(), Route::GenerationPage {});
        assert_eq!(Route::retake().to_string(), "/exam-generation");
    }

    #[test]
    fn login_route_carries_the_reason() {
        assert_eq!(
            Route::login(RedirectReason::SessionExpired),
            Route::LoginPage {
                reason: "session_expired".to_string()
            }
        );
    }
}
