use api::{ApiClient, ApiError};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::auth::RedirectReason;

use crate::auth::use_auth;
use crate::components::{Alert, AlertKind, TextField};

const LOGIN_FAILED: &str = "Invalid login credentials.";
const PROFILE_CHECK_FAILED: &str = "Failed to verify user profile. Please try again.";

/// Where a successful login continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Dashboard,
    /// No student profile yet.
    Onboarding,
}

/// Where the profile lookup after a login sends the student.
fn profile_outcome<T>(profile: &Result<T, ApiError>) -> Result<LoginOutcome, &'static str> {
    match profile {
        Ok(_) => Ok(LoginOutcome::Dashboard),
        Err(ApiError::ProfileNotFound) => Ok(LoginOutcome::Onboarding),
        Err(_) => Err(PROFILE_CHECK_FAILED),
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Why the guard sent the user here.
    #[props(!optional)]
    reason: Option<RedirectReason>,
    on_done: EventHandler<LoginOutcome>,
    on_signup: EventHandler,
}

#[component]
pub fn Login(props: Props) -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(String::new);
    let mut status = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let on_done = props.on_done;

    let handle_login = move || {
        if busy() {
            return;
        }
        let user = email.read().trim().to_string();
        let pass = password.read().to_string();
        spawn(async move {
            busy.set(true);
            error.set(String::new());
            status.set(String::new());

            let response = match ApiClient::with_token(None) {
                Ok(client) => client.login(&user, &pass).await,
                Err(e) => Err(e),
            };
            match response {
                Ok(response) => {
                    auth.login(response);
                    status.set("Login successful! Verifying profile...".to_string());

                    let profile = auth
                        .call(async move { auth.client()?.student_profile().await })
                        .await;
                    match &profile {
                        Ok(profile) => info!("Logged in as {}", profile.name),
                        Err(ApiError::ProfileNotFound) => {
                            info!("No student profile yet, starting onboarding")
                        }
                        Err(e) => warn!("Profile check failed: {}", e),
                    }
                    match profile_outcome(&profile) {
                        Ok(outcome) => on_done.call(outcome),
                        Err(message) => {
                            status.set(String::new());
                            error.set(message.to_string());
                        }
                    }
                }
                Err(e) => {
                    warn!("Login failed: {}", e);
                    error.set(e.user_message(LOGIN_FAILED));
                }
            }
            busy.set(false);
        });
    };

    let notice = props.reason.map(|r| r.message()).unwrap_or_default();

    rsx! {
      div { class: "flex flex-col items-center justify-center min-h-screen bg-exam-dark text-exam-text px-4",
        div { class: "fixed top-1/4 -left-10 w-64 h-64 bg-exam-pink/10 rounded-full blur-[150px] pointer-events-none" }
        div { class: "fixed bottom-1/4 -right-10 w-64 h-64 bg-exam-cyan/10 rounded-full blur-[150px] pointer-events-none" }

        div { class: "p-8 bg-exam-panel/90 border-2 border-exam-cyan rounded-2xl shadow-2xl w-full max-w-md relative z-10",
          div { class: "flex flex-col items-center mb-8",
            h1 { class: "text-3xl font-extrabold tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-exam-cyan to-exam-pink",
              "Examinie"
            }
            p { class: "text-sm text-exam-text/70 mt-2", "Log in to continue" }
          }

          Alert { message: notice, kind: AlertKind::Info }

          div { class: "space-y-6",
            TextField {
              label: "Email",
              value: email(),
              input_type: "email",
              placeholder: "you@example.com",
              oninput: move |v| email.set(v),
              on_enter: move |_| handle_login(),
            }
            TextField {
              label: "Password",
              value: password(),
              input_type: "password",
              placeholder: "Enter password",
              oninput: move |v| password.set(v),
              on_enter: move |_| handle_login(),
            }

            Alert { message: error(), on_dismiss: move |_| error.set(String::new()) }
            Alert { message: status(), kind: AlertKind::Success }

            button {
              class: "w-full neon-btn rounded-lg flex justify-center items-center gap-2",
              disabled: busy(),
              onclick: move |_| handle_login(),
              if busy() {
                "Logging in..."
              } else {
                "Log In"
              }
            }

            p { class: "text-center text-sm text-exam-text/70",
              "Don't have an account? "
              button {
                class: "text-exam-cyan hover:underline cursor-pointer",
                onclick: move |_| props.on_signup.call(()),
                "Sign up"
              }
            }
          }
        }
      }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_profile_leads_to_onboarding() {
        let profile: Result<(), ApiError> = Err(ApiError::ProfileNotFound);
        assert_eq!(profile_outcome(&profile), Ok(LoginOutcome::Onboarding));
    }

    #[test]
    fn existing_profile_leads_to_dashboard() {
        assert_eq!(profile_outcome(&Ok::<_, ApiError>(())), Ok(LoginOutcome::Dashboard));
    }

    #[test]
    fn other_failures_stay_on_login() {
        let profile: Result<(), ApiError> = Err(ApiError::Api {
            status: 500,
            message: None,
        });
        assert_eq!(profile_outcome(&profile), Err(PROFILE_CHECK_FAILED));
    }
}
