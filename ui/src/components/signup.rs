use api::ApiClient;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::auth::{Role, SignupRequest};

use crate::components::{Alert, AlertKind, TextField, INPUT_CLASS};
use crate::hooks::sleep;

const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
const REDIRECT_DELAY_MS: u32 = 2000;

#[derive(Props, PartialEq, Clone)]
pub struct Props {
    /// Fired two seconds after a successful signup.
    on_done: EventHandler,
    on_login: EventHandler,
}

#[component]
pub fn Signup(props: Props) -> Element {
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut error = use_signal(String::new);
    let mut success = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let on_done = props.on_done;

    let handle_signup = move || {
        if busy() {
            return;
        }
        let request = SignupRequest {
            username: username.read().trim().to_string(),
            email: email.read().trim().to_string(),
            password: password.read().to_string(),
            role: role(),
        };
        spawn(async move {
            busy.set(true);
            error.set(String::new());

            let response = match ApiClient::with_token(None) {
                Ok(client) => client.signup(&request).await,
                Err(e) => Err(e),
            };
            match response {
                Ok(_) => {
                    info!("Account created for {}", request.username);
                    success.set("Signup successful! Redirecting to login...".to_string());
                    sleep(REDIRECT_DELAY_MS).await;
                    on_done.call(());
                }
                Err(e) => {
                    warn!("Signup failed: {}", e);
                    error.set(e.user_message(SIGNUP_FAILED));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
      div { class: "flex flex-col items-center justify-center min-h-screen bg-exam-dark text-exam-text px-4",
        div { class: "p-8 bg-exam-panel/90 border-2 border-exam-pink rounded-2xl shadow-2xl w-full max-w-md",
          h1 { class: "text-3xl font-extrabold text-center mb-8 text-transparent bg-clip-text bg-gradient-to-r from-exam-pink to-exam-cyan",
            "Create Account"
          }

          div { class: "space-y-5",
            TextField {
              label: "Username",
              value: username(),
              placeholder: "Choose a username",
              oninput: move |v| username.set(v),
            }
            TextField {
              label: "Email",
              value: email(),
              input_type: "email",
              placeholder: "you@example.com",
              oninput: move |v| email.set(v),
            }
            TextField {
              label: "Password",
              value: password(),
              input_type: "password",
              placeholder: "Choose a password",
              oninput: move |v| password.set(v),
              on_enter: move |_| handle_signup(),
            }
            div {
              label { class: "block text-xs font-semibold text-exam-cyan mb-1 uppercase tracking-wider",
                "Role"
              }
              select {
                class: INPUT_CLASS,
                value: if role() == Role::Teacher { "teacher" } else { "student" },
                onchange: move |e| {
                    role.set(if e.value() == "teacher" { Role::Teacher } else { Role::Student });
                },
                option { value: "student", "Student" }
                option { value: "teacher", "Teacher" }
              }
            }

            Alert { message: error(), on_dismiss: move |_| error.set(String::new()) }
            Alert { message: success(), kind: AlertKind::Success }

            button {
              class: "w-full neon-btn rounded-lg",
              disabled: busy(),
              onclick: move |_| handle_signup(),
              if busy() {
                "Creating account..."
              } else {
                "Sign Up"
              }
            }

            p { class: "text-center text-sm text-exam-text/70",
              "Already have an account? "
              button {
                class: "text-exam-cyan hover:underline cursor-pointer",
                onclick: move |_| props.on_login.call(()),
                "Log in"
              }
            }
          }
        }
      }
    }
}
