use dioxus::prelude::*;
use ui::Signup;

use crate::Route;

#[component]
pub fn SignupPage() -> Element {
    let nav = use_navigator();
    let to_login = move |_: ()| {
        nav.replace(Route::LoginPage {
            reason: String::new(),
        });
    };

    rsx! {
        Signup { on_done: to_login, on_login: to_login }
    }
}
