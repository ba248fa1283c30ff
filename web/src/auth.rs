use dioxus::prelude::*;
use ui::{Auth, Session};

/// Provides the [`Auth`] context, seeded from the tokens of an earlier visit.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let session = use_signal(Session::restore);
    let signed_out = use_signal(|| false);
    use_context_provider(|| Auth::new(session, signed_out));

    rsx! {
        {children}
    }
}
