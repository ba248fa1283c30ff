use api::Upload;
use dioxus::logger::tracing::{debug, info, warn};
use dioxus::prelude::*;
use shared::content::{selected_items, ContentItem, ContentKind, SubmissionForm};

use crate::auth::{use_auth, Auth};
use crate::components::{Alert, AlertKind, Button, ButtonVariant, INPUT_CLASS};
use crate::hooks::use_interval;
use crate::storage::handoff;

const HISTORY_POLL_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Pick,
    Input(ContentKind),
    Done(ContentKind),
}

/// A file read from the picker, waiting to be uploaded.
#[derive(Debug, Clone, PartialEq)]
struct PickedFile {
    name: String,
    bytes: Vec<u8>,
}

async fn fetch_history(auth: Auth, mut history: Signal<Vec<ContentItem>>) {
    match auth
        .call(async move { auth.client()?.contents().await })
        .await
    {
        Ok(response) => {
            debug!("Content history: {} items", response.contents.len());
            history.set(response.contents);
        }
        Err(e) => warn!("Failed to load content history: {}", e),
    }
}

/// Upload study material and pick what the next exam is generated from.
#[component]
pub fn ContentSelection(on_continue: EventHandler) -> Element {
    let auth = use_auth();
    let mut step = use_signal(|| Step::Pick);
    let mut text = use_signal(String::new);
    let mut picked = use_signal(|| None::<PickedFile>);
    let mut error = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let history = use_signal(Vec::<ContentItem>::new);
    let mut selected = use_signal(|| handoff().selected_content_ids());

    use_future(move || fetch_history(auth, history));
    use_interval(HISTORY_POLL_MS, move || {
        spawn(fetch_history(auth, history));
    });

    let mut choose = move |kind: ContentKind| {
        text.set(String::new());
        picked.set(None);
        error.set(String::new());
        step.set(Step::Input(kind));
    };

    let mut upload = move |kind: ContentKind| {
        if busy() {
            return;
        }
        let upload = match picked() {
            Some(file) if kind.is_file_based() => Upload::file(kind, file.name, file.bytes),
            None if kind.is_file_based() => Upload::file(kind, "", Vec::new()),
            _ => Upload::text(kind, text()),
        };
        if let Some(rejection) = upload.rejection() {
            error.set(rejection.to_string());
            return;
        }

        spawn(async move {
            busy.set(true);
            error.set(String::new());
            let response = auth
                .call(async move { auth.client()?.upload_content(upload).await })
                .await;
            match response {
                Ok(response) => {
                    if let Some(id) = response.content_id() {
                        let ids = vec![id.to_string()];
                        handoff().set_selected_content_ids(&ids);
                        selected.set(ids);
                    }
                    info!("{} uploaded", kind.label());
                    message.set(
                        response
                            .message
                            .unwrap_or_else(|| format!("{} uploaded successfully!", kind.label())),
                    );
                    step.set(Step::Done(kind));
                    fetch_history(auth, history).await;
                }
                Err(e) => {
                    warn!("{} upload failed: {}", kind.label(), e);
                    error.set(e.user_message(kind.upload_failed_message()));
                }
            }
            busy.set(false);
        });
    };

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            picked.set(None);
            return;
        };
        let name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                debug!("Picked {} ({} bytes)", name, bytes.len());
                picked.set(Some(PickedFile {
                    name,
                    bytes: bytes.to_vec(),
                }));
            }
            Err(e) => {
                warn!("Could not read {}: {}", name, e);
                error.set(format!("Could not read {name}."));
            }
        }
    };

    let add = move |id: String| {
        selected.set(handoff().add_content_id(&id));
    };
    let mut remove = move |id: String| {
        selected.set(handoff().remove_content_id(&id));
    };

    let history_items = history.read();
    let selected_ids = selected.read();
    let chosen: Vec<ContentItem> = selected_items(&history_items, &selected_ids)
        .into_iter()
        .cloned()
        .collect();
    let has_selection = !selected_ids.is_empty();

    rsx! {
      div { class: "space-y-8",
        h1 { class: "text-3xl font-extrabold text-exam-cyan", "Upload Content" }

        match step() {
            Step::Pick => rsx! {
              KindGrid { title: "Text & Links", kinds: ContentKind::TEXT_KINDS.to_vec(), on_pick: move |k| choose(k) }
              KindGrid { title: "Files", kinds: ContentKind::FILE_KINDS.to_vec(), on_pick: move |k| choose(k) }
            },
            Step::Input(kind) => rsx! {
              div { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/80 space-y-4",
                div { class: "flex items-center gap-3",
                  span { class: "text-3xl", "{kind.icon()}" }
                  div {
                    h2 { class: "text-xl font-bold", "{kind.label()}" }
                    p { class: "text-sm text-exam-text/70", "{kind.description()}" }
                  }
                }

                match kind.form() {
                    SubmissionForm::File { accept } => rsx! {
                      input {
                        class: "{INPUT_CLASS} file:mr-4 file:py-2 file:px-4 file:rounded file:border-0 file:bg-exam-pink file:text-black",
                        "type": "file",
                        accept,
                        onchange: on_file,
                      }
                      if let Some(file) = picked() {
                        p { class: "text-sm text-exam-cyan", "Selected: {file.name}" }
                      }
                    },
                    SubmissionForm::Text { placeholder, multiline: true, .. } => rsx! {
                      textarea {
                        class: "{INPUT_CLASS} min-h-48",
                        placeholder,
                        value: "{text}",
                        oninput: move |e| text.set(e.value()),
                      }
                    },
                    SubmissionForm::Text { placeholder, .. } => rsx! {
                      input {
                        class: INPUT_CLASS,
                        "type": "text",
                        placeholder,
                        value: "{text}",
                        oninput: move |e| text.set(e.value()),
                      }
                    },
                }

                Alert { message: error(), on_dismiss: move |_| error.set(String::new()) }

                div { class: "flex gap-3",
                  Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| step.set(Step::Pick),
                    "Back"
                  }
                  Button { disabled: busy(), onclick: move |_| upload(kind),
                    if busy() {
                      "Uploading..."
                    } else {
                      "Upload"
                    }
                  }
                }
              }
            },
            Step::Done(kind) => rsx! {
              div { class: "p-6 rounded-2xl border-2 border-exam-cyan bg-exam-panel/80 space-y-4 text-center",
                Alert { message: message(), kind: AlertKind::Success }
                div { class: "flex flex-wrap justify-center gap-3",
                  Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| choose(kind),
                    "Upload more"
                  }
                  Button {
                    disabled: !has_selection,
                    onclick: move |_| on_continue.call(()),
                    "Continue to Exam Setup"
                  }
                }
              }
            },
        }

        div { class: "grid md:grid-cols-2 gap-6",
          section { class: "p-5 rounded-2xl border-2 border-exam-violet bg-exam-panel/60",
            h2 { class: "text-lg font-bold text-exam-pink mb-3", "Selected content" }
            if chosen.is_empty() {
              p { class: "text-sm text-exam-text/60 italic", "Nothing selected yet." }
            }
            ul { class: "space-y-2",
              for item in chosen.iter() {
                li {
                  key: "{item.id}",
                  class: "flex items-center justify-between gap-3 p-2 rounded bg-exam-dark/60",
                  span { class: "truncate", "{item.title}" }
                  button {
                    class: "text-xs text-red-300 hover:text-red-200 cursor-pointer",
                    onclick: {
                        let id = item.id.clone();
                        move |_| remove(id.clone())
                    },
                    "Remove"
                  }
                }
              }
            }
            if has_selection {
              div { class: "mt-4",
                Button { onclick: move |_| on_continue.call(()), "Continue to Exam Setup" }
              }
            }
          }

          section { class: "p-5 rounded-2xl border-2 border-exam-violet bg-exam-panel/60",
            h2 { class: "text-lg font-bold text-exam-cyan mb-3", "Upload history" }
            if history_items.is_empty() {
              p { class: "text-sm text-exam-text/60 italic", "No uploads yet." }
            }
            ul { class: "space-y-2 max-h-80 overflow-y-auto pr-1",
              for item in history_items.iter() {
                HistoryRow {
                  key: "{item.id}",
                  item: item.clone(),
                  selected: selected_ids.contains(&item.id),
                  on_add: add,
                  on_remove: remove,
                }
              }
            }
          }
        }
      }
    }
}

#[component]
fn KindGrid(
    #[props(into)] title: String,
    kinds: Vec<ContentKind>,
    on_pick: EventHandler<ContentKind>,
) -> Element {
    rsx! {
      section {
        h2 { class: "text-lg font-bold text-exam-pink mb-3", "{title}" }
        div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4",
          for kind in kinds {
            button {
              key: "{kind.label()}",
              class: "p-5 text-left rounded-2xl border-2 border-exam-violet bg-exam-panel/70 hover:border-exam-cyan hover:shadow-[0_0_15px_rgba(0,255,247,0.3)] transition-all cursor-pointer",
              onclick: move |_| on_pick.call(kind),
              div { class: "text-3xl mb-2", "{kind.icon()}" }
              h3 { class: "font-bold text-exam-text", "{kind.label()}" }
              p { class: "text-sm text-exam-text/60 mt-1", "{kind.description()}" }
            }
          }
        }
      }
    }
}

#[component]
fn HistoryRow(
    item: ContentItem,
    selected: bool,
    on_add: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let kind = item.content_type.clone().unwrap_or_default();
    let id = item.id.clone();

    rsx! {
      li { class: "flex items-center justify-between gap-3 p-2 rounded bg-exam-dark/60",
        div { class: "min-w-0",
          p { class: "truncate", "{item.title}" }
          if !kind.is_empty() {
            p { class: "text-xs text-exam-text/50 uppercase", "{kind}" }
          }
        }
        if selected {
          button {
            class: "text-xs px-3 py-1 rounded border border-red-500/50 text-red-300 hover:bg-red-500/20 cursor-pointer",
            onclick: move |_| on_remove.call(id.clone()),
            "Remove"
          }
        } else {
          button {
            class: "text-xs px-3 py-1 rounded border border-exam-cyan text-exam-cyan hover:bg-exam-cyan/10 cursor-pointer",
            onclick: move |_| on_add.call(id.clone()),
            "Add"
          }
        }
      }
    }
}
