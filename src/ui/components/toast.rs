//! Transient notification banners for validation and persistence messages.

use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

const AUTO_DISMISS: Duration = Duration::from_secs(6);
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn styling(self) -> (&'static str, &'static str) {
        match self {
            ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
            ToastKind::Success => (
                "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
                "✅",
            ),
            ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
            ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let entry = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: message.into(),
    };
    toasts.with_mut(|queue| {
        while queue.len() >= MAX_VISIBLE {
            queue.remove(0);
        }
        queue.push(entry);
    });
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|queue| queue.retain(|toast| toast.id != id));
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let queue = toasts();

    if queue.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for message in queue {
                    ToastCard { message, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let _timer = use_future({
        let toasts = toasts.clone();
        let id = message.id.clone();
        move || {
            let toasts = toasts.clone();
            let id = id.clone();
            async move {
                tokio::time::sleep(AUTO_DISMISS).await;
                dismiss(toasts, &id);
            }
        }
    });

    let (accent, icon) = message.kind.styling();
    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {accent}"
    );
    let id = message.id.clone();

    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| dismiss(toasts.clone(), &id),
                "Dismiss"
            }
        }
    }
}
