use std::time::Duration;

use dioxus::prelude::*;

use crate::util::generate_id;

/// Notifications linger long enough to read a validation message, then clear
/// themselves.
const DISMISS_AFTER: Duration = Duration::from_secs(6);
/// Oldest entries are evicted beyond this, so a burst of form errors cannot
/// fill the window.
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Accent classes follow the planner's palette: emerald for good news,
    /// amber for warnings, sky for neutral info, rose for errors.
    fn accent(self) -> &'static str {
        match self {
            ToastKind::Info => "border-sky-500/40 bg-sky-500/10 text-sky-100",
            ToastKind::Success => "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            ToastKind::Warning => "border-amber-500/40 bg-amber-500/10 text-amber-100",
            ToastKind::Error => "border-rose-500/40 bg-rose-500/10 text-rose-100",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let entry = ToastMessage::new(kind, message);
    toasts.with_mut(|entries| enqueue(entries, entry));
}

/// Appends an entry, evicting the oldest beyond [`MAX_VISIBLE`].
fn enqueue(entries: &mut Vec<ToastMessage>, entry: ToastMessage) {
    if entries.len() >= MAX_VISIBLE {
        entries.remove(0);
    }
    entries.push(entry);
}

/// Notification stack anchored to the bottom of the window. Reads the queue
/// provided by the app root; pages write to it through [`push_toast`].
#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let entries = toasts();

    if entries.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed inset-x-0 bottom-4 flex justify-center",
            ul {
                class: "space-y-3",
                for entry in entries {
                    ToastCard { entry, toasts: toasts.clone() }
                }
            }
        }
    }
}

#[component]
fn ToastCard(entry: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let timer_toasts = toasts.clone();
    let timer_id = entry.id.clone();
    let _dismiss_timer = use_future(move || {
        let mut toasts = timer_toasts.clone();
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(DISMISS_AFTER).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let class = format!(
        "pointer-events-auto flex items-start gap-3 rounded-xl border px-4 py-3 shadow-lg backdrop-blur {}",
        entry.kind.accent()
    );
    let icon = entry.kind.icon();
    rsx! {
        li {
            class: class,
            span { class: "text-lg", "{icon}" }
            p { class: "text-sm font-medium", "{entry.text}" }
            button {
                class: "ml-3 text-xs uppercase tracking-wide text-slate-300 hover:text-white",
                onclick: move |_| {
                    let target = entry.id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(text: &str) -> ToastMessage {
        ToastMessage::new(ToastKind::Info, text)
    }

    #[test]
    fn queue_evicts_oldest_beyond_capacity() {
        let mut entries = Vec::new();
        for index in 0..MAX_VISIBLE + 2 {
            enqueue(&mut entries, message(&format!("entry {index}")));
        }
        assert_eq!(entries.len(), MAX_VISIBLE);
        assert_eq!(entries[0].text, "entry 2");
        assert_eq!(entries.last().map(|e| e.text.as_str()), Some("entry 6"));
    }

    #[test]
    fn kinds_map_to_distinct_accents() {
        let kinds = [
            ToastKind::Info,
            ToastKind::Success,
            ToastKind::Warning,
            ToastKind::Error,
        ];
        for (index, kind) in kinds.iter().enumerate() {
            for other in &kinds[index + 1..] {
                assert_ne!(kind.accent(), other.accent());
                assert_ne!(kind.icon(), other.icon());
            }
        }
    }

    #[test]
    fn messages_get_unique_ids() {
        let first = message("one");
        let second = message("two");
        assert_ne!(first.id, second.id);
    }
}
