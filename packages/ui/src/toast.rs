//! Transient notifications in the top-right corner.

use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
    Warning,
    Loading,
}

impl ToastLevel {
    /// How long the toast stays up. Loading toasts wait for `dismiss`.
    pub fn duration(self) -> Option<Duration> {
        match self {
            ToastLevel::Success | ToastLevel::Info | ToastLevel::Warning => {
                Some(Duration::from_secs(4))
            }
            ToastLevel::Error => Some(Duration::from_secs(5)),
            ToastLevel::Loading => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
            ToastLevel::Info => "toast toast-info",
            ToastLevel::Warning => "toast toast-warning",
            ToastLevel::Loading => "toast toast-loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, level: ToastLevel, message: String) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            level,
            message,
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Handle for raising toasts from any component under [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts(Signal<ToastQueue>);

impl Toasts {
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Error, message.into())
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Info, message.into())
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Warning, message.into())
    }

    pub fn loading(&self, message: impl Into<String>) -> u64 {
        self.show(ToastLevel::Loading, message.into())
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.0;
        queue.write().dismiss(id);
    }

    fn show(&self, level: ToastLevel, message: String) -> u64 {
        let mut queue = self.0;
        let id = queue.write().push(level, message);
        if let Some(after) = level.duration() {
            // Outlives the view that raised it.
            spawn_forever(async move {
                crate::sleep(after).await;
                queue.write().dismiss(id);
            });
        }
        id
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts(queue));

    rsx! {
        {children}
        ToastStack {}
    }
}

#[component]
fn ToastStack() -> Element {
    let toasts = use_toasts();
    let queue = toasts.0;
    let items = queue.read().toasts.clone();

    rsx! {
        div {
            class: "toast-stack",
            for toast in items {
                div {
                    key: "{toast.id}",
                    class: toast.level.class(),
                    onclick: move |_| toasts.dismiss(toast.id),
                    if toast.level == ToastLevel::Loading {
                        span { class: "spinner spinner-sm" }
                    }
                    span { "{toast.message}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_per_level() {
        assert_eq!(ToastLevel::Success.duration(), Some(Duration::from_secs(4)));
        assert_eq!(ToastLevel::Error.duration(), Some(Duration::from_secs(5)));
        assert_eq!(ToastLevel::Warning.duration(), Some(Duration::from_secs(4)));
        assert_eq!(ToastLevel::Loading.duration(), None);
    }

    #[test]
    fn queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastLevel::Info, "one".into());
        let b = queue.push(ToastLevel::Loading, "two".into());
        assert_ne!(a, b);
        queue.dismiss(a);
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "two");
        queue.dismiss(99);
        assert_eq!(queue.toasts.len(), 1);
    }
}
