//! Toast notifications
//!
//! `NotificationService` is provided once at the app root; any component can
//! push a success or error toast. `NotificationHost` renders the stack.

use crate::shared::config::FrontendConfig;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Ordered toast list, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns false if the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(config: &FrontendConfig) -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
            timeout_ms: config.toast_timeout_ms,
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        self.push(kind, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    fn push(&self, kind: NotificationKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));

        let svc = *self;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            svc.dismiss(id);
        });
    }
}

/// Fixed bottom-right toast stack
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context");

    view! {
        <div class="toast-stack" style="position: fixed; bottom: 20px; right: 20px; z-index: 2000; display: flex; flex-direction: column; gap: 8px;">
            <For
                each=move || svc.queue.get().items().to_vec()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    let class = match n.kind {
                        NotificationKind::Success => "toast toast--success",
                        NotificationKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{n.message}</span>
                            <button class="button button--icon toast__close" on:click=move |_| svc.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "saved");
        let b = q.push(NotificationKind::Error, "failed");
        assert!(b > a);
        assert_eq!(q.items().len(), 2);
        assert_eq!(q.items()[0].message, "saved");
        assert_eq!(q.items()[1].kind, NotificationKind::Error);
    }

    #[test]
    fn test_dismiss() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Success, "one");
        let b = q.push(NotificationKind::Success, "two");
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].id, b);
        assert!(q.dismiss(b));
        assert!(q.items().is_empty());
    }
}
