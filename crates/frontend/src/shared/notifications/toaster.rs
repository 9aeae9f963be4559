use super::{dismiss_after, NotificationSink, ToastKind, ToastQueue};
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Signal-backed toast queue. `Copy`, so it can be moved into any handler.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl Toaster {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            timeout_ms,
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl NotificationSink for Toaster {
    fn push(&self, kind: ToastKind, message: String) {
        match kind {
            ToastKind::Success => log::info!("toast: {}", message),
            ToastKind::Error => log::warn!("toast: {}", message),
        }
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };

        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        spawn_local(async move {
            dismiss_after(&queue, id, TimeoutFuture::new(timeout_ms)).await;
        });
    }
}

/// Renders the toast stack in the corner of the screen.
#[component]
pub fn ToastHost(toaster: Toaster) -> impl IntoView {
    let toasts = move || toaster.queue.with(|q| q.items());

    view! {
        <div class="toast-host">
            <For
                each=toasts
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.css_class() role="status">
                            <span class="toast__message">{t.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
