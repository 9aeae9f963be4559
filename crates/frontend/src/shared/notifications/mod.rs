//! Toast notifications.
//!
//! `ToastQueue` is the plain FIFO, `Toaster` wraps it in a signal with
//! auto-dismiss, `ToastHost` renders it. Controllers only see
//! `NotificationSink`.

pub mod toaster;

pub use toaster::{ToastHost, Toaster};

use crate::shared::crud::driver::StateCell;
use std::collections::VecDeque;
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEvent {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Where user-facing outcome messages go.
pub trait NotificationSink {
    fn push(&self, kind: ToastKind, message: String);

    fn success(&self, message: &str) {
        self.push(ToastKind::Success, message.to_string());
    }

    fn error(&self, message: &str) {
        self.push(ToastKind::Error, message.to_string());
    }
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: VecDeque<ToastEvent>,
}

impl ToastQueue {
    /// How many toasts are on screen at once; the oldest goes first.
    pub const MAX_VISIBLE: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push_back(ToastEvent {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        while self.items.len() > Self::MAX_VISIBLE {
            self.items.pop_front();
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> Vec<ToastEvent> {
        self.items.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Waits for `delay`, then removes toast `id` if it is still shown.
///
/// Returns `false` when the toast was already gone (dismissed by hand or
/// pushed out by newer ones) or the queue itself was dropped.
pub async fn dismiss_after<S, D>(queue: &S, id: u64, delay: D) -> bool
where
    S: StateCell<ToastQueue>,
    D: Future<Output = ()>,
{
    delay.await;
    queue.with_mut(|q| q.dismiss(id)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn test_fifo_order() {
        let mut q = ToastQueue::new();
        q.push(ToastKind::Success, "Создано");
        q.push(ToastKind::Error, "Ошибка");
        let messages: Vec<String> = q.items().into_iter().map(|t| t.message).collect();
        assert_eq!(messages, vec!["Создано", "Ошибка"]);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut q = ToastQueue::new();
        let a = q.push(ToastKind::Success, "a");
        let b = q.push(ToastKind::Success, "b");
        assert_ne!(a, b);
        assert!(q.dismiss(a));
        assert!(!q.dismiss(a));
        assert_eq!(q.items()[0].id, b);
    }

    #[test]
    fn test_oldest_dropped_when_full() {
        let mut q = ToastQueue::new();
        for i in 0..7 {
            q.push(ToastKind::Success, format!("#{}", i));
        }
        assert_eq!(q.len(), ToastQueue::MAX_VISIBLE);
        assert_eq!(q.items()[0].message, "#2");
    }

    #[test]
    fn test_toast_removed_once_delay_elapses() {
        let queue = RefCell::new(ToastQueue::new());
        let first = queue.borrow_mut().push(ToastKind::Success, "Сохранено");
        let second = queue.borrow_mut().push(ToastKind::Error, "Ошибка");

        let removed = block_on(dismiss_after(&queue, first, async {
            // still visible while the timeout runs
            assert_eq!(queue.borrow().len(), 2);
        }));

        assert!(removed);
        let ids: Vec<u64> = queue.borrow().items().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![second]);
    }

    #[test]
    fn test_expired_toast_already_closed_by_hand() {
        let queue = RefCell::new(ToastQueue::new());
        let id = queue.borrow_mut().push(ToastKind::Success, "a");
        let other = queue.borrow_mut().push(ToastKind::Success, "b");
        queue.borrow_mut().dismiss(id);

        assert!(!block_on(dismiss_after(&queue, id, async {})));
        assert_eq!(queue.borrow().items()[0].id, other);
    }
}
