//! Notification and loading registry.
//!
//! One explicit registry object replaces the ambient toast/loading state of
//! a UI: producers `publish`, consumers `subscribe`. Nothing here is global
//! and nothing expires on a timer; callers `dismiss` toasts they have shown.

use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub level: Level,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Box<dyn FnMut(&Notification)>;

#[derive(Default)]
pub struct NotificationCenter {
    next_id: u64,
    next_subscription: u64,
    subscribers: Vec<(SubscriptionId, Handler)>,
    toasts: Vec<Notification>,
    page_loading: bool,
    submitting: BTreeSet<String>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; it receives every notification published after
    /// this call, in subscription order.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&Notification) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, Box::new(handler)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver a notification and keep it as a visible toast. Returns its id.
    pub fn publish(&mut self, level: Level, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let notification = Notification {
            id: self.next_id,
            level,
            message: message.into(),
        };

        for (_, handler) in self.subscribers.iter_mut() {
            handler(&notification);
        }

        let id = notification.id;
        self.toasts.push(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.publish(Level::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.publish(Level::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.publish(Level::Info, message)
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }

    // ---------------------------
    // Loading state
    // ---------------------------

    pub fn start_page_loading(&mut self) {
        self.page_loading = true;
    }

    pub fn stop_page_loading(&mut self) {
        self.page_loading = false;
    }

    pub fn is_page_loading(&self) -> bool {
        self.page_loading
    }

    pub fn start_submit(&mut self, key: &str) {
        self.submitting.insert(key.to_string());
    }

    pub fn stop_submit(&mut self, key: &str) {
        self.submitting.remove(key);
    }

    pub fn is_submitting(&self, key: &str) -> bool {
        self.submitting.contains(key)
    }
}
