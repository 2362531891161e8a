//! Toast notification queue.
//!
//! DESIGN
//! ======
//! Two lanes share one queue: `Stacked` toasts persist until dismissed, and
//! `Status` toasts are short confirmations the toaster auto-dismisses. Each
//! lane keeps at most `limit` entries; pushing past the limit drops that
//! lane's oldest toast.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use uuid::Uuid;

pub const STATUS_TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLane {
    Stacked,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "toast--info",
            Self::Success => "toast--success",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub lane: ToastLane,
    pub level: ToastLevel,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationState {
    pub toasts: Vec<Toast>,
    pub limit: usize,
}

impl NotificationState {
    pub fn new(limit: usize) -> Self {
        Self { toasts: Vec::new(), limit: limit.max(1) }
    }

    /// Queue a toast and return its id.
    pub fn push(&mut self, lane: ToastLane, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast { id, lane, level, message: message.into() });
        while self.lane(lane).count() > self.limit {
            if let Some(pos) = self.toasts.iter().position(|t| t.lane == lane) {
                self.toasts.remove(pos);
            }
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Toasts of one lane, oldest first.
    pub fn lane(&self, lane: ToastLane) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |t| t.lane == lane)
    }
}
