//! Transient notification state.
//!
//! DESIGN
//! ======
//! Keeps notification bookkeeping out of page logic: pages push a toast and
//! move on; the host component owns rendering and expiry. The visible list
//! is bounded so a burst of failures cannot grow without limit.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual intent of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Failure styling for errors and rejected actions.
    Destructive,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// At most this many toasts are kept visible; older ones are evicted first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Toast stack with a monotonic id counter.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Push a notification and return its id for later dismissal.
    pub fn push(&mut self, variant: ToastVariant, title: &str, description: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            variant,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn push_default(&mut self, title: &str, description: &str) -> u64 {
        self.push(ToastVariant::Default, title, description)
    }

    pub fn push_destructive(&mut self, title: &str, description: &str) -> u64 {
        self.push(ToastVariant::Destructive, title, description)
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
