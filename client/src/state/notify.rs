//! Transient, non-blocking notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend failure a page catches ends up here. The `Toaster`
//! component renders the queue; entries dismiss themselves after a few
//! seconds in the browser or on click.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays up before dismissing itself.
pub const TOAST_TTL_MS: u32 = 4_000;
/// Oldest entries are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Info => "toast toast--info",
            Self::Warning => "toast toast--warning",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: Level,
    pub message: String,
}

/// Toast queue, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notifications {
    pub items: Vec<Toast>,
}

impl Notifications {
    pub fn push(&mut self, level: Level, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(Toast { id, level, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.items.retain(|t| t.id != id);
    }
}

/// Context handle pages use to raise toasts.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    queue: RwSignal<Notifications>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(Notifications::default()) }
    }

    pub fn queue(&self) -> RwSignal<Notifications> {
        self.queue
    }

    pub fn notify(&self, level: Level, message: impl Into<String>) {
        let message = message.into();
        match level {
            Level::Error => log::error!("{message}"),
            Level::Warning => log::warn!("{message}"),
            Level::Success | Level::Info => log::info!("{message}"),
        }
        let mut id = Uuid::nil();
        self.queue.update(|q| id = q.push(level, message));
        self.schedule_dismiss(id);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(Level::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(Level::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.notify(Level::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(Level::Error, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn schedule_dismiss(&self, id: Uuid) {
        #[cfg(feature = "hydrate")]
        {
            let queue = self.queue;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                if queue.try_update(|q| q.dismiss(id)).is_none() {
                    log::debug!("toast queue dropped before dismiss");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
