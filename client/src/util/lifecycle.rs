//! View-lifetime binding for async work.
//!
//! SYSTEM CONTEXT
//! ==============
//! In-flight HTTP requests are never cancelled. Instead each page owns a
//! [`ViewScope`] that flips to dead when the page is torn down, and request
//! callbacks apply their result only while the scope is alive.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Liveness flag shared between a view and the tasks it spawned.
#[derive(Clone, Debug)]
pub struct ViewScope {
    alive: Arc<AtomicBool>,
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewScope {
    /// A detached scope. Use [`ViewScope::for_view`] inside components.
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A scope closed by the current reactive owner's cleanup.
    pub fn for_view() -> Self {
        let scope = Self::new();
        let on_drop = scope.clone();
        leptos::prelude::on_cleanup(move || on_drop.close());
        scope
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only if the view is still mounted. Returns whether it ran.
    pub fn apply(&self, apply: impl FnOnce()) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }

    /// Spawn `work` on the browser event loop; its output reaches `apply`
    /// only if the view is still mounted when it resolves.
    pub fn spawn<T, F>(&self, work: F, apply: impl FnOnce(T) + 'static)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
    {
        let scope = self.clone();
        let task = async move {
            let value = work.await;
            scope.apply(move || apply(value));
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task);
        #[cfg(not(feature = "hydrate"))]
        drop(task);
    }
}

/// Resolve after `ms` milliseconds on the browser event loop.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}

/// `false` during the server render and the hydration pass, `true` once the
/// browser has mounted the view.
///
/// Session-dependent markup waits on this so the server (which never sees
/// `sessionStorage`) and the first client render produce the same HTML.
pub fn use_mounted() -> leptos::prelude::Signal<bool> {
    use leptos::prelude::*;

    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));
    mounted.into()
}
