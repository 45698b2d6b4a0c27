//! Transient notifications.
//!
//! One message at a time. Showing a new toast replaces the pending one and
//! restarts the timer; a timer that fires after a newer toast arrived does
//! nothing, so the last call always wins.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// The pending toast plus a generation counter that identifies it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    generation: u64,
}

impl ToastState {
    /// Replace the pending toast. Returns the new generation for the expiry timer.
    pub fn show(&mut self, level: ToastLevel, message: String) -> u64 {
        self.generation += 1;
        self.current = Some(Toast { level, message });
        self.generation
    }

    /// Clear the toast if it is still the one from `generation`.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle for raising toasts, provided by [`ToastProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    state: Signal<ToastState>,
    duration: Duration,
}

impl Toaster {
    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastLevel::Error, message.into());
    }

    fn show(&self, level: ToastLevel, message: String) {
        let mut state = self.state;
        state.write().show(level, message);
    }
}

pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}

/// Provides a [`Toaster`] to its children and renders the pending toast.
#[component]
pub fn ToastProvider(#[props(default = 3000)] duration_ms: u32, children: Element) -> Element {
    let state = use_signal(ToastState::default);
    use_context_provider(|| Toaster {
        state,
        duration: Duration::from_millis(u64::from(duration_ms)),
    });

    rsx! {
        {children}
        ToastOutlet {}
    }
}

#[component]
fn ToastOutlet() -> Element {
    let toaster = use_toast();
    let mut state = toaster.state;
    let duration = toaster.duration;

    // Re-runs whenever a toast is shown or cleared; each run arms one timer
    // tagged with the generation it was armed for.
    use_effect(move || {
        let generation = state.read().generation();
        if state.read().current().is_none() {
            return;
        }
        spawn(async move {
            sleep(duration).await;
            state.write().expire(generation);
        });
    });

    let Some(toast) = state.read().current().cloned() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: match toast.level {
                ToastLevel::Success => "toast",
                ToastLevel::Error => "toast toast-error",
            },
            role: "status",
            "{toast.message}"
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}
