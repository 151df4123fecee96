//! Toast notification system for save acknowledgments.
//!
//! Provides a global toast manager accessible via context, with auto-dismiss
//! and manual close functionality. Toasts replace blocking dialogs so a slow
//! save never pins the user to a screen.

use std::time::Duration;

use dioxus::prelude::*;

/// Visual flavor of a toast.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Confirmation, dismissed after 4 seconds
    Success,
    /// Failure, dismissed after 6 seconds
    Error,
}

impl ToastKind {
    const fn dismiss_after(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(4),
            Self::Error => Duration::from_secs(6),
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

/// A single toast notification.
#[derive(Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Global toast manager for showing notifications.
///
/// Access via `use_toast()` from any component.
#[derive(Clone, Copy)]
pub struct ToastManager {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl ToastManager {
    fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    /// Shows a confirmation toast.
    pub fn success(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Success);
    }

    /// Shows a failure toast.
    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastKind::Error);
    }

    /// Maximum 4 toasts are shown at once; the oldest is removed if exceeded.
    fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        let id = *self.next_id.peek();
        *self.next_id.write() += 1;

        {
            let mut toasts = self.toasts.write();
            if toasts.len() >= 4 {
                toasts.remove(0);
            }
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            });
        }

        // Auto-dismiss after the timeout
        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(kind.dismiss_after()).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    /// Manually dismisses a toast by ID.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|toast| toast.id != id);
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Initializes the toast provider at the app root.
pub fn use_toast_provider() -> ToastManager {
    use_context_provider(ToastManager::new)
}

/// Gets the toast manager from context.
pub fn use_toast() -> ToastManager {
    use_context::<ToastManager>()
}

/// Toast container component - renders all active toasts.
///
/// Place this once at the end of the main layout.
#[component]
pub fn ToastFrame() -> Element {
    let mut manager = use_toast();
    let toasts = manager.toasts.read();

    rsx! {
        div { class: "toast-container",
            for toast in toasts.iter() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-close",
                        onclick: {
                            let id = toast.id;
                            move |_| manager.dismiss(id)
                        },
                        "✕"
                    }
                }
            }
        }
    }
}
