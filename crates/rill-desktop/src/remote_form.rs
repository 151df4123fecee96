//! Shared load/save lifecycle for the controller-backed form screens.
//!
//! Every form screen follows the same contract: fetch the stored record on
//! mount, populate the fields, and replace the record wholesale on submit.
//! `use_remote_form` owns that lifecycle so the screens only provide their
//! fetch call and a closure that copies the record into their field signals.

use std::future::Future;

use dioxus::prelude::*;

use rill_core::Page;

use crate::components::toast::ToastManager;

/// Where the initial load of a screen currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadStatus {
    /// A load attempt is in flight
    Pending,
    /// The stored record was applied to the fields
    Loaded,
    /// The attempt settled without a record; the fields show defaults
    Failed { recoverable: bool },
}

/// Handle returned by [`use_remote_form`].
#[derive(Clone, Copy)]
pub struct RemoteForm {
    status: Signal<LoadStatus>,
    saving: Signal<bool>,
    reload_version: Signal<u64>,
}

impl RemoteForm {
    /// Whether a load attempt is still in flight.
    pub fn is_loading(&self) -> bool {
        (self.status)() == LoadStatus::Pending
    }

    /// Whether the last load attempt failed.
    pub fn load_failed(&self) -> bool {
        matches!((self.status)(), LoadStatus::Failed { .. })
    }

    /// Whether retrying the failed load can plausibly succeed.
    pub fn can_retry(&self) -> bool {
        matches!(
            (self.status)(),
            LoadStatus::Failed { recoverable: true }
        )
    }

    /// Whether a save is in flight.
    pub fn is_saving(&self) -> bool {
        (self.saving)()
    }

    /// Requests another load attempt.
    pub fn retry(&mut self) {
        self.reload_version.set((self.reload_version)() + 1);
    }

    /// Sends the given write and reports the outcome as a toast.
    ///
    /// The record must be snapshotted by the caller before building `write`,
    /// so the save carries exactly what was on screen at click time. Repeat
    /// clicks while a save is in flight are ignored.
    pub fn submit<F>(
        &mut self,
        toasts: ToastManager,
        page: Page,
        success_message: &'static str,
        failure_message: &'static str,
        write: F,
    ) where
        F: Future<Output = rill_core::Result<()>> + 'static,
    {
        if (self.saving)() {
            return;
        }
        self.saving.set(true);

        let mut saving = self.saving;
        let mut toasts = toasts;
        spawn(async move {
            match write.await {
                Ok(()) => {
                    tracing::info!("Saved {page} state");
                    toasts.success(success_message);
                }
                Err(error) => {
                    tracing::error!("Failed to save {page} state: {error}");
                    toasts.error(failure_message);
                }
            }
            saving.set(false);
        });
    }
}

/// Loads the stored record for `page` and tracks the screen's form lifecycle.
///
/// `fetch` is called once per attempt; `apply` copies a fetched record into
/// the screen's field signals. A failed fetch leaves the fields untouched,
/// so the screen stays usable with its defaults. Navigating away drops the
/// in-flight task, which is what discards late responses.
pub fn use_remote_form<T, F>(
    page: Page,
    fetch: impl Fn() -> F + Clone + 'static,
    apply: impl FnMut(T) + Clone + 'static,
) -> RemoteForm
where
    T: 'static,
    F: Future<Output = rill_core::Result<T>> + 'static,
{
    let status = use_signal(|| LoadStatus::Pending);
    let saving = use_signal(|| false);
    let reload_version = use_signal(|| 0u64);
    let form = RemoteForm {
        status,
        saving,
        reload_version,
    };

    use_future(move || {
        let fetch = fetch.clone();
        let apply = apply.clone();
        let mut form = form;
        async move {
            // Reading the version subscribes this future to retry requests.
            let _reload_version = (form.reload_version)();
            form.status.set(LoadStatus::Pending);

            let mut apply = apply;
            match fetch().await {
                Ok(state) => {
                    apply(state);
                    form.status.set(LoadStatus::Loaded);
                }
                Err(error) => {
                    tracing::error!("Failed to load {page} state: {error}");
                    form.status.set(LoadStatus::Failed {
                        recoverable: error.is_recoverable(),
                    });
                }
            }
        }
    });

    form
}
