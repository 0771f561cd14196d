use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::watch;

use crate::progress::Progress;

/// Latest observed state of one operation.
///
/// Exactly one of `error` / `data` is populated after a terminal emission;
/// the idle default has all three fields false/absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub is_loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> RequestState<T> {
    pub fn idle() -> Self {
        Self {
            is_loading: false,
            error: None,
            data: None,
        }
    }

    fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            data: None,
        }
    }

    /// A terminal state holds the outcome of a finished call. Idle and
    /// loading states are not terminal.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading && (self.error.is_some() || self.data.is_some())
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

impl<T> From<Progress<T>> for RequestState<T> {
    fn from(update: Progress<T>) -> Self {
        match update {
            Progress::Loading => Self::loading(),
            Progress::Success(data) => Self {
                is_loading: false,
                error: None,
                data: Some(data),
            },
            Progress::Error(error) => Self {
                is_loading: false,
                error: Some(error),
                data: None,
            },
        }
    }
}

struct SlotInner<T> {
    state: watch::Sender<RequestState<T>>,
    /// Sequence number of the most recently initiated invocation. Writes
    /// from older invocations are discarded while this lock is held, so a
    /// stale terminal value can never land in the slot.
    latest: Mutex<u64>,
}

/// One observable operation slot.
///
/// Lifecycle: idle -> loading on trigger -> terminal error-or-data -> idle
/// via explicit [`Slot::clear`]. A fresh trigger supersedes any invocation
/// still in flight; the superseded call runs to completion but its
/// emissions write nothing.
#[derive(Clone)]
pub struct Slot<T> {
    inner: Arc<SlotInner<T>>,
}

impl<T: Clone> Slot<T> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(RequestState::idle());
        Self {
            inner: Arc::new(SlotInner {
                state,
                latest: Mutex::new(0),
            }),
        }
    }

    /// Current state, cloned out.
    pub fn get(&self) -> RequestState<T> {
        self.inner.state.borrow().clone()
    }

    /// Notify-on-change handle for a presentation layer.
    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.inner.state.subscribe()
    }

    /// Reset to idle from any state. Idempotent. Does not supersede an
    /// in-flight invocation; its terminal value still lands afterwards.
    pub fn clear(&self) {
        self.inner.state.send_replace(RequestState::idle());
    }

    /// Overwrite the slot with the loading state and hand back the writer
    /// for this invocation. Runs synchronously inside the trigger so
    /// consumers observe loading before any terminal value.
    pub(crate) fn begin(&self) -> SlotWriter<T> {
        let seq = {
            let mut latest = lock_latest(&self.inner.latest);
            *latest += 1;
            self.inner.state.send_replace(RequestState::loading());
            *latest
        };
        SlotWriter {
            inner: Arc::clone(&self.inner),
            seq,
        }
    }

    /// Await the next terminal state. Intended for callers that trigger an
    /// operation and want to act on its outcome.
    pub async fn next_terminal(&self) -> RequestState<T> {
        let mut rx = self.subscribe();
        loop {
            {
                let state = rx.borrow_and_update();
                if state.is_terminal() {
                    return state.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.get();
            }
        }
    }
}

impl<T: Clone> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Writer tied to one invocation of a slot's operation.
pub(crate) struct SlotWriter<T> {
    inner: Arc<SlotInner<T>>,
    seq: u64,
}

impl<T> SlotWriter<T> {
    /// Apply one emission, unless a later invocation has taken over.
    pub(crate) fn apply(&self, update: Progress<T>) {
        let latest = lock_latest(&self.inner.latest);
        if *latest == self.seq {
            self.inner.state.send_replace(update.into());
        }
    }
}

fn lock_latest(latest: &Mutex<u64>) -> MutexGuard<'_, u64> {
    latest.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
