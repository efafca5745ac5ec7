// Filter state holder - single source of truth for one analytics area
use crate::domain::filter::FilterState;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Notified synchronously, on the caller's thread, after every replacement.
pub trait FilterSubscriber: Send + Sync {
    fn on_filter_change(&self, filter: &FilterState);
}

#[derive(Default)]
pub struct FilterStateHolder {
    state: RwLock<FilterState>,
    subscribers: RwLock<Vec<Arc<dyn FilterSubscriber>>>,
    // Serializes replace-and-notify so subscribers end on the held state.
    notify: Mutex<()>,
}

impl FilterStateHolder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> FilterState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a subscriber and bring it up to date with the current state.
    pub fn subscribe(&self, subscriber: Arc<dyn FilterSubscriber>) {
        let _notifying = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        subscriber.on_filter_change(&self.current());
        self.subscribers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subscriber);
    }

    /// Replace the whole filter and re-run every subscriber. Overlapping
    /// calls run one after another; subscribers must not call back into
    /// `set_filter` or `subscribe`.
    pub fn set_filter(&self, filter: FilterState) {
        let _notifying = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            *state = filter.clone();
        }

        let subscribers = self
            .subscribers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if filter.is_unconstrained() {
            tracing::info!("Filter reset to all hospitals; notifying {} subscribers", subscribers.len());
        } else {
            tracing::info!(
                "Filter replaced (hospital={:?}, location={:?}, specialty={:?}, surgeon={:?}); notifying {} subscribers",
                filter.hospital,
                filter.location,
                filter.specialty,
                filter.surgeon,
                subscribers.len()
            );
        }

        for subscriber in subscribers {
            subscriber.on_filter_change(&filter);
        }
    }
}
