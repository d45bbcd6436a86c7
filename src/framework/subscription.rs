//! # Snapshot Subscriptions
//!
//! Observers never touch the actor's store. They hold a [`Snapshots`] handle and
//! receive immutable snapshots each time the store changes.

use crate::framework::message::Snapshot;
use tokio::sync::watch;

/// What a provider currently publishes: `None` until the store is loaded.
pub type Published<T> = Option<Snapshot<T>>;

/// Receiving side of a provider's snapshot feed.
///
/// Cloning yields an independent subscriber that starts from the latest value.
#[derive(Clone)]
pub struct Snapshots<T> {
    receiver: watch::Receiver<Published<T>>,
}

impl<T> Snapshots<T> {
    pub fn new(receiver: watch::Receiver<Published<T>>) -> Self {
        Self { receiver }
    }

    /// The latest published value, without waiting.
    pub fn current(&self) -> Published<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next publication.
    ///
    /// Returns `None` once the provider has gone away, which ends the subscription.
    pub async fn changed(&mut self) -> Option<Published<T>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}

/// Creates a feed that starts in the "not loaded" state.
pub fn channel<T>() -> (watch::Sender<Published<T>>, Snapshots<T>) {
    let (sender, receiver) = watch::channel(None);
    (sender, Snapshots::new(receiver))
}
