//! # Mock Framework
//!
//! Utilities for testing code that talks to a [`ResourceClient`] without running a
//! real [`ResourceActor`](crate::framework::ResourceActor).
//!
//! | | [`MockClient`] | [`create_mock_client`] |
//! |---|---|---|
//! | **Responses** | Queued up front (`return_ok`, `return_err`) | Sent by hand from the test |
//! | **Timing** | Answers immediately | The test decides when to answer |
//! | **Use Case** | Outcome of a call | Observing state while a call is in flight |
//!
//! Both let the test publish snapshots to subscribers.
//!
//! ```rust,ignore
//! let mut mock = MockClient::<Client>::new();
//! mock.expect_create().return_ok(ClientId::from(42));
//! mock.publish(vec![]);
//!
//! let service = ClientService::new(mock.client());
//! // ...
//! mock.verify();
//! ```

use crate::framework::subscription::{self, Published};
use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Snapshot};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{mpsc, oneshot, watch};

/// Represents an expected request to the mock client, with its canned response.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Snapshot<T>, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(queue: &Queue<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    queue.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are answered in the order expectations were queued. A request that does
/// not match the next expectation panics the background task, which surfaces to the
/// caller as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    publisher: watch::Sender<Published<T>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations and no published snapshot.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let (publisher, snapshots) = subscription::channel();
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&queue).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender, snapshots),
            expectations,
            publisher,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Publishes a snapshot to every subscriber.
    pub fn publish(&self, items: Vec<T>) {
        self.publisher.send_replace(Some(items.into()));
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Get { response })
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Snapshot<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::List { response })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Update { response })
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Delete { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(expectations: &Queue<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

/// A client wired to channels the test drives by hand.
pub struct MockChannels<T: ActorEntity> {
    pub requests: mpsc::Receiver<ResourceRequest<T>>,
    pub publisher: watch::Sender<Published<T>>,
}

/// Creates a mock client plus the receiving ends the test answers from.
///
/// Use this when the test needs to hold a request open, e.g. to observe state while
/// a call is in flight.
pub fn create_mock_client<T: ActorEntity>(buffer_size: usize) -> (ResourceClient<T>, MockChannels<T>) {
    let (sender, requests) = mpsc::channel(buffer_size);
    let (publisher, snapshots) = subscription::channel();
    (
        ResourceClient::new(sender, snapshots),
        MockChannels { requests, publisher },
    )
}

/// Helper to verify that the next message is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request.
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}
