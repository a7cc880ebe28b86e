//! # Mock Framework
//!
//! Utilities for testing clients in isolation, without a running [`QueueActor`](super::QueueActor).
//!
//! [`MockClient`] answers each incoming request with the next queued expectation,
//! in order, and panics on a mismatch. Call [`MockClient::verify`] at the end of a
//! test to make sure nothing was left unanswered.

use crate::framework::{FrameworkError, QueueClient, QueueEntity, QueueRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// An expected request together with the canned response for it.
enum Expectation<T: QueueEntity> {
    Enqueue {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<(T::Id, T)>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
    Dequeue {
        response: Result<Option<(T::Id, T)>, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: QueueEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A mock queue with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Order>::new();
/// mock.expect_enqueue().return_ok(OrderId(1));
/// mock.expect_action(OrderId(1)).return_ok(result);
///
/// let client = OrderClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: QueueEntity> {
    client: QueueClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: QueueEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<QueueRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (QueueRequest::Enqueue { respond_to, .. }, Some(Expectation::Enqueue { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::Action { id, respond_to, .. }, Some(Expectation::Action { id: expected, response })) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (QueueRequest::Dequeue { respond_to }, Some(Expectation::Dequeue { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: QueueClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> QueueClient<T> {
        self.client.clone()
    }

    fn push(&self, expectation: Expectation<T>) {
        lock(&self.expectations).push_back(expectation);
    }

    pub fn expect_enqueue(&mut self) -> Expect<'_, T, T::Id> {
        Expect::new(self, |response| Expectation::Enqueue { response })
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<'_, T, Option<T>> {
        Expect::new(self, move |response| Expectation::Get { id, response })
    }

    pub fn expect_list(&mut self) -> Expect<'_, T, Vec<(T::Id, T)>> {
        Expect::new(self, |response| Expectation::List { response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<'_, T, T::ActionResult> {
        Expect::new(self, move |response| Expectation::Action { id, response })
    }

    pub fn expect_dequeue(&mut self) -> Expect<'_, T, Option<(T::Id, T)>> {
        Expect::new(self, |response| Expectation::Dequeue { response })
    }

    /// Panics if any expectation was never consumed.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: QueueEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that records the response for one expected request.
pub struct Expect<'a, T: QueueEntity, R> {
    mock: &'a MockClient<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a>,
}

impl<'a, T: QueueEntity, R> Expect<'a, T, R> {
    fn new(
        mock: &'a MockClient<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + 'a,
    ) -> Self {
        Self {
            mock,
            build: Box::new(build),
        }
    }

    /// Answer the request successfully.
    pub fn return_ok(self, value: R) {
        self.mock.push((self.build)(Ok(value)));
    }

    /// Answer the request with an error.
    pub fn return_err(self, error: FrameworkError) {
        self.mock.push((self.build)(Err(error)));
    }
}
