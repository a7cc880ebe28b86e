//! # Queue Actor Framework
//!
//! This module defines the generic building blocks for a first-in, first-out
//! work queue owned by a single actor task.
//!
//! ## Key Types
//!
//! - [`QueueEntity`]: The trait that every queued resource must implement.
//! - [`QueueActor`]: The generic actor that owns the queue.
//! - [`QueueClient`]: The generic, cloneable client for talking to the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound).

use std::collections::VecDeque;
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any resource must implement to be held by a [`QueueActor`].
///
/// # Architecture Note
/// The queue logic (enqueue, look up, mutate in place, dequeue the oldest) is
/// written *once* in [`QueueActor`]; the entity only says how it is built and
/// how it reacts to its own actions.
///
/// The hooks are plain synchronous functions. Entities are in-memory values
/// and every hook runs to completion inside the actor's loop, so there is
/// nothing to await.
pub trait QueueEntity: Clone + Send + Sync + 'static {
    /// Identifier handed out on enqueue. Generated from a counter starting at 1.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO).
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `AddItem`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Error returned by the hooks.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its creation payload.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a resource-specific action against a queued entity.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the queue framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Unlike a keyed store there is no arbitrary delete: an entity leaves the
/// queue only through [`QueueRequest::Dequeue`], oldest first.
#[derive(Debug)]
pub enum QueueRequest<T: QueueEntity> {
    Enqueue {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<(T::Id, T)>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Dequeue {
        respond_to: Response<Option<(T::Id, T)>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a FIFO queue of entities.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop and is the only
/// owner of `queue`, so no `Mutex` is needed. Clients can be cloned freely;
/// every request is serialized through the channel.
pub struct QueueActor<T: QueueEntity> {
    receiver: mpsc::Receiver<QueueRequest<T>>,
    queue: VecDeque<(T::Id, T)>,
    next_id: u32,
}

impl<T: QueueEntity> QueueActor<T> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// client calls wait until there is room.
    pub fn new(buffer_size: usize) -> (Self, QueueClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            queue: VecDeque::new(),
            next_id: 1,
        };
        let client = QueueClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.queue.iter().position(|(queued, _)| queued == id)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "takeaway_desk::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                QueueRequest::Enqueue { params, respond_to } => {
                    debug!(entity_type, ?params, "Enqueue");
                    match T::from_create_params(params) {
                        Ok(item) => {
                            let id = T::Id::from(self.next_id);
                            self.next_id += 1;
                            self.queue.push_back((id.clone(), item));
                            info!(entity_type, %id, pending = self.queue.len(), "Enqueued");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Enqueue failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                QueueRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|index| self.queue[index].1.clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                QueueRequest::List { respond_to } => {
                    debug!(entity_type, pending = self.queue.len(), "List");
                    let _ = respond_to.send(Ok(self.queue.iter().cloned().collect()));
                }
                QueueRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(index) = self.position(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = self.queue[index]
                        .1
                        .handle_action(action)
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Action ok"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
                QueueRequest::Dequeue { respond_to } => {
                    let front = self.queue.pop_front();
                    match &front {
                        Some((id, _)) => {
                            info!(entity_type, %id, pending = self.queue.len(), "Dequeued")
                        }
                        None => debug!(entity_type, "Dequeue on empty queue"),
                    }
                    let _ = respond_to.send(Ok(front));
                }
            }
        }

        info!(entity_type, pending = self.queue.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`QueueActor`].
pub struct QueueClient<T: QueueEntity> {
    sender: mpsc::Sender<QueueRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` bounds on the associated types.
impl<T: QueueEntity> Clone for QueueClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: QueueEntity> QueueClient<T> {
    pub fn new(sender: mpsc::Sender<QueueRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> QueueRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn enqueue(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| QueueRequest::Enqueue { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| QueueRequest::Get { id, respond_to })
            .await
    }

    /// Snapshot of every queued entity, oldest first.
    pub async fn list(&self) -> Result<Vec<(T::Id, T)>, FrameworkError> {
        self.request(|respond_to| QueueRequest::List { respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| QueueRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Removes and returns the oldest entity, or `None` if the queue is empty.
    pub async fn dequeue(&self) -> Result<Option<(T::Id, T)>, FrameworkError> {
        self.request(|respond_to| QueueRequest::Dequeue { respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        label: String,
        stamps: u32,
    }

    #[derive(Debug)]
    struct TicketCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Stamp,
        Void,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("ticket voided")]
    struct Voided;

    impl QueueEntity for Ticket {
        type Id = u32;
        type Create = TicketCreate;
        type Action = TicketAction;
        type ActionResult = u32;
        type Error = Voided;

        fn from_create_params(params: TicketCreate) -> Result<Self, Voided> {
            Ok(Self {
                label: params.label,
                stamps: 0,
            })
        }

        fn handle_action(&mut self, action: TicketAction) -> Result<u32, Voided> {
            match action {
                TicketAction::Stamp => {
                    self.stamps += 1;
                    Ok(self.stamps)
                }
                TicketAction::Void => Err(Voided),
            }
        }
    }

    fn create(label: &str) -> TicketCreate {
        TicketCreate {
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_queue_actor_is_fifo() {
        let (actor, client) = QueueActor::<Ticket>::new(10);
        let handle = tokio::spawn(actor.run());

        let first = client.enqueue(create("first")).await.unwrap();
        let second = client.enqueue(create("second")).await.unwrap();
        assert_eq!((first, second), (1, 2));

        // Mutate the second ticket in place
        assert_eq!(client.perform_action(second, TicketAction::Stamp).await.unwrap(), 1);
        assert_eq!(client.perform_action(second, TicketAction::Stamp).await.unwrap(), 2);

        let listed = client.list().await.unwrap();
        let labels: Vec<&str> = listed.iter().map(|(_, t)| t.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second"]);

        // Oldest leaves first
        let (id, ticket) = client.dequeue().await.unwrap().unwrap();
        assert_eq!((id, ticket.label.as_str()), (1, "first"));
        let (id, ticket) = client.dequeue().await.unwrap().unwrap();
        assert_eq!((id, ticket.stamps), (2, 2));
        assert!(client.dequeue().await.unwrap().is_none());

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_id_and_failing_action() {
        let (actor, client) = QueueActor::<Ticket>::new(10);
        tokio::spawn(actor.run());

        let err = client.perform_action(42, TicketAction::Stamp).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));
        assert!(client.get(42).await.unwrap().is_none());

        let id = client.enqueue(create("only")).await.unwrap();
        let err = client.perform_action(id, TicketAction::Void).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        // A failed action leaves the ticket queued
        assert_eq!(client.get(id).await.unwrap().unwrap().stamps, 0);
    }

    #[tokio::test]
    async fn test_closed_actor() {
        let (actor, client) = QueueActor::<Ticket>::new(1);
        drop(actor);
        let err = client.enqueue(create("late")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }
}
