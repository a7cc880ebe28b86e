//! Generic single-owner FIFO queue actor.
//!
//! # Main Components
//!
//! - [`QueueEntity`] - Trait that queued resource types implement
//! - [`QueueActor`] - Actor task that owns the queue
//! - [`QueueClient`] - Cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
