//! Runtime orchestration and lifecycle management.
//!
//! - [`TakeawaySystem`] - Starts the order desk and shuts it down
//! - [`DeskConfig`] - Queue capacity and other startup settings
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod takeaway_system;
pub mod tracing;

pub use config::*;
pub use takeaway_system::*;
pub use self::tracing::*;
