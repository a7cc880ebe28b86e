//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Verbosity comes from `RUST_LOG`:
//!
//! ```bash
//! # Desk lifecycle and promotions
//! RUST_LOG=info cargo run
//!
//! # Every item addition with the recomputed totals
//! RUST_LOG=debug cargo run
//!
//! # Only the order model
//! RUST_LOG=takeaway_desk::model=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the number of orders still pending
//! - **Queue Operations**: `Enqueued`, `Action ok`, `Dequeued` with `id` and `pending`
//! - **Order Model**: `Adding item` / `Order recomputed` at debug, `Free item granted` at info
//!
//! With `RUST_LOG=info` a two-pizza order reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO open_order: Enqueued entity_type="Order" id=order_1 pending=1
//! INFO open_order: Order opened id=order_1
//! INFO Action ok entity_type="Order" id=order_1
//! INFO Free item granted kind=Pizza count=2
//! INFO Action ok entity_type="Order" id=order_1
//! INFO add_item: Free item added to order kind=Pizza
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
