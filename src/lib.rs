//! # Takeaway Desk
//!
//! > **Order intake for a pizza and pasta takeaway.**
//!
//! Customers' orders are built from priced, classified menu items. Every
//! addition recomputes the order's total and its dietary classification and
//! applies the "buy two, get one free" promotion. Pending orders wait at a
//! desk in arrival order and are handed out oldest first.
//!
//! ## 🍕 The Menu Model ([`model`])
//!
//! - [`Pizza`](model::Pizza): any number of toppings, each charged on top of
//!   the base price of 11.50.
//! - [`Pasta`](model::Pasta): at most one topping.
//! - [`FoodItem`](model::FoodItem): the shared contract (price,
//!   classification, free-item threshold, free-item generation), implemented
//!   by both and by the [`MenuItem`](model::MenuItem) union.
//! - [`Order`](model::Order): items in arrival order, the running total,
//!   the MEAT > VEGETARIAN > VEGAN classification and the promotion flags.
//!
//! The model is plain synchronous Rust. Derived state is recomputed eagerly,
//! so it is correct the moment [`Order::add_item`](model::Order::add_item)
//! returns.
//!
//! ## 🗺️ The Desk
//!
//! ### 1. The Engine ([`framework`])
//! A generic FIFO queue owned by one actor task. Requests are processed one
//! at a time, so the queue needs no locks.
//!
//! ### 2. The Implementation ([`desk_actor`])
//! Plugs [`Order`](model::Order) into the queue and defines its actions.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) hides the message passing:
//! `open_order`, `add_item`, `quote`, `list_pending`, `deliver_next`.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`TakeawaySystem`](lifecycle::TakeawaySystem) starts and stops the desk;
//! [`DeskConfig`](lifecycle::DeskConfig) and
//! [`setup_tracing`](lifecycle::setup_tracing) cover configuration and logging.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the scripted demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod clients;
pub mod desk_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
