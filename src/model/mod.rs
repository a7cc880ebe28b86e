//! Menu items, pricing and the order aggregate.
//!
//! Everything here is synchronous and in-memory. The [`Order`] is also the
//! entity queued by the [`desk_actor`](crate::desk_actor).

pub mod food_item;
pub mod food_type;
pub mod order;
pub mod pasta;
pub mod pizza;
pub mod price;
pub mod topping;

pub use food_item::*;
pub use food_type::*;
pub use order::*;
pub use pasta::*;
pub use pizza::*;
pub use price::*;
pub use topping::*;
