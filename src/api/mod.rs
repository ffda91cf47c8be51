//! HTTP surface
//!
//! The workflow never sees HTTP types; this module turns requests into
//! `UnvalidatedOrder`s and results into JSON responses.

pub mod handler;
pub mod routes;

pub use handler::{place_order_handler, status_for};
pub use routes::{HealthResponse, create_router, health_check};
