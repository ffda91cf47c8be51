//! # order-taking
//!
//! The `PlaceOrder` workflow of an order-taking service.
//!
//! An untrusted order form is validated into constrained domain types,
//! priced (standard or promotional), given shipping information, optionally
//! acknowledged by email, and turned into the events downstream contexts
//! consume. Every external capability is passed in as a function, so the
//! workflow itself performs no I/O.
//!
//! ## Layout
//!
//! - [`simple_types`]: constrained primitives with smart constructors
//! - [`compound_types`]: names, customer info and addresses
//! - [`workflow`]: the pipeline stages and their types
//! - [`dto`]: JSON shapes for the HTTP boundary
//! - [`infrastructure`]: configuration, price catalog and default capabilities
//! - [`api`]: the axum router
//!
//! ## Example
//!
//! ```rust
//! use order_taking::simple_types::{ProductCode, UnitKind};
//!
//! let widget = ProductCode::create("ProductCode", Some("W1234")).unwrap();
//! assert_eq!(widget.unit_kind(), UnitKind::Units);
//!
//! let error = ProductCode::create("ProductCode", Some("X1")).unwrap_err();
//! assert_eq!(error.to_string(), "ProductCode format not recognized 'X1'");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod api;
pub mod compound_types;
pub mod dto;
pub mod infrastructure;
pub mod simple_types;
pub mod workflow;
