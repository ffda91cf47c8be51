//! Composite entities built from constrained primitives
//!
//! - [`PersonalName`] / [`CustomerInfo`]: who placed the order
//! - [`Address`]: where to ship and where to bill

mod address;
mod customer;

pub use address::Address;
pub use customer::{CustomerInfo, PersonalName};
