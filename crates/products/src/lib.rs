//! Product and transaction entities.
//!
//! This crate contains the catalog's value-carrying entities, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). All
//! invariants are enforced at construction; a constructed entity is valid for
//! its entire lifetime.

pub mod product;
pub mod transaction;

pub use product::{NewProduct, Product};
pub use transaction::{Transaction, TransactionKind};
