//! `offerkit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use id::{OfferingIdentifier, PackageIdentifier, ProductIdentifier};
pub use value_object::ValueObject;
