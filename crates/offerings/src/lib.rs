//! Offerings domain module.
//!
//! Packages group one purchasable store product under a portable identifier and
//! a canonical [`PackageType`]. Offerings collect packages, and the catalog
//! module assembles both from a JSON document plus a product source. Everything
//! here is deterministic domain logic (no network, no storage).

pub mod catalog;
pub mod offering;
pub mod package;
pub mod package_type;
pub mod product;

pub use catalog::{
    CatalogError, OfferingEntry, OfferingsDocument, OfferingsFactory, PackageEntry, ProductSource,
};
pub use offering::{Offering, Offerings};
pub use package::Package;
pub use package_type::{PackageType, PackageTypeRegistry, RESERVED_PREFIX};
pub use product::{CatalogProduct, IntroductoryDiscount, Price, StoreProduct};
