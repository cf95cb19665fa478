use std::hash::{Hash, Hasher};
use std::sync::Arc;

use offerkit_core::{OfferingIdentifier, PackageIdentifier, ValueObject};

use crate::package_type::{PackageType, PackageTypeRegistry};
use crate::product::{CatalogProduct, StoreProduct};

/// A store product grouped under a portable identifier and a [`PackageType`].
///
/// Immutable once built. The product is held behind an `Arc` so the catalog
/// layer can share one product between packages and caches.
#[derive(Debug, Clone)]
pub struct Package<P: StoreProduct = CatalogProduct> {
    identifier: PackageIdentifier,
    package_type: PackageType,
    product: Arc<P>,
    offering_identifier: OfferingIdentifier,
}

impl<P: StoreProduct> Package<P> {
    /// Store all four fields verbatim. No validation is performed.
    pub fn new(
        identifier: impl Into<PackageIdentifier>,
        package_type: PackageType,
        product: Arc<P>,
        offering_identifier: impl Into<OfferingIdentifier>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            package_type,
            product,
            offering_identifier: offering_identifier.into(),
        }
    }

    /// Build a package whose type is classified from its own identifier.
    pub fn from_raw(
        identifier: impl Into<PackageIdentifier>,
        product: Arc<P>,
        offering_identifier: impl Into<OfferingIdentifier>,
    ) -> Self {
        let identifier = identifier.into();
        let package_type = PackageTypeRegistry::classify(identifier.as_str());
        Self::new(identifier, package_type, product, offering_identifier)
    }

    pub fn identifier(&self) -> &PackageIdentifier {
        &self.identifier
    }

    pub fn package_type(&self) -> PackageType {
        self.package_type
    }

    pub fn product(&self) -> &P {
        &self.product
    }

    /// Shared handle to the underlying product.
    pub fn product_arc(&self) -> &Arc<P> {
        &self.product
    }

    pub fn offering_identifier(&self) -> &OfferingIdentifier {
        &self.offering_identifier
    }

    pub fn localized_price_string(&self) -> &str {
        self.product.localized_price_string()
    }

    pub fn localized_introductory_price_string(&self) -> Option<&str> {
        self.product
            .introductory_discount()
            .map(|discount| discount.localized_price_string.as_str())
    }
}

impl<P: StoreProduct + PartialEq> PartialEq for Package<P> {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.package_type == other.package_type
            && *self.product == *other.product
            && self.offering_identifier == other.offering_identifier
    }
}

impl<P: StoreProduct + Eq> Eq for Package<P> {}

impl<P: StoreProduct + Hash> Hash for Package<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
        self.package_type.hash(state);
        (*self.product).hash(state);
        self.offering_identifier.hash(state);
    }
}

impl<P: StoreProduct + Clone + Eq + Hash> ValueObject for Package<P> {}
