//! Catalog construction.
//!
//! Turns an offerings document (JSON, as served by the backend) plus a source
//! of already-loaded store products into [`Offerings`]. Fetching either input
//! is the caller's business.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use offerkit_core::{DomainError, OfferingIdentifier, PackageIdentifier, ProductIdentifier};

use crate::offering::{Offering, Offerings};
use crate::package::Package;
use crate::package_type::{PackageType, PackageTypeRegistry};
use crate::product::StoreProduct;

/// Raw offerings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingsDocument {
    #[serde(default)]
    pub current_offering_id: Option<OfferingIdentifier>,
    pub offerings: Vec<OfferingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferingEntry {
    pub identifier: OfferingIdentifier,
    #[serde(default)]
    pub description: String,
    pub packages: Vec<PackageEntry>,
}

/// One package as listed in the document. The identifier doubles as the raw
/// package type string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageEntry {
    pub identifier: PackageIdentifier,
    pub platform_product_identifier: ProductIdentifier,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse offerings document: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Lookup of store products by identifier.
pub trait ProductSource<P: StoreProduct> {
    fn product(&self, identifier: &ProductIdentifier) -> Option<Arc<P>>;
}

impl<P: StoreProduct> ProductSource<P> for HashMap<ProductIdentifier, Arc<P>> {
    fn product(&self, identifier: &ProductIdentifier) -> Option<Arc<P>> {
        self.get(identifier).cloned()
    }
}

/// Builds [`Offerings`] from an [`OfferingsDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OfferingsFactory;

impl OfferingsFactory {
    pub fn from_json<P, S>(json: &str, source: &S) -> Result<Offerings<P>, CatalogError>
    where
        P: StoreProduct,
        S: ProductSource<P>,
    {
        let document: OfferingsDocument = serde_json::from_str(json)?;
        Self::build(&document, source)
    }

    /// Packages without a matching product are skipped, and so are offerings
    /// left with no packages. Both are logged, neither is an error.
    pub fn build<P, S>(document: &OfferingsDocument, source: &S) -> Result<Offerings<P>, CatalogError>
    where
        P: StoreProduct,
        S: ProductSource<P>,
    {
        let mut offerings = Vec::with_capacity(document.offerings.len());

        for entry in &document.offerings {
            let packages: Vec<Package<P>> = entry
                .packages
                .iter()
                .filter_map(|package| Self::build_package(&entry.identifier, package, source))
                .collect();

            if packages.is_empty() {
                tracing::warn!(
                    offering_id = %entry.identifier,
                    "offering has no packages with available products; skipping"
                );
                continue;
            }

            offerings.push(Offering::new(
                entry.identifier.clone(),
                entry.description.clone(),
                packages,
            )?);
        }

        let offerings = Offerings::new(offerings, document.current_offering_id.clone())?;
        tracing::debug!(count = offerings.all().len(), "built offerings");
        Ok(offerings)
    }

    fn build_package<P, S>(
        offering_id: &OfferingIdentifier,
        entry: &PackageEntry,
        source: &S,
    ) -> Option<Package<P>>
    where
        P: StoreProduct,
        S: ProductSource<P>,
    {
        let Some(product) = source.product(&entry.platform_product_identifier) else {
            tracing::warn!(
                offering_id = %offering_id,
                package_id = %entry.identifier,
                product_id = %entry.platform_product_identifier,
                "product not found for package; skipping"
            );
            return None;
        };

        let package_type = PackageTypeRegistry::classify(entry.identifier.as_str());
        if package_type == PackageType::Unknown {
            tracing::debug!(
                package_id = %entry.identifier,
                "reserved package type not recognised by this version"
            );
        }

        Some(Package::new(
            entry.identifier.clone(),
            package_type,
            product,
            offering_id.clone(),
        ))
    }
}
