use std::collections::{BTreeMap, HashSet};

use offerkit_core::{DomainError, DomainResult, OfferingIdentifier};

use crate::package::Package;
use crate::package_type::PackageType;
use crate::product::{CatalogProduct, StoreProduct};

/// A named, ordered collection of packages presented together (a paywall).
#[derive(Debug, Clone)]
pub struct Offering<P: StoreProduct = CatalogProduct> {
    identifier: OfferingIdentifier,
    server_description: String,
    available_packages: Vec<Package<P>>,
}

impl<P: StoreProduct> Offering<P> {
    /// Build an offering, checking that every package belongs to it and that
    /// package identifiers are unique.
    pub fn new(
        identifier: impl Into<OfferingIdentifier>,
        server_description: impl Into<String>,
        available_packages: Vec<Package<P>>,
    ) -> DomainResult<Self> {
        let identifier = identifier.into();

        let mut seen = HashSet::with_capacity(available_packages.len());
        for package in &available_packages {
            if package.offering_identifier() != &identifier {
                return Err(DomainError::invariant(format!(
                    "package {} belongs to offering {}, not {}",
                    package.identifier(),
                    package.offering_identifier(),
                    identifier
                )));
            }
            if !seen.insert(package.identifier()) {
                return Err(DomainError::conflict(format!(
                    "duplicate package identifier {} in offering {}",
                    package.identifier(),
                    identifier
                )));
            }
        }

        Ok(Self {
            identifier,
            server_description: server_description.into(),
            available_packages,
        })
    }

    pub fn identifier(&self) -> &OfferingIdentifier {
        &self.identifier
    }

    pub fn server_description(&self) -> &str {
        &self.server_description
    }

    pub fn available_packages(&self) -> &[Package<P>] {
        &self.available_packages
    }

    pub fn package(&self, identifier: &str) -> Option<&Package<P>> {
        self.available_packages
            .iter()
            .find(|p| p.identifier().as_str() == identifier)
    }

    /// First package of a predefined type.
    ///
    /// `Unknown` and `Custom` are not unique within an offering, so asking for
    /// them always yields `None`; use [`Offering::package`] instead.
    pub fn package_of_type(&self, package_type: PackageType) -> Option<&Package<P>> {
        if !package_type.is_predefined() {
            return None;
        }
        self.available_packages
            .iter()
            .find(|p| p.package_type() == package_type)
    }

    pub fn lifetime(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::Lifetime)
    }

    pub fn annual(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::Annual)
    }

    pub fn six_month(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::SixMonth)
    }

    pub fn three_month(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::ThreeMonth)
    }

    pub fn two_month(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::TwoMonth)
    }

    pub fn monthly(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::Monthly)
    }

    pub fn weekly(&self) -> Option<&Package<P>> {
        self.package_of_type(PackageType::Weekly)
    }
}

/// All offerings known to the app, plus the one currently selected.
#[derive(Debug, Clone)]
pub struct Offerings<P: StoreProduct = CatalogProduct> {
    all: BTreeMap<OfferingIdentifier, Offering<P>>,
    current_offering_id: Option<OfferingIdentifier>,
}

impl<P: StoreProduct> Offerings<P> {
    /// Index offerings by identifier.
    ///
    /// A current id that names no offering is dropped with a warning rather
    /// than failing the whole catalog.
    pub fn new(
        offerings: Vec<Offering<P>>,
        current_offering_id: Option<OfferingIdentifier>,
    ) -> DomainResult<Self> {
        let mut all = BTreeMap::new();
        for offering in offerings {
            let id = offering.identifier().clone();
            if all.insert(id.clone(), offering).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate offering identifier {id}"
                )));
            }
        }

        let current_offering_id = match current_offering_id {
            Some(id) if all.contains_key(&id) => Some(id),
            Some(id) => {
                tracing::warn!(offering_id = %id, "current offering not found; ignoring");
                None
            }
            None => None,
        };

        Ok(Self {
            all,
            current_offering_id,
        })
    }

    pub fn current(&self) -> Option<&Offering<P>> {
        self.current_offering_id
            .as_ref()
            .and_then(|id| self.all.get(id))
    }

    pub fn offering(&self, identifier: &str) -> Option<&Offering<P>> {
        self.all.get(identifier)
    }

    pub fn all(&self) -> &BTreeMap<OfferingIdentifier, Offering<P>> {
        &self.all
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
